use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{enums::sui_networks::SuiNetwork, storage_outcomes::StorageOutcome};

pub const STATUS_ALREADY_CERTIFIED: &str = "Already certified";
pub const STATUS_NEWLY_CREATED: &str = "Newly created";
pub const SUI_REF_CERTIFIED_EVENT: &str = "Previous Sui Certified Event";
pub const SUI_REF_OBJECT: &str = "Associated Sui Object";

/// A stored blob as shown to the browser and kept in the `dataList` cookie.
///
/// Only `downloadUrl`, `suiUrl` and `isImage` are required when reading, so
/// lists written with the short `{blobUrl, suiUrl, isImage}` shape still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    #[serde(default)]
    pub blob_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sui_ref_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sui_ref: Option<String>,
    #[serde(alias = "blobUrl")]
    pub download_url: String,
    #[serde(rename = "suiUrl", alias = "explorerUrl")]
    pub explorer_url: String,
    pub is_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl UploadRecord {
    pub fn from_outcome(
        outcome: StorageOutcome,
        media_type: &str,
        aggregator_base_url: &str,
        network: SuiNetwork,
    ) -> Self {
        let download_url = download_url(aggregator_base_url, outcome.blob_id());
        let end_epoch = outcome.end_epoch();

        let (blob_id, status, sui_ref_type, sui_ref, explorer_url) = match outcome {
            StorageOutcome::AlreadyCertified {
                blob_id,
                certifying_tx_digest,
                ..
            } => {
                let explorer_url = network.tx_url(&certifying_tx_digest);
                (
                    blob_id,
                    STATUS_ALREADY_CERTIFIED,
                    SUI_REF_CERTIFIED_EVENT,
                    certifying_tx_digest,
                    explorer_url,
                )
            }
            StorageOutcome::NewlyCreated {
                blob_id, object_id, ..
            } => {
                let explorer_url = network.object_url(&object_id);
                (
                    blob_id,
                    STATUS_NEWLY_CREATED,
                    SUI_REF_OBJECT,
                    object_id,
                    explorer_url,
                )
            }
        };

        Self {
            blob_id,
            status: Some(status.to_string()),
            end_epoch: Some(end_epoch),
            sui_ref_type: Some(sui_ref_type.to_string()),
            sui_ref: Some(sui_ref),
            download_url,
            explorer_url,
            is_image: is_image_media_type(media_type),
            media_type: Some(media_type.to_string()).filter(|m| !m.is_empty()),
        }
    }

    /// Blob id for display; falls back to the last path segment of the
    /// download URL for records that predate the `blobId` field.
    pub fn display_id(&self) -> &str {
        if !self.blob_id.is_empty() {
            return &self.blob_id;
        }
        self.download_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.download_url)
    }
}

/// Plain prefix check on the declared type, no MIME parsing.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image")
}

pub fn download_url(aggregator_base_url: &str, blob_id: &str) -> String {
    format!("{}/v1/{}", aggregator_base_url.trim_end_matches('/'), blob_id)
}
