use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::entities::upload_records::UploadRecord;

/// Name of the cookie holding the serialized record list.
pub const RECORD_LIST_COOKIE: &str = "dataList";

/// The slice of an [`UploadRecord`] written to the cookie. Browsers drop a
/// `Set-Cookie` over 4096 bytes, so only what the board renders is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedRecord {
    #[serde(default)]
    blob_id: String,
    #[serde(alias = "blobUrl")]
    download_url: String,
    #[serde(alias = "explorerUrl")]
    sui_url: String,
    is_image: bool,
}

impl From<&UploadRecord> for PersistedRecord {
    fn from(record: &UploadRecord) -> Self {
        Self {
            blob_id: record.blob_id.clone(),
            download_url: record.download_url.clone(),
            sui_url: record.explorer_url.clone(),
            is_image: record.is_image,
        }
    }
}

impl From<PersistedRecord> for UploadRecord {
    fn from(persisted: PersistedRecord) -> Self {
        Self {
            blob_id: persisted.blob_id,
            status: None,
            end_epoch: None,
            sui_ref_type: None,
            sui_ref: None,
            download_url: persisted.download_url,
            explorer_url: persisted.sui_url,
            is_image: persisted.is_image,
            media_type: None,
        }
    }
}

/// Decodes a persisted list. Anything that is not a JSON array of records
/// yields `None`; callers decide whether that means "empty".
pub fn decode_record_list(raw: &str) -> Option<Vec<UploadRecord>> {
    if raw.trim().is_empty() {
        return Some(Vec::new());
    }
    let persisted: Vec<PersistedRecord> = serde_json::from_str(raw).ok()?;
    Some(persisted.into_iter().map(UploadRecord::from).collect())
}

pub fn encode_record_list(records: &[UploadRecord]) -> Result<String> {
    let persisted: Vec<PersistedRecord> = records.iter().map(PersistedRecord::from).collect();
    serde_json::to_string(&persisted).context("failed to serialize record list")
}

/// Most recent first. No cap and no dedup by blob id.
pub fn prepend_record(record: UploadRecord, current: Vec<UploadRecord>) -> Vec<UploadRecord> {
    let mut records = Vec::with_capacity(current.len() + 1);
    records.push(record);
    records.extend(current);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(blob_id: &str) -> UploadRecord {
        UploadRecord {
            blob_id: blob_id.to_string(),
            status: Some("Newly created".to_string()),
            end_epoch: Some(10),
            sui_ref_type: Some("Associated Sui Object".to_string()),
            sui_ref: Some(format!("0x{}", blob_id)),
            download_url: format!("https://agg.example/v1/{}", blob_id),
            explorer_url: format!("https://suiscan.xyz/testnet/object/0x{}", blob_id),
            is_image: false,
            media_type: Some("text/plain".to_string()),
        }
    }

    #[test]
    fn list_survives_encode_and_decode_in_order() {
        let records = vec![record("c"), record("b"), record("a")];

        let raw = encode_record_list(&records).unwrap();
        let decoded = decode_record_list(&raw).unwrap();

        let ids: Vec<&str> = decoded.iter().map(|r| r.blob_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(decoded[0].download_url, records[0].download_url);
        assert_eq!(decoded[0].explorer_url, records[0].explorer_url);
        assert_eq!(decoded[0].is_image, records[0].is_image);
    }

    #[test]
    fn only_board_fields_are_written() {
        let raw = encode_record_list(&[record("a")]).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();

        let keys: Vec<&str> = value[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["blobId", "downloadUrl", "suiUrl", "isImage"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
    }

    #[test]
    fn ten_testnet_records_fit_in_a_cookie() {
        let blob_id = "M4hsZGQ1oCktdzegB6HnI6Mi28S2nqOPHxK-W7_4BUk";
        let object_id = format!("0x{}", "ab".repeat(32));
        let one = UploadRecord {
            download_url: format!(
                "https://aggregator.walrus-testnet.walrus.space/v1/{}",
                blob_id
            ),
            explorer_url: format!("https://suiscan.xyz/testnet/object/{}", object_id),
            is_image: true,
            ..record(blob_id)
        };

        let raw = encode_record_list(&vec![one; 10]).unwrap();

        assert!(raw.len() < 3200, "encoded list is {} bytes", raw.len());
    }

    #[test]
    fn reads_lists_written_with_the_full_record_shape() {
        let raw = serde_json::to_string(&vec![record("a")]).unwrap();

        let decoded = decode_record_list(&raw).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].blob_id, "a");
        assert_eq!(decoded[0].status, None);
    }

    #[test]
    fn reads_short_legacy_shape() {
        let raw = r#"[{"blobUrl":"https://agg.example/v1/old","suiUrl":"https://suiscan.xyz/testnet/tx/1","isImage":true}]"#;

        let decoded = decode_record_list(raw).unwrap();

        assert_eq!(decoded[0].display_id(), "old");
        assert!(decoded[0].is_image);
    }

    #[test]
    fn prepend_puts_new_record_first_and_keeps_the_rest() {
        let current = vec![record("b"), record("a")];

        let updated = prepend_record(record("c"), current.clone());

        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0].blob_id, "c");
        assert_eq!(&updated[1..], current.as_slice());
    }

    #[test]
    fn prepend_does_not_dedup() {
        let updated = prepend_record(record("a"), vec![record("a")]);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn malformed_values_do_not_decode() {
        assert_eq!(decode_record_list("not json"), None);
        assert_eq!(decode_record_list(r#"{"blobId":"a"}"#), None);
        assert_eq!(decode_record_list(r#"[{"isImage":"nope"}]"#), None);
        assert_eq!(decode_record_list(""), Some(Vec::new()));
        assert_eq!(decode_record_list("[]"), Some(Vec::new()));
    }
}
