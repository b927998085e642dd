use serde::Deserialize;
use serde_json::Value;

const ALREADY_CERTIFIED_KEY: &str = "alreadyCertified";
const NEWLY_CREATED_KEY: &str = "newlyCreated";

/// Successful answer of `PUT /v1/store`.
///
/// The publisher answers with an object keyed by the variant name. When a
/// body carries both keys, `alreadyCertified` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOutcome {
    AlreadyCertified {
        blob_id: String,
        end_epoch: u64,
        certifying_tx_digest: String,
    },
    NewlyCreated {
        blob_id: String,
        end_epoch: u64,
        object_id: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlreadyCertifiedBody {
    blob_id: String,
    end_epoch: u64,
    event: CertifiedEvent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CertifiedEvent {
    tx_digest: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewlyCreatedBody {
    blob_object: BlobObject,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlobObject {
    id: String,
    blob_id: String,
    storage: BlobStorage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlobStorage {
    end_epoch: u64,
}

impl StorageOutcome {
    /// Returns `None` when the body matches neither success shape.
    pub fn from_json(body: &Value) -> Option<Self> {
        if let Some(raw) = body.get(ALREADY_CERTIFIED_KEY) {
            let certified = AlreadyCertifiedBody::deserialize(raw).ok()?;
            return Some(StorageOutcome::AlreadyCertified {
                blob_id: certified.blob_id,
                end_epoch: certified.end_epoch,
                certifying_tx_digest: certified.event.tx_digest,
            });
        }

        if let Some(raw) = body.get(NEWLY_CREATED_KEY) {
            let created = NewlyCreatedBody::deserialize(raw).ok()?;
            return Some(StorageOutcome::NewlyCreated {
                blob_id: created.blob_object.blob_id,
                end_epoch: created.blob_object.storage.end_epoch,
                object_id: created.blob_object.id,
            });
        }

        None
    }

    pub fn blob_id(&self) -> &str {
        match self {
            StorageOutcome::AlreadyCertified { blob_id, .. }
            | StorageOutcome::NewlyCreated { blob_id, .. } => blob_id,
        }
    }

    pub fn end_epoch(&self) -> u64 {
        match self {
            StorageOutcome::AlreadyCertified { end_epoch, .. }
            | StorageOutcome::NewlyCreated { end_epoch, .. } => *end_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_newly_created_body() {
        let body = json!({
            "newlyCreated": {
                "blobObject": {
                    "blobId": "abc123",
                    "storage": { "endEpoch": 42 },
                    "id": "0xdead"
                }
            }
        });

        assert_eq!(
            StorageOutcome::from_json(&body),
            Some(StorageOutcome::NewlyCreated {
                blob_id: "abc123".to_string(),
                end_epoch: 42,
                object_id: "0xdead".to_string(),
            })
        );
    }

    #[test]
    fn parses_already_certified_body() {
        let body = json!({
            "alreadyCertified": {
                "blobId": "xyz",
                "endEpoch": 7,
                "event": { "txDigest": "9xTx", "eventSeq": "0" }
            }
        });

        let outcome = StorageOutcome::from_json(&body).unwrap();
        assert_eq!(outcome.blob_id(), "xyz");
        assert_eq!(outcome.end_epoch(), 7);
        assert!(matches!(
            outcome,
            StorageOutcome::AlreadyCertified { ref certifying_tx_digest, .. } if certifying_tx_digest == "9xTx"
        ));
    }

    #[test]
    fn already_certified_takes_precedence_over_newly_created() {
        let body = json!({
            "newlyCreated": {
                "blobObject": { "blobId": "new", "storage": { "endEpoch": 1 }, "id": "0x1" }
            },
            "alreadyCertified": {
                "blobId": "old",
                "endEpoch": 9,
                "event": { "txDigest": "digest" }
            }
        });

        let outcome = StorageOutcome::from_json(&body).unwrap();
        assert!(matches!(outcome, StorageOutcome::AlreadyCertified { .. }));
        assert_eq!(outcome.blob_id(), "old");
    }

    #[test]
    fn empty_or_unknown_body_is_unrecognized() {
        assert_eq!(StorageOutcome::from_json(&json!({})), None);
        assert_eq!(StorageOutcome::from_json(&json!({ "markedInvalid": {} })), None);
        assert_eq!(StorageOutcome::from_json(&json!([1, 2, 3])), None);
    }

    #[test]
    fn variant_with_missing_fields_is_unrecognized() {
        let body = json!({ "alreadyCertified": { "blobId": "xyz" } });
        assert_eq!(StorageOutcome::from_json(&body), None);
    }
}
