use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::upload_records::UploadRecord;

/// Client-scoped list of upload records, most recent first.
///
/// There is no guard against concurrent writers: two prepends racing on the
/// same backing value can lose one of them.
#[automock]
#[async_trait]
pub trait RecordListStore {
    /// Empty when nothing is stored or the stored value cannot be decoded.
    async fn read(&self) -> Vec<UploadRecord>;

    /// Rewrites the whole list as `[record, ...current]`.
    async fn prepend(&self, record: UploadRecord) -> Result<()>;
}
