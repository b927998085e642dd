use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use mockall::automock;

/// Raw answer of the publisher; status interpretation belongs to the caller.
#[derive(Debug, Clone)]
pub struct PublisherReply {
    pub status: u16,
    pub body: Bytes,
}

#[automock]
#[async_trait]
pub trait BlobPublisher {
    /// `PUT {publisher_base_url}/v1/store?epochs={epochs}` with `content` as the body.
    /// Errors only when no HTTP response was received.
    async fn store_blob(
        &self,
        publisher_base_url: &str,
        epochs: u32,
        content: Bytes,
    ) -> Result<PublisherReply>;
}
