use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::domain::{
    repositories::blob_publisher::{BlobPublisher, PublisherReply},
    value_objects::upload_requests::store_url,
};

/// Talks to a Walrus publisher over its HTTP API.
///
/// Walrus publisher store endpoint reference:
/// https://docs.walrus.site/usage/web-api.html#store
#[derive(Clone, Default)]
pub struct WalrusPublisherClient {
    client: Client,
}

impl WalrusPublisherClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobPublisher for WalrusPublisherClient {
    async fn store_blob(
        &self,
        publisher_base_url: &str,
        epochs: u32,
        content: Bytes,
    ) -> Result<PublisherReply> {
        let url = store_url(publisher_base_url, epochs);
        let size_bytes = content.len();

        let response = self
            .client
            .put(&url)
            .body(content)
            .send()
            .await
            .with_context(|| format!("failed to reach publisher at {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("failed to read publisher response from {}", url))?;

        debug!(
            %url,
            size_bytes,
            status,
            body_bytes = body.len(),
            "walrus publisher: store request finished"
        );

        Ok(PublisherReply { status, body })
    }
}
