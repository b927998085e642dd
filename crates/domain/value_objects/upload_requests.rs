use bytes::Bytes;

/// One form submission. Lives for the duration of a single upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: Bytes,
    pub media_type: String,
    pub epochs: u32,
    pub publisher_base_url: String,
    pub aggregator_base_url: String,
}

impl UploadRequest {
    pub fn store_url(&self) -> String {
        store_url(&self.publisher_base_url, self.epochs)
    }
}

pub fn store_url(publisher_base_url: &str, epochs: u32) -> String {
    format!(
        "{}/v1/store?epochs={}",
        publisher_base_url.trim_end_matches('/'),
        epochs
    )
}
