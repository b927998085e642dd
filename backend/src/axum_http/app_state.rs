use crates::domain::repositories::blob_publisher::BlobPublisher;

use crate::{
    config::config_model::Walrus, presentation::page::FormDefaults,
    usecases::upload_blob::UploadBlobUseCase,
};

pub const DEFAULT_EPOCHS: u32 = 1;

/// Shared by the page and API routers.
pub struct AppState<P>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    pub upload_usecase: UploadBlobUseCase<P>,
    pub walrus: Walrus,
}

impl<P> AppState<P>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    pub fn new(upload_usecase: UploadBlobUseCase<P>, walrus: Walrus) -> Self {
        Self {
            upload_usecase,
            walrus,
        }
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            publisher_url: self.walrus.publisher_url.clone(),
            aggregator_url: self.walrus.aggregator_url.clone(),
            epochs: DEFAULT_EPOCHS,
        }
    }
}
