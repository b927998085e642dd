use crates::domain::{
    entities::upload_records::UploadRecord,
    repositories::{blob_publisher::BlobPublisher, record_list::RecordListStore},
    value_objects::{
        enums::sui_networks::SuiNetwork, storage_outcomes::StorageOutcome,
        upload_errors::UploadError, upload_requests::UploadRequest,
        upload_responses::UploadResponse,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Stores a submitted file with the publisher and records the result.
pub struct UploadBlobUseCase<P>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    publisher: Arc<P>,
    sui_network: SuiNetwork,
}

impl<P> UploadBlobUseCase<P>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    pub fn new(publisher: Arc<P>, sui_network: SuiNetwork) -> Self {
        Self {
            publisher,
            sui_network,
        }
    }

    /// Never fails: every error is folded into a negative `code`.
    pub async fn upload<S>(&self, store: &S, request: UploadRequest) -> UploadResponse
    where
        S: RecordListStore + Send + Sync,
    {
        let publisher = request.publisher_base_url.clone();
        let epochs = request.epochs;

        match self.try_upload(store, request).await {
            Ok(record) => {
                info!(
                    %publisher,
                    epochs,
                    blob_id = %record.blob_id,
                    status = ?record.status,
                    "upload_blob: blob stored"
                );
                UploadResponse::success(record)
            }
            Err(err) => {
                let code = err.code();
                match &err {
                    UploadError::NetworkOrConfigFailure(source) => error!(
                        %publisher,
                        epochs,
                        code,
                        error = ?source,
                        "upload_blob: upload failed"
                    ),
                    UploadError::GenericUploadFailure { status } => warn!(
                        %publisher,
                        epochs,
                        code,
                        status,
                        "upload_blob: publisher rejected blob"
                    ),
                    UploadError::UnrecognizedResponseShape => warn!(
                        %publisher,
                        epochs,
                        code,
                        "upload_blob: unrecognized publisher response"
                    ),
                }
                UploadResponse::failure(&err)
            }
        }
    }

    async fn try_upload<S>(&self, store: &S, request: UploadRequest) -> Result<UploadRecord, UploadError>
    where
        S: RecordListStore + Send + Sync,
    {
        let reply = self
            .publisher
            .store_blob(&request.publisher_base_url, request.epochs, request.file)
            .await
            .map_err(UploadError::NetworkOrConfigFailure)?;

        if reply.status != 200 {
            return Err(UploadError::GenericUploadFailure {
                status: reply.status,
            });
        }

        let body: Value = serde_json::from_slice(&reply.body)
            .map_err(|err| UploadError::NetworkOrConfigFailure(err.into()))?;

        let outcome =
            StorageOutcome::from_json(&body).ok_or(UploadError::UnrecognizedResponseShape)?;

        let record = UploadRecord::from_outcome(
            outcome,
            &request.media_type,
            &request.aggregator_base_url,
            self.sui_network,
        );

        store
            .prepend(record.clone())
            .await
            .map_err(UploadError::NetworkOrConfigFailure)?;

        Ok(record)
    }
}
