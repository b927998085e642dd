use crate::{
    axum_http::{
        app_state::{AppState, DEFAULT_EPOCHS},
        error_responses::AppError,
        record_list_cookie::{CookieRecordList, read_record_list},
    },
    config::config_model::Walrus,
};
use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use bytes::Bytes;
use crates::domain::{
    entities::upload_records::UploadRecord,
    repositories::blob_publisher::BlobPublisher,
    value_objects::{upload_requests::UploadRequest, upload_responses::UploadResponse},
};
use std::sync::Arc;
use tracing::debug;

pub fn routes<P>(state: Arc<AppState<P>>) -> Router
where
    P: BlobPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_records).post(upload_blob::<P>))
        .with_state(state)
}

pub async fn upload_blob<P>(
    State(state): State<Arc<AppState<P>>>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(CookieJar, Json<UploadResponse>), AppError>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    let request = parse_upload_form(multipart, &state.walrus).await?;

    let store = CookieRecordList::new(jar);
    let response = state.upload_usecase.upload(&store, request).await;

    Ok((store.into_jar(), Json(response)))
}

pub async fn list_records(jar: CookieJar) -> Json<Vec<UploadRecord>> {
    Json(read_record_list(&jar))
}

/// Reads the upload form. Blank URL fields fall back to the configured
/// defaults; URLs are otherwise passed through untouched.
pub async fn parse_upload_form(
    mut multipart: Multipart,
    defaults: &Walrus,
) -> Result<UploadRequest, AppError> {
    let mut file: Option<(Bytes, String)> = None;
    let mut epochs = DEFAULT_EPOCHS;
    let mut publisher_base_url = defaults.publisher_url.clone();
    let mut aggregator_base_url = defaults.aggregator_url.clone();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" | "inputFile" => {
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                debug!(size_bytes = bytes.len(), %media_type, "uploads: received file field");
                file = Some((bytes, media_type));
            }
            "numEpochs" => epochs = parse_epochs(&field.text().await?)?,
            "basePublisherUrl" => {
                if let Some(url) = non_blank(field.text().await?) {
                    publisher_base_url = url;
                }
            }
            "baseAggregatorUrl" => {
                if let Some(url) = non_blank(field.text().await?) {
                    aggregator_base_url = url;
                }
            }
            _ => {}
        }
    }

    let (file, media_type) = file
        .filter(|(bytes, _)| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("file is required".to_string()))?;

    Ok(UploadRequest {
        file,
        media_type,
        epochs,
        publisher_base_url,
        aggregator_base_url,
    })
}

fn parse_epochs(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(epochs) if epochs > 0 => Ok(epochs),
        _ => Err(AppError::BadRequest(
            "numEpochs must be a positive integer".to_string(),
        )),
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
