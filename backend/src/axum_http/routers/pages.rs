use crate::{
    axum_http::{
        app_state::AppState,
        error_responses::AppError,
        record_list_cookie::{CookieRecordList, read_record_list},
        routers::uploads::parse_upload_form,
    },
    presentation::{page::render_page, tiles::TileLayout},
};
use anyhow::Context;
use axum::{
    Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use crates::domain::{
    entities::upload_records::UploadRecord, repositories::blob_publisher::BlobPublisher,
    value_objects::upload_responses::UploadResponse,
};
use std::sync::Arc;
use tracing::{error, warn};

pub fn routes<P>(state: Arc<AppState<P>>) -> Router
where
    P: BlobPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<P>).post(submit_form::<P>))
        .with_state(state)
}

pub async fn index<P>(
    State(state): State<Arc<AppState<P>>>,
    jar: CookieJar,
) -> Result<Html<String>, AppError>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    let records = read_record_list(&jar);
    Ok(Html(page(&state, &records, None)?))
}

/// Browser form post: redirect home on success so a reload does not resubmit,
/// otherwise re-render with the error shown.
pub async fn submit_form<P>(
    State(state): State<Arc<AppState<P>>>,
    jar: CookieJar,
    multipart: Multipart,
) -> Response
where
    P: BlobPublisher + Send + Sync + 'static,
{
    let request = match parse_upload_form(multipart, &state.walrus).await {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "pages: rejected upload form");
            let records = read_record_list(&jar);
            return match page(&state, &records, Some(&err.public_message())) {
                Ok(html) => (err.status(), Html(html)).into_response(),
                Err(render_err) => render_err.into_response(),
            };
        }
    };

    let store = CookieRecordList::new(jar);
    let response = state.upload_usecase.upload(&store, request).await;
    let jar = store.into_jar();

    match response {
        UploadResponse::Success { .. } => (jar, Redirect::to("/")).into_response(),
        UploadResponse::Failure { error_msg, .. } => {
            let records = read_record_list(&jar);
            match page(&state, &records, Some(&error_msg)) {
                Ok(html) => (StatusCode::OK, jar, Html(html)).into_response(),
                Err(render_err) => (jar, render_err).into_response(),
            }
        }
    }
}

fn page<P>(
    state: &AppState<P>,
    records: &[UploadRecord],
    alert: Option<&str>,
) -> Result<String, AppError>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    let layout = TileLayout::generate(&mut rand::thread_rng(), records);
    render_page(&layout, &state.form_defaults(), alert)
        .context("failed to render index page")
        .map_err(|err| {
            error!(error = ?err, "pages: render failed");
            AppError::Internal(err)
        })
}
