use crate::{
    axum_http::{
        app_state::AppState,
        default_routers,
        routers::{pages, uploads},
    },
    config::config_model::{BackendServer, DotEnvyConfig},
    usecases::upload_blob::UploadBlobUseCase,
};
use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use crates::{
    domain::repositories::blob_publisher::BlobPublisher,
    infra::walrus::publisher_client::WalrusPublisherClient,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub async fn start(config: Arc<DotEnvyConfig>) -> Result<()> {
    let publisher = WalrusPublisherClient::default();
    let usecase = UploadBlobUseCase::new(Arc::new(publisher), config.walrus.sui_network);
    let state = Arc::new(AppState::new(usecase, config.walrus.clone()));

    let app = build_router(state, &config.backend_server)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        port = config.backend_server.port,
        publisher = %config.walrus.publisher_url,
        aggregator = %config.walrus.aggregator_url,
        network = %config.walrus.sui_network,
        "Server is running"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn build_router<P>(state: Arc<AppState<P>>, server: &BackendServer) -> Result<Router>
where
    P: BlobPublisher + Send + Sync + 'static,
{
    let app = Router::new()
        .merge(pages::routes(Arc::clone(&state)))
        .nest("/api/v1/uploads", uploads::routes(Arc::clone(&state)))
        .route("/api/v1/health-check", get(default_routers::health_check))
        .fallback(default_routers::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.timeout),
        ))
        // Multipart honors axum's 2 MB default; the layer below is the real cap.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            (server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
