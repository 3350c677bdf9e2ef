use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::api::handlers::StatsHandler;
use crate::api::types::{
    AvgBlockTimeQuery, AvgBlockTimeResponse, DifficultyResponse, HashrateResponse, HeightResponse,
    DEFAULT_WINDOW,
};
use crate::app::config::AppConfig;
use crate::app::service_handle::{wait_for_shutdown, ServiceHandle};
use crate::rpc::ChainRpc;
use crate::stats::HalvingEstimate;
use crate::utils::errors::ApiError;
use crate::utils::metrics::METRICS;

type Handler<D> = Extension<Arc<StatsHandler<D>>>;

/// ApiServer ties together the HTTP listener and the statistics handlers.
pub struct ApiServer<D: ChainRpc> {
    addr: SocketAddr,
    handler: Arc<StatsHandler<D>>,
    cors_origin: Option<String>,
}

impl<D: ChainRpc> ApiServer<D> {
    pub fn new(config: AppConfig, rpc: Arc<D>) -> Self {
        Self {
            addr: config.listen,
            handler: Arc::new(StatsHandler::new(rpc, config.chain)),
            cors_origin: config.cors_origin,
        }
    }

    pub fn router(&self) -> anyhow::Result<Router> {
        router(self.handler.clone(), self.cors_origin.as_deref())
    }

    /// Bind the listener and spawn the server; the returned handle stops it.
    pub async fn start(self) -> anyhow::Result<ServiceHandle> {
        let app = self.router()?;
        let listener = TcpListener::bind(self.addr).await?;
        info!("Starting API server on {}", listener.local_addr()?);

        let (mut svc, shutdown_rx) = ServiceHandle::new();
        let h: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
                .await?;
            info!("API server listener closed");
            Ok(())
        });
        svc.attach(h);
        Ok(svc)
    }
}

/// Build the axum router
pub fn router<D: ChainRpc>(
    handler: Arc<StatsHandler<D>>,
    cors_origin: Option<&str>,
) -> anyhow::Result<Router> {
    let origin = match cors_origin {
        Some(o) => AllowOrigin::exact(HeaderValue::from_str(o)?),
        None => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(origin);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/metrics", get(metrics_handler))
        .route("/height", get(height::<D>))
        .route("/difficulty", get(difficulty::<D>))
        .route("/hashrate", get(hashrate::<D>))
        .route("/avg-block-time", get(avg_block_time::<D>))
        .route("/halving", get(halving::<D>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(handler)),
        );
    Ok(app)
}

async fn metrics_handler() -> String {
    METRICS.render()
}

async fn height<D: ChainRpc>(Extension(h): Handler<D>) -> Result<Json<HeightResponse>, ApiError> {
    let height = h.height().await?;
    Ok(Json(HeightResponse { height }))
}

async fn difficulty<D: ChainRpc>(
    Extension(h): Handler<D>,
) -> Result<Json<DifficultyResponse>, ApiError> {
    let difficulty = h.difficulty().await?;
    Ok(Json(DifficultyResponse { difficulty }))
}

async fn hashrate<D: ChainRpc>(Extension(h): Handler<D>) -> Result<Json<HashrateResponse>, ApiError> {
    let hashrate = h.hashrate().await?;
    Ok(Json(HashrateResponse { hashrate }))
}

async fn avg_block_time<D: ChainRpc>(
    Extension(h): Handler<D>,
    query: Result<Query<AvgBlockTimeQuery>, QueryRejection>,
) -> Result<Json<AvgBlockTimeResponse>, ApiError> {
    let Query(q) = query.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
    let window = q.window.unwrap_or(DEFAULT_WINDOW);
    let avg_block_time = h.avg_block_time(window).await?;
    Ok(Json(AvgBlockTimeResponse { avg_block_time, window: window as u64 }))
}

async fn halving<D: ChainRpc>(Extension(h): Handler<D>) -> Result<Json<HalvingEstimate>, ApiError> {
    Ok(Json(h.halving().await?))
}
