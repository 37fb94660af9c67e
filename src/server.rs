//! HTTP delivery of the rendered page
//!
//! Provides 4 endpoints:
//! - GET /              the HTML page
//! - GET /guide.md      the Markdown rendition
//! - GET /catalog.json  the content tables as JSON
//! - GET /healthz       liveness check

use crate::config::ServerConfig;
use crate::core::data::Catalog;
use crate::render::{render_document, Format, RenderOptions};
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;

/// Documents rendered once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    page: Arc<str>,
    markdown: Arc<str>,
    catalog_json: Arc<str>,
}

impl AppState {
    pub fn from_catalog(catalog: &Catalog, options: &RenderOptions) -> AppResult<Self> {
        let page = render_document(catalog, Format::Html, options)?;
        let markdown = render_document(catalog, Format::Markdown, options)?;
        let catalog_json = render_document(catalog, Format::Json, options)?;
        Ok(Self {
            page: page.into(),
            markdown: markdown.into(),
            catalog_json: catalog_json.into(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/guide.md", get(markdown))
        .route("/catalog.json", get(catalog_json))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn page(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, Format::Html.content_type())], state.page.to_string())
}

async fn markdown(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, Format::Markdown.content_type())],
        state.markdown.to_string(),
    )
}

async fn catalog_json(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, Format::Json.content_type())],
        state.catalog_json.to_string(),
    )
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> AppResult<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!(%addr, "serving guide");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
