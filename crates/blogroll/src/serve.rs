use crate::prelude::{eprintln, *};
use axum::{extract::State, routing::get, Json, Router};
use blogroll_core::post::PostsResponse;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::fetch::DATA_PATH;

const BUNDLED_FIXTURE: &str = include_str!("../fixtures/data.json");

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "BLOGROLL_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// JSON file to serve instead of the bundled posts
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,
}

pub fn bundled_fixture() -> Result<PostsResponse> {
    serde_json::from_str(BUNDLED_FIXTURE).context("Bundled fixture is not valid JSON")
}

pub fn load_fixture(path: &Path) -> Result<PostsResponse> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("Invalid fixture {}", path.display()))
}

/// Mock backend exposing the post collection
pub fn router(data: PostsResponse) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(DATA_PATH, get(data_handler))
        .layer(cors)
        .with_state(Arc::new(data))
}

async fn data_handler(State(data): State<Arc<PostsResponse>>) -> Json<PostsResponse> {
    log::debug!("serving {} posts", data.posts.len());
    Json(data.as_ref().clone())
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let data = match &options.fixture {
        Some(path) => load_fixture(path)?,
        None => bundled_fixture()?,
    };

    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    if global.verbose {
        eprintln!("Serving {} posts on http://{}", data.posts.len(), addr);
        eprintln!("Data endpoint: http://{}{}", addr, DATA_PATH);
    }
    log::info!("listening on {addr}");

    axum::serve(listener, router(data))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
