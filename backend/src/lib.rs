use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;

use config::ServerConfig;

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const NO_CACHE: &str = "no-cache";
const BUNDLE_EXTENSIONS: [&str; 3] = ["wasm", "js", "css"];

async fn health_check() -> &'static str {
    "OK"
}

fn is_bundle_asset(path: &str) -> bool {
    path.rsplit_once('.')
        .map_or(false, |(_, ext)| BUNDLE_EXTENSIONS.contains(&ext))
}

/// Trunk hashes bundle file names, so those can be cached forever. The page
/// itself and the single-page fallback must be revalidated.
async fn cache_policy(request: Request, next: Next) -> Response {
    let bundle = is_bundle_asset(request.uri().path());
    let mut response = next.run(request).await;
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v.starts_with("text/html"));
    let policy = if bundle && !is_html && response.status().is_success() {
        IMMUTABLE
    } else {
        NO_CACHE
    };
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
    response
}

pub fn build_app(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(middleware::from_fn(cache_policy))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
