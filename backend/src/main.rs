use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};
use wavilog_server::{build_app, config::ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wavilog_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    let sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });
    if sentry_guard.is_none() {
        tracing::debug!("SENTRY_DSN not set, error reporting disabled");
    }

    let app = build_app(&config);
    let addr = config.socket_addr();
    tracing::info!("Serving {} on {}", config.dist_dir.display(), addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
