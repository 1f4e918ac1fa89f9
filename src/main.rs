use std::sync::Arc;

use flickpick::api::{create_router, AppState};
use flickpick::config::Config;
use flickpick::services::poster::TmdbPosterResolver;
use flickpick::store::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flickpick=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::load(&config.movies_path, &config.similarity_path)?;
    tracing::info!(movies = catalog.len(), "Catalog loaded");

    let posters = Arc::new(TmdbPosterResolver::new(
        config.tmdb_api_key,
        config.tmdb_api_url,
        config.poster_cdn_url,
    ));

    let state = AppState::new(catalog, posters);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
