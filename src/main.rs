use crate::config::BitacoraConfig;
use crate::services::content::ContentService;
use crate::store::http::HttpContentStore;
use axum::Router;
use dotenv;
use std::sync::Arc;

pub mod config;
mod domain;
mod features;
mod readtime;
mod render;
mod richtext;
mod services;
mod store;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub config: Arc<BitacoraConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // pull in environment variables
    dotenv::dotenv().ok();

    // load the centralized config once, share it everywhere
    let config = BitacoraConfig::from_env();
    let shared_config = Arc::new(config);

    // the content API client behind the ContentStore seam
    let cms = HttpContentStore::new(&shared_config);

    let content = Arc::new(ContentService::new(Box::new(cms), shared_config.clone()));

    // pre-render every slug the store knows about; if the CMS is unreachable
    // right now, requests fall back to on-demand fetching
    if let Err(e) = content.warm().await {
        eprintln!("Warm-up failed, serving on demand only: {}", e);
    }

    let app_state = AppState {
        content: content.clone(),
        config: shared_config.clone(),
    };

    println!("Starting server...");

    let app = Router::new()
        .merge(features::posts::posts_router())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&shared_config.bind_addr).await?;
    println!("Server listening on http://{}", shared_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
