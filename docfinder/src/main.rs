mod settings;
mod web;

use anyhow::Result;
use leptos::config::get_configuration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;
use crate::web::{create_router, Upstream, WebState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let settings = Settings::from_env();
    let page_config = settings.load_page_config()?;
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    info!("forwarding searches to {}", settings.analyze_url());
    let state = WebState {
        leptos_options,
        upstream: Upstream::new(settings.analyze_url()),
    };
    let app = create_router(state, page_config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
