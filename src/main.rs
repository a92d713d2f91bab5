use clap::Parser;
use std::sync::Arc;

use quickair::api::{self, AppState};
use quickair::config::CONFIG;
use quickair::seo::StrapiClient;

#[derive(Parser)]
#[command(about = "QuickAir site services: SEO resolution and flight redirects")]
struct Args {
    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();

    let strapi = Arc::new(StrapiClient::from_config());
    let state = AppState::new(strapi);
    let router = api::create_router(state);

    let addr = args.bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}, strapi at {}", CONFIG.strapi_url);

    axum::serve(listener, router).await?;
    Ok(())
}
