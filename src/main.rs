use clap::Parser;
use log::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::Config;
use crate::coverage::ZipCounties;
use crate::crosswalk::CrosswalkSource;

mod config;
mod coverage;
mod crosswalk;
mod record;
mod territory;
mod utils;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = Config::parse();
    run(config).await
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();
}

async fn run(config: Config) -> color_eyre::Result<()> {
    let zip_counties = load_zip_counties(&config).await;

    let territory = coverage::build_territory(&zip_counties);
    coverage::report(&territory);

    info!("saving territory table to [{}]", config.output.display());
    record::save_territory(&territory, &config.output)?;
    Ok(())
}

/// an unreachable or empty source is not fatal, it just means no county data
async fn load_zip_counties(config: &Config) -> ZipCounties {
    if config.offline {
        info!("offline mode, skipping the crosswalk download");
        return ZipCounties::new();
    }

    let fetched = match CrosswalkSource::new(&config.source_url, config.timeout(), config.retries) {
        Ok(source) => source.fetch().await,
        Err(e) => Err(e),
    };
    fetched.unwrap_or_else(|e| {
        warn!("crosswalk unavailable, falling back to zip ranges: {:?}", e);
        ZipCounties::new()
    })
}
