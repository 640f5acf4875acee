use std::{env, path::Path};

use abi::Config;
use anyhow::{anyhow, Result};
use reservation_service::start_server;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "RESERVATION_CONFIG";
const CONFIG_CANDIDATES: [&str; 3] = [
    "./reservation.yml",
    "~/.config/reservation.yml",
    "/etc/reservation.yml",
];

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let filename = config_path()?;
    let config = Config::load(&filename)?;
    info!(config = %filename, "config loaded");

    start_server(&config).await
}

fn config_path() -> Result<String> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(shellexpand::tilde(&path).into_owned());
    }
    CONFIG_CANDIDATES
        .iter()
        .map(|p| shellexpand::tilde(p).into_owned())
        .find(|p| Path::new(p).exists())
        .ok_or_else(|| anyhow!("no config found; set {} or create reservation.yml", CONFIG_ENV))
}
