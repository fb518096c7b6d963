//! Backend entry-point: loads settings, wires adapters and serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use std::ffi::OsString;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use songbook::inbound::http::health::HealthState;
use songbook::settings::{ServerSettings, SpotifySettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // SPOTIFY_ID and SPOTIFY_SECRET usually come from a local .env file.
    dotenv::dotenv().ok();
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment only; CLI arguments are not parsed.
    let args = [OsString::from("songbook")];
    let server_settings = ServerSettings::load_from_iter(args.clone())
        .map_err(|error| eyre!("invalid SONGBOOK_* settings: {error}"))?;
    let spotify_settings = SpotifySettings::load_from_iter(args)
        .map_err(|error| eyre!("invalid SPOTIFY_* settings: {error}"))?;
    let config = ServerConfig::from_settings(&server_settings, &spotify_settings)
        .wrap_err("invalid configuration")?;

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %config.bind_addr(), "starting songbook");
    let server = create_server(health_state.clone(), config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated")?;
    health_state.mark_unhealthy();
    Ok(())
}
