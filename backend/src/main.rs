//! Gateway entry-point: loads settings, wires the TMDb adapter into the
//! domain services, and serves the REST API with OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use media_gateway::inbound::http::health::HealthState;
use media_gateway::settings::{ListenerSettings, UpstreamSettings};
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let upstream = UpstreamSettings::from_env()
        .and_then(|settings| settings.to_tmdb_config())
        .wrap_err("invalid upstream configuration")?;
    let listener = ListenerSettings::from_env().wrap_err("invalid listener configuration")?;
    let config =
        ServerConfig::from_settings(&listener).wrap_err("invalid listener configuration")?;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    info!(
        base_url = %upstream.base_url,
        bind_addr = %config.bind_addr(),
        request_timeout_secs = config.request_timeout().as_secs(),
        "starting media gateway"
    );

    let http_state = build_http_state(upstream).wrap_err("failed to build TMDb client")?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, config)
        .wrap_err("failed to start HTTP server")?;
    server.await.wrap_err("HTTP server terminated abnormally")
}
