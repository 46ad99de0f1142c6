use crate::config::HuntConfig;
use crate::pipeline::{live_hunt, HuntHandle};
use crate::router::{handle, AppState};
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod geocode;
mod pipeline;
mod responses;
mod router;
mod scraper;
mod spreadsheets;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fsbo_hunter=info")),
        )
        .init();

    let config = HuntConfig::default();

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "bad bind address");
            std::process::exit(1);
        }
    };

    let state = AppState {
        config,
        hunt: HuntHandle::new(live_hunt),
    };

    tracing::info!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(4);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
