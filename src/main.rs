use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::{handle, App};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,redibo_front=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db) {
        error!(path = %config.db_path, error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let backend = match ApiClient::new(&config.api_url, config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!(url = %config.api_url, error = %e, "cannot build backend client");
            std::process::exit(1);
        }
    };

    let app = App::new(db, backend);

    info!(addr = %config.bind_addr, api = %config.api_url, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    match result {
        Ok(()) => info!("server shut down cleanly"),
        Err(e) => error!(error = %e, "server ended with error"),
    }
}
