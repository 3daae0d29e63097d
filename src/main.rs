use astra::Server;
use homefinder::app::App;
use homefinder::config::Config;
use homefinder::responses::error_to_response;
use homefinder::router::{handle, ENDPOINTS};

fn main() {
    dotenvy::dotenv().ok();

    // Reads RUST_LOG, info by default
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(a) => a,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Server running on http://{addr}");
    log::info!("Serving static files from {}", config.static_root.display());
    log::info!("Proxying /graphql to {}", config.graphql_upstream);
    log::info!("Available API endpoints:");
    for endpoint in ENDPOINTS {
        log::info!("- {endpoint}");
    }

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down, database connection closed.");
}
