use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use sgb_backend::config::Config;
use sgb_backend::directory::Directory;
use sgb_backend::{controllers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("SGB v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using data directory: {:?}", config.data_dir);

    let directory = Directory::load(&config.data_dir).map_err(|e| {
        log::error!("Failed to load reference data: {}", e);
        std::io::Error::other(e)
    })?;

    // Built once so every worker shares the same session and notes stores
    let state = web::Data::new(AppState::new(directory));

    log::info!("Starting server on {}:{}", config.host, config.port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop)
            .await
            .is_err()
        {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
