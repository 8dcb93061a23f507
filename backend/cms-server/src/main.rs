use cms_server::error::ServerError;
use cms_server::{AppState, build_router, logger};

use cms_auth::JwtValidator;
use cms_config::Config;

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cms-server v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to load .env: {}", e),
    }
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    if let Some(dir) = database_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    info!("Connecting to database: {}", database_path.display());
    let pool = cms_db::connect(&database_path).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    cms_db::migrate(&pool).await?;
    info!("Migrations complete");

    // Session validation
    let session_validator = build_session_validator(&config)?;
    info!("Session tokens: {}", session_validator.algorithm());

    let app_state = AppState::new(pool, session_validator, &config.auth.admin_role);
    let app = build_router(app_state, &config.server.allowed_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

fn build_session_validator(config: &Config) -> Result<JwtValidator, ServerError> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtValidator::with_hs256(secret.as_bytes()));
    }

    let config_dir = Config::config_dir()?;
    let Some(key_path) = config.auth.public_key_path(&config_dir) else {
        return Err(cms_config::ConfigError::auth("no JWT key configured").into());
    };

    let public_key =
        std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
            path: key_path.display().to_string(),
            source: e,
        })?;

    Ok(JwtValidator::with_rs256(&public_key)?)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
