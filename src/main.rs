//! Storekeep Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use storekeep_core::config::AppConfig;
use storekeep_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("STOREKEEP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Storekeep v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = storekeep_database::DatabasePool::connect(&config.database).await?;
    db.run_migrations().await?;
    let db_pool = db.into_pool();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(storekeep_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(storekeep_database::repositories::CategoryRepository::new(
        db_pool.clone(),
    ));
    let product_repo = Arc::new(storekeep_database::repositories::ProductRepository::new(
        db_pool,
    ));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(storekeep_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(storekeep_auth::jwt::JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(storekeep_auth::jwt::JwtDecoder::new(&config.auth)?);
    let otp_ledger = Arc::new(storekeep_auth::otp::OtpLedger::new());

    // ── Mail ─────────────────────────────────────────────────────
    let mailer = Arc::new(storekeep_service::Mailer::from_config(&config.mail)?);

    // ── Services ─────────────────────────────────────────────────
    let account_service = Arc::new(storekeep_service::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&otp_ledger),
        Arc::clone(&mailer),
    ));
    let category_service = Arc::new(storekeep_service::CategoryService::new(Arc::clone(
        &category_repo,
    )));
    let product_service = Arc::new(storekeep_service::ProductService::new(
        Arc::clone(&product_repo),
        Arc::clone(&category_repo),
    ));

    // ── Admin seed ───────────────────────────────────────────────
    account_service.seed_admin(&config.admin).await?;

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = storekeep_api::AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        user_repo,
        account_service,
        category_service,
        product_service,
    };

    let app = storekeep_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Storekeep server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Storekeep server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
