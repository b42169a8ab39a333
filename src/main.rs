mod model;
mod server;

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    scheduler::maintenance,
    service::admin::setup_code::SetupCodeService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let setup_codes = SetupCodeService::new();
    startup::check_for_admin(&db, &config, &setup_codes).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = maintenance::start_scheduler(scheduler_db).await {
            tracing::error!("Maintenance scheduler error: {}", e);
        }
    });

    let cors = cors_layer(&config)?;
    let app = server::router::router()
        .with_state(AppState::new(db, setup_codes, &config))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Allows the frontend at `APP_URL` to call the API with its session cookie.
fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.app_url.trim_end_matches('/')).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: "not a valid origin".to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
