use std::net::SocketAddr;
use std::sync::Arc;

use stagepass_api::{app, state::{AppState, AuthConfig}};
use stagepass_core::HotelsService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stagepass_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = stagepass_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting stagepass API on port {}", config.server.port);

    let db = stagepass_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let hotels = HotelsService::new(
        Arc::new(stagepass_store::PgEnrollmentRepository::new(db.pool.clone())),
        Arc::new(stagepass_store::PgTicketRepository::new(db.pool.clone())),
        Arc::new(stagepass_store::PgHotelRepository::new(db.pool.clone())),
    );

    let app_state = AppState {
        hotels,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
