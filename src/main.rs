//! EcoTracker server binary.

use std::sync::Arc;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ecotracker::adapters::{
    app_router, connect_pool, BuiltinCountryStore, BuiltinFactorStore,
    InMemorySubmissionRepository, PostgresCountryStore, PostgresEmissionFactorStore,
    PostgresSubmissionRepository, YamlFactorStore,
};
use ecotracker::application::FactorSnapshot;
use ecotracker::config::{AppConfig, FactorSourceKind, ServerConfig, ValidationError};
use ecotracker::ports::{CountryStore, EmissionFactorStore, SubmissionRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config);

    let pool = match &config.database {
        Some(database) => Some(connect_pool(database).await.map_err(|e| {
            tracing::error!("Database initialization failed: {e}");
            e
        })?),
        None => {
            warn!("No database configured; submissions are kept in memory and lost on restart");
            None
        }
    };

    let factor_store: Arc<dyn EmissionFactorStore> = match config.factors.source {
        FactorSourceKind::Builtin => Arc::new(BuiltinFactorStore::new()),
        FactorSourceKind::File => {
            let path = config
                .factors
                .path
                .as_ref()
                .ok_or(ValidationError::MissingRequired("FACTORS__PATH"))?;
            Arc::new(YamlFactorStore::new(path))
        }
        FactorSourceKind::Postgres => {
            let pool = pool.clone().ok_or(ValidationError::FactorSourceNeedsDatabase(
                FactorSourceKind::Postgres.as_str(),
            ))?;
            Arc::new(PostgresEmissionFactorStore::new(pool))
        }
    };

    let repository: Arc<dyn SubmissionRepository> = match &pool {
        Some(pool) => Arc::new(PostgresSubmissionRepository::new(pool.clone())),
        None => Arc::new(InMemorySubmissionRepository::new()),
    };
    let country_store: Arc<dyn CountryStore> = match pool {
        Some(pool) => Arc::new(PostgresCountryStore::new(pool)),
        None => Arc::new(BuiltinCountryStore::new()),
    };

    let snapshot = Arc::new(FactorSnapshot::load(factor_store.as_ref()).await?);

    let app = app_router(snapshot, factor_store, repository, country_store)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "EcoTracker API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
