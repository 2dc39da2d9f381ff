//! Mentor Diagnostic HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mentor_diagnostic::adapters::http::{api_router, DiagnosticAppState, ScoringAppState};
use mentor_diagnostic::adapters::{
    FileSubmissionStore, HttpSubmissionGateway, InMemorySubmissionStore,
};
use mentor_diagnostic::application::SessionRegistry;
use mentor_diagnostic::config::{AppConfig, PersistenceBackend};
use mentor_diagnostic::ports::{SnapshotSource, SubmissionGateway};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (gateway, snapshots) = build_persistence(&config)?;
    let registry = Arc::new(
        SessionRegistry::new(gateway, snapshots, config.autosave.pipeline_config())
            .with_placement_radius(config.scoring.radius),
    );

    let scoring = ScoringAppState::new(
        config.scoring.target_scale()?,
        config.scoring.radar_scale()?,
        config.scoring.drag_threshold_px,
    );
    let app = api_router(DiagnosticAppState::new(registry), scoring, &config.server);

    let addr = config.server.socket_addr()?;
    info!(%addr, backend = ?config.persistence.backend, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
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
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

type Persistence = (Arc<dyn SubmissionGateway>, Option<Arc<dyn SnapshotSource>>);

fn build_persistence(config: &AppConfig) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence = &config.persistence;
    Ok(match persistence.backend {
        PersistenceBackend::Memory => {
            let store = Arc::new(InMemorySubmissionStore::new());
            let gateway: Arc<dyn SubmissionGateway> = store.clone();
            let snapshots: Arc<dyn SnapshotSource> = store;
            (gateway, Some(snapshots))
        }
        PersistenceBackend::File => {
            let store = Arc::new(FileSubmissionStore::new(&persistence.data_dir));
            let gateway: Arc<dyn SubmissionGateway> = store.clone();
            let snapshots: Arc<dyn SnapshotSource> = store;
            (gateway, Some(snapshots))
        }
        PersistenceBackend::Http => {
            let gateway = HttpSubmissionGateway::new(persistence.http_gateway()?)?;
            (Arc::new(gateway) as Arc<dyn SubmissionGateway>, None)
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
