use clap::Parser;
use labelstub::adapters::start_api_server;
use labelstub::cli::Cli;
use labelstub::config::{AppConfig, LoggingConfig};
use labelstub::domain::LabelRange;
use labelstub::error::{LabelStubError, Result};
use labelstub::ml::{ModelTrainer, RandomClassifier};
use labelstub::AppState;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)?;
    cli.apply(&mut config);

    init_logging(&config.logging);

    config.validate().map_err(LabelStubError::InvalidConfig)?;
    let labels = LabelRange::new(config.model.labels)
        .ok_or_else(|| LabelStubError::InvalidConfig(vec!["empty label range".to_string()]))?;

    let classifier = RandomClassifier::from_seed(labels, config.model.seed);
    info!(
        labels = %labels,
        seeded = classifier.is_seeded(),
        "Classifier initialized"
    );
    let state = AppState::new(Arc::new(classifier));

    let trainer = ModelTrainer::from_secs(config.model.warmup_secs);
    tokio::task::spawn_blocking(move || trainer.train())
        .await
        .map_err(|e| LabelStubError::Internal(format!("Training task failed: {}", e)))?;
    state.health.mark_ready();

    info!("Server is running on port {}", config.server.port);
    if let Err(e) = start_api_server(&config.server, state, shutdown_signal()).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
