//! Crop Advisory Platform - Backend Server

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_advisory_backend::model::{CropClassifier, TrainingData};
use crop_advisory_backend::reference::ReferenceData;
use crop_advisory_backend::services::RecommendationService;
use crop_advisory_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cap_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Crop Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Train the classifier once, before accepting any traffic. A missing or
    // malformed training table aborts startup; there is no partial-service
    // mode without a model.
    tracing::info!("Loading training data from {}", config.model.training_data);
    let training_data = TrainingData::from_path(&config.model.training_data)?;
    tracing::info!(
        "Fitting classifier on {} samples across {} crops",
        training_data.len(),
        training_data.label_count()
    );
    let classifier = CropClassifier::fit(&training_data, &config.model)?;
    tracing::info!("Classifier ready");

    // Create application state
    let reference = Arc::new(ReferenceData::india());
    let state = AppState {
        recommendations: Arc::new(RecommendationService::new(
            Arc::new(classifier),
            Arc::clone(&reference),
        )),
        reference,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
