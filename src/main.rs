use std::{path::PathBuf, sync::Arc};

use churn_predictor::{model, service::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model_path: PathBuf = std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| "model/churn_model.json".to_string())
        .into();
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // Load once; any artifact problem is fatal here rather than per-request.
    let (predictor, feature_names) = model::load_bundle(&model_path)?;

    // Warmup so backend trouble surfaces before the first submission.
    predictor.warmup(feature_names.len())?;
    tracing::info!("warmup forward ok");
    tracing::info!(
        "loaded model; feature_names[{}]: {:?}",
        feature_names.len(),
        &feature_names
    );

    let state = AppState {
        predictor: Arc::new(predictor),
        feature_names: Arc::new(feature_names),
    };

    let app = churn_predictor::service::router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
