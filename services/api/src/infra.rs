use credit_profile::config::AppConfig;
use credit_profile::error::AppError;
use credit_profile::profile::{
    CreditProfileService, RemotePredictorClient, ScoringConfig, ScoringEngine,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the scoring engine and, when configured, the remote predictor.
pub(crate) fn build_service(config: &AppConfig) -> Result<CreditProfileService, AppError> {
    let engine = ScoringEngine::new(ScoringConfig::with_card_limit(config.scoring.card_limit));
    let service = CreditProfileService::new(engine);

    match &config.predictor {
        Some(predictor) => Ok(service.with_predictor(RemotePredictorClient::new(predictor)?)),
        None => Ok(service),
    }
}
