use std::sync::Arc;

use tracing::info;

use super::analysis::Analysis;
use super::domain::ApplicantRecord;
use super::intake::{ApplicantSubmission, IntakeError, IntakeGuard};
use super::remote::{RemotePrediction, RemotePredictorClient, RemotePredictorError};
use super::scoring::ScoringEngine;

/// Service composing intake validation, the scoring engine and the optional remote predictor.
#[derive(Debug, Clone)]
pub struct CreditProfileService {
    guard: IntakeGuard,
    engine: Arc<ScoringEngine>,
    predictor: Option<Arc<RemotePredictorClient>>,
}

impl CreditProfileService {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            guard: IntakeGuard::new(),
            engine: Arc::new(engine),
            predictor: None,
        }
    }

    pub fn with_predictor(mut self, predictor: RemotePredictorClient) -> Self {
        self.predictor = Some(Arc::new(predictor));
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn validate(
        &self,
        submission: &ApplicantSubmission,
    ) -> Result<ApplicantRecord, ProfileServiceError> {
        Ok(self.guard.record_from_submission(submission)?)
    }

    /// Validate and score a submission locally.
    pub fn analyze(
        &self,
        submission: &ApplicantSubmission,
    ) -> Result<Analysis, ProfileServiceError> {
        let record = self.validate(submission)?;
        Ok(self.engine.analyze(&record))
    }

    /// Validate, score locally, then attach the remote predictor's answer.
    pub async fn analyze_remote(
        &self,
        submission: &ApplicantSubmission,
    ) -> Result<Analysis, ProfileServiceError> {
        let predictor = self
            .predictor
            .as_ref()
            .ok_or(RemotePredictorError::NotConfigured)?;
        let record = self.validate(submission)?;
        let prediction = predictor.predict(&record).await?;
        let analysis = prediction.attach_to(self.engine.analyze(&record))?;

        info!(
            credit_score = analysis.credit_score,
            rating = ?analysis.predicted_rating,
            "remote analysis assembled"
        );
        Ok(analysis)
    }

    /// Answer in the remote predictor's schema using the local engine.
    pub fn predict(
        &self,
        submission: &ApplicantSubmission,
    ) -> Result<RemotePrediction, ProfileServiceError> {
        let analysis = self.analyze(submission)?;
        Ok(RemotePrediction::from_analysis(&analysis))
    }
}

/// Error raised by the credit profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Remote(#[from] RemotePredictorError),
}
