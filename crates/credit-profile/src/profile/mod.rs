//! Credit profile intake, scoring, insights and presentation.

pub mod analysis;
pub mod domain;
pub mod insights;
pub mod intake;
pub mod recommendations;
pub mod remote;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::Analysis;
pub use domain::{
    AgeGroup, ApplicantRecord, CustomerSegment, FinancialFocus, IncomeStability, Occupation,
    PaymentRating, RiskLevel, RiskTolerance,
};
pub use insights::{AgeBasedAnalysis, FinancialHealth, OccupationInsights, PaymentBehavior};
pub use intake::{
    ApplicantSubmission, CsvRow, CsvRowError, FieldInput, FieldViolation, IntakeError,
    IntakeGuard, ViolationReason,
};
pub use recommendations::{OfferTier, ProductRecommendations};
pub use remote::{
    CreditRating, RemoteAssessment, RemotePrediction, RemotePredictorClient, RemotePredictorError,
};
pub use report::{render_text, AnalysisView, ScoreCategory};
pub use router::{analysis_router, AnalysisResponse};
pub use scoring::{ScoreComponent, ScoreFactor, ScoringConfig, ScoringEngine};
pub use service::{CreditProfileService, ProfileServiceError};
