use serde::{Deserialize, Serialize};

use super::domain::{CustomerSegment, RiskLevel};
use super::insights::{AgeBasedAnalysis, FinancialHealth, OccupationInsights, PaymentBehavior};
use super::recommendations::ProductRecommendations;
use super::remote::{CreditRating, RemoteAssessment};
use super::scoring::ScoreComponent;

/// Complete credit profile produced for one applicant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub credit_score: u16,
    pub debt_to_income: f64,
    pub risk_level: RiskLevel,
    pub customer_segment: CustomerSegment,
    pub loan_recommendations: Vec<String>,
    pub financial_health: FinancialHealth,
    pub occupation_insights: OccupationInsights,
    pub age_based_analysis: AgeBasedAnalysis,
    pub payment_behavior: PaymentBehavior,
    pub product_recommendations: ProductRecommendations,
    pub score_breakdown: Vec<ScoreComponent>,
    /// Categorical rating reported by a remote predictor, when one was consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_rating: Option<CreditRating>,
    /// Remote predictor's own figures, kept apart from the local facets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteAssessment>,
}
