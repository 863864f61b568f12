mod config;
mod policy;
mod rules;

pub use config::{ScoringConfig, DEFAULT_CARD_LIMIT, DEFAULT_SCORE_CEILING, DEFAULT_SCORE_FLOOR};

pub(crate) use rules::ScoreSignals;

use super::analysis::Analysis;
use super::domain::{ApplicantRecord, RiskLevel};
use super::insights::{
    age_based_analysis, analyze_payment_behavior, assess_financial_health, occupation_insights,
};
use super::recommendations::{loan_recommendations, product_recommendations};
use policy::{classify_risk, classify_segment, risk_points};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless engine that turns a validated record into a full analysis.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn analyze(&self, record: &ApplicantRecord) -> Analysis {
        let signals = ScoreSignals::derive(record, &self.config);
        let (score_breakdown, credit_score) = rules::score_record(record, &signals, &self.config);
        let risk_level = classify_risk(record, &signals);

        debug!(
            credit_score,
            risk_points = risk_points(record, &signals),
            debt_to_income = signals.debt_to_income,
            credit_utilization = signals.credit_utilization,
            "scored applicant record"
        );

        Analysis {
            credit_score,
            debt_to_income: signals.debt_to_income,
            risk_level,
            customer_segment: classify_segment(record.annual_income),
            loan_recommendations: loan_recommendations(credit_score),
            financial_health: assess_financial_health(record, &signals),
            occupation_insights: occupation_insights(&record.occupation),
            age_based_analysis: age_based_analysis(record.age),
            payment_behavior: analyze_payment_behavior(record.num_delayed_payments),
            product_recommendations: product_recommendations(credit_score),
            score_breakdown,
            predicted_rating: None,
            remote: None,
        }
    }

    /// Score only, without assembling the insight bundles.
    pub fn credit_score(&self, record: &ApplicantRecord) -> u16 {
        let signals = ScoreSignals::derive(record, &self.config);
        rules::score_record(record, &signals, &self.config).1
    }

    /// Risk tier together with the additive points behind it.
    pub fn risk(&self, record: &ApplicantRecord) -> (RiskLevel, u32) {
        let signals = ScoreSignals::derive(record, &self.config);
        (
            classify_risk(record, &signals),
            risk_points(record, &signals),
        )
    }
}

/// Factor contributing to the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    Income,
    DebtToIncome,
    AccountMix,
    PaymentHistory,
}

/// Discrete contribution to the score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}
