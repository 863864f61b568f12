//! Adapter for the external `/predict` service.
//!
//! The predictor answers in its own schema: a categorical `credit_score` and ratios
//! expressed as fractions. [`RemotePrediction::attach_to`] records such a response next
//! to the canonical [`Analysis`] without touching the locally computed facets. [`RemotePrediction::from_analysis`] goes the other way so
//! the service can answer legacy `/predict` callers itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::analysis::Analysis;
use super::domain::{ApplicantRecord, CustomerSegment, PaymentRating, RiskLevel};
use super::insights::to_strings;
use super::recommendations::{OfferTier, ProductRecommendations};
use crate::config::PredictorConfig;

/// Categorical rating used by the remote predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    Good,
    Standard,
    Poor,
}

impl CreditRating {
    /// Rating matching the loan/product tier of a numeric score.
    pub fn from_score(score: u16) -> Self {
        match OfferTier::for_score(score) {
            OfferTier::Prime => Self::Good,
            OfferTier::NearPrime => Self::Standard,
            OfferTier::Subprime => Self::Poor,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "good" => Some(Self::Good),
            "standard" => Some(Self::Standard),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditRating::Good => "Good",
            CreditRating::Standard => "Standard",
            CreditRating::Poor => "Poor",
        }
    }

    pub fn advice(&self) -> Vec<String> {
        let advice = match self {
            CreditRating::Poor => [
                "Consider reducing your outstanding debt",
                "Make payments on time to improve your credit history",
            ],
            CreditRating::Standard => [
                "Maintain a good payment history",
                "Keep your credit utilization low",
            ],
            CreditRating::Good => [
                "Continue maintaining good payment habits",
                "Consider increasing your credit limit",
            ],
        };
        to_strings(&advice)
    }
}

/// Response body of the remote predictor. Ratios are fractions, not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePrediction {
    pub credit_score: String,
    pub debt_to_income_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_segment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_recommendations: Option<serde_json::Value>,
}

impl RemotePrediction {
    /// Express a local analysis in the predictor's schema.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let rating = CreditRating::from_score(analysis.credit_score);
        Self {
            credit_score: rating.label().to_string(),
            debt_to_income_ratio: analysis.debt_to_income / 100.0,
            credit_utilization: Some(analysis.financial_health.credit_utilization / 100.0),
            savings_rate: Some(analysis.financial_health.savings_rate / 100.0),
            risk_level: Some(analysis.risk_level.label().to_string()),
            customer_segment: Some(analysis.customer_segment.label().to_string()),
            payment_history: Some(analysis.financial_health.payment_history.label().to_string()),
            recommendations: rating.advice(),
            product_recommendations: serde_json::to_value(&analysis.product_recommendations).ok(),
        }
    }

    /// Attach the remote answer to a locally computed analysis.
    ///
    /// Local facets are never modified; the predictor's view lands in [`Analysis::remote`].
    /// Unknown labels and non-finite ratios are dropped from that block. An unknown rating
    /// is a decode error.
    pub fn attach_to(self, mut analysis: Analysis) -> Result<Analysis, RemotePredictorError> {
        let rating = CreditRating::parse(&self.credit_score).ok_or_else(|| {
            RemotePredictorError::Decode(format!("unknown credit rating '{}'", self.credit_score))
        })?;
        if !self.debt_to_income_ratio.is_finite() {
            return Err(RemotePredictorError::Decode(
                "debt_to_income_ratio is not a finite number".to_string(),
            ));
        }

        analysis.predicted_rating = Some(rating);
        analysis.remote = Some(RemoteAssessment {
            debt_to_income: self.debt_to_income_ratio * 100.0,
            credit_utilization: percent(self.credit_utilization),
            savings_rate: percent(self.savings_rate),
            risk_level: self.risk_level.as_deref().and_then(RiskLevel::parse),
            customer_segment: self
                .customer_segment
                .as_deref()
                .and_then(CustomerSegment::parse),
            payment_history: self.payment_history.as_deref().and_then(PaymentRating::parse),
            advice: self.recommendations,
            product_recommendations: self
                .product_recommendations
                .and_then(|value| serde_json::from_value::<ProductRecommendations>(value).ok()),
        });

        Ok(analysis)
    }
}

fn percent(fraction: Option<f64>) -> Option<f64> {
    fraction
        .filter(|value| value.is_finite())
        .map(|value| value * 100.0)
}

/// The remote predictor's view of an applicant, ratios already expressed as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAssessment {
    pub debt_to_income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_segment: Option<CustomerSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<PaymentRating>,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_recommendations: Option<ProductRecommendations>,
}

#[derive(Debug, thiserror::Error)]
pub enum RemotePredictorError {
    #[error("remote predictor is not configured")]
    NotConfigured,
    #[error("remote predictor client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("remote predictor timed out after {0:?}")]
    Timeout(Duration),
    #[error("remote predictor request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("remote predictor returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("remote predictor response could not be decoded: {0}")]
    Decode(String),
}

impl RemotePredictorError {
    fn is_retryable(&self) -> bool {
        match self {
            RemotePredictorError::Timeout(_) | RemotePredictorError::Transport(_) => true,
            RemotePredictorError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    error: String,
}

/// HTTP client for the remote predictor with bounded retry.
#[derive(Debug, Clone)]
pub struct RemotePredictorClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl RemotePredictorClient {
    pub fn new(config: &PredictorConfig) -> Result<Self, RemotePredictorError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RemotePredictorError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}/predict", config.base_url.trim_end_matches('/')),
            timeout,
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the record and decode the predictor's answer, retrying transient failures.
    pub async fn predict(
        &self,
        record: &ApplicantRecord,
    ) -> Result<RemotePrediction, RemotePredictorError> {
        let mut attempt: u32 = 0;
        loop {
            match self.send_once(record).await {
                Ok(prediction) => {
                    info!(endpoint = %self.endpoint, attempt, rating = %prediction.credit_score, "remote prediction received");
                    return Ok(prediction);
                }
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    let delay = self.retry_backoff.saturating_mul(1u32 << attempt.min(16));
                    warn!(endpoint = %self.endpoint, attempt, ?delay, error = %err, "remote prediction failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(
        &self,
        record: &ApplicantRecord,
    ) -> Result<RemotePrediction, RemotePredictorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<RemoteErrorBody>(&body)
                .map(|parsed| parsed.error)
                .unwrap_or(body);
            return Err(RemotePredictorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;
        serde_json::from_slice(&bytes).map_err(|err| RemotePredictorError::Decode(err.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> RemotePredictorError {
        if err.is_timeout() {
            RemotePredictorError::Timeout(self.timeout)
        } else {
            RemotePredictorError::Transport(err)
        }
    }
}
