use axum::response::Response;
use serde_json::Value;

use crate::config::PredictorConfig;
use crate::profile::domain::{ApplicantRecord, Occupation};
use crate::profile::intake::{ApplicantSubmission, FieldInput, IntakeGuard};
use crate::profile::remote::RemotePredictorClient;
use crate::profile::scoring::{ScoringConfig, ScoringEngine};
use crate::profile::service::CreditProfileService;

/// Mid-career professional with modest debt.
pub(super) fn record() -> ApplicantRecord {
    ApplicantRecord {
        age: 35,
        annual_income: 80_000.0,
        monthly_salary: 6_500.0,
        num_bank_accounts: 2,
        num_credit_cards: 2,
        outstanding_debt: 10_000.0,
        num_delayed_payments: 0,
        occupation: Occupation::Professional,
    }
}

/// Every factor in its lowest bucket.
pub(super) fn minimal_record() -> ApplicantRecord {
    ApplicantRecord {
        age: 22,
        annual_income: 20_000.0,
        monthly_salary: 1_500.0,
        num_bank_accounts: 0,
        num_credit_cards: 0,
        outstanding_debt: 15_000.0,
        num_delayed_payments: 9,
        occupation: Occupation::Other("student".to_string()),
    }
}

/// Every factor in its highest bucket.
pub(super) fn maximal_record() -> ApplicantRecord {
    ApplicantRecord {
        age: 42,
        annual_income: 150_000.0,
        monthly_salary: 11_000.0,
        num_bank_accounts: 2,
        num_credit_cards: 2,
        outstanding_debt: 0.0,
        num_delayed_payments: 0,
        occupation: Occupation::Professional,
    }
}

pub(super) fn submission() -> ApplicantSubmission {
    ApplicantSubmission::from(&record())
}

/// Submission shaped like raw form values.
pub(super) fn form_submission() -> ApplicantSubmission {
    ApplicantSubmission {
        age: Some(FieldInput::from("35")),
        annual_income: Some(FieldInput::from("80000")),
        monthly_salary: Some(FieldInput::from("6500.50")),
        num_bank_accounts: Some(FieldInput::from("2")),
        num_credit_cards: Some(FieldInput::from("2")),
        outstanding_debt: Some(FieldInput::from("10000")),
        num_delayed_payments: Some(FieldInput::from("0")),
        occupation: Some(FieldInput::from("professional")),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::new()
}

pub(super) fn service() -> CreditProfileService {
    CreditProfileService::new(engine())
}

pub(super) fn service_with_predictor(base_url: &str, max_retries: u32) -> CreditProfileService {
    service().with_predictor(predictor_client(base_url, max_retries))
}

pub(super) fn predictor_client(base_url: &str, max_retries: u32) -> RemotePredictorClient {
    let mut config = PredictorConfig::new(base_url).expect("valid predictor url");
    config.timeout_ms = 500;
    config.max_retries = max_retries;
    config.retry_backoff_ms = 1;
    RemotePredictorClient::new(&config).expect("client builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
