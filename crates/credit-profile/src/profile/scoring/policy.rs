use super::super::domain::{ApplicantRecord, CustomerSegment, RiskLevel};
use super::rules::ScoreSignals;

const POINTS_PER_DELAYED_PAYMENT: u32 = 20;

/// Additive risk points; kept separate from the tier so callers can audit the total.
pub(crate) fn risk_points(record: &ApplicantRecord, signals: &ScoreSignals) -> u32 {
    let mut points = record
        .num_delayed_payments
        .saturating_mul(POINTS_PER_DELAYED_PAYMENT);

    if signals.debt_to_income > 40.0 {
        points = points.saturating_add(30);
    } else if signals.debt_to_income > 20.0 {
        points = points.saturating_add(20);
    }

    if signals.credit_utilization > 70.0 {
        points = points.saturating_add(30);
    } else if signals.credit_utilization > 30.0 {
        points = points.saturating_add(20);
    }

    points
}

pub(crate) fn classify_risk(record: &ApplicantRecord, signals: &ScoreSignals) -> RiskLevel {
    match risk_points(record, signals) {
        points if points >= 60 => RiskLevel::High,
        points if points >= 30 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

pub(crate) fn classify_segment(annual_income: f64) -> CustomerSegment {
    if annual_income >= 100_000.0 {
        CustomerSegment::Premium
    } else if annual_income >= 50_000.0 {
        CustomerSegment::Standard
    } else {
        CustomerSegment::Basic
    }
}
