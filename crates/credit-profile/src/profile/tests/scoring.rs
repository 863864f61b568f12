use super::common::*;
use crate::profile::domain::{CustomerSegment, RiskLevel};
use crate::profile::scoring::{ScoreFactor, ScoringConfig, ScoringEngine};

#[test]
fn engine_scores_mid_career_professional() {
    let analysis = engine().analyze(&record());

    // Four accounts sit in the 3-5 band, so the mix factor earns the full 82.5.
    assert_eq!(analysis.credit_score, 823);
    assert_eq!(analysis.debt_to_income, 12.5);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.customer_segment, CustomerSegment::Standard);
}

#[test]
fn engine_scores_thin_account_mix_lower() {
    let mut record = record();
    record.num_bank_accounts = 1;
    record.num_credit_cards = 1;

    let analysis = engine().analyze(&record);

    assert_eq!(analysis.credit_score, 784);
    let mix = analysis
        .score_breakdown
        .iter()
        .find(|component| component.factor == ScoreFactor::AccountMix)
        .expect("account mix component");
    assert_eq!(mix.points, 44.0);
}

#[test]
fn breakdown_sums_to_score() {
    let analysis = engine().analyze(&record());

    assert_eq!(analysis.score_breakdown.len(), 5);
    let total: f64 = 300.0
        + analysis
            .score_breakdown
            .iter()
            .map(|component| component.points)
            .sum::<f64>();
    assert_eq!(total.round() as u16, analysis.credit_score);
}

#[test]
fn minimal_and_maximal_records_hit_bucket_extremes() {
    let engine = engine();

    assert_eq!(engine.credit_score(&minimal_record()), 509);
    assert_eq!(engine.credit_score(&maximal_record()), 850);
}

#[test]
fn half_debt_to_income_lands_in_third_bucket() {
    let mut record = record();
    record.annual_income = 120_000.0;
    record.outstanding_debt = 60_000.0;

    let analysis = engine().analyze(&record);

    assert_eq!(analysis.debt_to_income, 50.0);
    let dti = analysis
        .score_breakdown
        .iter()
        .find(|component| component.factor == ScoreFactor::DebtToIncome)
        .expect("debt-to-income component");
    assert_eq!(dti.points, 110.0);
}

#[test]
fn age_buckets_respect_inclusive_bounds() {
    let engine = engine();
    let points_for = |age: u32| {
        let mut record = record();
        record.age = age;
        engine
            .analyze(&record)
            .score_breakdown
            .into_iter()
            .find(|component| component.factor == ScoreFactor::Age)
            .map(|component| component.points)
            .expect("age component")
    };

    assert_eq!(points_for(29), 27.5);
    assert_eq!(points_for(30), 82.5);
    assert_eq!(points_for(50), 82.5);
    assert_eq!(points_for(51), 55.0);
}

#[test]
fn zero_cards_with_debt_saturates_utilization() {
    let mut record = record();
    record.annual_income = 100_000.0;
    record.outstanding_debt = 5_000.0;
    record.num_credit_cards = 0;

    let engine = engine();
    let analysis = engine.analyze(&record);
    let (risk, points) = engine.risk(&record);

    assert_eq!(analysis.financial_health.credit_utilization, 100.0);
    assert!(analysis.financial_health.credit_utilization.is_finite());
    assert_eq!(points, 30);
    assert_eq!(risk, RiskLevel::Medium);
}

#[test]
fn zero_cards_without_debt_reports_no_utilization() {
    let mut record = record();
    record.num_credit_cards = 0;
    record.outstanding_debt = 0.0;

    let analysis = engine().analyze(&record);

    assert_eq!(analysis.financial_health.credit_utilization, 0.0);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn zero_income_is_guarded_inside_the_engine() {
    let mut record = record();
    record.annual_income = 0.0;

    let analysis = engine().analyze(&record);

    assert_eq!(analysis.debt_to_income, 100.0);
    assert_eq!(analysis.financial_health.savings_rate, 0.0);
    assert_eq!(analysis.customer_segment, CustomerSegment::Basic);
}

#[test]
fn delayed_payments_drive_risk_tiers() {
    let engine = engine();
    let tier_for = |delays: u32| {
        let mut record = record();
        record.num_delayed_payments = delays;
        engine.risk(&record)
    };

    // Utilization alone contributes 20 points for the fixture.
    assert_eq!(tier_for(0), (RiskLevel::Low, 20));
    assert_eq!(tier_for(1), (RiskLevel::Medium, 40));
    assert_eq!(tier_for(2), (RiskLevel::High, 60));
}

#[test]
fn segment_follows_income_thresholds() {
    let engine = engine();
    let segment_for = |income: f64| {
        let mut record = record();
        record.annual_income = income;
        engine.analyze(&record).customer_segment
    };

    assert_eq!(segment_for(100_000.0), CustomerSegment::Premium);
    assert_eq!(segment_for(99_999.99), CustomerSegment::Standard);
    assert_eq!(segment_for(50_000.0), CustomerSegment::Standard);
    assert_eq!(segment_for(49_999.0), CustomerSegment::Basic);
}

#[test]
fn card_limit_changes_utilization() {
    let engine = ScoringEngine::new(ScoringConfig::with_card_limit(5_000.0));

    let analysis = engine.analyze(&record());

    assert_eq!(analysis.financial_health.credit_utilization, 100.0);
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
}

#[test]
fn invalid_card_limit_falls_back_to_default() {
    let config = ScoringConfig::with_card_limit(f64::NAN);
    assert_eq!(config, ScoringConfig::default());
}

#[test]
fn analysis_is_idempotent() {
    let engine = engine();
    let first = engine.analyze(&record());
    let second = engine.analyze(&record());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}
