use super::common::*;
use crate::profile::domain::{
    AgeGroup, FinancialFocus, IncomeStability, Occupation, PaymentRating, RiskLevel,
    RiskTolerance,
};
use crate::profile::recommendations::OfferTier;

#[test]
fn professional_profile_gets_premium_products() {
    let analysis = engine().analyze(&record());

    let occupation = &analysis.occupation_insights;
    assert_eq!(occupation.risk_level, RiskLevel::Low);
    assert_eq!(occupation.income_stability, IncomeStability::High);
    assert_eq!(
        occupation.recommended_products,
        vec!["Premium Credit Cards", "Investment Accounts"]
    );
}

#[test]
fn business_and_other_occupations_differ_in_risk() {
    let engine = engine();
    let mut record = record();

    record.occupation = Occupation::Business;
    let business = engine.analyze(&record).occupation_insights;
    assert_eq!(business.risk_level, RiskLevel::Medium);
    assert_eq!(business.income_stability, IncomeStability::Medium);
    assert_eq!(
        business.recommended_products,
        vec!["Standard Credit Cards", "Savings Accounts"]
    );

    record.occupation = Occupation::Other("artist".to_string());
    let other = engine.analyze(&record).occupation_insights;
    assert_eq!(other.risk_level, RiskLevel::High);
    assert_eq!(other.income_stability, IncomeStability::Low);
}

#[test]
fn age_brackets_use_exclusive_upper_bounds() {
    let engine = engine();
    let bracket_for = |age: u32| {
        let mut record = record();
        record.age = age;
        engine.analyze(&record).age_based_analysis
    };

    let young = bracket_for(29);
    assert_eq!(young.age_group, AgeGroup::YoungAdult);
    assert_eq!(young.recommended_focus, FinancialFocus::BuildingCredit);
    assert_eq!(young.risk_tolerance, RiskTolerance::High);

    assert_eq!(bracket_for(30).age_group, AgeGroup::MiddleAge);

    // The score treats 50 as prime, the insight already treats it as senior.
    let senior = bracket_for(50);
    assert_eq!(senior.age_group, AgeGroup::Senior);
    assert_eq!(senior.recommended_focus, FinancialFocus::RetirementPlanning);
    assert_eq!(senior.risk_tolerance, RiskTolerance::Low);
}

#[test]
fn clean_payment_history_suggests_building() {
    let analysis = engine().analyze(&record());

    let behavior = &analysis.payment_behavior;
    assert_eq!(behavior.payment_consistency, PaymentRating::Excellent);
    assert_eq!(behavior.risk_of_default, RiskLevel::Low);
    assert_eq!(behavior.improvement_areas, vec!["Credit Building", "Savings"]);
    assert_eq!(
        analysis.financial_health.payment_history,
        PaymentRating::Excellent
    );
}

#[test]
fn frequent_delays_raise_default_risk() {
    let mut record = record();
    record.num_delayed_payments = 6;

    let analysis = engine().analyze(&record);

    let behavior = &analysis.payment_behavior;
    assert_eq!(behavior.payment_consistency, PaymentRating::Poor);
    assert_eq!(behavior.risk_of_default, RiskLevel::High);
    assert_eq!(
        behavior.improvement_areas,
        vec!["Timely Payments", "Debt Management"]
    );
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn default_risk_tiers_follow_delay_counts() {
    let engine = engine();
    let risk_for = |delays: u32| {
        let mut record = record();
        record.num_delayed_payments = delays;
        engine.analyze(&record).payment_behavior
    };

    assert_eq!(risk_for(2).risk_of_default, RiskLevel::Low);
    assert_eq!(risk_for(2).payment_consistency, PaymentRating::Good);
    assert_eq!(risk_for(3).risk_of_default, RiskLevel::Medium);
    assert_eq!(risk_for(5).risk_of_default, RiskLevel::Medium);
    assert_eq!(risk_for(6).risk_of_default, RiskLevel::High);
}

#[test]
fn savings_rate_goes_negative_when_debt_exceeds_income() {
    let mut record = record();
    record.annual_income = 40_000.0;
    record.outstanding_debt = 60_000.0;

    let analysis = engine().analyze(&record);

    assert_eq!(analysis.financial_health.savings_rate, -50.0);
    assert_eq!(analysis.debt_to_income, 150.0);
    assert_eq!(analysis.financial_health.debt_to_income, 150.0);
}

#[test]
fn prime_scores_get_full_loan_catalog() {
    let analysis = engine().analyze(&record());

    assert_eq!(OfferTier::for_score(analysis.credit_score), OfferTier::Prime);
    assert_eq!(
        analysis.loan_recommendations,
        vec![
            "Personal Loan: Up to $50,000",
            "Home Loan: Up to $500,000",
            "Auto Loan: Up to $100,000",
        ]
    );
    assert_eq!(
        analysis.product_recommendations.credit_cards,
        vec!["Premium Rewards", "Travel"]
    );
}

#[test]
fn subprime_scores_get_secured_products() {
    let analysis = engine().analyze(&minimal_record());

    assert_eq!(
        analysis.loan_recommendations,
        vec!["Secured Personal Loan: Up to $10,000"]
    );
    assert_eq!(analysis.product_recommendations.loans, vec!["Secured Personal"]);
    assert_eq!(
        analysis.product_recommendations.investments,
        vec!["Savings Accounts", "CDs"]
    );
}

#[test]
fn offer_tiers_switch_at_inclusive_thresholds() {
    assert_eq!(OfferTier::for_score(700), OfferTier::Prime);
    assert_eq!(OfferTier::for_score(699), OfferTier::NearPrime);
    assert_eq!(OfferTier::for_score(600), OfferTier::NearPrime);
    assert_eq!(OfferTier::for_score(599), OfferTier::Subprime);
}
