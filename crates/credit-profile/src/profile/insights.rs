//! Insight bundles derived alongside the score.

use serde::{Deserialize, Serialize};

use super::domain::{
    AgeGroup, ApplicantRecord, FinancialFocus, IncomeStability, Occupation, PaymentRating,
    RiskLevel, RiskTolerance,
};
use super::scoring::ScoreSignals;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealth {
    pub debt_to_income: f64,
    pub payment_history: PaymentRating,
    pub credit_utilization: f64,
    /// Share of income not consumed by debt; negative when debt exceeds income.
    pub savings_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationInsights {
    pub risk_level: RiskLevel,
    pub recommended_products: Vec<String>,
    pub income_stability: IncomeStability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBasedAnalysis {
    pub age_group: AgeGroup,
    pub recommended_focus: FinancialFocus,
    pub risk_tolerance: RiskTolerance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBehavior {
    pub payment_consistency: PaymentRating,
    pub risk_of_default: RiskLevel,
    pub improvement_areas: Vec<String>,
}

pub(crate) fn assess_financial_health(
    record: &ApplicantRecord,
    signals: &ScoreSignals,
) -> FinancialHealth {
    FinancialHealth {
        debt_to_income: signals.debt_to_income,
        payment_history: PaymentRating::from_delays(record.num_delayed_payments),
        credit_utilization: signals.credit_utilization,
        savings_rate: signals.savings_rate,
    }
}

pub(crate) fn occupation_insights(occupation: &Occupation) -> OccupationInsights {
    let (risk_level, income_stability) = match occupation {
        Occupation::Professional => (RiskLevel::Low, IncomeStability::High),
        Occupation::Business => (RiskLevel::Medium, IncomeStability::Medium),
        Occupation::Other(_) => (RiskLevel::High, IncomeStability::Low),
    };

    let recommended_products = match occupation {
        Occupation::Professional => ["Premium Credit Cards", "Investment Accounts"],
        _ => ["Standard Credit Cards", "Savings Accounts"],
    };

    OccupationInsights {
        risk_level,
        recommended_products: to_strings(&recommended_products),
        income_stability,
    }
}

pub(crate) fn age_based_analysis(age: u32) -> AgeBasedAnalysis {
    match age {
        0..=29 => AgeBasedAnalysis {
            age_group: AgeGroup::YoungAdult,
            recommended_focus: FinancialFocus::BuildingCredit,
            risk_tolerance: RiskTolerance::High,
        },
        30..=49 => AgeBasedAnalysis {
            age_group: AgeGroup::MiddleAge,
            recommended_focus: FinancialFocus::WealthBuilding,
            risk_tolerance: RiskTolerance::Medium,
        },
        _ => AgeBasedAnalysis {
            age_group: AgeGroup::Senior,
            recommended_focus: FinancialFocus::RetirementPlanning,
            risk_tolerance: RiskTolerance::Low,
        },
    }
}

pub(crate) fn analyze_payment_behavior(delayed_payments: u32) -> PaymentBehavior {
    let risk_of_default = match delayed_payments {
        0..=2 => RiskLevel::Low,
        3..=5 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    let improvement_areas = if delayed_payments > 0 {
        ["Timely Payments", "Debt Management"]
    } else {
        ["Credit Building", "Savings"]
    };

    PaymentBehavior {
        payment_consistency: PaymentRating::from_delays(delayed_payments),
        risk_of_default,
        improvement_areas: to_strings(&improvement_areas),
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
