use super::super::analysis::Analysis;
use super::super::domain::{AgeGroup, PaymentRating};
use super::views::{AnalysisCharts, ChartSeries};

fn payment_strength(rating: PaymentRating) -> f64 {
    match rating {
        PaymentRating::Excellent => 100.0,
        PaymentRating::Good => 75.0,
        PaymentRating::Poor => 50.0,
    }
}

fn delayed_share(rating: PaymentRating) -> f64 {
    match rating {
        PaymentRating::Excellent => 0.0,
        PaymentRating::Good => 25.0,
        PaymentRating::Poor => 50.0,
    }
}

fn credit_age(group: AgeGroup) -> f64 {
    match group {
        AgeGroup::YoungAdult => 30.0,
        AgeGroup::MiddleAge => 70.0,
        AgeGroup::Senior => 90.0,
    }
}

pub(crate) fn build_charts(analysis: &Analysis) -> AnalysisCharts {
    let consistency = analysis.payment_behavior.payment_consistency;
    let utilization = analysis.financial_health.credit_utilization;

    let risk_radar = vec![
        ChartSeries {
            label: "Payment History",
            value: payment_strength(consistency),
        },
        ChartSeries {
            label: "Debt-to-Income",
            value: analysis.debt_to_income,
        },
        ChartSeries {
            label: "Credit Mix",
            value: utilization,
        },
        ChartSeries {
            label: "Credit Age",
            value: credit_age(analysis.age_based_analysis.age_group),
        },
        ChartSeries {
            label: "New Credit",
            value: 100.0 - utilization / 2.0,
        },
    ];

    let financial_health = vec![
        ChartSeries {
            label: "Debt-to-Income",
            value: analysis.debt_to_income,
        },
        ChartSeries {
            label: "Credit Utilization",
            value: utilization,
        },
        ChartSeries {
            label: "Savings Rate",
            value: analysis.financial_health.savings_rate,
        },
    ];

    let delayed = delayed_share(consistency);
    let payment_split = vec![
        ChartSeries {
            label: "On Time",
            value: 100.0 - delayed,
        },
        ChartSeries {
            label: "Delayed",
            value: delayed,
        },
    ];

    AnalysisCharts {
        risk_radar,
        financial_health,
        payment_split,
    }
}
