//! Pure presentation of an [`Analysis`]: formatted view models, chart series and a
//! plain-text rendering for terminals.

mod charts;
pub mod views;

use std::fmt::Write;

use super::analysis::Analysis;
pub use views::{
    AnalysisCharts, AnalysisView, ChartSeries, HealthIndicatorsView, ProfileInsightsView,
    ScoreCard, ScoreCategory,
};

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

impl AnalysisView {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let category = ScoreCategory::for_score(analysis.credit_score);
        let health = &analysis.financial_health;
        let products = &analysis.product_recommendations;

        Self {
            score: ScoreCard {
                value: analysis.credit_score,
                category,
                category_label: category.label(),
                color: category.color(),
            },
            debt_to_income: format_percent(analysis.debt_to_income),
            risk_level: analysis.risk_level.label(),
            customer_segment: analysis.customer_segment.label(),
            loan_recommendations: analysis.loan_recommendations.clone(),
            health: HealthIndicatorsView {
                debt_to_income: format_percent(health.debt_to_income),
                payment_history: health.payment_history.label(),
                credit_utilization: format_percent(health.credit_utilization),
                savings_rate: format_percent(health.savings_rate),
            },
            insights: ProfileInsightsView {
                occupation_risk: analysis.occupation_insights.risk_level.label(),
                occupation_products: analysis.occupation_insights.recommended_products.join(", "),
                age_group: analysis.age_based_analysis.age_group.label(),
                age_focus: analysis.age_based_analysis.recommended_focus.label(),
                payment_consistency: analysis.payment_behavior.payment_consistency.label(),
                default_risk: analysis.payment_behavior.risk_of_default.label(),
            },
            product_recommendations: vec![
                format!("Credit Cards: {}", products.credit_cards.join(", ")),
                format!("Loans: {}", products.loans.join(", ")),
                format!("Investments: {}", products.investments.join(", ")),
            ],
            charts: charts::build_charts(analysis),
        }
    }
}

/// Multi-line text report suitable for a terminal.
pub fn render_text(analysis: &Analysis) -> String {
    let view = AnalysisView::from_analysis(analysis);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Credit score: {} ({})",
        view.score.value, view.score.category_label
    );
    if let Some(rating) = analysis.predicted_rating {
        let _ = writeln!(out, "Predicted rating: {}", rating.label());
    }
    let _ = writeln!(out, "Debt-to-income: {}", view.debt_to_income);
    let _ = writeln!(out, "Risk level: {}", view.risk_level);
    let _ = writeln!(out, "Customer segment: {}", view.customer_segment);

    let _ = writeln!(out, "\nLoan recommendations");
    for loan in &view.loan_recommendations {
        let _ = writeln!(out, "- {loan}");
    }

    let _ = writeln!(out, "\nFinancial health");
    let _ = writeln!(out, "- Payment history: {}", view.health.payment_history);
    let _ = writeln!(out, "- Credit utilization: {}", view.health.credit_utilization);
    let _ = writeln!(out, "- Savings rate: {}", view.health.savings_rate);

    let _ = writeln!(out, "\nProfile insights");
    let _ = writeln!(
        out,
        "- Occupation risk: {} ({})",
        view.insights.occupation_risk, view.insights.occupation_products
    );
    let _ = writeln!(
        out,
        "- Age group: {} (focus: {})",
        view.insights.age_group, view.insights.age_focus
    );
    let _ = writeln!(
        out,
        "- Payment consistency: {} (default risk {})",
        view.insights.payment_consistency, view.insights.default_risk
    );
    let _ = writeln!(
        out,
        "- Improvement areas: {}",
        analysis.payment_behavior.improvement_areas.join(", ")
    );

    let _ = writeln!(out, "\nProduct recommendations");
    for line in &view.product_recommendations {
        let _ = writeln!(out, "- {line}");
    }

    if let Some(remote) = &analysis.remote {
        let _ = writeln!(out, "\nRemote assessment");
        let _ = writeln!(
            out,
            "- Debt-to-income: {}",
            format_percent(remote.debt_to_income)
        );
        for advice in &remote.advice {
            let _ = writeln!(out, "- {advice}");
        }
    }

    let _ = writeln!(out, "\nScore breakdown");
    for component in &analysis.score_breakdown {
        let _ = writeln!(
            out,
            "- {:?}: +{} ({})",
            component.factor, component.points, component.notes
        );
    }

    out
}
