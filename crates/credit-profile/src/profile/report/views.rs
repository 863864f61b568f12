use serde::Serialize;

/// Display category for the numeric score, as shown next to the score dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreCategory {
    pub fn for_score(score: u16) -> Self {
        match score {
            750.. => Self::Excellent,
            700..=749 => Self::Good,
            650..=699 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::Poor => "Poor",
        }
    }

    /// Hex colour of the score dial.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "#2ecc71",
            ScoreCategory::Good => "#3498db",
            ScoreCategory::Fair => "#f1c40f",
            ScoreCategory::Poor => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub value: u16,
    pub category: ScoreCategory,
    pub category_label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthIndicatorsView {
    pub debt_to_income: String,
    pub payment_history: &'static str,
    pub credit_utilization: String,
    pub savings_rate: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInsightsView {
    pub occupation_risk: &'static str,
    pub occupation_products: String,
    pub age_group: &'static str,
    pub age_focus: &'static str,
    pub payment_consistency: &'static str,
    pub default_risk: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCharts {
    pub risk_radar: Vec<ChartSeries>,
    pub financial_health: Vec<ChartSeries>,
    pub payment_split: Vec<ChartSeries>,
}

/// Everything a display surface needs, with values already formatted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub score: ScoreCard,
    pub debt_to_income: String,
    pub risk_level: &'static str,
    pub customer_segment: &'static str,
    pub loan_recommendations: Vec<String>,
    pub health: HealthIndicatorsView,
    pub insights: ProfileInsightsView,
    pub product_recommendations: Vec<String>,
    pub charts: AnalysisCharts,
}
