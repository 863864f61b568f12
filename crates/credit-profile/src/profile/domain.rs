use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validated applicant snapshot consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub age: u32,
    pub annual_income: f64,
    pub monthly_salary: f64,
    pub num_bank_accounts: u32,
    pub num_credit_cards: u32,
    pub outstanding_debt: f64,
    pub num_delayed_payments: u32,
    pub occupation: Occupation,
}

impl ApplicantRecord {
    pub fn total_accounts(&self) -> u32 {
        self.num_bank_accounts.saturating_add(self.num_credit_cards)
    }
}

/// Occupation category; anything other than the two named labels is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occupation {
    Professional,
    Business,
    Other(String),
}

impl Occupation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "professional" => Self::Professional,
            "business" => Self::Business,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Occupation::Professional => "professional",
            Occupation::Business => "business",
            Occupation::Other(label) => label,
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Occupation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Occupation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Three-way risk tier shared by the classifier and the occupation/age insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Income-driven customer segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    Premium,
    Standard,
    Basic,
}

impl CustomerSegment {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerSegment::Premium => "Premium",
            CustomerSegment::Standard => "Standard",
            CustomerSegment::Basic => "Basic",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "premium" => Some(Self::Premium),
            "standard" => Some(Self::Standard),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }
}

/// Rating of the delayed-payment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentRating {
    Excellent,
    Good,
    Poor,
}

impl PaymentRating {
    pub fn from_delays(delayed_payments: u32) -> Self {
        match delayed_payments {
            0 => Self::Excellent,
            1..=2 => Self::Good,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentRating::Excellent => "Excellent",
            PaymentRating::Good => "Good",
            PaymentRating::Poor => "Poor",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

/// Stability of income implied by the occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeStability {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "Young Adult")]
    YoungAdult,
    #[serde(rename = "Middle Age")]
    MiddleAge,
    Senior,
}

impl AgeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::MiddleAge => "Middle Age",
            AgeGroup::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialFocus {
    #[serde(rename = "Building Credit")]
    BuildingCredit,
    #[serde(rename = "Wealth Building")]
    WealthBuilding,
    #[serde(rename = "Retirement Planning")]
    RetirementPlanning,
}

impl FinancialFocus {
    pub fn label(&self) -> &'static str {
        match self {
            FinancialFocus::BuildingCredit => "Building Credit",
            FinancialFocus::WealthBuilding => "Wealth Building",
            FinancialFocus::RetirementPlanning => "Retirement Planning",
        }
    }
}

/// Tolerance for market risk suggested by the applicant's age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    High,
    Medium,
    Low,
}
