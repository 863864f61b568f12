use serde::{Deserialize, Serialize};

use super::insights::to_strings;

const PRIME_SCORE: u16 = 700;
const NEAR_PRIME_SCORE: u16 = 600;

/// Catalog tier selected by the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferTier {
    Prime,
    NearPrime,
    Subprime,
}

impl OfferTier {
    pub fn for_score(score: u16) -> Self {
        if score >= PRIME_SCORE {
            Self::Prime
        } else if score >= NEAR_PRIME_SCORE {
            Self::NearPrime
        } else {
            Self::Subprime
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendations {
    pub credit_cards: Vec<String>,
    pub loans: Vec<String>,
    pub investments: Vec<String>,
}

/// Loan offers with their fixed caps, best offer first.
pub(crate) fn loan_recommendations(score: u16) -> Vec<String> {
    let offers: &[(&str, &str)] = match OfferTier::for_score(score) {
        OfferTier::Prime => &[
            ("Personal Loan", "$50,000"),
            ("Home Loan", "$500,000"),
            ("Auto Loan", "$100,000"),
        ],
        OfferTier::NearPrime => &[("Personal Loan", "$25,000"), ("Auto Loan", "$50,000")],
        OfferTier::Subprime => &[("Secured Personal Loan", "$10,000")],
    };

    offers
        .iter()
        .map(|(label, cap)| format!("{label}: Up to {cap}"))
        .collect()
}

pub(crate) fn product_recommendations(score: u16) -> ProductRecommendations {
    match OfferTier::for_score(score) {
        OfferTier::Prime => ProductRecommendations {
            credit_cards: to_strings(&["Premium Rewards", "Travel"]),
            loans: to_strings(&["Personal", "Home", "Auto"]),
            investments: to_strings(&["Stocks", "Mutual Funds"]),
        },
        OfferTier::NearPrime => ProductRecommendations {
            credit_cards: to_strings(&["Cash Back", "Balance Transfer"]),
            loans: to_strings(&["Personal", "Auto"]),
            investments: to_strings(&["Bonds", "ETFs"]),
        },
        OfferTier::Subprime => ProductRecommendations {
            credit_cards: to_strings(&["Secured", "Student"]),
            loans: to_strings(&["Secured Personal"]),
            investments: to_strings(&["Savings Accounts", "CDs"]),
        },
    }
}
