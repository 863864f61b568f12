use serde::{Deserialize, Serialize};

pub const DEFAULT_CARD_LIMIT: f64 = 10_000.0;
pub const DEFAULT_SCORE_FLOOR: u16 = 300;
pub const DEFAULT_SCORE_CEILING: u16 = 850;

/// Dials applied by the engine on top of the fixed bucket tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Credit limit assumed per card when estimating utilization.
    pub card_limit: f64,
    pub score_floor: u16,
    pub score_ceiling: u16,
}

impl ScoringConfig {
    pub fn with_card_limit(card_limit: f64) -> Self {
        let card_limit = if card_limit.is_finite() && card_limit > 0.0 {
            card_limit
        } else {
            DEFAULT_CARD_LIMIT
        };

        Self {
            card_limit,
            ..Self::default()
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            card_limit: DEFAULT_CARD_LIMIT,
            score_floor: DEFAULT_SCORE_FLOOR,
            score_ceiling: DEFAULT_SCORE_CEILING,
        }
    }
}
