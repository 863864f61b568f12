use super::super::domain::ApplicantRecord;
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};

/// Ratio returned when a denominator is not positive but there is something to divide.
pub(crate) const SATURATED_PERCENT: f64 = 100.0;

/// Derived ratios shared between the score, the risk classifier and the insights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreSignals {
    pub debt_to_income: f64,
    pub credit_utilization: f64,
    pub savings_rate: f64,
}

impl ScoreSignals {
    pub(crate) fn derive(record: &ApplicantRecord, config: &ScoringConfig) -> Self {
        let card_capacity = f64::from(record.num_credit_cards) * config.card_limit;

        let savings_rate = if record.annual_income > 0.0 {
            (record.annual_income - record.outstanding_debt) / record.annual_income * 100.0
        } else {
            0.0
        };

        Self {
            debt_to_income: ratio_percent(record.outstanding_debt, record.annual_income),
            credit_utilization: ratio_percent(record.outstanding_debt, card_capacity),
            savings_rate,
        }
    }
}

/// `numerator / denominator * 100`, total over degenerate denominators.
pub(crate) fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if numerator <= 0.0 {
        0.0
    } else if denominator <= 0.0 {
        SATURATED_PERCENT
    } else {
        numerator / denominator * 100.0
    }
}

pub(crate) fn score_record(
    record: &ApplicantRecord,
    signals: &ScoreSignals,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u16) {
    let mut components = Vec::with_capacity(5);
    let mut raw_score = f64::from(config.score_floor);

    let age = record.age;
    let (points, notes) = if (30..=50).contains(&age) {
        (82.5, format!("age {age} within prime band 30-50"))
    } else if age > 50 {
        (55.0, format!("age {age} above 50"))
    } else {
        (27.5, format!("age {age} below 30"))
    };
    raw_score += points;
    components.push(ScoreComponent {
        factor: ScoreFactor::Age,
        points,
        notes,
    });

    let income = record.annual_income;
    let points = if income >= 100_000.0 {
        137.5
    } else if income >= 60_000.0 {
        110.0
    } else if income >= 30_000.0 {
        82.5
    } else {
        55.0
    };
    raw_score += points;
    components.push(ScoreComponent {
        factor: ScoreFactor::Income,
        points,
        notes: format!("annual income {income:.2}"),
    });

    let dti = signals.debt_to_income;
    let points = if dti < 20.0 {
        165.0
    } else if dti < 40.0 {
        137.5
    } else if dti < 60.0 {
        110.0
    } else {
        55.0
    };
    raw_score += points;
    components.push(ScoreComponent {
        factor: ScoreFactor::DebtToIncome,
        points,
        notes: format!("debt-to-income {dti:.2}%"),
    });

    let accounts = record.total_accounts();
    let (points, notes) = if (3..=5).contains(&accounts) {
        (82.5, format!("{accounts} accounts within healthy mix 3-5"))
    } else if accounts > 5 {
        (66.0, format!("{accounts} accounts above healthy mix"))
    } else {
        (44.0, format!("{accounts} accounts below healthy mix"))
    };
    raw_score += points;
    components.push(ScoreComponent {
        factor: ScoreFactor::AccountMix,
        points,
        notes,
    });

    let delays = record.num_delayed_payments;
    let points = match delays {
        0 => 82.5,
        1..=2 => 66.0,
        3..=5 => 44.0,
        _ => 27.5,
    };
    raw_score += points;
    components.push(ScoreComponent {
        factor: ScoreFactor::PaymentHistory,
        points,
        notes: if delays == 0 {
            "no delayed payments".to_string()
        } else {
            format!("{delays} delayed payment(s)")
        },
    });

    let floor = f64::from(config.score_floor);
    let ceiling = f64::from(config.score_ceiling).max(floor);
    let score = raw_score.round().clamp(floor, ceiling) as u16;

    (components, score)
}
