use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantRecord, Occupation};

/// Raw field as captured from a form or CSV export. Anything that is neither a number
/// nor text is kept in `Other` so validation can name the field instead of failing the
/// whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for FieldInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Unvalidated applicant payload. Column aliases accept the credit dataset's export headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSubmission {
    #[serde(default, alias = "Age")]
    pub age: Option<FieldInput>,
    #[serde(default, alias = "Annual_Income")]
    pub annual_income: Option<FieldInput>,
    #[serde(default, alias = "Monthly_Inhand_Salary")]
    pub monthly_salary: Option<FieldInput>,
    #[serde(default, alias = "Num_Bank_Accounts")]
    pub num_bank_accounts: Option<FieldInput>,
    #[serde(default, alias = "Num_Credit_Card")]
    pub num_credit_cards: Option<FieldInput>,
    #[serde(default, alias = "Outstanding_Debt")]
    pub outstanding_debt: Option<FieldInput>,
    #[serde(default, alias = "Num_of_Delayed_Payment")]
    pub num_delayed_payments: Option<FieldInput>,
    #[serde(default, alias = "Occupation")]
    pub occupation: Option<FieldInput>,
}

impl From<&ApplicantRecord> for ApplicantSubmission {
    fn from(record: &ApplicantRecord) -> Self {
        Self {
            age: Some(record.age.into()),
            annual_income: Some(record.annual_income.into()),
            monthly_salary: Some(record.monthly_salary.into()),
            num_bank_accounts: Some(record.num_bank_accounts.into()),
            num_credit_cards: Some(record.num_credit_cards.into()),
            outstanding_debt: Some(record.outstanding_debt.into()),
            num_delayed_payments: Some(record.num_delayed_payments.into()),
            occupation: Some(FieldInput::Text(record.occupation.label().to_string())),
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    Missing,
    Empty,
    NotANumber,
    NotText,
    NotAnInteger,
    NotFinite,
    MustBePositive,
    MustBeNonNegative,
}

impl ViolationReason {
    pub fn describe(&self) -> &'static str {
        match self {
            ViolationReason::Missing => "is required",
            ViolationReason::Empty => "must not be blank",
            ViolationReason::NotANumber => "must be numeric",
            ViolationReason::NotText => "must be text",
            ViolationReason::NotAnInteger => "must be a whole number",
            ViolationReason::NotFinite => "must be a finite number",
            ViolationReason::MustBePositive => "must be greater than zero",
            ViolationReason::MustBeNonNegative => "must not be negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason.describe())
    }
}

/// Every field that failed validation, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid applicant submission: {}", summarize(.violations))]
pub struct IntakeError {
    pub violations: Vec<FieldViolation>,
}

impl IntakeError {
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Guard responsible for producing `ApplicantRecord` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert an inbound submission into a typed record, collecting every violation.
    pub fn record_from_submission(
        &self,
        submission: &ApplicantSubmission,
    ) -> Result<ApplicantRecord, IntakeError> {
        let mut violations = Vec::new();

        let age = collect(
            &mut violations,
            "age",
            parse_count(submission.age.as_ref()).and_then(|age| {
                if age == 0 {
                    Err(ViolationReason::MustBePositive)
                } else {
                    Ok(age)
                }
            }),
        );
        let annual_income = collect(
            &mut violations,
            "annualIncome",
            parse_amount(submission.annual_income.as_ref()).and_then(positive),
        );
        let monthly_salary = collect(
            &mut violations,
            "monthlySalary",
            parse_amount(submission.monthly_salary.as_ref()).and_then(positive),
        );
        let num_bank_accounts = collect(
            &mut violations,
            "numBankAccounts",
            parse_count(submission.num_bank_accounts.as_ref()),
        );
        let num_credit_cards = collect(
            &mut violations,
            "numCreditCards",
            parse_count(submission.num_credit_cards.as_ref()),
        );
        let outstanding_debt = collect(
            &mut violations,
            "outstandingDebt",
            parse_amount(submission.outstanding_debt.as_ref()).and_then(non_negative),
        );
        let num_delayed_payments = collect(
            &mut violations,
            "numDelayedPayments",
            parse_count(submission.num_delayed_payments.as_ref()),
        );
        let occupation = collect(
            &mut violations,
            "occupation",
            parse_occupation(submission.occupation.as_ref()),
        );

        match (
            age,
            annual_income,
            monthly_salary,
            num_bank_accounts,
            num_credit_cards,
            outstanding_debt,
            num_delayed_payments,
            occupation,
        ) {
            (
                Some(age),
                Some(annual_income),
                Some(monthly_salary),
                Some(num_bank_accounts),
                Some(num_credit_cards),
                Some(outstanding_debt),
                Some(num_delayed_payments),
                Some(occupation),
            ) if violations.is_empty() => Ok(ApplicantRecord {
                age,
                annual_income,
                monthly_salary,
                num_bank_accounts,
                num_credit_cards,
                outstanding_debt,
                num_delayed_payments,
                occupation,
            }),
            _ => Err(IntakeError { violations }),
        }
    }

    /// Validate every row of a CSV export. Rows are reported individually so one bad
    /// line does not discard the batch.
    pub fn records_from_csv<R: io::Read>(&self, reader: R) -> Result<Vec<CsvRow>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let line = result
                .as_ref()
                .ok()
                .and_then(|record| record.position())
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);

            let outcome = result
                .and_then(|record| record.deserialize::<ApplicantSubmission>(Some(&headers)))
                .map_err(CsvRowError::from)
                .and_then(|submission| {
                    self.record_from_submission(&submission)
                        .map_err(CsvRowError::from)
                });

            rows.push(CsvRow { line, outcome });
        }

        Ok(rows)
    }
}

/// One validated (or rejected) line of a CSV batch.
#[derive(Debug)]
pub struct CsvRow {
    pub line: u64,
    pub outcome: Result<ApplicantRecord, CsvRowError>,
}

#[derive(Debug, thiserror::Error)]
pub enum CsvRowError {
    #[error("malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Invalid(#[from] IntakeError),
}

fn collect<T>(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    result: Result<T, ViolationReason>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(reason) => {
            violations.push(FieldViolation { field, reason });
            None
        }
    }
}

fn parse_amount(input: Option<&FieldInput>) -> Result<f64, ViolationReason> {
    let value = match input.ok_or(ViolationReason::Missing)? {
        FieldInput::Number(value) => *value,
        FieldInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(ViolationReason::Empty);
            }
            text.parse::<f64>()
                .map_err(|_| ViolationReason::NotANumber)?
        }
        FieldInput::Other(_) => return Err(ViolationReason::NotANumber),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViolationReason::NotFinite)
    }
}

fn parse_count(input: Option<&FieldInput>) -> Result<u32, ViolationReason> {
    let value = parse_amount(input)?;
    if value < 0.0 {
        return Err(ViolationReason::MustBeNonNegative);
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ViolationReason::NotAnInteger);
    }
    Ok(value as u32)
}

fn parse_occupation(input: Option<&FieldInput>) -> Result<Occupation, ViolationReason> {
    match input.ok_or(ViolationReason::Missing)? {
        FieldInput::Text(text) if text.trim().is_empty() => Err(ViolationReason::Empty),
        FieldInput::Text(text) => Ok(Occupation::parse(text)),
        FieldInput::Number(value) => Ok(Occupation::parse(&value.to_string())),
        FieldInput::Other(_) => Err(ViolationReason::NotText),
    }
}

fn positive(value: f64) -> Result<f64, ViolationReason> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ViolationReason::MustBePositive)
    }
}

fn non_negative(value: f64) -> Result<f64, ViolationReason> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ViolationReason::MustBeNonNegative)
    }
}
