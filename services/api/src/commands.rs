use crate::infra::build_service;
use chrono::{SecondsFormat, Utc};
use clap::Args;
use credit_profile::config::AppConfig;
use credit_profile::error::AppError;
use credit_profile::profile::{
    render_text, Analysis, ApplicantSubmission, CreditProfileService, CsvRow, FieldInput,
    IntakeGuard, ScoreCategory,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    #[arg(long)]
    pub(crate) age: u32,
    #[arg(long)]
    pub(crate) annual_income: f64,
    #[arg(long)]
    pub(crate) monthly_salary: f64,
    #[arg(long)]
    pub(crate) bank_accounts: u32,
    #[arg(long)]
    pub(crate) credit_cards: u32,
    #[arg(long)]
    pub(crate) outstanding_debt: f64,
    #[arg(long)]
    pub(crate) delayed_payments: u32,
    /// Occupation label (professional, business or free text)
    #[arg(long)]
    pub(crate) occupation: String,
    /// Print the analysis as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Overlay the configured remote predictor's answer
    #[arg(long)]
    pub(crate) remote: bool,
}

impl AnalyzeArgs {
    fn submission(&self) -> ApplicantSubmission {
        ApplicantSubmission {
            age: Some(self.age.into()),
            annual_income: Some(self.annual_income.into()),
            monthly_salary: Some(self.monthly_salary.into()),
            num_bank_accounts: Some(self.bank_accounts.into()),
            num_credit_cards: Some(self.credit_cards.into()),
            outstanding_debt: Some(self.outstanding_debt.into()),
            num_delayed_payments: Some(self.delayed_payments.into()),
            occupation: Some(FieldInput::Text(self.occupation.clone())),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one applicant per row
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print results as JSON instead of one line per row
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisEnvelope<'a> {
    generated_at: String,
    analysis: &'a Analysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchReport {
    generated_at: String,
    pub(crate) scored: Vec<ScoredRow>,
    pub(crate) rejected: Vec<RejectedRow>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoredRow {
    pub(crate) line: u64,
    pub(crate) analysis: Analysis,
}

#[derive(Debug, Serialize)]
pub(crate) struct RejectedRow {
    pub(crate) line: u64,
    pub(crate) error: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) async fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = build_service(config)?;
    let submission = args.submission();

    let analysis = if args.remote {
        service.analyze_remote(&submission).await?
    } else {
        service.analyze(&submission)?
    };

    if args.json {
        let envelope = AnalysisEnvelope {
            generated_at: timestamp(),
            analysis: &analysis,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", render_text(&analysis));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = build_service(config)?;
    let file = File::open(&args.input)?;
    let rows = IntakeGuard::new().records_from_csv(BufReader::new(file))?;
    let report = score_rows(&service, rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for row in &report.scored {
        let score = row.analysis.credit_score;
        println!(
            "row {}: score {} ({}) | risk {} | segment {}",
            row.line,
            score,
            ScoreCategory::for_score(score).label(),
            row.analysis.risk_level.label(),
            row.analysis.customer_segment.label()
        );
    }
    for row in &report.rejected {
        println!("row {}: skipped ({})", row.line, row.error);
    }
    println!(
        "Scored {} of {} rows",
        report.scored.len(),
        report.scored.len() + report.rejected.len()
    );

    Ok(())
}

pub(crate) fn score_rows(service: &CreditProfileService, rows: Vec<CsvRow>) -> BatchReport {
    let mut scored = Vec::new();
    let mut rejected = Vec::new();

    for row in rows {
        match row.outcome {
            Ok(record) => scored.push(ScoredRow {
                line: row.line,
                analysis: service.engine().analyze(&record),
            }),
            Err(err) => {
                tracing::warn!(line = row.line, error = %err, "skipping invalid csv row");
                rejected.push(RejectedRow {
                    line: row.line,
                    error: err.to_string(),
                });
            }
        }
    }

    BatchReport {
        generated_at: timestamp(),
        scored,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_profile::profile::{RiskLevel, ScoringEngine};

    fn analyze_args() -> AnalyzeArgs {
        AnalyzeArgs {
            age: 35,
            annual_income: 80_000.0,
            monthly_salary: 6_500.0,
            bank_accounts: 2,
            credit_cards: 2,
            outstanding_debt: 10_000.0,
            delayed_payments: 0,
            occupation: "professional".to_string(),
            json: false,
            remote: false,
        }
    }

    #[test]
    fn cli_arguments_pass_through_intake() {
        let service = CreditProfileService::new(ScoringEngine::default());
        let analysis = service
            .analyze(&analyze_args().submission())
            .expect("valid arguments");

        assert_eq!(analysis.credit_score, 823);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn zero_income_from_cli_is_rejected() {
        let mut args = analyze_args();
        args.annual_income = 0.0;

        let service = CreditProfileService::new(ScoringEngine::default());
        let err = service
            .analyze(&args.submission())
            .expect_err("zero income rejected");
        assert!(err.to_string().contains("annualIncome must be greater than zero"));
    }

    #[test]
    fn batch_splits_scored_and_rejected_rows() {
        let csv = "\
Age,Annual_Income,Monthly_Inhand_Salary,Num_Bank_Accounts,Num_Credit_Card,Outstanding_Debt,Num_of_Delayed_Payment,Occupation
35,80000,6500,2,2,10000,0,professional
abc,50000,4000,1,1,1000,0,business
";
        let rows = IntakeGuard::new()
            .records_from_csv(csv.as_bytes())
            .expect("headers parse");
        let service = CreditProfileService::new(ScoringEngine::default());

        let report = score_rows(&service, rows);

        assert_eq!(report.scored.len(), 1);
        assert_eq!(report.scored[0].analysis.credit_score, 823);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 3);
        assert!(report.rejected[0].error.contains("age must be numeric"));

        let json = serde_json::to_value(&report).expect("report serializes");
        assert!(json["generatedAt"].as_str().is_some());
        assert_eq!(json["scored"][0]["analysis"]["creditScore"], 823);
    }
}
