use credit_profile::profile::{
    render_text, ApplicantRecord, ApplicantSubmission, CreditProfileService, CustomerSegment,
    FieldInput, IntakeGuard, Occupation, PaymentRating, RiskLevel, ScoringConfig, ScoringEngine,
};

fn service() -> CreditProfileService {
    CreditProfileService::new(ScoringEngine::new(ScoringConfig::default()))
}

fn applicant() -> ApplicantRecord {
    ApplicantRecord {
        age: 35,
        annual_income: 80_000.0,
        monthly_salary: 6_500.0,
        num_bank_accounts: 2,
        num_credit_cards: 2,
        outstanding_debt: 10_000.0,
        num_delayed_payments: 0,
        occupation: Occupation::Professional,
    }
}

#[test]
fn mid_career_professional_scores_prime() {
    let analysis = service()
        .analyze(&ApplicantSubmission::from(&applicant()))
        .expect("valid applicant");

    assert_eq!(analysis.credit_score, 823, "four accounts earn the full mix bucket");
    assert_eq!(analysis.debt_to_income, 12.5);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.customer_segment, CustomerSegment::Standard);
    assert_eq!(analysis.loan_recommendations.len(), 3);
}

#[test]
fn single_bank_and_card_scores_lower_mix() {
    let mut record = applicant();
    record.num_bank_accounts = 1;
    record.num_credit_cards = 1;

    let analysis = service()
        .analyze(&ApplicantSubmission::from(&record))
        .expect("valid applicant");

    assert_eq!(analysis.credit_score, 784);
}

#[test]
fn heavy_debt_reaches_high_risk() {
    let mut record = applicant();
    record.annual_income = 120_000.0;
    record.outstanding_debt = 60_000.0;

    let analysis = service()
        .analyze(&ApplicantSubmission::from(&record))
        .expect("valid applicant");

    assert_eq!(analysis.debt_to_income, 50.0);
    assert_eq!(analysis.customer_segment, CustomerSegment::Premium);
    // 30 for debt-to-income above 40 plus 30 for utilization above 70.
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn no_cards_with_debt_is_finite_and_medium_risk() {
    let mut record = applicant();
    record.annual_income = 100_000.0;
    record.outstanding_debt = 5_000.0;
    record.num_credit_cards = 0;

    let analysis = service()
        .analyze(&ApplicantSubmission::from(&record))
        .expect("valid applicant");

    assert_eq!(analysis.financial_health.credit_utilization, 100.0);
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
}

#[test]
fn frequent_delays_flag_poor_history() {
    let mut record = applicant();
    record.num_delayed_payments = 6;

    let analysis = service()
        .analyze(&ApplicantSubmission::from(&record))
        .expect("valid applicant");

    assert_eq!(analysis.payment_behavior.payment_consistency, PaymentRating::Poor);
    assert_eq!(analysis.payment_behavior.risk_of_default, RiskLevel::High);
    assert_eq!(
        analysis.payment_behavior.improvement_areas,
        vec!["Timely Payments", "Debt Management"]
    );
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn repeated_analysis_is_identical() {
    let service = service();
    let submission = ApplicantSubmission::from(&applicant());

    let first = service.analyze(&submission).expect("valid applicant");
    let second = service.analyze(&submission).expect("valid applicant");

    assert_eq!(first, second);
    assert_eq!(render_text(&first), render_text(&second));
}

#[test]
fn invalid_submission_never_reaches_engine() {
    let mut submission = ApplicantSubmission::from(&applicant());
    submission.monthly_salary = Some(FieldInput::from("n/a"));

    let err = service()
        .analyze(&submission)
        .expect_err("invalid salary rejected");

    assert!(err.to_string().contains("monthlySalary must be numeric"));
}

#[test]
fn dataset_export_batch_scores_valid_rows() {
    let csv = "\
Age,Annual_Income,Monthly_Inhand_Salary,Num_Bank_Accounts,Num_Credit_Card,Outstanding_Debt,Num_of_Delayed_Payment,Occupation
35,80000,6500,2,2,10000,0,professional
42,150000,11000,2,2,0,0,business
19,-5,1200,1,0,300,0,student
";

    let guard = IntakeGuard::new();
    let engine = ScoringEngine::default();
    let rows = guard.records_from_csv(csv.as_bytes()).expect("headers parse");

    let scores: Vec<Option<u16>> = rows
        .iter()
        .map(|row| row.outcome.as_ref().ok().map(|record| engine.credit_score(record)))
        .collect();

    assert_eq!(scores, vec![Some(823), Some(850), None]);
    assert_eq!(rows[2].line, 4, "header occupies the first line");
}
