use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use tutor_payout::adapters::report::DIVIDER;
use tutor_payout::{
    load_policy, ConsoleIntake, JsonReportWriter, PayoutEngine, PayoutError, PayoutPolicy,
    PayoutWarning, Student, TextReportWriter, Tutor,
};

fn run_text(policy: PayoutPolicy, input: &str) -> (Result<(), PayoutError>, String) {
    let engine = PayoutEngine::new(policy);
    let mut intake = ConsoleIntake::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        engine.policy().pricing.clone(),
    );
    let mut writer = TextReportWriter::new(Vec::new(), false);

    let result = engine.run(&mut intake, &mut writer).map(|_| ());
    let output = String::from_utf8(writer.into_inner()).unwrap();
    (result, output)
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn test_single_tutor_scenario_numbers() {
    let engine = PayoutEngine::new(PayoutPolicy::default());
    let tutors = vec![Tutor::new(
        "Alice",
        vec![Student::new("Bob", 39.0, 4, false).unwrap()],
    )];

    let report = engine.calculate(&tutors).unwrap();
    assert_close(report.summary.team_revenue, 156.0, 1e-9);
    assert_eq!(report.summary.team_hours, 4);
    assert_close(report.summary.after_fees, 151.176, 1e-9);
    assert_close(report.donations[0].amount, 3.7794, 1e-9);
    assert_close(report.summary.distributable, 143.6172, 1e-9);

    let alice = &report.payouts[0];
    assert_eq!(alice.gross, 143.62);
    assert!(!alice.management);
    assert_close(alice.net, 129.258, 1e-9);
    assert_close(report.summary.management_dividend, 14.362, 1e-9);

    assert_eq!(
        report.warnings,
        vec![PayoutWarning::ManagementRosterMismatch {
            expected: 1,
            found: 0
        }]
    );

    // The dividend has nobody to go to, so the books cannot balance
    assert!(matches!(
        engine.reconcile(&report),
        Err(PayoutError::Reconciliation { .. })
    ));
}

#[test]
fn test_console_run_with_unmatched_manager_reports_math_error() {
    let (result, output) = run_text(PayoutPolicy::default(), "1\nAlice\n1\nBob\nms\n4\n1\n");

    assert!(matches!(result, Err(PayoutError::Reconciliation { .. })));
    assert_eq!(
        output,
        format!(
            "ERROR: Management team size incorrect.\n\
             \tCheck for proper spelling of tutors' names.\n\
             {}\nThere has been a math error...\n",
            DIVIDER
        )
    );
    assert!(!output.contains("NET PAYOUTS"));
}

#[test]
fn test_console_run_with_management_team() {
    let input = "2\n\
                 Jarett 2\n\
                 Ryan hs 2 1\n\
                 Corey ms 2 1\n\
                 Keon 1\n\
                 Simon ms 2 1\n";
    let (result, output) = run_text(PayoutPolicy::default(), input);

    assert!(result.is_ok());
    let expected = format!(
        "{}\nNET PAYOUTS:\n\tJarett: $176.33\n\tKeon: $75.57\nDONATIONS:\n\
         \tNo Kid Hungry: $6.63 (2.5% donation)\n\
         \tNAACP Legal Defense Fund: $6.63 (2.5% donation)\n",
        DIVIDER
    );
    assert_eq!(output, expected);
}

#[test]
fn test_manager_name_matches_case_insensitively() {
    let engine = PayoutEngine::new(PayoutPolicy::default());
    let tutors = vec![
        Tutor::new("JARETT", vec![Student::new("Ryan", 59.0, 2, false).unwrap()]),
        Tutor::new("Paul", vec![Student::new("Camille", 100.0, 1, true).unwrap()]),
    ];

    let report = engine.compute(&tutors).unwrap();
    assert!(report.warnings.is_empty());
    assert!(report.payouts[0].management);

    let jarett = &report.payouts[0];
    let paul = &report.payouts[1];
    assert_close(jarett.net, jarett.gross + paul.gross * 0.10, 1e-9);
    assert_close(paul.net, paul.gross * 0.90, 1e-9);
}

#[test]
fn test_policy_file_changes_management_team() {
    let mut policy_file = NamedTempFile::new().unwrap();
    policy_file
        .write_all(b"[management]\nteam = [\"alice\"]\n")
        .unwrap();
    let policy = load_policy(Some(policy_file.path())).unwrap();

    let (result, output) = run_text(policy, "1 Alice 1 Bob ms 4 1");
    assert!(result.is_ok());
    assert!(!output.contains("ERROR"));
    assert!(output.contains("\tAlice: $143.62\n"));
    assert!(output.contains("\tNo Kid Hungry: $3.78 (2.5% donation)\n"));
}

#[test]
fn test_json_run() {
    let engine = PayoutEngine::new(PayoutPolicy::default());
    let mut intake = ConsoleIntake::new(
        Cursor::new(b"1 Jarett 1 Isabelle hs 2 2".to_vec()),
        Vec::new(),
        engine.policy().pricing.clone(),
    );
    let mut writer = JsonReportWriter::new(Vec::new());

    let report = engine.run(&mut intake, &mut writer).unwrap();
    assert_eq!(report.summary.team_revenue, 218.0);
    assert_eq!(report.summary.team_hours, 4);

    let value: serde_json::Value = serde_json::from_slice(&writer.into_inner()).unwrap();
    assert_eq!(value["payouts"][0]["name"], "Jarett");
    assert_eq!(value["payouts"][0]["hours"], 4);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_no_payments_is_a_computation_error() {
    let (result, output) = run_text(PayoutPolicy::default(), "1 Jarett 1 Ryan hs 0 1");
    assert!(matches!(result, Err(PayoutError::NoHoursWorked)));
    assert_eq!(output, format!("{}\nThere has been a math error...\n", DIVIDER));
}
