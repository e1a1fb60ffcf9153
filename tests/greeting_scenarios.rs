//! Integration tests for the greeting and adder tables.
//!
//! These pin down the concrete scenarios the harness exists for: each built-in table passes against the real subject,
//! and the constant-greeting mutant fails exactly the rows that depend on the inputs.

use casebook::catalog::{adder_suite, constant_greeting, hello_suite, sham_add};
use casebook::harness::{CaseRunner, RunConfig, Suite, check};
use casebook_subjects::{GreetingTable, add, hello};

#[test]
fn greeting_scenarios_pass() {
    let outcomes = CaseRunner::new().run_all(&hello, hello_suite().expect("hello suite"));

    let summary: Vec<(&str, bool)> = outcomes.iter().map(|o| (o.case.name(), o.is_passed())).collect();
    assert_eq!(
        summary,
        vec![
            ("saying hello to people", true),
            ("say hello to empty string", true),
            ("in Spanish", true),
            ("in French", true),
        ]
    );
}

#[test]
fn constant_greeting_mutant_fails_input_dependent_rows() {
    let outcomes = CaseRunner::new().run_all(&constant_greeting, hello_suite().expect("hello suite"));

    let passed: Vec<bool> = outcomes.iter().map(|o| o.is_passed()).collect();
    assert_eq!(passed, vec![false, true, false, false]);

    let messages: Vec<&str> = outcomes.iter().map(|o| o.result.message()).collect();
    assert_eq!(messages[0], r#"saying hello to people: got "Hello, World" want "Hello, Max""#);
    assert_eq!(messages[1], "");
    assert_eq!(messages[2], r#"in Spanish: got "Hello, World" want "Hola, Elodie""#);
    assert_eq!(messages[3], r#"in French: got "Hello, World" want "Bonjour, James""#);
}

#[test]
fn adder_scenarios_pass() {
    let outcomes = CaseRunner::new().run_all(&add, adder_suite().expect("adder suite"));
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.is_passed()));
    let expected: Vec<i64> = outcomes.iter().map(|o| *o.case.expected()).collect();
    assert_eq!(expected, vec![4, 8, 10]);
}

#[test]
fn sham_adder_only_satisfies_two_plus_two() {
    let outcomes = CaseRunner::new().run_all(&sham_add, adder_suite().expect("adder suite"));
    let passed: Vec<bool> = outcomes.iter().map(|o| o.is_passed()).collect();
    assert_eq!(passed, vec![true, false, false]);
    assert_eq!(outcomes[1].result.message(), "5 + 3: got 4 want 8");
}

#[test]
fn parallel_run_reports_in_table_order() {
    let runner = CaseRunner::with_config(RunConfig::new().with_parallel(true).with_threads(2));
    let outcomes = runner.run_all(&constant_greeting, hello_suite().expect("hello suite"));
    let names: Vec<&str> = outcomes.iter().map(|o| o.case.name()).collect();
    assert_eq!(
        names,
        vec!["saying hello to people", "say hello to empty string", "in Spanish", "in French"]
    );
}

#[test]
fn custom_greeting_table_as_subject() {
    let table = GreetingTable::new().with_language("German", "Hallo");
    let greet = |name: &'static str, language: &'static str| table.greet(name, language);

    let suite: Suite<(&'static str, &'static str), String> = Suite::builder("german")
        .case("in German", ("Ada", "German"), "Hallo, Ada")
        .case("still English", ("Ada", "English"), "Hello, Ada")
        .build()
        .expect("german suite");

    let outcomes = CaseRunner::new().run_all(&greet, suite);
    assert!(outcomes.iter().all(|o| o.is_passed()));
}

#[test]
fn assertion_core_works_with_question_mark() -> Result<(), casebook::harness::ValueMismatch> {
    check(hello("Max", "English"), "Hello, Max".to_string(), "plain test").into_result()?;
    check(add(2, 2), 4, "plain test").into_result()?;
    Ok(())
}
