use proptest::prelude::*;
use rec_ast::{MethodHint, RecurrenceKind, SolveMethod, Subproblem};
use rec_formatter::format_solution;
use rec_session::SolverSession;

fn solved(text: &str, hint: Option<MethodHint>) -> SolverSession {
    let mut session = SolverSession::new();
    assert!(session.parse(text).is_some(), "parse failed: {}", text);
    session.solve(hint);
    session
}

#[test]
fn merge_sort_is_solved_by_the_master_theorem() {
    let session = solved("T(n) = 2T(n/2) + n", None);
    assert_eq!(session.solution(), Some("Θ(n log n)"));
    assert_eq!(session.asymptotic_notation(), Some("Θ(n log n)"));
    assert_eq!(session.method(), Some(SolveMethod::MasterTheorem));
    assert_eq!(
        session.recurrence().map(|r| r.kind()),
        Some(RecurrenceKind::DivideAndConquer)
    );
}

#[test]
fn two_subproblem_recurrence_uses_iterative_expansion() {
    let session = solved("T(n) = T(n/2) + T(n/6) + n*log(n)", Some(MethodHint::Master));
    match session.recurrence() {
        Some(rec_ast::RecurrenceSpec::ComplexDivideAndConquer { subproblems, f }) => {
            assert_eq!(subproblems, &[Subproblem::new(1, 2), Subproblem::new(1, 6)]);
            assert_eq!(f, "n*log(n)");
        }
        other => panic!("unexpected parse: {:?}", other),
    }
    assert_eq!(session.solution(), Some("Θ(n^1)"));
    assert_eq!(session.method(), Some(SolveMethod::IterativeExpansion));
    let steps = session.steps();
    assert!(steps.contains(&"Total coefficient sum: 2".to_string()));
    assert!(steps.contains(&"Maximum log ratio: 1".to_string()));
}

#[test]
fn decrease_by_one_by_iteration_is_linear() {
    let session = solved("T(n) = T(n-1) + 1", Some(MethodHint::Iteration));
    assert_eq!(session.solution(), Some("Θ(n)"));
    assert_eq!(session.method(), Some(SolveMethod::Iteration));
}

#[test]
fn garbage_input_fails_with_a_recorded_reason() {
    let mut session = SolverSession::new();
    assert!(session.parse("banana").is_none());
    assert_eq!(
        session.steps().last().map(String::as_str),
        Some("Failed to parse the recurrence relation.")
    );
    assert_eq!(session.solve(None), None);
}

#[test]
fn substitution_hint_verifies_the_guess() {
    let session = solved("T(n) = 8T(n/2) + n^2", Some(MethodHint::Substitution));
    assert_eq!(session.solution(), Some("Θ(n³)"));
    assert_eq!(session.asymptotic_notation(), Some("Θ(n^3)"));
    assert_eq!(session.method(), Some(SolveMethod::Substitution));
}

#[test]
fn step_log_ends_with_formatting() {
    let session = solved("T(n) = 4T(n/2) + n", None);
    let steps = session.steps();
    let n = steps.len();
    assert!(steps[n - 3].starts_with("Solution found in "));
    assert_eq!(steps[n - 2], "Formatting solution: Θ(n^2)");
    assert_eq!(steps[n - 1], "Formatted solution: Θ(n²)");
}

#[test]
fn complex_recurrence_without_work_cannot_be_determined() {
    let session = solved("T(n) = 2T(n/2) + T(n/3)", None);
    assert_eq!(
        session.solution(),
        Some("Cannot determine asymptotic behavior for complex recurrence")
    );
}

#[test]
fn divisor_of_one_exhausts_every_method() {
    let mut session = SolverSession::new();
    session.parse("T(n) = 2T(n/1) + n");
    assert_eq!(session.solve(None), None);
    let steps = session.steps();
    assert!(steps.iter().any(|s| s.starts_with("Master Theorem requires")));
    assert!(steps.iter().any(|s| s.starts_with("Iteration Method requires")));
    assert!(steps.iter().any(|s| s.starts_with("Substitution Method requires")));
}

fn work_term(p: u32) -> String {
    match p {
        0 => "1".to_string(),
        1 => "n".to_string(),
        p => format!("n^{}", p),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn display_solution_is_the_formatted_raw_form(
        a in 1u64..32,
        b in 2u64..10,
        p in 0u32..4,
    ) {
        let text = format!("T(n) = {}T(n/{}) + {}", a, b, work_term(p));
        let session = solved(&text, None);
        let raw = session.asymptotic_notation().unwrap_or_default().to_string();
        let display = session.solution().unwrap_or_default().to_string();
        prop_assert!(display.starts_with("Θ("), "{}", display);
        prop_assert_eq!(format_solution(&raw), display.clone());
        prop_assert_eq!(format_solution(&display), display);
    }

    #[test]
    fn every_hint_reaches_the_same_class(
        a in 1u64..32,
        b in 2u64..10,
        p in 0u32..4,
    ) {
        let text = format!("T(n) = {}T(n/{}) + {}", a, b, work_term(p));
        let auto = solved(&text, None);
        for hint in [MethodHint::Iteration, MethodHint::Substitution] {
            let hinted = solved(&text, Some(hint));
            prop_assert_eq!(hinted.solution(), auto.solution(), "{:?} on {}", hint, text);
        }
    }
}
