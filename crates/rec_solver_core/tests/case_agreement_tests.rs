use proptest::prelude::*;
use rec_ast::{GrowthClass, Subproblem};
use rec_solver_core::{iteration, iterative_expansion, master_theorem, substitution};

fn case_of(steps: &[String]) -> Option<u8> {
    steps.iter().find_map(|s| match s.get(..6) {
        Some("Case 1") => Some(1),
        Some("Case 2") => Some(2),
        Some("Case 3") => Some(3),
        _ => None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // With one subproblem the pooled exponent is log_b(a), so the complex
    // path's polynomial rows must pick the same case as the Master Theorem.
    #[test]
    fn single_subproblem_expansion_agrees_with_master(
        a in 1u64..64,
        b in 2u64..16,
        p in 0u32..5,
    ) {
        let growth = GrowthClass::polynomial(p as f64);
        let master = master_theorem::solve(a, b, "f", growth);
        let case = case_of(&master.steps);
        prop_assert!(case.is_some());

        let expanded = iterative_expansion::solve(&[Subproblem::new(a, b)], growth);
        let solution = expanded.solution.unwrap_or_default();
        match case {
            Some(2) => prop_assert!(solution.ends_with(" log n)"), "{}", solution),
            Some(3) => prop_assert_eq!(solution, format!("Θ(n^{})", p)),
            _ => prop_assert!(!solution.contains("log"), "{}", solution),
        }
    }

    #[test]
    fn iteration_agrees_with_master(
        a in 1u64..64,
        b in 2u64..16,
        p in 0u32..5,
        logged in any::<bool>(),
    ) {
        let growth = if logged {
            GrowthClass::polynomial_log(p as f64)
        } else {
            GrowthClass::polynomial(p as f64)
        };
        let master = master_theorem::solve(a, b, "f", growth);
        let unrolled = iteration::solve_divide(a, b, "f", growth);
        prop_assert_eq!(master.solution, unrolled.solution);
    }
}

#[test]
fn substitution_confirms_master_on_textbook_recurrences() {
    let cases = [
        (2, 2, GrowthClass::polynomial(1.0)),
        (4, 2, GrowthClass::polynomial(1.0)),
        (7, 2, GrowthClass::polynomial(2.0)),
        (3, 4, GrowthClass::polynomial_log(1.0)),
        (1, 3, GrowthClass::constant()),
    ];
    for (a, b, growth) in cases {
        let master = master_theorem::solve(a, b, "f", growth);
        let verified = substitution::solve_divide(a, b, "f", growth);
        assert_eq!(master.solution, verified.solution, "a={} b={}", a, b);
    }
}
