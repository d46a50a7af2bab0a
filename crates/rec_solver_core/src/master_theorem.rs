//! Master Theorem for `T(n) = a·T(n/b) + f(n)`.

use rec_ast::{GrowthClass, Subproblem};

use crate::bound::{critical_exponent, format_exponent, Bound, Regime};
use crate::outcome::MethodOutcome;

/// Narration for a recursion shape no divide-and-conquer method can handle.
/// Returns `None` when `a ≥ 1` and `b ≥ 2`.
pub(crate) fn invalid_shape_message(method: &str, a: u64, b: u64) -> Option<String> {
    if a >= 1 && b >= 2 {
        None
    } else {
        Some(format!(
            "{} requires a ≥ 1 and b > 1 (got a = {}, b = {}).",
            method, a, b
        ))
    }
}

/// Narration for a work term that could not be classified.
pub(crate) fn unknown_work_message(method: &str, work: &str) -> String {
    format!(
        "Cannot classify the growth of f(n) = {}; {} does not apply.",
        work, method
    )
}

/// Build narration for the case selected by the comparison.
pub fn case_message(regime: Regime, critical: f64, work_bound: Bound) -> String {
    let leaves = Bound::polynomial(critical);
    match regime {
        Regime::LeavesDominate => format!(
            "Case 1: f(n) = Θ({}) grows polynomially slower than n^log_b(a) = {}",
            work_bound, leaves
        ),
        Regime::Balanced => format!(
            "Case 2: f(n) = Θ({}) matches n^log_b(a) = {} up to log factors",
            work_bound, leaves
        ),
        Regime::RootDominates => format!(
            "Case 3: f(n) = Θ({}) grows polynomially faster than n^log_b(a) = {}",
            work_bound, leaves
        ),
    }
}

/// Apply the Master Theorem.
///
/// Applicable when `a ≥ 1`, `b ≥ 2` and the work term has a known growth
/// class; the work term is read as `n^p · log^k n` with `k ∈ {0, 1}`.
pub fn solve(a: u64, b: u64, work: &str, growth: GrowthClass) -> MethodOutcome {
    const METHOD: &str = "Master Theorem";

    let mut steps = vec![format!(
        "Applying Master Theorem to T(n) = {} + {}",
        Subproblem::new(a, b),
        work
    )];

    if let Some(msg) = invalid_shape_message(METHOD, a, b) {
        steps.push(msg);
        return MethodOutcome::inapplicable(steps);
    }

    let Some(work_bound) = Bound::from_growth(growth) else {
        steps.push(unknown_work_message(METHOD, work));
        return MethodOutcome::inapplicable(steps);
    };

    let critical = critical_exponent(a, b);
    steps.push(format!(
        "Critical exponent: log_{}({}) = {}",
        b,
        a,
        format_exponent(critical)
    ));
    steps.push(format!("f(n) = {} is Θ({})", work, work_bound));

    let (regime, bound) = Regime::classify(critical, work_bound);
    steps.push(case_message(regime, critical, work_bound));

    if regime == Regime::RootDominates {
        // a·f(n/b) ≤ c·f(n) with c = a / b^p
        let c = a as f64 / (b as f64).powf(work_bound.power);
        let relation = if c < 1.0 {
            "<"
        } else if c > 1.0 {
            ">"
        } else {
            "="
        };
        steps.push(format!(
            "Regularity condition: a·f(n/b) ≤ c·f(n) with c = {}/{}^{} = {} {} 1",
            a,
            b,
            format_exponent(work_bound.power),
            c,
            relation
        ));
    }

    let solution = bound.theta();
    steps.push(format!("Therefore T(n) = {}", solution));
    MethodOutcome::solved(solution, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sort_is_case_two() {
        let out = solve(2, 2, "n", GrowthClass::polynomial(1.0));
        assert_eq!(out.solution.as_deref(), Some("Θ(n log n)"));
        assert!(out.steps.iter().any(|s| s.starts_with("Case 2")));
    }

    #[test]
    fn leaves_dominate_is_case_one() {
        let out = solve(8, 2, "n^2", GrowthClass::polynomial(2.0));
        assert_eq!(out.solution.as_deref(), Some("Θ(n^3)"));
        assert!(out.steps.iter().any(|s| s.starts_with("Case 1")));
    }

    #[test]
    fn root_dominates_is_case_three_with_regularity() {
        let out = solve(2, 2, "n^2", GrowthClass::polynomial(2.0));
        assert_eq!(out.solution.as_deref(), Some("Θ(n^2)"));
        assert!(out
            .steps
            .iter()
            .any(|s| s.starts_with("Regularity condition")));
    }

    #[test]
    fn regularity_constant_is_printed_exactly_near_the_boundary() {
        // log_2(3) = 1.5849625007...
        let out = solve(3, 2, "n^1.5849626", GrowthClass::polynomial(1.5849626));
        let regularity = out
            .steps
            .iter()
            .find(|s| s.starts_with("Regularity condition"))
            .unwrap();
        assert!(regularity.ends_with(" < 1"), "{}", regularity);
        assert!(regularity.contains("= 0.99999"), "{}", regularity);
    }

    #[test]
    fn binary_search_gives_log() {
        let out = solve(1, 2, "1", GrowthClass::constant());
        assert_eq!(out.solution.as_deref(), Some("Θ(log n)"));
    }

    #[test]
    fn log_work_in_balanced_case_gains_a_log_factor() {
        let out = solve(1, 2, "log n", GrowthClass::logarithmic());
        assert_eq!(out.solution.as_deref(), Some("Θ(log^2 n)"));

        let out = solve(2, 2, "n^1 log n", GrowthClass::polynomial_log(1.0));
        assert_eq!(out.solution.as_deref(), Some("Θ(n log^2 n)"));
    }

    #[test]
    fn fractional_critical_exponent() {
        let out = solve(3, 2, "n", GrowthClass::polynomial(1.0));
        assert_eq!(out.solution.as_deref(), Some("Θ(n^1.585)"));
    }

    #[test]
    fn degenerate_divisor_is_inapplicable() {
        let out = solve(2, 1, "n", GrowthClass::polynomial(1.0));
        assert!(out.solution.is_none());
        assert!(out.steps.last().unwrap().contains("requires a ≥ 1 and b > 1"));
    }

    #[test]
    fn unknown_work_is_inapplicable() {
        let out = solve(2, 2, "2^n", GrowthClass::unknown());
        assert!(!out.is_solved());
        assert!(out.steps.last().unwrap().starts_with("Cannot classify"));
    }
}
