//! Iterative expansion for recurrences with several recursive calls,
//! `T(n) = a₁T(n/b₁) + … + aₘT(n/bₘ) + f(n)`.
//!
//! The analysis is a heuristic: the coefficients are pooled into
//! `A = Σ aᵢ` and each divisor yields the exponent `ln A / ln bᵢ`. The largest
//! of these stands in for the leaf exponent and is compared against the
//! growth of `f(n)`. Exponents are rendered in shortest `f64` form, so an
//! exponent of one prints as `n^1`.

use rec_ast::{GrowthCategory, GrowthClass, Subproblem};

use crate::bound::EPSILON;
use crate::outcome::MethodOutcome;

pub const UNDETERMINED: &str = "Cannot determine asymptotic behavior for complex recurrence";

fn join_ratios(ratios: &[f64]) -> String {
    let items: Vec<String> = ratios.iter().map(|r| r.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Pick the solution from the pooled leaf exponent and the work growth.
pub fn decide(max_ratio: f64, growth: GrowthClass) -> String {
    let power = growth.power();
    match growth.category {
        GrowthCategory::Polynomial => {
            if (max_ratio - power).abs() < EPSILON {
                format!("Θ(n^{} log n)", power)
            } else if max_ratio > power {
                format!("Θ(n^{})", max_ratio)
            } else {
                format!("Θ(n^{})", power)
            }
        }
        GrowthCategory::Logarithmic if max_ratio > 0.0 => format!("Θ(n^{})", max_ratio),
        GrowthCategory::Logarithmic => "Θ(log n)".to_string(),
        GrowthCategory::Constant if max_ratio > 0.0 => format!("Θ(n^{})", max_ratio),
        GrowthCategory::Constant => "Θ(1)".to_string(),
        GrowthCategory::PolynomialLog if max_ratio >= power => format!("Θ(n^{})", max_ratio),
        GrowthCategory::PolynomialLog => format!("Θ(n^{} log n)", power),
        GrowthCategory::Unknown => UNDETERMINED.to_string(),
    }
}

/// Expand a recurrence with several recursive calls.
///
/// Divisors of 0 or 1 are not rejected; they flow through the logarithms
/// with IEEE semantics (infinite or NaN ratios).
pub fn solve(subproblems: &[Subproblem], growth: GrowthClass) -> MethodOutcome {
    let mut steps = vec![
        format!(
            "Complex divide and conquer recurrence detected with {} subproblems.",
            subproblems.len()
        ),
        "Using iterative expansion to analyze the solution.".to_string(),
    ];

    let Some(min_b) = subproblems.iter().map(|s| s.b).min() else {
        steps.push(UNDETERMINED.to_string());
        return MethodOutcome::inapplicable(steps);
    };
    let total_a: u64 = subproblems.iter().map(|s| s.a).fold(0, u64::saturating_add);
    steps.push(format!("Total coefficient sum: {}", total_a));
    steps.push(format!("Minimum divisor: {}", min_b));

    let ln_total = (total_a as f64).ln();
    let ratios: Vec<f64> = subproblems
        .iter()
        .map(|s| ln_total / (s.b as f64).ln())
        .collect();
    let max_ratio = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    steps.push(format!("Log ratios for subproblems: {}", join_ratios(&ratios)));
    steps.push(format!("Maximum log ratio: {}", max_ratio));

    let solution = decide(max_ratio, growth);
    steps.push(format!("Therefore T(n) = {}", solution));
    MethodOutcome::solved(solution, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_unequal_halves_with_n_log_n_work() {
        let subs = [Subproblem::new(1, 2), Subproblem::new(1, 6)];
        let out = solve(&subs, GrowthClass::logarithmic());
        assert_eq!(out.solution.as_deref(), Some("Θ(n^1)"));
        assert!(out.steps.contains(&"Total coefficient sum: 2".to_string()));
        assert!(out.steps.contains(&"Minimum divisor: 2".to_string()));
        assert!(out.steps.contains(&"Maximum log ratio: 1".to_string()));
    }

    #[test]
    fn polynomial_rows() {
        assert_eq!(decide(1.0, GrowthClass::polynomial(1.0)), "Θ(n^1 log n)");
        assert_eq!(decide(2.0, GrowthClass::polynomial(1.0)), "Θ(n^2)");
        assert_eq!(decide(1.0, GrowthClass::polynomial(2.5)), "Θ(n^2.5)");
    }

    #[test]
    fn constant_and_log_rows() {
        assert_eq!(decide(0.0, GrowthClass::constant()), "Θ(1)");
        assert_eq!(decide(0.0, GrowthClass::logarithmic()), "Θ(log n)");
        assert_eq!(decide(1.5, GrowthClass::constant()), "Θ(n^1.5)");
    }

    #[test]
    fn polynomial_log_rows() {
        assert_eq!(decide(2.0, GrowthClass::polynomial_log(2.0)), "Θ(n^2)");
        assert_eq!(decide(1.0, GrowthClass::polynomial_log(2.0)), "Θ(n^2 log n)");
    }

    #[test]
    fn unknown_work_is_reported_as_the_solution() {
        let subs = [Subproblem::new(2, 2), Subproblem::new(1, 3)];
        let out = solve(&subs, GrowthClass::unknown());
        assert_eq!(out.solution.as_deref(), Some(UNDETERMINED));
    }

    #[test]
    fn pooled_coefficients_raise_the_exponent() {
        // A = 4, ratio 2
        let subs = [Subproblem::new(2, 2), Subproblem::new(2, 2)];
        let out = solve(&subs, GrowthClass::constant());
        assert_eq!(out.solution.as_deref(), Some("Θ(n^2)"));
    }

    #[test]
    fn unit_divisor_does_not_panic() {
        let subs = [Subproblem::new(1, 1), Subproblem::new(1, 2)];
        let out = solve(&subs, GrowthClass::polynomial(1.0));
        assert!(out.is_solved());
        assert!(out.steps.iter().any(|s| s.contains("inf")));
    }
}
