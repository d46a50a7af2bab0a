//! Iteration (unrolling) method.
//!
//! The recurrence is expanded level by level until the base case and the
//! resulting sum is bounded:
//!
//! - divide-and-conquer: `T(n) = a^k·T(n/b^k) + Σ a^i·f(n/b^i)` down to depth
//!   `log_b n`; the per-level ratio `a/b^p` decides whether the sum is led by
//!   the leaves, spread evenly, or led by the root.
//! - decrease-and-conquer: `T(n) = T(n - k·d) + Σ f(n - i·d)` over `n/d`
//!   levels, so the sum is `n/d` terms of at most `f(n)`.

use rec_ast::{GrowthClass, Subproblem};

use crate::bound::{critical_exponent, decrease_bound, format_exponent, Bound, Regime};
use crate::master_theorem::{invalid_shape_message, unknown_work_message};
use crate::outcome::MethodOutcome;

const METHOD: &str = "Iteration Method";

fn regime_message(regime: Regime, ratio: f64) -> String {
    match regime {
        Regime::LeavesDominate => format!(
            "Per-level ratio a/b^p = {:.4} > 1: level costs grow geometrically and the leaves dominate",
            ratio
        ),
        Regime::Balanced => {
            "Per-level ratio a/b^p = 1: all log_b n levels cost the same".to_string()
        }
        Regime::RootDominates => format!(
            "Per-level ratio a/b^p = {:.4} < 1: level costs shrink geometrically and the root dominates",
            ratio
        ),
    }
}

/// Unroll `T(n) = a·T(n/b) + f(n)`.
pub fn solve_divide(a: u64, b: u64, work: &str, growth: GrowthClass) -> MethodOutcome {
    let mut steps = vec![format!(
        "Unrolling T(n) = {} + {}",
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
        "After k expansions: T(n) = {a}^k·T(n/{b}^k) + Σ_{{i=0}}^{{k-1}} {a}^i·f(n/{b}^i)"
    ));
    steps.push(format!(
        "The base case is reached at depth k = log_{} n, leaving {}^(log_{} n) = {} leaves",
        b,
        a,
        b,
        Bound::polynomial(critical)
    ));
    steps.push(format!(
        "Level i costs {}^i·f(n/{}^i) = Θ({})·({}/{}^{})^i",
        a,
        b,
        work_bound,
        a,
        b,
        format_exponent(work_bound.power)
    ));

    let ratio = a as f64 / (b as f64).powf(work_bound.power);
    let (regime, bound) = Regime::classify(critical, work_bound);
    steps.push(regime_message(regime, ratio));

    let solution = bound.theta();
    steps.push(format!("Summing all levels: T(n) = {}", solution));
    MethodOutcome::solved(solution, steps)
}

/// Unroll `T(n) = T(n-d) + f(n)`.
pub fn solve_decrease(d: u64, work: &str, growth: GrowthClass) -> MethodOutcome {
    let mut steps = vec![format!("Unrolling T(n) = T(n-{}) + {}", d, work)];

    if d == 0 {
        steps.push(format!(
            "{} requires a positive decrement (got d = 0): the recursion never reaches a base case.",
            METHOD
        ));
        return MethodOutcome::inapplicable(steps);
    }

    let Some(work_bound) = Bound::from_growth(growth) else {
        steps.push(unknown_work_message(METHOD, work));
        return MethodOutcome::inapplicable(steps);
    };

    steps.push(format!(
        "After k expansions: T(n) = T(n-{d}·k) + Σ_{{i=0}}^{{k-1}} f(n-{d}·i)"
    ));
    steps.push(format!(
        "The base case is reached after k = n/{} expansions",
        d
    ));
    let bound = decrease_bound(work_bound);
    steps.push(format!(
        "The sum has n/{} terms, each at most f(n) = Θ({}), and half of them at least f(n/2)",
        d, work_bound
    ));

    let solution = bound.theta();
    steps.push(format!("Summing all levels: T(n) = {}", solution));
    MethodOutcome::solved(solution, steps)
}
