//! Asymptotic bounds of the form `n^p · log^k n` and the exponent comparison
//! shared by every divide-and-conquer method.

use std::cmp::Ordering;
use std::fmt;

use rec_ast::{GrowthCategory, GrowthClass};

/// Tolerance under which two exponents are considered equal.
pub const EPSILON: f64 = 1e-10;

/// Compare two exponents, treating values closer than [`EPSILON`] as equal.
pub fn compare_exponents(lhs: f64, rhs: f64) -> Ordering {
    if (lhs - rhs).abs() < EPSILON {
        Ordering::Equal
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// `log_b(a)`: exponent of the leaf count of a divide-and-conquer tree.
pub fn critical_exponent(a: u64, b: u64) -> f64 {
    (a as f64).ln() / (b as f64).ln()
}

/// Render an exponent: integers exactly, everything else with at most three
/// decimals.
pub fn format_exponent(x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() < EPSILON && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.3}", x);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `Θ(n^power · log^log_power n)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub power: f64,
    pub log_power: u32,
}

impl Bound {
    pub fn new(power: f64, log_power: u32) -> Self {
        Self { power, log_power }
    }

    pub fn polynomial(power: f64) -> Self {
        Self::new(power, 0)
    }

    /// Bound of a classified work term; `None` for unknown growth.
    pub fn from_growth(growth: GrowthClass) -> Option<Self> {
        let power = growth.power();
        match growth.category {
            GrowthCategory::Constant => Some(Self::new(0.0, 0)),
            GrowthCategory::Logarithmic => Some(Self::new(0.0, 1)),
            GrowthCategory::Polynomial => Some(Self::new(power, 0)),
            GrowthCategory::PolynomialLog => Some(Self::new(power, 1)),
            GrowthCategory::Unknown => None,
        }
    }

    /// `Θ(...)` notation for this bound.
    pub fn theta(&self) -> String {
        format!("Θ({})", self)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let poly = if self.power.abs() < EPSILON {
            None
        } else if (self.power - 1.0).abs() < EPSILON {
            Some("n".to_string())
        } else {
            Some(format!("n^{}", format_exponent(self.power)))
        };
        let log = match self.log_power {
            0 => None,
            1 => Some("log n".to_string()),
            k => Some(format!("log^{} n", k)),
        };
        match (poly, log) {
            (None, None) => write!(f, "1"),
            (Some(p), None) => write!(f, "{}", p),
            (None, Some(l)) => write!(f, "{}", l),
            (Some(p), Some(l)) => write!(f, "{} {}", p, l),
        }
    }
}

/// Which part of a divide-and-conquer recursion tree dominates the total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Work grows geometrically towards the leaves (Master Theorem case 1).
    LeavesDominate,
    /// Every level costs the same (case 2).
    Balanced,
    /// Work shrinks geometrically from the root (case 3).
    RootDominates,
}

impl Regime {
    /// Decide the regime and resulting bound from `log_b(a)` and the work bound.
    pub fn classify(critical: f64, work: Bound) -> (Self, Bound) {
        match compare_exponents(critical, work.power) {
            Ordering::Greater => (Regime::LeavesDominate, Bound::polynomial(critical)),
            Ordering::Equal => (
                Regime::Balanced,
                Bound::new(critical, work.log_power + 1),
            ),
            Ordering::Less => (Regime::RootDominates, work),
        }
    }

    pub fn case_number(&self) -> u8 {
        match self {
            Regime::LeavesDominate => 1,
            Regime::Balanced => 2,
            Regime::RootDominates => 3,
        }
    }
}

/// Bound of `T(n) = T(n-d) + f(n)`: `n/d` terms of `f`.
pub fn decrease_bound(work: Bound) -> Bound {
    Bound::new(work.power + 1.0, work.log_power)
}
