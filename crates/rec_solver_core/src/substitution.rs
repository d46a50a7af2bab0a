//! Substitution (guess-and-verify) method.
//!
//! The guess comes from the level-sum analysis; verification evaluates the
//! recurrence from `T(base) = 1` with `f(n)` modelled as `n^p·(ln n)^k` and
//! checks that `T(n)/g(n)` settles to a constant over the upper half of the
//! sampled sizes, sampling deeper when the work exponent sits close to
//! `log_b(a)`. The ratio is carried directly (never `T(n)` itself) so that
//! deep recursions stay inside `f64` range.

use rec_ast::{GrowthClass, Subproblem};

use crate::bound::{critical_exponent, decrease_bound, Bound, Regime, EPSILON};
use crate::master_theorem::{invalid_shape_message, unknown_work_message};
use crate::outcome::MethodOutcome;

const METHOD: &str = "Substitution Method";

/// Shallowest depth sampled for divide-and-conquer recurrences (`n = b^k`).
const DIVIDE_DEPTH: u32 = 4096;
/// Deepest level sampled when the exponents nearly meet.
const MAX_DIVIDE_DEPTH: u32 = 1 << 22;
/// `gap·ln b·k` reached at the deepest level; the residual geometric tail at
/// the start of the checked window is about `e^-(SETTLE/2)`.
const SETTLE: f64 = 16.0;
/// Number of `d`-steps sampled for decrease-and-conquer recurrences.
const DECREASE_STEPS: u32 = 1 << 16;
/// Allowed spread `max/min` of the ratios in the checked window.
const RATIO_BAND: f64 = 1.25;

/// `num(x) / den(y)` for bounds given `ln x` and `ln y` (`ln y > 0`).
fn cross_quotient(num: Bound, ln_x: f64, den: Bound, ln_y: f64) -> f64 {
    (num.power * ln_x - den.power * ln_y).exp() * ln_x.powi(num.log_power as i32)
        / ln_y.powi(den.log_power as i32)
}

/// Spread of `T(n)/g(n)` over the checked samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBand {
    pub low: f64,
    pub high: f64,
    pub samples: usize,
}

impl RatioBand {
    pub fn is_bounded(&self) -> bool {
        self.high / self.low <= RATIO_BAND
    }
}

/// Running band over the upper half of the sampled sizes.
#[derive(Debug, Default)]
struct RatioWindow {
    band: Option<RatioBand>,
    out_of_range: bool,
}

impl RatioWindow {
    fn push(&mut self, ratio: f64) {
        if !ratio.is_finite() || ratio <= 0.0 {
            self.out_of_range = true;
            return;
        }
        match &mut self.band {
            Some(band) => {
                band.low = band.low.min(ratio);
                band.high = band.high.max(ratio);
                band.samples += 1;
            }
            None => {
                self.band = Some(RatioBand {
                    low: ratio,
                    high: ratio,
                    samples: 1,
                })
            }
        }
    }

    fn finish(self) -> Option<RatioBand> {
        if self.out_of_range {
            None
        } else {
            self.band
        }
    }
}

/// Levels to sample for `T(n) = a·T(n/b) + f(n)`.
///
/// Away from case 2 the ratio converges geometrically at rate `b^-gap` per
/// level, with `gap = |log_b(a) - p|`, so small gaps need deeper trees.
pub fn divide_depth(a: u64, b: u64, work: Bound) -> u32 {
    let gap = (critical_exponent(a, b) - work.power).abs();
    if gap < EPSILON {
        return DIVIDE_DEPTH;
    }
    let levels = SETTLE / (gap * (b as f64).ln());
    if levels >= MAX_DIVIDE_DEPTH as f64 {
        MAX_DIVIDE_DEPTH
    } else {
        (levels.ceil() as u32).max(DIVIDE_DEPTH)
    }
}

/// Sample `T(b^k) = a·T(b^(k-1)) + f(b^k)` against the guess `g`.
///
/// Requires `a ≥ 1` and `b ≥ 2`.
pub fn check_divide(a: u64, b: u64, work: Bound, guess: Bound) -> Option<RatioBand> {
    let one = Bound::new(0.0, 0);
    let depth = divide_depth(a, b, work);
    let a = a as f64;
    let ln_b = (b as f64).ln();

    // k = 1: T(b) = a·T(1) + f(b)
    let mut ratio =
        a * cross_quotient(one, 0.0, guess, ln_b) + cross_quotient(work, ln_b, guess, ln_b);
    let mut window = RatioWindow::default();
    for k in 2..=depth {
        let ln_prev = (k - 1) as f64 * ln_b;
        let ln_n = k as f64 * ln_b;
        ratio = ratio * a * cross_quotient(guess, ln_prev, guess, ln_n)
            + cross_quotient(work, ln_n, guess, ln_n);
        if k >= depth / 2 {
            window.push(ratio);
        }
    }
    window.finish()
}

/// Sample `T(jd) = T((j-1)d) + f(jd)` against the guess `g`.
///
/// Requires `d ≥ 1`.
pub fn check_decrease(d: u64, work: Bound, guess: Bound) -> Option<RatioBand> {
    let one = Bound::new(0.0, 0);
    let ln_d = (d as f64).ln();
    let ln_2d = (2.0 * d as f64).ln();

    // j = 2: T(2d) = T(0) + f(d) + f(2d)
    let mut ratio = cross_quotient(one, 0.0, guess, ln_2d)
        + cross_quotient(work, ln_d, guess, ln_2d)
        + cross_quotient(work, ln_2d, guess, ln_2d);
    let mut window = RatioWindow::default();
    for j in 3..=DECREASE_STEPS {
        let ln_prev = ((j - 1) as f64).ln() + ln_d;
        let ln_n = (j as f64).ln() + ln_d;
        ratio = ratio * cross_quotient(guess, ln_prev, guess, ln_n)
            + cross_quotient(work, ln_n, guess, ln_n);
        if j >= DECREASE_STEPS / 2 {
            window.push(ratio);
        }
    }
    window.finish()
}

fn verdict(
    mut steps: Vec<String>,
    guess: Bound,
    band: Option<RatioBand>,
    sampled: String,
) -> MethodOutcome {
    match band {
        Some(band) if band.is_bounded() => {
            steps.push(format!(
                "Checked T(n)/g(n) over {} sizes {}: ratio stays within [{:.4}, {:.4}]",
                band.samples, sampled, band.low, band.high
            ));
            let solution = guess.theta();
            steps.push(format!("Guess verified: T(n) = {}", solution));
            MethodOutcome::solved(solution, steps)
        }
        Some(band) => {
            steps.push(format!(
                "Could not verify the guess: T(n)/g(n) drifts from {:.4} to {:.4} over sizes {}",
                band.low, band.high, sampled
            ));
            MethodOutcome::inapplicable(steps)
        }
        None => {
            steps.push(
                "Could not verify the guess: sampled values leave the representable range"
                    .to_string(),
            );
            MethodOutcome::inapplicable(steps)
        }
    }
}

/// Guess and verify a bound for `T(n) = a·T(n/b) + f(n)`.
pub fn solve_divide(a: u64, b: u64, work: &str, growth: GrowthClass) -> MethodOutcome {
    let mut steps = vec![format!(
        "Substitution on T(n) = {} + {}",
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

    let (_, guess) = Regime::classify(critical_exponent(a, b), work_bound);
    steps.push(format!("Guess: T(n) = Θ(g(n)) with g(n) = {}", guess));
    steps.push("Inductive hypothesis: c₁·g(m) ≤ T(m) ≤ c₂·g(m) for all m < n".to_string());
    steps.push(format!(
        "Substituting: T(n) = {}·T(n/{}) + f(n) between {}·c₁·g(n/{}) + f(n) and {}·c₂·g(n/{}) + f(n)",
        a, b, a, b, a, b
    ));

    let band = check_divide(a, b, work_bound, guess);
    verdict(steps, guess, band, format!("n = {}^k", b))
}

/// Guess and verify a bound for `T(n) = T(n-d) + f(n)`.
pub fn solve_decrease(d: u64, work: &str, growth: GrowthClass) -> MethodOutcome {
    let mut steps = vec![format!("Substitution on T(n) = T(n-{}) + {}", d, work)];

    if d == 0 {
        steps.push(format!(
            "{} requires a positive decrement (got d = 0).",
            METHOD
        ));
        return MethodOutcome::inapplicable(steps);
    }

    let Some(work_bound) = Bound::from_growth(growth) else {
        steps.push(unknown_work_message(METHOD, work));
        return MethodOutcome::inapplicable(steps);
    };

    let guess = decrease_bound(work_bound);
    steps.push(format!("Guess: T(n) = Θ(g(n)) with g(n) = {}", guess));
    steps.push("Inductive hypothesis: c₁·g(m) ≤ T(m) ≤ c₂·g(m) for all m < n".to_string());
    steps.push(format!(
        "Substituting: T(n) = T(n-{}) + f(n) with g(n) - g(n-{}) = Θ(f(n))",
        d, d
    ));

    let band = check_decrease(d, work_bound, guess);
    verdict(steps, guess, band, format!("n = {}·j", d))
}
