//! Solving kernels for recurrence relations.
//!
//! Each kernel takes an already-parsed recurrence plus the growth class of its
//! work term and returns a [`MethodOutcome`]: the raw asymptotic solution (if
//! the method applies) and the narration of how it got there. Kernels never
//! format for display and never touch session state.

pub mod bound;
pub mod iteration;
pub mod iterative_expansion;
pub mod master_theorem;
pub mod outcome;
pub mod substitution;

pub use bound::{
    compare_exponents, critical_exponent, decrease_bound, format_exponent, Bound, Regime, EPSILON,
};
pub use outcome::MethodOutcome;
