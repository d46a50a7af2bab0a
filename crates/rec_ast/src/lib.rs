//! Data model shared by the recurrence parser, solver kernels and session.

pub mod base_cases;
pub mod error;
pub mod growth;
pub mod method;
pub mod recurrence;

pub use base_cases::BaseCases;
pub use error::MethodHintError;
pub use growth::{GrowthCategory, GrowthClass};
pub use method::{MethodHint, SolveMethod};
pub use recurrence::{RecurrenceKind, RecurrenceSpec, Subproblem};

/// Residual text recorded when a recurrence has no work term.
pub const ZERO_WORK: &str = "0";
