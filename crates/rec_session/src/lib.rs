//! Solver session: owns one recurrence, its base cases and the step log.

mod session;

pub use session::SolverSession;
