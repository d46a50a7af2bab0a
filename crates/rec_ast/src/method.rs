use std::fmt;
use std::str::FromStr;

use crate::error::MethodHintError;

/// Analytical method that produced a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMethod {
    MasterTheorem,
    Iteration,
    Substitution,
    /// Level-sum analysis used for multi-term divide-and-conquer.
    IterativeExpansion,
}

impl SolveMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SolveMethod::MasterTheorem => "Master Theorem",
            SolveMethod::Iteration => "Iteration Method",
            SolveMethod::Substitution => "Substitution Method",
            SolveMethod::IterativeExpansion => "Iterative Expansion",
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller preference for the method used on simple recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodHint {
    Master,
    Substitution,
    Iteration,
}

impl MethodHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodHint::Master => "master",
            MethodHint::Substitution => "substitution",
            MethodHint::Iteration => "iteration",
        }
    }

    /// Parse a hint where `auto` (or an empty string) means no preference.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, MethodHintError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for MethodHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodHint {
    type Err = MethodHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "master" | "master theorem" | "master-theorem" => Ok(MethodHint::Master),
            "substitution" | "subst" => Ok(MethodHint::Substitution),
            "iteration" | "iterative" => Ok(MethodHint::Iteration),
            "characteristic" | "characteristic equation" => {
                Err(MethodHintError::Unsupported(s.trim().to_string()))
            }
            _ => Err(MethodHintError::Unknown(s.trim().to_string())),
        }
    }
}
