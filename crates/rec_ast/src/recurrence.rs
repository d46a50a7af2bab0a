use std::fmt;

/// One `a·T(n/b)` term of a divide-and-conquer recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subproblem {
    /// Number of recursive calls (coefficient).
    pub a: u64,
    /// Size divisor.
    pub b: u64,
}

impl Subproblem {
    pub fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Subproblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1 {
            write!(f, "T(n/{})", self.b)
        } else {
            write!(f, "{}T(n/{})", self.a, self.b)
        }
    }
}

/// Structural shape of a parsed recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceKind {
    DivideAndConquer,
    DecreaseAndConquer,
    ComplexDivideAndConquer,
}

impl RecurrenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::DivideAndConquer => "divide_and_conquer",
            RecurrenceKind::DecreaseAndConquer => "decrease_and_conquer",
            RecurrenceKind::ComplexDivideAndConquer => "complex_divide_and_conquer",
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurrence relation recognised by the parser.
///
/// `f` always holds the residual work term as entered (trimmed). The complex
/// shape stores [`crate::ZERO_WORK`] when no residual follows the recursive
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceSpec {
    /// `T(n) = a·T(n/b) + f(n)`
    DivideAndConquer { a: u64, b: u64, f: String },
    /// `T(n) = T(n-d) + f(n)`
    DecreaseAndConquer { d: u64, f: String },
    /// `T(n) = Σ aᵢ·T(n/bᵢ) + f(n)`
    ComplexDivideAndConquer {
        subproblems: Vec<Subproblem>,
        f: String,
    },
}

impl RecurrenceSpec {
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            RecurrenceSpec::DivideAndConquer { .. } => RecurrenceKind::DivideAndConquer,
            RecurrenceSpec::DecreaseAndConquer { .. } => RecurrenceKind::DecreaseAndConquer,
            RecurrenceSpec::ComplexDivideAndConquer { .. } => {
                RecurrenceKind::ComplexDivideAndConquer
            }
        }
    }

    /// Residual work term `f(n)`.
    pub fn work(&self) -> &str {
        match self {
            RecurrenceSpec::DivideAndConquer { f, .. }
            | RecurrenceSpec::DecreaseAndConquer { f, .. }
            | RecurrenceSpec::ComplexDivideAndConquer { f, .. } => f,
        }
    }

    pub fn is_divide_and_conquer(&self) -> bool {
        matches!(self, RecurrenceSpec::DivideAndConquer { .. })
    }
}

impl fmt::Display for RecurrenceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceSpec::DivideAndConquer { a, b, f: work } => {
                write!(f, "T(n) = {} + {}", Subproblem::new(*a, *b), work)
            }
            RecurrenceSpec::DecreaseAndConquer { d, f: work } => {
                write!(f, "T(n) = T(n-{}) + {}", d, work)
            }
            RecurrenceSpec::ComplexDivideAndConquer { subproblems, f: work } => {
                write!(f, "T(n) = ")?;
                for (i, sub) in subproblems.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", sub)?;
                }
                // A lone call followed by "+ f" would read back as the simple shape.
                if work != crate::ZERO_WORK {
                    let sep = if subproblems.len() == 1 { " " } else { " + " };
                    write!(f, "{}{}", sep, work)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_unit_coefficient() {
        let spec = RecurrenceSpec::DivideAndConquer {
            a: 1,
            b: 2,
            f: "1".to_string(),
        };
        assert_eq!(spec.to_string(), "T(n) = T(n/2) + 1");
    }

    #[test]
    fn display_complex_skips_zero_work() {
        let spec = RecurrenceSpec::ComplexDivideAndConquer {
            subproblems: vec![Subproblem::new(1, 2), Subproblem::new(3, 4)],
            f: "0".to_string(),
        };
        assert_eq!(spec.to_string(), "T(n) = T(n/2) + 3T(n/4)");
    }

    #[test]
    fn display_single_call_complex_has_no_plus() {
        let spec = RecurrenceSpec::ComplexDivideAndConquer {
            subproblems: vec![Subproblem::new(2, 2)],
            f: "n".to_string(),
        };
        assert_eq!(spec.to_string(), "T(n) = 2T(n/2) n");
    }

    #[test]
    fn display_decrease() {
        let spec = RecurrenceSpec::DecreaseAndConquer {
            d: 1,
            f: "n".to_string(),
        };
        assert_eq!(spec.to_string(), "T(n) = T(n-1) + n");
        assert_eq!(spec.kind().as_str(), "decrease_and_conquer");
        assert_eq!(spec.work(), "n");
    }
}
