/// Result of running one solving method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodOutcome {
    /// Raw (unformatted) asymptotic solution, `None` when the method does not apply.
    pub solution: Option<String>,
    /// Narration in the order it was produced.
    pub steps: Vec<String>,
}

impl MethodOutcome {
    pub fn solved(solution: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            solution: Some(solution.into()),
            steps,
        }
    }

    pub fn inapplicable(steps: Vec<String>) -> Self {
        Self {
            solution: None,
            steps,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}
