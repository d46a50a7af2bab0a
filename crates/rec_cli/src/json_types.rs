//! JSON output types for `solve --format json` and `classify --format json`.

use serde::Serialize;

/// Result of solving a single recurrence.
#[derive(Serialize, Debug)]
pub struct SolveJsonOutput {
    pub ok: bool,
    pub input: String,
    /// Canonical re-serialization of the parsed recurrence.
    pub recurrence: String,
    pub kind: String,
    /// Display solution (`Θ(n²)`).
    pub solution: String,
    /// Raw solution before formatting (`Θ(n^2)`).
    pub asymptotic_notation: String,
    pub method: String,
    pub steps: Vec<String>,
    pub base_cases: Vec<BaseCaseJson>,
    pub elapsed_us: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BaseCaseJson {
    pub n: u64,
    pub value: f64,
}

/// Growth class of a work term.
#[derive(Serialize, Debug)]
pub struct ClassifyJsonOutput {
    pub ok: bool,
    pub term: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponent: Option<f64>,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

impl ErrorJsonOutput {
    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: Some(input.into()),
            steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: &[String]) -> Self {
        self.steps = steps.to_vec();
        self
    }
}

pub fn print_pretty_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            println!("{{\"ok\":false,\"error\":\"JSON_SERIALIZATION_FAILED\"}}");
        }
    }
}
