use std::time::{Duration, Instant};

use rec_ast::{BaseCases, GrowthClass, MethodHint, RecurrenceSpec, SolveMethod};
use rec_formatter::format_solution;
use rec_solver_core::{
    iteration, iterative_expansion, master_theorem, substitution, MethodOutcome,
};
use tracing::debug;

/// One recurrence being analysed.
///
/// The step log is append-only across `parse`, `add_base_case` and `solve`
/// calls; callers that want a clean trace create a fresh session.
#[derive(Debug, Default)]
pub struct SolverSession {
    recurrence: Option<RecurrenceSpec>,
    base_cases: BaseCases,
    steps: Vec<String>,
    solution: Option<String>,
    asymptotic_notation: Option<String>,
    method: Option<SolveMethod>,
    elapsed: Duration,
}

impl SolverSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recurrence(&self) -> Option<&RecurrenceSpec> {
        self.recurrence.as_ref()
    }

    pub fn base_cases(&self) -> &BaseCases {
        &self.base_cases
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Display form of the last solution.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Raw (unformatted) form of the last solution.
    pub fn asymptotic_notation(&self) -> Option<&str> {
        self.asymptotic_notation.as_deref()
    }

    pub fn method(&self) -> Option<SolveMethod> {
        self.method
    }

    /// Wall time of the last `solve` call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Parse `text` and make it the current recurrence.
    ///
    /// On failure the previous recurrence is dropped and a failure step is
    /// recorded.
    pub fn parse(&mut self, text: &str) -> Option<&RecurrenceSpec> {
        self.steps.push(format!("Parsing recurrence relation: {}", text));

        match rec_parser::parse(text) {
            Ok(spec) => {
                debug!(kind = %spec.kind(), recurrence = %spec, "parsed");
                self.steps.push(identified_message(&spec));
                self.recurrence = Some(spec);
                self.recurrence.as_ref()
            }
            Err(err) => {
                debug!(error = %err, "parse failed");
                self.steps
                    .push("Failed to parse the recurrence relation.".to_string());
                self.recurrence = None;
                None
            }
        }
    }

    /// Record `T(n) = value`. Base cases are annotations only.
    pub fn add_base_case(&mut self, n: u64, value: f64) {
        self.base_cases.insert(n, value);
        self.steps.push(format!("Added base case: T({}) = {}", n, value));
    }

    /// Solve the current recurrence, returning the display solution.
    ///
    /// The hint is ignored for multi-term recurrences. Without a hint (or with
    /// `master` on a decrease recurrence) the methods are tried in order until
    /// one applies.
    pub fn solve(&mut self, hint: Option<MethodHint>) -> Option<String> {
        let Some(spec) = self.recurrence.clone() else {
            self.steps
                .push("No recurrence relation has been parsed yet.".to_string());
            return None;
        };

        let start = Instant::now();
        let growth = rec_parser::classify(spec.work());
        self.steps
            .push(format!("Growth of f(n) = {}: {}", spec.work(), growth));

        let found = self.dispatch(&spec, growth, hint);
        self.elapsed = start.elapsed();

        let Some((method, raw)) = found else {
            debug!(recurrence = %spec, "no method applied");
            self.steps
                .push("No applicable method could solve the recurrence.".to_string());
            return None;
        };

        debug!(method = method.name(), solution = %raw, "solved");
        self.method = Some(method);
        self.steps.push(format!(
            "Solution found in {:.6} seconds.",
            self.elapsed.as_secs_f64()
        ));

        let display = self.format(&raw);
        self.solution = Some(display.clone());
        Some(display)
    }

    fn format(&mut self, raw: &str) -> String {
        self.steps.push(format!("Formatting solution: {}", raw));
        self.asymptotic_notation = Some(raw.to_string());
        let display = format_solution(raw);
        self.steps.push(format!("Formatted solution: {}", display));
        display
    }

    fn dispatch(
        &mut self,
        spec: &RecurrenceSpec,
        growth: GrowthClass,
        hint: Option<MethodHint>,
    ) -> Option<(SolveMethod, String)> {
        let plan: &[SolveMethod] = match (spec, hint) {
            (RecurrenceSpec::ComplexDivideAndConquer { .. }, _) => {
                &[SolveMethod::IterativeExpansion]
            }
            (RecurrenceSpec::DivideAndConquer { .. }, Some(MethodHint::Master)) => {
                &[SolveMethod::MasterTheorem]
            }
            (_, Some(MethodHint::Substitution)) => &[SolveMethod::Substitution],
            (_, Some(MethodHint::Iteration)) => &[SolveMethod::Iteration],
            (RecurrenceSpec::DivideAndConquer { .. }, None) => &[
                SolveMethod::MasterTheorem,
                SolveMethod::Iteration,
                SolveMethod::Substitution,
            ],
            (RecurrenceSpec::DecreaseAndConquer { .. }, _) => {
                &[SolveMethod::Iteration, SolveMethod::Substitution]
            }
        };
        debug!(hint = ?hint, plan = ?plan, "method plan");

        for &method in plan {
            let outcome = run_method(method, spec, growth);
            self.steps.extend(outcome.steps);
            if let Some(raw) = outcome.solution {
                return Some((method, raw));
            }
        }
        None
    }
}

fn identified_message(spec: &RecurrenceSpec) -> String {
    match spec {
        RecurrenceSpec::DivideAndConquer { a, b, f } => format!(
            "Identified divide and conquer recurrence with a={}, b={}, f(n)={}",
            a, b, f
        ),
        RecurrenceSpec::DecreaseAndConquer { d, f } => format!(
            "Identified decrease and conquer recurrence with d={}, f(n)={}",
            d, f
        ),
        RecurrenceSpec::ComplexDivideAndConquer { subproblems, f } => format!(
            "Identified complex divide and conquer recurrence with {} subproblems, f(n)={}",
            subproblems.len(),
            f
        ),
    }
}

fn run_method(method: SolveMethod, spec: &RecurrenceSpec, growth: GrowthClass) -> MethodOutcome {
    use RecurrenceSpec::{ComplexDivideAndConquer, DecreaseAndConquer, DivideAndConquer};

    match (method, spec) {
        (SolveMethod::IterativeExpansion, ComplexDivideAndConquer { subproblems, .. }) => {
            iterative_expansion::solve(subproblems, growth)
        }
        (SolveMethod::MasterTheorem, DivideAndConquer { a, b, f }) => {
            master_theorem::solve(*a, *b, f, growth)
        }
        (SolveMethod::Iteration, DivideAndConquer { a, b, f }) => {
            iteration::solve_divide(*a, *b, f, growth)
        }
        (SolveMethod::Iteration, DecreaseAndConquer { d, f }) => {
            iteration::solve_decrease(*d, f, growth)
        }
        (SolveMethod::Substitution, DivideAndConquer { a, b, f }) => {
            substitution::solve_divide(*a, *b, f, growth)
        }
        (SolveMethod::Substitution, DecreaseAndConquer { d, f }) => {
            substitution::solve_decrease(*d, f, growth)
        }
        (method, spec) => MethodOutcome::inapplicable(vec![format!(
            "{} does not apply to {} recurrences.",
            method,
            spec.kind()
        )]),
    }
}
