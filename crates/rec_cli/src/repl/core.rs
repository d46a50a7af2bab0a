//! Core REPL logic without I/O.

use rec_ast::{MethodHint, RecurrenceKind};
use rec_session::SolverSession;

use super::output::{Flow, ReplMsg, ReplReply};
use crate::config::RecConfig;
use crate::input::load_recurrence;

const HELP: &str = "\
Enter a recurrence to solve it, e.g.
  T(n) = 2T(n/2) + n
  T(n) = T(n-1) + 1
  T(n) = T(n/2) + T(n/6) + n*log(n)
The \"T(n) =\" prefix is optional.

Commands:
  solve <recurrence>     Solve a recurrence
  method <name|auto>     Prefer master, substitution or iteration
  base <n> <value>       Record a base case T(n) = value
  base clear             Forget recorded base cases
  steps on|off           Show or hide the derivation steps
  steps                  Show the steps of the last solve
  classify <term>        Show the growth class of a work term
  help                   Show this message
  quit | exit            Leave";

/// REPL state carried between lines. Each recurrence is solved in a fresh
/// [`SolverSession`].
pub struct ReplCore {
    method: Option<MethodHint>,
    base_cases: Vec<(u64, f64)>,
    show_steps: bool,
    complex_default_base_case: bool,
    last: Option<SolverSession>,
}

impl ReplCore {
    pub fn new(config: &RecConfig) -> Self {
        let method = config
            .default_method
            .as_deref()
            .and_then(|m| MethodHint::parse_optional(m).ok())
            .flatten();
        Self {
            method,
            base_cases: Vec::new(),
            show_steps: config.show_steps,
            complex_default_base_case: config.complex_default_base_case,
            last: None,
        }
    }

    pub fn method(&self) -> Option<MethodHint> {
        self.method
    }

    pub fn show_steps(&self) -> bool {
        self.show_steps
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> (Flow, ReplReply) {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let reply = match command.to_ascii_lowercase().as_str() {
            "" => Vec::new(),
            "quit" | "exit" => return (Flow::Quit, vec![ReplMsg::info("Goodbye!")]),
            "help" => vec![ReplMsg::info(HELP)],
            "method" => self.handle_method(rest),
            "base" => self.handle_base(rest),
            "steps" => self.handle_steps(rest),
            "classify" => handle_classify(rest),
            "solve" => self.handle_solve(rest),
            _ => self.handle_solve(line),
        };
        (Flow::Continue, reply)
    }

    fn handle_method(&mut self, rest: &str) -> ReplReply {
        if rest.is_empty() {
            let current = self.method.map_or("auto", |m| m.as_str());
            return vec![ReplMsg::info(format!("Method: {}", current))];
        }
        match MethodHint::parse_optional(rest) {
            Ok(hint) => {
                self.method = hint;
                let name = hint.map_or("auto", |m| m.as_str());
                vec![ReplMsg::info(format!("Method set to {}", name))]
            }
            Err(e) => vec![ReplMsg::error(format!("Error: {}", e))],
        }
    }

    fn handle_base(&mut self, rest: &str) -> ReplReply {
        if rest.eq_ignore_ascii_case("clear") {
            self.base_cases.clear();
            return vec![ReplMsg::info("Base cases cleared")];
        }
        if rest.is_empty() {
            if self.base_cases.is_empty() {
                return vec![ReplMsg::info("No base cases recorded")];
            }
            return self
                .base_cases
                .iter()
                .map(|(n, v)| ReplMsg::info(format!("T({}) = {}", n, v)))
                .collect();
        }

        let mut parts = rest.split_whitespace();
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(n), Some(v), None) => n.parse::<u64>().ok().zip(v.parse::<f64>().ok()),
            _ => None,
        };
        let Some((n, value)) = parsed else {
            return vec![ReplMsg::error("Usage: base <n> <value>  |  base clear")];
        };
        match self.base_cases.iter_mut().find(|(k, _)| *k == n) {
            Some(entry) => entry.1 = value,
            None => self.base_cases.push((n, value)),
        }
        vec![ReplMsg::info(format!("Base case recorded: T({}) = {}", n, value))]
    }

    fn handle_steps(&mut self, rest: &str) -> ReplReply {
        match rest.to_ascii_lowercase().as_str() {
            "on" => {
                self.show_steps = true;
                vec![ReplMsg::info("Steps enabled")]
            }
            "off" => {
                self.show_steps = false;
                vec![ReplMsg::info("Steps disabled")]
            }
            "" => match &self.last {
                Some(session) => steps_reply(session),
                None => vec![ReplMsg::info("Nothing solved yet")],
            },
            _ => vec![ReplMsg::error("Usage: steps on|off")],
        }
    }

    fn handle_solve(&mut self, text: &str) -> ReplReply {
        if text.is_empty() {
            return vec![ReplMsg::error("Usage: solve <recurrence>")];
        }

        let mut session = SolverSession::new();
        let mut reply = ReplReply::new();
        if !load_recurrence(&mut session, text) {
            reply.push(ReplMsg::error(format!(
                "Error: could not recognize a recurrence in '{}'",
                text
            )));
            reply.push(ReplMsg::info("Type 'help' for the accepted forms."));
            self.last = Some(session);
            return reply;
        }

        for &(n, value) in &self.base_cases {
            session.add_base_case(n, value);
        }
        let is_complex = session
            .recurrence()
            .is_some_and(|r| r.kind() == RecurrenceKind::ComplexDivideAndConquer);
        if is_complex && self.complex_default_base_case && session.base_cases().get(1).is_none()
        {
            session.add_base_case(1, 1.0);
        }

        let solution = session.solve(self.method);
        if self.show_steps {
            reply.extend(steps_reply(&session));
        }
        match solution {
            Some(solution) => {
                reply.push(ReplMsg::output(format!("Solution: {}", solution)));
                if let Some(method) = session.method() {
                    reply.push(ReplMsg::info(format!("Method: {}", method)));
                }
                reply.push(ReplMsg::info(format!(
                    "Time: {:.6} seconds",
                    session.elapsed().as_secs_f64()
                )));
            }
            None => reply.push(ReplMsg::error(
                "Error: no applicable method could solve the recurrence",
            )),
        }
        self.last = Some(session);
        reply
    }
}

fn handle_classify(term: &str) -> ReplReply {
    if term.is_empty() {
        return vec![ReplMsg::error("Usage: classify <term>")];
    }
    vec![ReplMsg::output(rec_parser::classify(term).to_string())]
}

fn steps_reply(session: &SolverSession) -> ReplReply {
    session
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| ReplMsg::steps(format!("Step {}: {}", i + 1, step)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> ReplCore {
        ReplCore::new(&RecConfig::default())
    }

    fn outputs(reply: &ReplReply) -> Vec<&str> {
        reply
            .iter()
            .filter_map(|m| match m {
                ReplMsg::Output(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn recurrence_line_is_solved() {
        let mut repl = core();
        let (flow, reply) = repl.handle_line("T(n) = 2T(n/2) + n");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(outputs(&reply), vec!["Solution: Θ(n log n)"]);
    }

    #[test]
    fn solve_command_and_bare_rhs() {
        let mut repl = core();
        let (_, reply) = repl.handle_line("solve T(n-1) + 1");
        assert_eq!(outputs(&reply), vec!["Solution: Θ(n)"]);
    }

    #[test]
    fn quit_and_exit_stop_the_loop() {
        let mut repl = core();
        assert_eq!(repl.handle_line("quit").0, Flow::Quit);
        assert_eq!(repl.handle_line("EXIT").0, Flow::Quit);
    }

    #[test]
    fn method_command_validates_names() {
        let mut repl = core();
        repl.handle_line("method iteration");
        assert_eq!(repl.method(), Some(MethodHint::Iteration));

        let (_, reply) = repl.handle_line("method characteristic");
        assert!(matches!(&reply[0], ReplMsg::Error(e) if e.contains("not supported")));
        assert_eq!(repl.method(), Some(MethodHint::Iteration));

        repl.handle_line("method auto");
        assert_eq!(repl.method(), None);
    }

    #[test]
    fn steps_toggle_includes_the_trace() {
        let mut repl = core();
        repl.handle_line("steps on");
        assert!(repl.show_steps());
        let (_, reply) = repl.handle_line("T(n) = 4T(n/2) + n");
        assert!(matches!(&reply[0], ReplMsg::Steps(s) if s.starts_with("Step 1: Parsing")));
    }

    #[test]
    fn complex_recurrence_gets_default_base_case() {
        let mut repl = core();
        repl.handle_line("T(n) = T(n/2) + T(n/6) + n*log(n)");
        let (_, reply) = repl.handle_line("steps");
        assert!(reply
            .iter()
            .any(|m| matches!(m, ReplMsg::Steps(s) if s.ends_with("Added base case: T(1) = 1"))));
    }

    #[test]
    fn base_cases_carry_into_sessions() {
        let mut repl = core();
        repl.handle_line("base 0 5");
        repl.handle_line("base 0 7");
        repl.handle_line("T(n) = T(n-1) + 1");
        let (_, reply) = repl.handle_line("steps");
        let added: Vec<_> = reply
            .iter()
            .filter(|m| matches!(m, ReplMsg::Steps(s) if s.contains("Added base case")))
            .collect();
        assert_eq!(added.len(), 1);

        let (_, reply) = repl.handle_line("base nope");
        assert!(matches!(&reply[0], ReplMsg::Error(_)));
    }

    #[test]
    fn unparsable_line_reports_error() {
        let mut repl = core();
        let (_, reply) = repl.handle_line("banana");
        assert!(matches!(&reply[0], ReplMsg::Error(e) if e.contains("banana")));
    }

    #[test]
    fn classify_reports_growth() {
        let mut repl = core();
        let (_, reply) = repl.handle_line("classify n^2 log n");
        assert_eq!(outputs(&reply), vec!["n_log (exponent 2)"]);
    }
}
