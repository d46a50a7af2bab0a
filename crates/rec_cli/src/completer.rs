use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

const COMMANDS: &[&str] = &[
    "solve",
    "method",
    "base",
    "base clear",
    "steps on",
    "steps off",
    "classify",
    "help",
    "quit",
    "exit",
];

const METHODS: &[&str] = &["auto", "master", "substitution", "iteration"];

const TERMS: &[&str] = &["T(n) = ", "T(n/", "T(n-", "log n", "n log n"];

pub struct RecHelper {
    commands: Vec<String>,
    methods: Vec<String>,
    terms: Vec<String>,
}

impl RecHelper {
    pub fn new() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            commands: owned(COMMANDS),
            methods: owned(METHODS),
            terms: owned(TERMS),
        }
    }

    fn candidates(&self, line: &str, start: usize) -> &[String] {
        let before = line[..start].trim();
        if before.is_empty() {
            &self.commands
        } else if before.eq_ignore_ascii_case("method") {
            &self.methods
        } else {
            &self.terms
        }
    }
}

impl Default for RecHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for RecHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, word) = extract_word(line, pos);
        let matches = self
            .candidates(line, start)
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for RecHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for RecHelper {}

impl Validator for RecHelper {}

impl Helper for RecHelper {}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let line = &line[..pos];
    if line.is_empty() {
        return (0, "");
    }

    let mut start = pos;
    for (i, c) in line.char_indices().rev() {
        if c.is_whitespace() || c == '+' || c == '=' {
            break;
        }
        start = i;
    }
    (start, &line[start..pos])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_word_stops_at_separators() {
        assert_eq!(extract_word("method sub", 10), (7, "sub"));
        assert_eq!(extract_word("T(n) = 2T(n/2) +T", 17), (16, "T"));
        assert_eq!(extract_word("", 0), (0, ""));
    }

    #[test]
    fn candidates_depend_on_position() {
        let helper = RecHelper::new();
        assert!(helper.candidates("me", 0).contains(&"method".to_string()));
        assert!(helper.candidates("method it", 7).contains(&"iteration".to_string()));
        assert!(helper.candidates("T(n) = 2T(n/2) + ", 17).contains(&"log n".to_string()));
    }
}
