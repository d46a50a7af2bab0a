//! Growth classification of free-text work terms.
//!
//! Classification is a fixed sequence of substring probes over the trimmed,
//! lowercased text; the first probe that matches decides. The probes are
//! intentionally loose: `log` anywhere in the text (even inside another word)
//! selects the logarithmic branch.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0},
    combinator::opt,
    sequence::pair,
    IResult,
};
use rec_ast::GrowthClass;

const POWER_MARKERS: [&str; 2] = ["n^", "n**"];

// Decimal literal: digits with an optional fractional part ("2", "2.5", "2.", ".5").
fn parse_decimal(input: &str) -> IResult<&str, f64> {
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let frac_part = maybe_frac.map(|(_, frac)| frac).unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    let literal = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    match literal.parse::<f64>() {
        Ok(value) => Ok((remaining, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}

// Optional whitespace then an optional decimal literal.
fn parse_exponent(input: &str) -> IResult<&str, Option<f64>> {
    let (input, _) = multispace0(input)?;
    opt(parse_decimal)(input)
}

/// Locate the first explicit power marker (`n^` or `n**`).
///
/// Returns `None` when no marker is present, `Some(None)` when the marker is
/// not followed by a numeric literal.
fn power_marker_exponent(text: &str) -> Option<Option<f64>> {
    let (start, marker) = POWER_MARKERS
        .iter()
        .filter_map(|m| text.find(*m).map(|pos| (pos, *m)))
        .min_by_key(|(pos, _)| *pos)?;
    let after = &text[start + marker.len()..];
    Some(parse_exponent(after).map(|(_, exp)| exp).unwrap_or(None))
}

// o(n…) / θ(n…) with an optional power: "o(n)", "θ(n^2)", "o(n**1.5)".
fn parse_bracketed_notation(input: &str) -> IResult<&str, Option<f64>> {
    let (input, _) = alt((char('o'), char('θ')))(input)?;
    let (input, _) = tag("(n")(input)?;
    let (input, _) = opt(char('^'))(input)?;
    let (input, _) = opt(tag("**"))(input)?;
    let (input, exp) = parse_exponent(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, exp))
}

fn bracketed_notation_exponent(text: &str) -> Option<f64> {
    text.char_indices()
        .find_map(|(i, _)| parse_bracketed_notation(&text[i..]).ok())
        .map(|(_, exp)| exp.unwrap_or(1.0))
}

/// Classify a work term `f(n)` into a growth category and exponent.
pub fn classify(text: &str) -> GrowthClass {
    let f = text.trim().to_lowercase();

    if f == "1" || f == "o(1)" || f == "θ(1)" || f.contains("constant") {
        return GrowthClass::constant();
    }

    let marker = power_marker_exponent(&f);

    if f.contains("log") || f.contains("ln") {
        return match marker {
            Some(exp) => GrowthClass::polynomial_log(exp.unwrap_or(1.0)),
            None => GrowthClass::logarithmic(),
        };
    }

    if f.contains('n') {
        if let Some(exp) = marker {
            return GrowthClass::polynomial(exp.unwrap_or(1.0));
        }
        if !f.contains("n *") && !f.contains("n*") {
            return GrowthClass::polynomial(1.0);
        }
    }

    if let Some(exp) = bracketed_notation_exponent(&f) {
        return GrowthClass::polynomial(exp);
    }

    GrowthClass::unknown()
}
