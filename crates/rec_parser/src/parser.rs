use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0},
    combinator::opt,
    multi::many1,
    sequence::{delimited, terminated, tuple},
    IResult,
};
use rec_ast::{RecurrenceSpec, Subproblem, ZERO_WORK};

use crate::error::ParseError;

// ============================================================================
// Grammar pieces
// ============================================================================

// Left-hand side: "T(n)" "=" with optional whitespace around '='
fn parse_lhs(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("T(n)")(input)?;
    let (input, _) = delimited(multispace0, char('='), multispace0)(input)?;
    Ok((input, ()))
}

// A single recursive call "[a]T(n/b)". Digits are kept as text so that an
// oversized literal is reported only once the term is known to be recursive.
fn parse_divide_term(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    let (input, coeff) = opt(digit1)(input)?;
    let (input, _) = tag("T(n")(input)?;
    let (input, _) = delimited(multispace0, char('/'), multispace0)(input)?;
    let (input, divisor) = digit1(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (coeff, divisor)))
}

// A recursive call "T(n-d)"
fn parse_decrease_term(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("T(n")(input)?;
    let (input, _) = delimited(multispace0, char('-'), multispace0)(input)?;
    let (input, d) = digit1(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, d))
}

// Mandatory "+" before a residual work term
fn parse_plus(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char('+'), multispace0)(input)
}

type DivideTerm<'a> = (Option<&'a str>, &'a str);

// T(n) = [a]T(n/b) [+] [a]T(n/b) [+] ... residual
// The residual is everything after the last recursive call and may be empty.
fn parse_complex_form(input: &str) -> IResult<&str, Vec<DivideTerm<'_>>> {
    let (input, _) = parse_lhs(input)?;
    many1(terminated(
        parse_divide_term,
        tuple((multispace0, opt(char('+')), multispace0)),
    ))(input)
}

// T(n) = [a]T(n/b) + residual
fn parse_simple_form(input: &str) -> IResult<&str, DivideTerm<'_>> {
    let (input, _) = parse_lhs(input)?;
    terminated(parse_divide_term, parse_plus)(input)
}

// T(n) = T(n-d) + residual
fn parse_decrease_form(input: &str) -> IResult<&str, &str> {
    let (input, _) = parse_lhs(input)?;
    terminated(parse_decrease_term, parse_plus)(input)
}

// ============================================================================
// Lowering
// ============================================================================

fn to_u64(digits: &str) -> Result<u64, ParseError> {
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::NumberOutOfRange(digits.to_string()))
}

fn lower_term((coeff, divisor): DivideTerm<'_>) -> Result<Subproblem, ParseError> {
    let a = match coeff {
        Some(digits) => to_u64(digits)?,
        None => 1,
    };
    Ok(Subproblem::new(a, to_u64(divisor)?))
}

fn lower_complex(terms: Vec<DivideTerm<'_>>, residual: &str) -> Result<RecurrenceSpec, ParseError> {
    let subproblems = terms
        .into_iter()
        .map(lower_term)
        .collect::<Result<Vec<_>, _>>()?;
    let f = if residual.is_empty() {
        ZERO_WORK.to_string()
    } else {
        residual.to_string()
    };
    Ok(RecurrenceSpec::ComplexDivideAndConquer { subproblems, f })
}

fn match_simple(text: &str) -> Option<Result<RecurrenceSpec, ParseError>> {
    let (residual, term) = parse_simple_form(text).ok()?;
    let residual = residual.trim();
    if residual.is_empty() {
        return None;
    }
    Some(lower_term(term).map(|sub| RecurrenceSpec::DivideAndConquer {
        a: sub.a,
        b: sub.b,
        f: residual.to_string(),
    }))
}

fn match_decrease(text: &str) -> Option<Result<RecurrenceSpec, ParseError>> {
    let (residual, d) = parse_decrease_form(text).ok()?;
    let residual = residual.trim();
    if residual.is_empty() {
        return None;
    }
    Some(to_u64(d).map(|d| RecurrenceSpec::DecreaseAndConquer {
        d,
        f: residual.to_string(),
    }))
}

/// Parse a textual recurrence into one of the three supported shapes.
///
/// Shapes are tried in order: multi-term divide-and-conquer, simple
/// divide-and-conquer, decrease-and-conquer. A single recursive call
/// followed by a residual is the simple shape, so the multi-term matcher
/// only keeps it when the simple matcher rejects the text.
pub fn parse(input: &str) -> Result<RecurrenceSpec, ParseError> {
    let text = input.trim();

    let complex = parse_complex_form(text).ok();
    if let Some((residual, terms)) = &complex {
        if terms.len() > 1 || residual.trim().is_empty() {
            return lower_complex(terms.clone(), residual.trim());
        }
    }

    if let Some(simple) = match_simple(text) {
        return simple;
    }

    if let Some((residual, terms)) = complex {
        return lower_complex(terms, residual.trim());
    }

    if let Some(decrease) = match_decrease(text) {
        return decrease;
    }

    Err(ParseError::Unrecognized(text.to_string()))
}
