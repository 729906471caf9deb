//! Read subsets from text, one per line: `subset: element element ...`.
//! Blank lines are skipped, and `#` starts a comment.

use nom::{
    bytes::complete::is_not,
    character::complete::{char, space0},
    combinator::{eof, map, opt, rest, verify},
    multi::many0,
    sequence::{preceded, separated_pair, terminated, tuple},
    IResult,
};
use thiserror::Error;

/// A subset and the elements it covers.
pub type Line = (String, Vec<String>);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    #[error("Line {line}: expected `subset: element ...`, got {text:?}")]
    Syntax { line: usize, text: String },
}

/// Subset names may contain spaces, but not at either end.
fn subset(input: &str) -> IResult<&str, &str> {
    verify(map(is_not(":#"), str::trim), |s: &str| !s.is_empty())(input)
}

fn element(input: &str) -> IResult<&str, &str> {
    is_not(" \t#")(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(input)
}

fn line(input: &str) -> IResult<&str, Option<(&str, Vec<&str>)>> {
    terminated(
        opt(separated_pair(
            subset,
            char(':'),
            many0(preceded(space0, element)),
        )),
        tuple((space0, opt(comment), eof)),
    )(input)
}

/// Parse every line of `input`, or report the first malformed one.
pub fn parse(input: &str) -> Result<Vec<Line>, InputError> {
    let mut lines = Vec::new();
    for (i, text) in input.lines().enumerate() {
        match line(text) {
            Ok((_, Some((subset, elements)))) => lines.push((
                subset.to_owned(),
                elements.into_iter().map(str::to_owned).collect(),
            )),
            Ok((_, None)) => (),
            Err(_) => {
                return Err(InputError::Syntax {
                    line: i + 1,
                    text: text.to_owned(),
                })
            }
        }
    }
    Ok(lines)
}

pub fn format_cover(cover: &[String]) -> String {
    cover.join(" ")
}
