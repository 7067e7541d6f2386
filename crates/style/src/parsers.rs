//! Low-level nom parser functions for shorthand property values.
//!
//! Layout documents may write insets, grid tracks and layout options as
//! compact strings (`"10 20"`, `"auto, *, 2*"`, `"fill-and-expand"`); these
//! parsers turn them into typed values.

use crate::alignment::{Alignment, LayoutOptions};
use crate::grid::GridLength;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space0, space1};
use nom::combinator::{map, opt, value};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::{delimited, terminated};
use nom::{IResult, Parser};
use thiserror::Error;
use trellis_types::Thickness;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(space0, inner, space0)
}

/// Parses a length in logical units, with an optional `px` suffix.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    terminated(float, opt(tag_no_case("px"))).parse(input)
}

/// Parses `auto`, `*`, `2.5*` or an absolute length.
pub fn parse_grid_length(input: &str) -> IResult<&str, GridLength> {
    alt((
        value(GridLength::Auto, tag_no_case("auto")),
        map(terminated(opt(float), char('*')), |weight| {
            GridLength::Star(weight.unwrap_or(1.0))
        }),
        map(parse_length, GridLength::Absolute),
    ))
    .parse(input)
}

fn parse_alignment(input: &str) -> IResult<&str, Alignment> {
    alt((
        value(Alignment::Start, tag_no_case("start")),
        value(Alignment::Center, tag_no_case("center")),
        value(Alignment::End, tag_no_case("end")),
        value(Alignment::Fill, tag_no_case("fill")),
    ))
    .parse(input)
}

/// Runs a parser over the whole (trimmed) input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

pub fn parse_grid_length_str(s: &str) -> Result<GridLength, StyleParseError> {
    run_parser(parse_grid_length, s)
}

/// Parses a comma separated track list such as `"auto, *, 2*, 100"`.
pub fn parse_grid_lengths(s: &str) -> Result<Vec<GridLength>, StyleParseError> {
    run_parser(
        |input| separated_list1(ws(char(',')), ws(parse_grid_length)).parse(input),
        s,
    )
}

/// Parses inset shorthand: 1 value (all sides), 2 values (vertical,
/// horizontal) or 4 values (top, right, bottom, left).
pub fn parse_thickness(s: &str) -> Result<Thickness, StyleParseError> {
    let parts = run_parser(|input| separated_list1(space1, parse_length).parse(input), s)?;
    match parts.as_slice() {
        [all] => Ok(Thickness::all(*all)),
        [vertical, horizontal] => Ok(Thickness::symmetric(*vertical, *horizontal)),
        [top, right, bottom, left] => Ok(Thickness::new(*top, *right, *bottom, *left)),
        _ => Err(StyleParseError::InvalidValue {
            property: "thickness".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses `start`, `center`, `end` or `fill`, optionally suffixed with
/// `-and-expand`.
pub fn parse_layout_options(s: &str) -> Result<LayoutOptions, StyleParseError> {
    run_parser(
        |input| {
            map(
                (parse_alignment, opt(tag_no_case("-and-expand"))),
                |(alignment, expand)| LayoutOptions::new(alignment, expand.is_some()),
            )
            .parse(input)
        },
        s,
    )
    .map_err(|_| StyleParseError::InvalidValue {
        property: "layout-options".to_string(),
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 7.5px ").unwrap(), 7.5);
        assert!(run_parser(parse_length, "abc").is_err());
        assert!(run_parser(parse_length, "10pt").is_err());
    }

    #[test]
    fn test_parse_grid_length() {
        assert_eq!(parse_grid_length_str("auto").unwrap(), GridLength::Auto);
        assert_eq!(parse_grid_length_str("AUTO").unwrap(), GridLength::Auto);
        assert_eq!(parse_grid_length_str("*").unwrap(), GridLength::Star(1.0));
        assert_eq!(parse_grid_length_str("2.5*").unwrap(), GridLength::Star(2.5));
        assert_eq!(parse_grid_length_str("100").unwrap(), GridLength::Absolute(100.0));
        assert!(parse_grid_length_str("**").is_err());
    }

    #[test]
    fn test_parse_grid_lengths() {
        assert_eq!(
            parse_grid_lengths("auto, *,2*, 40").unwrap(),
            vec![
                GridLength::Auto,
                GridLength::Star(1.0),
                GridLength::Star(2.0),
                GridLength::Absolute(40.0)
            ]
        );
        assert!(parse_grid_lengths("auto,, *").is_err());
    }

    #[test]
    fn test_parse_thickness() {
        assert_eq!(parse_thickness("20").unwrap(), Thickness::all(20.0));
        assert_eq!(parse_thickness("10 20").unwrap(), Thickness::new(10.0, 20.0, 10.0, 20.0));
        assert_eq!(
            parse_thickness("1 2 3 4").unwrap(),
            Thickness::new(1.0, 2.0, 3.0, 4.0)
        );
        assert!(parse_thickness("1 2 3").is_err());
    }

    #[test]
    fn test_parse_layout_options() {
        assert_eq!(parse_layout_options("fill").unwrap(), LayoutOptions::FILL);
        assert_eq!(
            parse_layout_options("center-and-expand").unwrap(),
            LayoutOptions::CENTER_AND_EXPAND
        );
        assert_eq!(parse_layout_options("End").unwrap(), LayoutOptions::END);
        assert!(parse_layout_options("middle").is_err());
        assert!(parse_layout_options("start-and").is_err());
    }
}
