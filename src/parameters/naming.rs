//! Display-name parsing for parameter groups
//!
//! Array-valued parameter groups carry display names of the form
//! `root[indices]`, e.g. `θ[1]`, `θ[2,3]`. Grouping logic only cares about
//! the *root name*, the text before the first `[`, so this module provides
//! a small nom parser that splits a display name into its root and optional
//! raw index segment.
//!
//! Names without brackets are their own root; an unterminated `[` still roots
//! at the bracket.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::opt,
    sequence::{delimited, pair},
    IResult, Parser,
};

/// A display name split into root and optional index segment.
///
/// Borrows from the input name; the index segment is the raw text between the
/// outermost brackets, uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName<'a> {
    /// Text before the first `[`
    pub root: &'a str,

    /// Raw text between the brackets, if present
    pub index: Option<&'a str>,
}

fn display_name(input: &str) -> IResult<&str, DisplayName<'_>> {
    let (rest, (root, index)) = pair(
        take_till(|c| c == '['),
        opt(delimited(char('['), take_till(|c| c == ']'), char(']'))),
    )
    .parse(input)?;

    Ok((rest, DisplayName { root, index }))
}

/// Split a display name into root and optional index segment.
///
/// # Examples
///
/// ```
/// use infopt_rs::parameters::naming::parse_display_name;
///
/// let name = parse_display_name("θ[1,2]");
/// assert_eq!(name.root, "θ");
/// assert_eq!(name.index, Some("1,2"));
///
/// let plain = parse_display_name("time");
/// assert_eq!(plain.root, "time");
/// assert_eq!(plain.index, None);
/// ```
pub fn parse_display_name(name: &str) -> DisplayName<'_> {
    match display_name(name) {
        Ok((_, parsed)) => parsed,
        // take_till/opt cannot fail, but never panic on parser plumbing.
        Err(_) => DisplayName { root: name, index: None },
    }
}

/// Get the root name of a display name: the text before the first `[`.
///
/// # Examples
///
/// ```
/// use infopt_rs::parameters::naming::root_name;
///
/// assert_eq!(root_name("θ[1]"), "θ");
/// assert_eq!(root_name("x"), "x");
/// ```
pub fn root_name(name: &str) -> &str {
    parse_display_name(name).root
}
