//! vCard lexer for line unfolding and content line splitting.
//!
//! vCard uses the same folding/unfolding rules as iCalendar (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::is_name_char;

/// Unfolds a vCard document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab.
/// Also handles bare LF for lenient parsing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                // Check for continuation (space or tab)
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next(); // Skip the whitespace, continue line
                } else {
                    result.push('\n'); // End of logical line
                }
            } else {
                result.push(c);
            }
        } else if c == '\n' {
            // Bare LF (lenient)
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A content line split into its parts, before any value is unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name including any `group.` prefix, as written.
    pub name: String,
    /// Parameters as `(name, value)` pairs; a `KEY=a,b` segment yields two.
    pub params: Vec<(String, String)>,
    /// Value block, still escaped.
    pub value: String,
}

/// Splits a single unfolded content line into its components.
///
/// Format: `[group.]name[;param=value[,value]]*:value`
///
/// ## Errors
/// Returns an error if the line is missing the colon separator, the name is
/// empty or contains characters outside `A-Z a-z 0-9 - _ .`, or a parameter
/// has an empty name.
pub fn parse_content_line(line: &str) -> ParseResult<ContentLine> {
    // Find the colon separating name/params from value
    let colon_pos = find_value_separator(line).ok_or_else(|| ParseError::missing_separator(line))?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    let mut segments = split_unquoted(name_params, ';').into_iter();
    let name = segments.next().unwrap_or_default().trim();

    // Validate property name
    if name.is_empty() || !name.chars().all(|c| c == '.' || is_name_char(c)) {
        return Err(ParseError::invalid_name(name));
    }

    let mut params = Vec::new();
    for segment in segments {
        parse_parameter(segment, &mut params)?;
    }

    Ok(ContentLine {
        name: name.to_string(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits on `delimiter` wherever it is outside double quotes.
fn split_unquoted(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Parses one `KEY=VALUE[,VALUE]` segment into `params`.
///
/// A segment without `=` is a vCard 2.1 style bare type (`TEL;HOME:`), and
/// is read as `TYPE=<segment>`.
fn parse_parameter(segment: &str, params: &mut Vec<(String, String)>) -> ParseResult<()> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Ok(());
    }

    let Some((name, raw_values)) = segment.split_once('=') else {
        tracing::debug!(segment = %segment, "Bare parameter read as TYPE");
        params.push(("type".to_string(), segment.to_string()));
        return Ok(());
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            format!("parameter without a name: {segment}"),
        ));
    }

    for value in split_unquoted(raw_values, ',') {
        params.push((name.to_string(), decode_param_value(value)));
    }

    Ok(())
}

/// Strips quotes and decodes RFC 6868 caret sequences.
fn decode_param_value(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {}
            '^' => match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some('\'') => {
                    chars.next();
                    result.push('"');
                }
                Some('^') => {
                    chars.next();
                    result.push('^');
                }
                _ => result.push('^'),
            },
            _ => result.push(c),
        }
    }

    result
}
