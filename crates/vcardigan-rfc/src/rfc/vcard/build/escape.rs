//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Backslash, comma, and semicolon get a leading backslash; `\r\n` and `\n`
/// become the two characters `\n`. Apply exactly once per raw value.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a parameter value for vCard serialization.
///
/// Uses RFC 6868 caret encoding for `^`, newline and `"`. Other control
/// characters have no caret form; they are kept and the value is quoted.
/// Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => {
                result.push_str("^'");
                needs_quotes = true;
            }
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {
                result.push(c);
                needs_quotes = true;
            }
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello"), "hello");
    }

    #[test]
    fn escape_text_newline() {
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_text_windows_newline() {
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_text_lone_carriage_return_kept() {
        assert_eq!(escape_text("a\rb"), "a\rb");
    }

    #[test]
    fn escape_text_special() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }

    #[test]
    fn escape_text_twice_double_escapes() {
        assert_eq!(escape_text(&escape_text("a;b")), "a\\\\\\;b");
    }

    #[test]
    fn escape_param_no_quotes() {
        let (val, needs_quotes) = escape_param_value("simple");
        assert_eq!(val, "simple");
        assert!(!needs_quotes);
    }

    #[test]
    fn escape_param_with_colon() {
        let (val, needs_quotes) = escape_param_value("value:with:colons");
        assert_eq!(val, "value:with:colons");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_with_newline() {
        let (val, _) = escape_param_value("line1\nline2");
        assert_eq!(val, "line1^nline2");
    }

    #[test]
    fn escape_param_with_quote() {
        let (val, needs_quotes) = escape_param_value("say \"hello\"");
        assert_eq!(val, "say ^'hello^'");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_keeps_control_characters() {
        let (val, needs_quotes) = escape_param_value("a\tb\rc");
        assert_eq!(val, "a\tb\rc");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_with_caret() {
        let (val, _) = escape_param_value("a^b");
        assert_eq!(val, "a^^b");
    }
}
