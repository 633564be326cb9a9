//! vCard value unescaping and splitting.

use std::borrow::Cow;

/// Unescapes a vCard text value.
///
/// Single-character escapes: `\n`/`\N` (newline), `\t`, `\r`, `\a`, `\b`,
/// `\v`, `\f`, `\e`, and the literals `\\`, `\,`, `\;`, `\"`. Extended forms:
/// `\uXXXX` (one code point; surrogate pairs are joined) and `\xXX` or
/// `\0xXX` (one byte). Runs of byte escapes are decoded as UTF-8 when valid,
/// otherwise byte-for-byte as Latin-1.
///
/// Unrecognized escapes keep both the backslash and the character, and a
/// trailing lone backslash is kept. Input without a backslash is borrowed.
#[must_use]
pub fn unescape_text(s: &str) -> Cow<'_, str> {
    if s.len() <= 1 || !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut bytes = Vec::new();
    let mut rest = s;

    while let Some(pos) = rest.find('\\') {
        if pos > 0 {
            flush_bytes(&mut bytes, &mut result);
            result.push_str(&rest[..pos]);
        }

        let after = &rest[pos + 1..];
        let consumed = match decode_escape(after) {
            Escape::Char(c, consumed) => {
                flush_bytes(&mut bytes, &mut result);
                result.push(c);
                consumed
            }
            Escape::Byte(b, consumed) => {
                bytes.push(b);
                consumed
            }
            Escape::Literal(consumed) => {
                flush_bytes(&mut bytes, &mut result);
                result.push('\\');
                result.push_str(&after[..consumed]);
                consumed
            }
        };
        rest = &after[consumed..];
    }

    flush_bytes(&mut bytes, &mut result);
    result.push_str(rest);

    Cow::Owned(result)
}

/// Splits a value block on semicolons not escaped by a backslash.
///
/// The segments are returned still escaped. An empty block has no values.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    split_unescaped(s, ';')
}

/// Splits on `delimiter` wherever it is not escaped by a backslash.
///
/// The pieces are returned still escaped; an empty input yields one empty
/// piece.
#[must_use]
pub fn split_unescaped(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delimiter {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Result of decoding the text after a backslash.
enum Escape {
    /// A decoded character and the bytes consumed after the backslash.
    Char(char, usize),
    /// A decoded raw byte and the bytes consumed after the backslash.
    Byte(u8, usize),
    /// Not an escape; keep the backslash and this many following bytes.
    Literal(usize),
}

fn decode_escape(after: &str) -> Escape {
    let Some(c) = after.chars().next() else {
        return Escape::Literal(0);
    };

    if let Some(replacement) = single_char_escape(c) {
        return Escape::Char(replacement, 1);
    }

    match c {
        'u' => decode_unicode(after),
        'x' => hex_byte(&after[1..]).map_or(Escape::Literal(1), |b| Escape::Byte(b, 3)),
        '0' if after[1..].starts_with('x') => {
            hex_byte(&after[2..]).map_or(Escape::Literal(1), |b| Escape::Byte(b, 4))
        }
        _ => {
            tracing::debug!(escape = %c, "Unrecognized escape sequence kept literally");
            Escape::Literal(c.len_utf8())
        }
    }
}

const fn single_char_escape(c: char) -> Option<char> {
    match c {
        'n' | 'N' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'v' => Some('\x0b'),
        'f' => Some('\x0c'),
        'e' => Some('\x1b'),
        '\\' | ',' | ';' | '"' => Some(c),
        _ => None,
    }
}

/// Decodes `uXXXX` (with `after` starting at the `u`).
fn decode_unicode(after: &str) -> Escape {
    let Some(high) = hex_u16(&after[1..]) else {
        tracing::debug!("Invalid \\u escape kept literally");
        return Escape::Literal(1);
    };

    if (0xD800..0xDC00).contains(&high)
        && let Some(low) = after[5..].strip_prefix("\\u").and_then(hex_u16)
        && (0xDC00..0xE000).contains(&low)
    {
        let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
        if let Some(c) = char::from_u32(code) {
            return Escape::Char(c, 11);
        }
    }

    char::from_u32(u32::from(high)).map_or_else(
        || {
            tracing::warn!(code = high, "Lone surrogate in \\u escape");
            Escape::Char(char::REPLACEMENT_CHARACTER, 5)
        },
        |c| Escape::Char(c, 5),
    )
}

fn hex_u16(s: &str) -> Option<u16> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

fn hex_byte(s: &str) -> Option<u8> {
    let digits = s.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

fn flush_bytes(bytes: &mut Vec<u8>, result: &mut String) {
    if bytes.is_empty() {
        return;
    }

    match String::from_utf8(std::mem::take(bytes)) {
        Ok(text) => result.push_str(&text),
        Err(err) => result.extend(err.into_bytes().into_iter().map(char::from)),
    }
}
