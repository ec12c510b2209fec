//! Element literal parsing.
//!
//! Literals take three shapes:
//!
//! | Literal | Element |
//! |---------|---------|
//! | `4.5` | [`SingleElement`] |
//! | `[1, 2, 3]`, `[]` | [`ArrayElement`] |
//! | `"Hello \x02"` | [`StringElement`] |
//!
//! Strings understand the escapes `\\`, `\"`, `\n`, `\t` and `\xHH` for any
//! ASCII byte.  A collection is a `;`-separated list of literals; a `;`
//! inside a string literal does not split.

use vk_core::{Error, Real, Result};

use crate::element::{ArrayElement, SingleElement, StringElement};
use crate::variant::Element;

/// Parse one element literal.
///
/// # Errors
/// Returns [`Error::Parse`] if `s` is not a number, a bracketed list of
/// numbers, or a well-formed quoted string.
pub fn parse_element(s: &str) -> Result<Element> {
    let s = s.trim();
    if let Some(rest) = s.strip_prefix('[') {
        let inner = rest
            .strip_suffix(']')
            .ok_or_else(|| Error::Parse(format!("unterminated array literal `{s}`")))?;
        return parse_array(inner).map(Element::Array);
    }
    if let Some(rest) = s.strip_prefix('"') {
        let inner = rest
            .strip_suffix('"')
            .ok_or_else(|| Error::Parse(format!("unterminated string literal `{s}`")))?;
        return unescape(inner).map(|text| Element::String(StringElement::new(text)));
    }
    parse_real(s)
        .map(|v| Element::Single(SingleElement::new(v)))
        .map_err(|_| Error::Parse(format!("unrecognised element literal `{s}`")))
}

/// Parse a `;`-separated list of element literals.
///
/// Blank entries are skipped, so `"1; 2;"` yields two elements.
pub fn parse_collection(s: &str) -> Result<Vec<Element>> {
    split_literals(s)?
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .map(parse_element)
        .collect()
}

fn parse_real(s: &str) -> Result<Real> {
    s.trim()
        .parse::<Real>()
        .map_err(|e| Error::Parse(format!("invalid number `{}`: {e}", s.trim())))
}

fn parse_array(inner: &str) -> Result<ArrayElement> {
    if inner.trim().is_empty() {
        return Ok(ArrayElement::default());
    }
    inner
        .split(',')
        .map(parse_real)
        .collect::<Result<Vec<_>>>()
        .map(ArrayElement::new)
}

/// Split on `;` outside string literals.
fn split_literals(s: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ';' {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }
    if in_string {
        return Err(Error::Parse(format!("unterminated string literal in `{s}`")));
    }
    parts.push(&s[start..]);
    Ok(parts)
}

/// Decode the escapes of a string literal body.
pub fn unescape(body: &str) -> Result<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            return Err(Error::Parse(format!("unescaped `\"` in string `{body}`")));
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                if hex.len() != 2 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(Error::Parse(format!("invalid byte escape `\\x{hex}`")));
                }
                let byte = u8::from_str_radix(&hex, 16)
                    .ok()
                    .filter(u8::is_ascii)
                    .ok_or_else(|| Error::Parse(format!("invalid byte escape `\\x{hex}`")))?;
                out.push(char::from(byte));
            }
            Some(other) => return Err(Error::Parse(format!("unknown escape `\\{other}`"))),
            None => return Err(Error::Parse("dangling `\\` at end of string".into())),
        }
    }
    Ok(out)
}

/// Encode text so that [`unescape`] gives it back.
///
/// Control characters are written as `\xHH`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u8)),
            c => out.push(c),
        }
    }
    out
}
