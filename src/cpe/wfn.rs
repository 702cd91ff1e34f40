//! Well-formed name (WFN) values and the `wfn:[…]` textual form.

use super::{Attribute, Component};

pub(super) const PREFIX: &str = "wfn:[";

/// Characters that may follow a backslash: printable ASCII punctuation.
fn is_quotable(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Characters that may appear unquoted in a value body.
fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal,
    Star,
    Question,
}

/// Checks a string value in WFN form.
///
/// A value is a non-empty body of plain or quoted characters, optionally
/// preceded and followed by either a single unquoted `*` or a run of
/// unquoted `?`.
pub(super) fn check_value(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("empty value".to_string());
    }

    let mut tokens = Vec::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) if is_quotable(next) => tokens.push(Token::Literal),
                Some(next) => return Err(format!("'{}' must not be escaped in '{}'", next, value)),
                None => return Err(format!("dangling escape in '{}'", value)),
            },
            '*' => tokens.push(Token::Star),
            '?' => tokens.push(Token::Question),
            c if is_plain(c) => tokens.push(Token::Literal),
            c => return Err(format!("invalid character '{}' in '{}'", c, value)),
        }
    }

    let leading = wildcard_run(&tokens);
    let rest = &tokens[leading..];
    let trailing = wildcard_run_rev(rest);
    let body = &rest[..rest.len() - trailing];

    if body.is_empty() {
        return Err(format!("'{}' has wildcards but no value", value));
    }
    if body.iter().any(|t| *t != Token::Literal) {
        return Err(format!("embedded wildcard in '{}'", value));
    }
    Ok(())
}

/// Length of the wildcard prefix: one `*` or any number of `?`.
fn wildcard_run(tokens: &[Token]) -> usize {
    match tokens.first() {
        Some(Token::Star) => 1,
        Some(Token::Question) => tokens.iter().take_while(|t| **t == Token::Question).count(),
        _ => 0,
    }
}

fn wildcard_run_rev(tokens: &[Token]) -> usize {
    match tokens.last() {
        Some(Token::Star) => 1,
        Some(Token::Question) => tokens
            .iter()
            .rev()
            .take_while(|t| **t == Token::Question)
            .count(),
        _ => 0,
    }
}

/// Renders the listed attributes as `wfn:[name=value,…]`.
pub(super) fn bind(components: &[Component; 11], attributes: &[Attribute]) -> String {
    let body = attributes
        .iter()
        .map(|attr| {
            let value = match &components[attr.index()] {
                Component::Any => "ANY".to_string(),
                Component::Na => "NA".to_string(),
                Component::Value(v) => format!("\"{}\"", v),
            };
            format!("{}={}", attr.wfn_name(), value)
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("wfn:[{}]", body)
}

/// Parses the `wfn:[…]` textual form. Attributes not listed are `ANY`.
pub(super) fn unbind(input: &str) -> Result<[Component; 11], String> {
    let body = input[PREFIX.len()..]
        .strip_suffix(']')
        .ok_or_else(|| "missing closing ']'".to_string())?;

    let mut components: [Component; 11] = Default::default();
    let mut seen = [false; 11];

    for pair in split_pairs(body)? {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected name=value, found '{}'", pair))?;
        let attr = Attribute::from_wfn_name(name.trim())
            .ok_or_else(|| format!("unknown attribute '{}'", name.trim()))?;
        if std::mem::replace(&mut seen[attr.index()], true) {
            return Err(format!("duplicate attribute '{}'", attr));
        }

        components[attr.index()] = match raw.trim() {
            "ANY" => Component::Any,
            "NA" => Component::Na,
            quoted => {
                let value = quoted
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| format!("{} must be ANY, NA or a quoted string", attr))?;
                check_value(value)?;
                Component::Value(value.to_string())
            }
        };
    }

    Ok(components)
}

/// Splits on commas that are outside quotes and not escaped.
fn split_pairs(body: &str) -> Result<Vec<&str>, String> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                pairs.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_quotes {
        return Err("unterminated quoted value".to_string());
    }
    pairs.push(&body[start..]);
    Ok(pairs)
}
