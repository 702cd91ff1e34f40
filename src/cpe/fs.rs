//! CPE 2.3 formatted string binding (`cpe:2.3:…`).

use super::wfn::check_value;
use super::Component;

pub(super) const PREFIX: &str = "cpe:2.3:";

pub(super) fn unbind(input: &str) -> Result<[Component; 11], String> {
    let fields = split_fields(&input[PREFIX.len()..]);
    if fields.len() != 11 {
        return Err(format!("expected 11 attributes, found {}", fields.len()));
    }

    let mut components: [Component; 11] = Default::default();
    for (slot, field) in components.iter_mut().zip(fields) {
        *slot = unbind_value(field)?;
    }
    Ok(components)
}

/// Splits on colons that are not escaped with a backslash.
fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(11);
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ':' => {
                fields.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&body[start..]);
    fields
}

fn unbind_value(field: &str) -> Result<Component, String> {
    match field {
        "*" => return Ok(Component::Any),
        "-" => return Ok(Component::Na),
        "" => return Err("empty attribute".to_string()),
        _ => {}
    }

    let mut out = String::with_capacity(field.len() + 4);
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            '-' | '.' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => {
                out.push('\\');
                match chars.next() {
                    Some(next) => out.push(next),
                    None => return Err(format!("dangling escape in '{}'", field)),
                }
            }
            '*' | '?' => out.push(c),
            c => return Err(format!("'{}' must be escaped in '{}'", c, field)),
        }
    }

    check_value(&out)?;
    Ok(Component::Value(out))
}

pub(super) fn bind(components: &[Component; 11]) -> String {
    let fields = components
        .iter()
        .map(bind_value)
        .collect::<Vec<_>>()
        .join(":");
    format!("{}{}", PREFIX, fields)
}

fn bind_value(component: &Component) -> String {
    let value = match component {
        Component::Any => return "*".to_string(),
        Component::Na => return "-".to_string(),
        Component::Value(value) => value,
    };

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(q @ ('-' | '.' | '_')) => out.push(q),
                Some(q) => {
                    out.push('\\');
                    out.push(q);
                }
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}
