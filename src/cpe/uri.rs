//! URI binding (`cpe:/part:vendor:product:version:update:edition:language`).

use super::wfn::check_value;
use super::{Attribute, Component, CpeVersion};

pub(super) const PREFIX: &str = "cpe:/";

/// Parses a URI. Under 2.3 the `%01`/`%02` wildcards and a `~`-packed
/// edition are understood; under 2.2 both are rejected or taken literally.
pub(super) fn unbind(input: &str, version: CpeVersion) -> Result<[Component; 11], String> {
    let body = &input[PREFIX.len()..];
    let mut components: [Component; 11] = Default::default();
    if body.is_empty() {
        return Ok(components);
    }

    let raw: Vec<&str> = body.split(':').collect();
    if raw.len() > 7 {
        return Err(format!("too many components: found {}, at most 7", raw.len()));
    }

    for (attr, value) in Attribute::ALL.into_iter().zip(raw) {
        if attr == Attribute::Edition && version == CpeVersion::V2_3 && value.starts_with('~') {
            let packed: Vec<&str> = value.split('~').collect();
            if packed.len() != 6 {
                return Err(format!("malformed packed edition '{}'", value));
            }
            let targets = [
                Attribute::Edition,
                Attribute::SwEdition,
                Attribute::TargetSw,
                Attribute::TargetHw,
                Attribute::Other,
            ];
            for (target, part) in targets.into_iter().zip(&packed[1..]) {
                components[target.index()] = decode(part, version)?;
            }
        } else {
            components[attr.index()] = decode(value, version)?;
        }
    }

    Ok(components)
}

fn decode(raw: &str, version: CpeVersion) -> Result<Component, String> {
    match raw {
        "" => return Ok(Component::Any),
        "-" => return Ok(Component::Na),
        _ => {}
    }

    let mut out = String::with_capacity(raw.len());
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            '.' | '-' | '~' => {
                out.push('\\');
                out.push(c);
            }
            '%' => {
                let code = raw
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .ok_or_else(|| format!("truncated percent-encoding in '{}'", raw))?;
                match (code, version) {
                    ("01", CpeVersion::V2_3) => out.push('?'),
                    ("02", CpeVersion::V2_3) => out.push('*'),
                    ("01" | "02", CpeVersion::V2_2) => {
                        return Err(format!("wildcard %{} is not permitted in CPE 2.2", code));
                    }
                    _ => {
                        let decoded = u8::from_str_radix(code, 16)
                            .map(char::from)
                            .map_err(|e| e.to_string())?;
                        if !decoded.is_ascii_punctuation() {
                            return Err(format!("invalid percent-encoding %{} in '{}'", code, raw));
                        }
                        out.push('\\');
                        out.push(decoded);
                    }
                }
                i += 2;
            }
            c => return Err(format!("invalid character '{}' in '{}'", c, raw)),
        }
        i += 1;
    }

    check_value(&out)?;
    Ok(Component::Value(out))
}

/// Renders a URI, trimming trailing empty components.
pub(super) fn bind(components: &[Component; 11]) -> String {
    let extended = [
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    let mut parts: Vec<String> = Attribute::ALL[..7]
        .iter()
        .map(|attr| encode(&components[attr.index()]))
        .collect();

    if extended.iter().any(|attr| !components[attr.index()].is_any()) {
        let packed = std::iter::once(Attribute::Edition)
            .chain(extended)
            .map(|attr| encode(&components[attr.index()]))
            .collect::<Vec<_>>()
            .join("~");
        parts[Attribute::Edition.index()] = format!("~{}", packed);
    }

    let uri = format!("{}{}", PREFIX, parts.join(":"));
    uri.trim_end_matches(':').to_string()
}

fn encode(component: &Component) -> String {
    let value = match component {
        Component::Any => return String::new(),
        Component::Na => return "-".to_string(),
        Component::Value(value) => value,
    };

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(q @ ('-' | '.')) => out.push(q),
                Some(q) => out.push_str(&format!("%{:02x}", q as u32)),
                None => {}
            },
            '?' => out.push_str("%01"),
            '*' => out.push_str("%02"),
            c => out.push(c),
        }
    }
    out
}
