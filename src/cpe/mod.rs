//! # CPE Naming
//!
//! Typed Common Platform Enumeration names, following the CPE 2.3 naming
//! specification (NISTIR 7695) and its CPE 2.2 predecessor.
//!
//! A [`Cpe`] holds the eleven attributes of a well-formed name (WFN). Each
//! attribute is a [`Component`]: the logical values `ANY` and `NA`, or a string
//! value kept in WFN form, where every character other than an ASCII letter,
//! digit or underscore is quoted with a backslash and unquoted `*` / `?` act
//! as wildcards.
//!
//! ## Bindings
//!
//! | Binding          | Example                                          | Versions |
//! |------------------|--------------------------------------------------|----------|
//! | URI              | `cpe:/o:redhat:enterprise_linux:7::server`       | 2.2, 2.3 |
//! | Formatted string | `cpe:2.3:o:redhat:enterprise_linux:7:*:server:*:*:*:*:*` | 2.3 |
//! | WFN              | `wfn:[part="o",vendor="redhat"]`                 | 2.3      |
//!
//! Names are parsed with [`Cpe::parse`] and rendered back with
//! [`Cpe::as_wfn`], [`Cpe::as_uri_2_3`] and [`Cpe::as_fs`].
//!
//! ```
//! use cpe_manager::cpe::{Cpe, CpeVersion};
//!
//! let cpe = Cpe::parse("cpe:/o:redhat:enterprise_linux:7::server", CpeVersion::V2_3).unwrap();
//! assert_eq!(cpe.vendor().unquoted(), "redhat");
//! assert_eq!(cpe.as_fs(), "cpe:2.3:o:redhat:enterprise_linux:7:*:server:*:*:*:*:*");
//! ```

mod fs;
mod uri;
mod wfn;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Language tags accepted by CPE 2.3 (RFC 5646 language with optional region).
static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(\\-([A-Za-z]{2}|[0-9]{3}))?$").expect("valid language regex")
});

/// Version of the CPE naming specification a name is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpeVersion {
    /// CPE 2.2: URI binding only, seven attributes, no wildcards.
    V2_2,
    /// CPE 2.3: URI, formatted string and WFN bindings, eleven attributes.
    V2_3,
}

impl CpeVersion {
    /// The attributes a name of this version can carry.
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            CpeVersion::V2_2 => &Attribute::ALL[..7],
            CpeVersion::V2_3 => &Attribute::ALL,
        }
    }
}

impl fmt::Display for CpeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpeVersion::V2_2 => write!(f, "2.2"),
            CpeVersion::V2_3 => write!(f, "2.3"),
        }
    }
}

impl FromStr for CpeVersion {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.2" => Ok(CpeVersion::V2_2),
            "2.3" => Ok(CpeVersion::V2_3),
            other => Err(crate::error::Error::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// The textual form a name was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// `cpe:/…`
    Uri,
    /// `cpe:2.3:…`
    FormattedString,
    /// `wfn:[…]`
    Wfn,
}

/// One of the eleven WFN attributes, in binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    /// All attributes in binding order.
    pub const ALL: [Attribute; 11] = [
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    /// Attribute name as written in a WFN.
    pub fn wfn_name(self) -> &'static str {
        match self {
            Attribute::Part => "part",
            Attribute::Vendor => "vendor",
            Attribute::Product => "product",
            Attribute::Version => "version",
            Attribute::Update => "update",
            Attribute::Edition => "edition",
            Attribute::Language => "language",
            Attribute::SwEdition => "sw_edition",
            Attribute::TargetSw => "target_sw",
            Attribute::TargetHw => "target_hw",
            Attribute::Other => "other",
        }
    }

    /// Looks up an attribute by its WFN name.
    pub fn from_wfn_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.wfn_name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wfn_name())
    }
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Component {
    /// Matches any value.
    #[default]
    Any,
    /// Not applicable.
    Na,
    /// A string value in WFN form (backslash-quoted punctuation).
    Value(String),
}

impl Component {
    /// The value with WFN quoting removed. Logical values render as `ANY` and `NA`.
    pub fn unquoted(&self) -> String {
        match self {
            Component::Any => "ANY".to_string(),
            Component::Na => "NA".to_string(),
            Component::Value(value) => {
                let mut out = String::with_capacity(value.len());
                let mut chars = value.chars();
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                    } else {
                        out.push(c);
                    }
                }
                out
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Component::Any)
    }

    /// True when this is the string value `expected` (compared unquoted).
    pub fn is_value(&self, expected: &str) -> bool {
        matches!(self, Component::Value(_)) && self.unquoted() == expected
    }
}

/// Errors raised while constructing a [`Cpe`].
///
/// The display form is the message shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CpeError {
    /// The input is not a binding supported by the requested version.
    #[error("Invalid CPE: {input}!")]
    Unsupported { input: String },

    /// The input uses a supported binding but a value is malformed.
    #[error("Invalid CPE: {input} ({reason})")]
    Malformed { input: String, reason: String },
}

/// A parsed CPE name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpe {
    version: CpeVersion,
    binding: Binding,
    components: [Component; 11],
}

impl Cpe {
    /// Parse `input` under the rules of the given naming version.
    ///
    /// CPE 2.2 accepts only the URI binding. CPE 2.3 accepts the formatted
    /// string, the URI binding (with wildcards and a packed edition) and the
    /// WFN textual form.
    pub fn parse(input: &str, version: CpeVersion) -> Result<Self, CpeError> {
        let (binding, parsed) = match version {
            CpeVersion::V2_2 if has_prefix(input, uri::PREFIX) => {
                (Binding::Uri, uri::unbind(input, version))
            }
            CpeVersion::V2_3 if has_prefix(input, fs::PREFIX) => {
                (Binding::FormattedString, fs::unbind(input))
            }
            CpeVersion::V2_3 if has_prefix(input, uri::PREFIX) => {
                (Binding::Uri, uri::unbind(input, version))
            }
            CpeVersion::V2_3 if has_prefix(input, wfn::PREFIX) => (Binding::Wfn, wfn::unbind(input)),
            _ => {
                return Err(CpeError::Unsupported {
                    input: input.to_string(),
                })
            }
        };

        let components = parsed
            .and_then(|components| check_components(&components, version).map(|()| components))
            .map_err(|reason| CpeError::Malformed {
                input: input.to_string(),
                reason,
            })?;

        Ok(Self {
            version,
            binding,
            components,
        })
    }

    /// Parse a CPE 2.2 URI.
    pub fn parse_2_2(input: &str) -> Result<Self, CpeError> {
        Self::parse(input, CpeVersion::V2_2)
    }

    /// Parse any CPE 2.3 binding.
    pub fn parse_2_3(input: &str) -> Result<Self, CpeError> {
        Self::parse(input, CpeVersion::V2_3)
    }

    /// The same attributes reinterpreted as a CPE 2.3 name.
    pub fn to_2_3(&self) -> Self {
        Self {
            version: CpeVersion::V2_3,
            ..self.clone()
        }
    }

    pub fn cpe_version(&self) -> CpeVersion {
        self.version
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    /// The value of a single attribute.
    pub fn get(&self, attribute: Attribute) -> &Component {
        &self.components[attribute.index()]
    }

    pub fn part(&self) -> &Component {
        self.get(Attribute::Part)
    }

    pub fn vendor(&self) -> &Component {
        self.get(Attribute::Vendor)
    }

    pub fn product(&self) -> &Component {
        self.get(Attribute::Product)
    }

    pub fn version(&self) -> &Component {
        self.get(Attribute::Version)
    }

    /// Render as a WFN, listing the attributes this name's version carries.
    pub fn as_wfn(&self) -> String {
        wfn::bind(&self.components, self.version.attributes())
    }

    /// Render with the URI binding, packing the extended 2.3 attributes into
    /// the edition component when any of them is set.
    pub fn as_uri_2_3(&self) -> String {
        uri::bind(&self.components)
    }

    /// Render as a CPE 2.3 formatted string.
    pub fn as_fs(&self) -> String {
        fs::bind(&self.components)
    }
}

impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wfn())
    }
}

fn has_prefix(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Attribute-level rules that hold regardless of the binding.
fn check_components(components: &[Component; 11], version: CpeVersion) -> Result<(), String> {
    match &components[Attribute::Part.index()] {
        Component::Any => {}
        Component::Value(part) if matches!(part.as_str(), "a" | "o" | "h") => {}
        Component::Value(part) => {
            return Err(format!("part must be one of a, o or h, not '{}'", part));
        }
        Component::Na => return Err("part cannot be NA".to_string()),
    }

    if version == CpeVersion::V2_3 {
        if let Component::Value(language) = &components[Attribute::Language.index()] {
            if !LANGUAGE_TAG.is_match(language) {
                return Err(format!(
                    "language '{}' is not a valid language tag",
                    Component::Value(language.clone()).unquoted()
                ));
            }
        }
    }

    Ok(())
}
