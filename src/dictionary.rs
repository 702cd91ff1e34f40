//! # CPE Dictionary
//!
//! Loads a CPE dictionary document and extracts the mapping from CPE name to
//! title.
//!
//! ## Sources
//!
//! A [`Source`] is either a local file or a remote URL. The transport is
//! chosen by the address scheme: `http`/`https` are fetched, `file` URLs and
//! plain paths are read from disk. When no source is given, [`load`] tries
//! `./cpe-dictionary.xml` first and falls back to the published default at
//! [`DEFAULT_DICTIONARY_URL`].
//!
//! ## Document shape
//!
//! ```xml
//! <cpe-list xmlns="http://cpe.mitre.org/dictionary/2.0">
//!   <cpe-item name="cpe:/o:redhat:enterprise_linux:7">
//!     <title>Red Hat Enterprise Linux 7</title>
//!   </cpe-item>
//! </cpe-list>
//! ```
//!
//! Every child element of the document element with a `name` attribute is
//! an entry; its title is the text of the first `title` child.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use reqwest::blocking::Client;
use url::Url;
use xot::Xot;

use crate::defaults::{
    local_dictionary_path, DEFAULT_DICTIONARY_URL, DICTIONARY_NAMESPACE, HTTP_TIMEOUT,
};
use crate::error::{Error, Result};

/// Where a dictionary document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(Url),
}

impl Source {
    /// Interprets a `--xml` argument.
    ///
    /// `http` and `https` URLs are remote and `file` URLs map to their path.
    /// Anything else, including strings that merely look like a scheme such
    /// as a Windows drive letter, is a local path.
    pub fn from_arg(arg: &str) -> Self {
        match Url::parse(arg) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Source::Local(path),
                Err(()) => Source::Local(PathBuf::from(arg)),
            },
            _ => Source::Local(PathBuf::from(arg)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// CPE names mapped to their titles, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
    origin: String,
}

impl Dictionary {
    /// Parses a dictionary document. `origin` names the source in messages.
    pub fn from_xml(xml: &str, origin: &str) -> Result<Self> {
        let xml_error = |e: &dyn fmt::Display| {
            debug!("XML parser error in {}: {}", origin, e);
            Error::XmlParse {
                origin: origin.to_string(),
            }
        };

        let mut xot = Xot::new();
        let dictionary_ns = xot.add_namespace(DICTIONARY_NAMESPACE);
        let title_ns = xot.add_name_ns("title", dictionary_ns);
        let title_plain = xot.add_name("title");
        let name_attr = xot.add_name("name");

        let document = xot.parse(xml).map_err(|e| xml_error(&e))?;
        let root = xot.document_element(document).map_err(|e| xml_error(&e))?;

        let mut entries = BTreeMap::new();
        for item in xot.children(root) {
            if xot.element(item).is_none() {
                continue;
            }
            let Some(name) = xot.get_attribute(item, name_attr) else {
                debug!("Skipping dictionary element without a name attribute");
                continue;
            };

            let title = xot
                .children(item)
                .find(|child| {
                    xot.element(*child)
                        .is_some_and(|el| el.name() == title_ns || el.name() == title_plain)
                })
                .and_then(|title| xot.text_content_str(title))
                .map(|text| text.trim().to_string());

            let title = title.unwrap_or_else(|| {
                warn!("Dictionary entry {} has no title", name);
                String::new()
            });

            if entries.insert(name.to_string(), title).is_some() {
                debug!("Duplicate dictionary entry {}; keeping the last one", name);
            }
        }

        Ok(Self {
            entries,
            origin: origin.to_string(),
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Title for a CPE name.
    pub fn get(&self, cpe: &str) -> Option<&str> {
        self.entries.get(cpe).map(String::as_str)
    }

    /// Entries as `(name, title)` in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    /// Where the document was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// Iterator over dictionary entries.
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Loads the dictionary from `source`, or from the default locations when
/// `source` is `None`.
pub fn load(source: Option<&str>) -> Result<Dictionary> {
    match source {
        Some(arg) => load_from(&Source::from_arg(arg)),
        None => load_default(),
    }
}

/// Loads the dictionary from an explicit source.
pub fn load_from(source: &Source) -> Result<Dictionary> {
    let origin = source.to_string();
    let xml = match source {
        Source::Local(path) => read_local(path)?,
        Source::Remote(url) => fetch(url).map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?,
    };
    Dictionary::from_xml(&xml, &origin)
}

fn load_default() -> Result<Dictionary> {
    let local = local_dictionary_path();
    match fs::read_to_string(&local) {
        Ok(xml) => match Dictionary::from_xml(&xml, &local.display().to_string()) {
            Ok(dictionary) => return Ok(dictionary),
            Err(e) => warn!("{}; trying {}", e, DEFAULT_DICTIONARY_URL),
        },
        Err(e) => info!(
            "No usable {} ({}); fetching {}",
            local.display(),
            e,
            DEFAULT_DICTIONARY_URL
        ),
    }

    let url = Url::parse(DEFAULT_DICTIONARY_URL).map_err(|e| Error::NoDictionarySource {
        message: e.to_string(),
    })?;
    let xml = fetch(&url).map_err(|e| Error::NoDictionarySource {
        message: e.to_string(),
    })?;
    Dictionary::from_xml(&xml, url.as_str())
}

fn read_local(path: &Path) -> Result<String> {
    debug!("Reading dictionary from {}", path.display());
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.display().to_string(),
        },
        _ => Error::Io(e),
    })
}

/// Single best-effort GET; any transport error or non-success status fails.
fn fetch(url: &Url) -> std::result::Result<String, reqwest::Error> {
    info!("Fetching dictionary from {}", url);
    let client = Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    client.get(url.clone()).send()?.error_for_status()?.text()
}
