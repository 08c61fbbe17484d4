//! XML namespace handling for PLATEAU CityGML documents
//!
//! CityGML 2.0 modules have fixed namespace URIs, but the i-UR extension
//! vocabularies (`uro:` for urban objects, `urf:` for urban functions) have
//! been published under several URIs over the years. A [`Namespace`] binding
//! is built per document: it starts from [`BASE_NS`] and binds the canonical
//! `uro` / `urf` prefixes to whichever version the document declares.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// GML namespace URI
pub const GML_NS: &str = "http://www.opengis.net/gml";

/// Fixed prefix to namespace table shared by every document
///
/// The versioned `uroNN` / `urfNN` prefixes let the rule registry address every
/// published spelling of an i-UR tag.
pub const BASE_NS: &[(&str, &str)] = &[
    // GML
    ("gml", GML_NS),
    // CityGML 2.0
    ("core", "http://www.opengis.net/citygml/2.0"),
    ("app", "http://www.opengis.net/citygml/appearance/2.0"),
    ("bldg", "http://www.opengis.net/citygml/building/2.0"),
    ("brid", "http://www.opengis.net/citygml/bridge/2.0"),
    ("dem", "http://www.opengis.net/citygml/relief/2.0"),
    ("frn", "http://www.opengis.net/citygml/cityfurniture/2.0"),
    ("gen", "http://www.opengis.net/citygml/generics/2.0"),
    ("grp", "http://www.opengis.net/citygml/cityobjectgroup/2.0"),
    ("luse", "http://www.opengis.net/citygml/landuse/2.0"),
    ("tran", "http://www.opengis.net/citygml/transportation/2.0"),
    ("veg", "http://www.opengis.net/citygml/vegetation/2.0"),
    ("wtr", "http://www.opengis.net/citygml/waterbody/2.0"),
    ("tun", "http://www.opengis.net/citygml/tunnel/2.0"),
    // i-UR
    (
        "uro14",
        "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/uro/1.4",
    ),
    (
        "urf14",
        "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/urf/1.4",
    ),
    (
        "uro15",
        "https://www.chisou.go.jp/tiiki/toshisaisei/itoshisaisei/iur/uro/1.5",
    ),
    (
        "urf15",
        "https://www.chisou.go.jp/tiiki/toshisaisei/itoshisaisei/iur/urf/1.5",
    ),
    ("uro2", "https://www.geospatial.jp/iur/uro/2.0"),
    ("urf2", "https://www.geospatial.jp/iur/urf/2.0"),
    ("uro3", "https://www.geospatial.jp/iur/uro/3.0"),
    ("urf3", "https://www.geospatial.jp/iur/urf/3.0"),
];

/// Look up a prefix in the fixed base table
pub fn base_namespace(prefix: &str) -> Option<&'static str> {
    BASE_NS
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// A version-ambiguous i-UR extension vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Urban objects (`uro:`)
    Uro,
    /// Urban functions (`urf:`)
    Urf,
}

impl Vocabulary {
    /// All version-ambiguous vocabularies
    pub const ALL: [Vocabulary; 2] = [Vocabulary::Uro, Vocabulary::Urf];

    /// Canonical prefix used in rule paths
    pub fn prefix(&self) -> &'static str {
        match self {
            Vocabulary::Uro => "uro",
            Vocabulary::Urf => "urf",
        }
    }

    /// Namespace URI of the newest known version
    pub fn latest_namespace(&self) -> &'static str {
        match self {
            Vocabulary::Uro => "https://www.geospatial.jp/iur/uro/3.0",
            Vocabulary::Urf => "https://www.geospatial.jp/iur/urf/3.0",
        }
    }

    /// Historical URI prefixes under which versions of this vocabulary were published
    pub fn known_uri_prefixes(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::Uro => &[
                "https://www.geospatial.jp/iur/uro/",
                "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/uro/",
                "https://www.chisou.go.jp/tiiki/toshisaisei/itoshisaisei/iur/uro/",
            ],
            Vocabulary::Urf => &[
                "https://www.geospatial.jp/iur/urf/",
                "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/urf/",
                "https://www.chisou.go.jp/tiiki/toshisaisei/itoshisaisei/iur/urf/",
            ],
        }
    }

    /// Versioned prefixes from [`BASE_NS`], oldest first
    pub fn versioned_prefixes(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::Uro => &["uro14", "uro15", "uro2", "uro3"],
            Vocabulary::Urf => &["urf14", "urf15", "urf2", "urf3"],
        }
    }

    /// Get the vocabulary a canonical or versioned prefix belongs to
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.prefix() == prefix || v.versioned_prefixes().contains(&prefix))
    }

    /// Get the vocabulary a declared namespace URI belongs to
    pub fn from_namespace(uri: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.known_uri_prefixes().iter().any(|p| uri.starts_with(p)))
    }
}

/// Per-document prefix to namespace binding
///
/// Immutable once built. Every prefix maps to exactly one URI; a URI shared
/// by the canonical and a versioned prefix (e.g. `uro` and `uro3`) maps back
/// to the canonical one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    nsmap: HashMap<String, String>,
    inverted: HashMap<String, String>,
}

impl Namespace {
    fn with_bindings<'a>(update: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut nsmap: HashMap<String, String> = BASE_NS
            .iter()
            .map(|(p, uri)| (p.to_string(), uri.to_string()))
            .collect();
        let update: Vec<(String, String)> = update
            .into_iter()
            .map(|(p, uri)| (p.to_string(), uri.to_string()))
            .collect();

        let mut inverted: HashMap<String, String> =
            nsmap.iter().map(|(p, uri)| (uri.clone(), p.clone())).collect();
        for (prefix, uri) in update {
            inverted.insert(uri.clone(), prefix.clone());
            nsmap.insert(prefix, uri);
        }

        Self { nsmap, inverted }
    }

    /// Binding with both i-UR vocabularies at their latest version
    pub fn latest() -> Self {
        Self::resolve(std::iter::empty::<&str>())
    }

    /// Build a binding from the namespace URIs a document declares
    ///
    /// Never fails: a vocabulary whose URI is not declared, or is declared in
    /// an unknown form, is bound to its latest version.
    pub fn resolve<'a>(declared: impl IntoIterator<Item = &'a str>) -> Self {
        let mut detected: HashMap<Vocabulary, &'a str> = HashMap::new();
        for uri in declared {
            if let Some(vocabulary) = Vocabulary::from_namespace(uri) {
                detected.insert(vocabulary, uri);
            }
        }

        let bindings: Vec<(&str, &str)> = Vocabulary::ALL
            .into_iter()
            .map(|v| {
                let uri = detected.get(&v).copied().unwrap_or(v.latest_namespace());
                (v.prefix(), uri)
            })
            .collect();
        Self::with_bindings(bindings)
    }

    /// Build a binding from the namespaces declared on a document's root element
    pub fn from_document(doc: &roxmltree::Document<'_>) -> Self {
        Self::resolve(doc.root_element().namespaces().map(|ns| ns.uri()))
    }

    /// Get the namespace URI bound to a prefix
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.nsmap.get(prefix).map(String::as_str)
    }

    /// Get the preferred prefix for a namespace URI
    pub fn prefix(&self, uri: &str) -> Option<&str> {
        self.inverted.get(uri).map(String::as_str)
    }

    /// Namespace URI a version-ambiguous vocabulary is bound to
    pub fn vocabulary_uri(&self, vocabulary: Vocabulary) -> &str {
        self.uri(vocabulary.prefix())
            .unwrap_or(vocabulary.latest_namespace())
    }

    /// Convert `prefix:Local` into `{uri}Local`
    ///
    /// Names without a prefix are returned unchanged.
    pub fn to_qualified_name(&self, prefixed_name: &str) -> Result<String> {
        match prefixed_name.split_once(':') {
            Some((prefix, local)) => {
                let uri = self
                    .uri(prefix)
                    .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
                Ok(format!("{{{}}}{}", uri, local))
            }
            None => Ok(prefixed_name.to_string()),
        }
    }

    /// Convert `{uri}Local` into `prefix:Local`
    ///
    /// Names without a namespace are returned unchanged.
    pub fn to_prefixed_name(&self, qualified_name: &str) -> Result<String> {
        let Some(rest) = qualified_name.strip_prefix('{') else {
            return Ok(qualified_name.to_string());
        };
        let (uri, local) = rest
            .split_once('}')
            .ok_or_else(|| Error::InvalidXml(format!("Malformed qualified name '{}'", qualified_name)))?;
        let prefix = self
            .prefix(uri)
            .ok_or_else(|| Error::UnknownNamespace(uri.to_string()))?;
        Ok(format!("{}:{}", prefix, local))
    }

    /// Prefixed name of an element
    ///
    /// Elements in a namespace outside the binding are spelled `{uri}Local`.
    pub fn element_name(&self, node: roxmltree::Node<'_, '_>) -> String {
        let tag = node.tag_name();
        match tag.namespace() {
            Some(uri) => match self.prefix(uri) {
                Some(prefix) => format!("{}:{}", prefix, tag.name()),
                None => format!("{{{}}}{}", uri, tag.name()),
            },
            None => tag.name().to_string(),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::latest()
    }
}

/// `{uri}Local` spelling of an element name
pub fn qualified_tag(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        Some(uri) => format!("{{{}}}{}", uri, tag.name()),
        None => tag.name().to_string(),
    }
}

/// Strip the namespace prefix of a `prefix:Local` name
pub fn get_local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
