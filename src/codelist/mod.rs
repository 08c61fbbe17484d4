//! Code list lookup
//!
//! Coded attribute values (`<uro:buildingStructureType codeSpace="...">610</...>`)
//! are resolved to labels from two sources:
//!
//! - the bundled static tables ([`StaticTables`]), one per enumeration name,
//!   loaded once per process and shared read-only between sessions
//! - supplementary `gml:Dictionary` files shipped with a distribution, found
//!   through the element's `codeSpace` attribute relative to the document
//!
//! Lookups never fail. Unknown codes and unreadable dictionaries pass the raw
//! code through unchanged.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{Error, Result};

/// Mapping from raw code to label
pub type CodeTable = HashMap<String, String>;

const BUNDLED_TABLES: &str = include_str!("codelists.json");

static BUNDLED: LazyLock<Arc<StaticTables>> = LazyLock::new(|| {
    match StaticTables::from_json(BUNDLED_TABLES) {
        Ok(tables) => Arc::new(tables),
        Err(e) => {
            log::warn!("Bundled code tables could not be loaded: {}", e);
            Arc::new(StaticTables::default())
        }
    }
});

/// Named static code tables
#[derive(Debug, Clone, Default)]
pub struct StaticTables {
    tables: HashMap<String, CodeTable>,
}

impl StaticTables {
    /// Parse tables from a JSON object of `{ table: { code: label } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: HashMap<String, CodeTable> = serde_json::from_str(json)
            .map_err(|e| Error::InvalidCatalogue(format!("Malformed code tables: {}", e)))?;
        Ok(Self { tables })
    }

    /// The tables bundled with the crate
    pub fn bundled() -> Arc<StaticTables> {
        Arc::clone(&BUNDLED)
    }

    /// Add or replace a table
    pub fn with_table<I, K, V>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.tables.insert(name.into(), table);
        self
    }

    /// Get a table by name
    pub fn get(&self, name: &str) -> Option<&CodeTable> {
        self.tables.get(name)
    }

    /// Check whether a table exists
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check whether there are no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Per-session code list resolver
///
/// Supplementary dictionaries are parsed at most once per path and cached for
/// the lifetime of the store. The store is not shared between threads; each
/// parsing session owns its own.
#[derive(Debug)]
pub struct CodelistStore {
    base_dir: PathBuf,
    tables: Arc<StaticTables>,
    cache: RefCell<HashMap<String, Option<CodeTable>>>,
    loads: Cell<usize>,
}

impl CodelistStore {
    /// Create a store resolving supplementary paths against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_tables(base_dir, StaticTables::bundled())
    }

    /// Create a store with a custom set of static tables
    pub fn with_tables(base_dir: impl Into<PathBuf>, tables: Arc<StaticTables>) -> Self {
        Self {
            base_dir: base_dir.into(),
            tables,
            cache: RefCell::new(HashMap::new()),
            loads: Cell::new(0),
        }
    }

    /// Directory supplementary paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Static tables consulted by this store
    pub fn tables(&self) -> &StaticTables {
        &self.tables
    }

    /// Number of supplementary dictionaries read from disk so far
    pub fn dictionary_loads(&self) -> usize {
        self.loads.get()
    }

    /// Resolve a code to its label
    ///
    /// Resolution order: a cached supplementary dictionary for `path`, then the
    /// static table `table`, then the supplementary dictionary (loaded and
    /// cached on first use). Falls back to `code` itself.
    pub fn lookup(&self, table: Option<&str>, path: Option<&str>, code: &str) -> String {
        if let Some(path) = path
            && let Some(cached) = self.cache.borrow().get(path)
        {
            return match cached {
                Some(dictionary) => dictionary.get(code).cloned().unwrap_or_else(|| code.to_string()),
                None => code.to_string(),
            };
        }

        let predefined = table.and_then(|name| self.tables.get(name));
        if let Some(label) = predefined.and_then(|t| t.get(code)) {
            return label.clone();
        }

        let Some(path) = path else {
            return code.to_string();
        };

        let dictionary = self.load_dictionary(path, predefined);
        let label = dictionary
            .as_ref()
            .and_then(|d| d.get(code))
            .cloned()
            .unwrap_or_else(|| code.to_string());
        self.cache.borrow_mut().insert(path.to_string(), dictionary);
        label
    }

    fn load_dictionary(&self, path: &str, predefined: Option<&CodeTable>) -> Option<CodeTable> {
        let decoded = urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_string());
        let full_path = self.base_dir.join(decoded);
        self.loads.set(self.loads.get() + 1);

        let content = match std::fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Code list {} could not be read: {}", full_path.display(), e);
                return None;
            }
        };

        match parse_dictionary(&content) {
            Ok(entries) => {
                log::debug!(
                    "Loaded code list {} ({} entries)",
                    full_path.display(),
                    entries.len()
                );
                let mut dictionary = predefined.cloned().unwrap_or_default();
                dictionary.extend(entries);
                Some(dictionary)
            }
            Err(e) => {
                log::warn!("Code list {} could not be parsed: {}", full_path.display(), e);
                None
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Description,
}

/// Parse a `gml:Dictionary` document into a code table
///
/// Each `gml:Definition` inside a `gml:dictionaryEntry` contributes one entry
/// mapping its `gml:name` to its `gml:description`. Ideographic spaces in
/// descriptions are normalized to ASCII spaces.
pub fn parse_dictionary(xml: &str) -> Result<CodeTable> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut table = CodeTable::new();
    let mut buf = Vec::new();
    let mut entry_depth = 0usize;
    let mut in_definition = false;
    let mut field: Option<Field> = None;
    let mut name = String::new();
    let mut description = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"dictionaryEntry" => entry_depth += 1,
                b"Definition" if entry_depth > 0 => {
                    in_definition = true;
                    name.clear();
                    description.clear();
                }
                b"name" if in_definition => field = Some(Field::Name),
                b"description" if in_definition => field = Some(Field::Description),
                _ => {}
            },
            Event::Text(ref t) => {
                if let Some(current) = field {
                    let text = t.unescape().map_err(|e| Error::InvalidXml(e.to_string()))?;
                    match current {
                        Field::Name => name.push_str(&text),
                        Field::Description => description.push_str(&text),
                    }
                }
            }
            Event::CData(ref t) => {
                if let Some(current) = field {
                    let text = String::from_utf8_lossy(t.as_ref());
                    match current {
                        Field::Name => name.push_str(&text),
                        Field::Description => description.push_str(&text),
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"dictionaryEntry" => entry_depth = entry_depth.saturating_sub(1),
                b"Definition" if in_definition => {
                    in_definition = false;
                    let label = description.replace('\u{3000}', " ").trim().to_string();
                    table.insert(name.trim().to_string(), label);
                }
                b"name" | b"description" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const USAGE_DICTIONARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gml:Dictionary xmlns:gml="http://www.opengis.net/gml" gml:id="Building_usage">
  <gml:name>Building_usage</gml:name>
  <gml:dictionaryEntry>
    <gml:Definition gml:id="id1">
      <gml:description>Residential</gml:description>
      <gml:name>1</gml:name>
    </gml:Definition>
  </gml:dictionaryEntry>
  <gml:dictionaryEntry>
    <gml:Definition gml:id="id2">
      <gml:description>共同住宅　集合</gml:description>
      <gml:name>2</gml:name>
    </gml:Definition>
  </gml:dictionaryEntry>
</gml:Dictionary>"#;

    #[test]
    fn test_parse_dictionary() {
        let table = parse_dictionary(USAGE_DICTIONARY).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["1"], "Residential");
        assert_eq!(table["2"], "共同住宅 集合");
    }

    #[test]
    fn test_lookup_without_any_table_passes_through() {
        let store = CodelistStore::with_tables(".", Arc::new(StaticTables::default()));
        assert_eq!(store.lookup(None, None, "X"), "X");
        assert_eq!(store.lookup(Some("NoSuchTable"), None, "X"), "X");
        assert_eq!(store.dictionary_loads(), 0);
    }

    #[test]
    fn test_static_table_lookup() {
        let tables = StaticTables::default().with_table("Building_usage", [("411", "業務施設")]);
        let store = CodelistStore::with_tables(".", Arc::new(tables));
        assert_eq!(store.lookup(Some("Building_usage"), None, "411"), "業務施設");
        assert_eq!(store.lookup(Some("Building_usage"), None, "999"), "999");
    }

    #[test]
    fn test_supplementary_dictionary_is_cached() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("codelists")).unwrap();
        fs::write(dir.path().join("codelists/Building_usage.xml"), USAGE_DICTIONARY).unwrap();

        let store = CodelistStore::with_tables(dir.path(), Arc::new(StaticTables::default()));
        let first = store.lookup(None, Some("codelists/Building_usage.xml"), "1");
        let second = store.lookup(None, Some("codelists/Building_usage.xml"), "1");
        assert_eq!(first, "Residential");
        assert_eq!(first, second);
        assert_eq!(store.dictionary_loads(), 1);
    }

    #[test]
    fn test_missing_dictionary_caches_passthrough() {
        let dir = tempdir().unwrap();
        let store = CodelistStore::with_tables(dir.path(), Arc::new(StaticTables::default()));
        assert_eq!(store.lookup(None, Some("missing.xml"), "7"), "7");
        assert_eq!(store.lookup(None, Some("missing.xml"), "8"), "8");
        assert_eq!(store.dictionary_loads(), 1);
    }

    #[test]
    fn test_dictionary_is_seeded_with_static_table() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("usage.xml"), USAGE_DICTIONARY).unwrap();
        let tables = StaticTables::default().with_table("Building_usage", [("9", "Other")]);
        let store = CodelistStore::with_tables(dir.path(), Arc::new(tables));

        assert_eq!(store.lookup(Some("Building_usage"), Some("usage.xml"), "1"), "Residential");
        // served from the cached dictionary, which carries the static entries
        assert_eq!(store.lookup(None, Some("usage.xml"), "9"), "Other");
    }

    #[test]
    fn test_percent_encoded_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("my codes.xml"), USAGE_DICTIONARY).unwrap();
        let store = CodelistStore::with_tables(dir.path(), Arc::new(StaticTables::default()));
        assert_eq!(store.lookup(None, Some("my%20codes.xml"), "1"), "Residential");
    }

    #[test]
    fn test_bundled_tables_load() {
        let tables = StaticTables::bundled();
        assert!(!tables.is_empty());
        assert!(tables.contains("Building_usage"));
    }
}
