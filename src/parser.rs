//! CityGML document parsing
//!
//! [`CityGmlParser`] parses one document and hands out its feature records
//! lazily through [`CityGmlParser::city_objects`]. Each top-level city object
//! member is processed completely, children included, before any of its
//! records is yielded; a [`CancellationToken`] is consulted before a member is
//! started, never in the middle of one.
//!
//! # Example
//!
//! ```no_run
//! use plateau_citygml::{CityGmlParser, CityGmlSource, ParserSettings};
//!
//! # fn main() -> plateau_citygml::Result<()> {
//! let source = CityGmlSource::from_path("udx/bldg/53394525_bldg_6697_op.gml")?;
//! let settings = ParserSettings::new().with_semantic_parts(true);
//! let parser = CityGmlParser::new(&source, settings)?;
//!
//! println!("{} top-level features", parser.count_toplevel_city_objects());
//! for item in parser.city_objects() {
//!     let (index, obj) = item?;
//!     println!("#{} {} {:?}", index, obj.layer_id(), obj.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod appearance;
pub mod attributes;
pub mod geometry;
pub mod path;
mod walker;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};

use crate::codelist::CodelistStore;
use crate::error::Result;
use crate::model::{Appearance, CityObject};
use crate::namespace::Namespace;
use crate::registry::{Registry, default_registry};

use walker::Walker;

const CORE_NS: &str = "http://www.opengis.net/citygml/2.0";

/// Options of a parsing session
///
/// Serializable so hosts can persist it; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Emit semantic parts (wall surfaces, traffic areas, ...) as features of
    /// their own instead of folding their geometry into the parent
    pub load_semantic_parts: bool,
    /// LODs 0 to 4 to extract
    pub target_lods: [bool; 5],
    /// Emit only the first LOD found per feature
    pub only_first_found_lod: bool,
    /// Visit LODs from lowest to highest instead of highest to lowest
    pub lowest_lod_first: bool,
    /// Resolve materials and textures
    pub load_appearance: bool,
    /// Expand DM (public survey) attribute containers
    pub load_dm: bool,
    /// Emit an attribute-only record for features without geometry at any LOD
    pub emit_geometryless_features: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            load_semantic_parts: false,
            target_lods: [true; 5],
            only_first_found_lod: false,
            lowest_lod_first: false,
            load_appearance: false,
            load_dm: false,
            emit_geometryless_features: true,
        }
    }
}

impl ParserSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable semantic part decomposition
    pub fn with_semantic_parts(mut self, enabled: bool) -> Self {
        self.load_semantic_parts = enabled;
        self
    }

    /// Set the LOD mask
    pub fn with_target_lods(mut self, lods: [bool; 5]) -> Self {
        self.target_lods = lods;
        self
    }

    /// Enable or disable a single LOD; LODs above 4 are ignored
    pub fn with_lod(mut self, lod: usize, enabled: bool) -> Self {
        if let Some(slot) = self.target_lods.get_mut(lod) {
            *slot = enabled;
        }
        self
    }

    /// Emit only the first LOD found per feature
    pub fn with_only_first_found_lod(mut self, enabled: bool) -> Self {
        self.only_first_found_lod = enabled;
        self
    }

    /// Visit LODs in ascending order
    pub fn with_lowest_lod_first(mut self, enabled: bool) -> Self {
        self.lowest_lod_first = enabled;
        self
    }

    /// Enable or disable material and texture resolution
    pub fn with_appearance(mut self, enabled: bool) -> Self {
        self.load_appearance = enabled;
        self
    }

    /// Enable or disable DM attribute expansion
    pub fn with_dm(mut self, enabled: bool) -> Self {
        self.load_dm = enabled;
        self
    }

    /// Emit or suppress attribute-only records of features without geometry
    pub fn with_geometryless_features(mut self, enabled: bool) -> Self {
        self.emit_geometryless_features = enabled;
        self
    }
}

/// Cooperative cancellation flag shared between a consumer and an iterator
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Text of a CityGML document and the directory its code lists are resolved against
#[derive(Debug, Clone)]
pub struct CityGmlSource {
    text: String,
    base_dir: PathBuf,
}

impl CityGmlSource {
    /// Read a document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self { text, base_dir })
    }

    /// Use an in-memory document
    pub fn from_string(text: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Directory supplementary code lists are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// A parsed CityGML document
pub struct CityGmlParser<'input> {
    doc: Document<'input>,
    base_dir: PathBuf,
    ns: Namespace,
    registry: Arc<Registry>,
    settings: ParserSettings,
    appearance: Option<Appearance>,
    cancellation: CancellationToken,
}

impl<'input> CityGmlParser<'input> {
    /// Parse a document with the bundled rule catalogue
    ///
    /// The i-UR version is detected from the namespaces declared on the root
    /// element. The appearance index is built here when enabled.
    pub fn new(source: &'input CityGmlSource, settings: ParserSettings) -> Result<Self> {
        let doc = Document::parse(&source.text)?;
        let ns = Namespace::from_document(&doc);
        let appearance = if settings.load_appearance {
            Some(appearance::build_appearance(&doc, &ns)?)
        } else {
            None
        };
        Ok(Self {
            doc,
            base_dir: source.base_dir.clone(),
            ns,
            registry: default_registry(),
            settings,
            appearance,
            cancellation: CancellationToken::new(),
        })
    }

    /// Use a custom rule registry
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    /// Stop iteration before the next top-level member once `token` is cancelled
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Namespace binding detected for the document
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Appearance index, when appearance loading is enabled
    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }

    /// Settings of this session
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Rule registry in use
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn members(&self) -> impl Iterator<Item = Node<'_, 'input>> {
        self.doc.root_element().children().filter(|n| {
            n.is_element() && n.tag_name().namespace() == Some(CORE_NS) && n.tag_name().name() == "cityObjectMember"
        })
    }

    /// Number of `core:cityObjectMember` elements, for progress reporting
    pub fn count_toplevel_city_objects(&self) -> usize {
        self.members().count()
    }

    /// Iterate over `(top-level index, record)` pairs in emission order
    ///
    /// Each call starts a fresh session with its own code list cache.
    pub fn city_objects(&self) -> CityObjectIter<'_, 'input> {
        let members: Vec<(usize, Node<'_, 'input>)> = self
            .members()
            .enumerate()
            .flat_map(|(index, member)| member.children().filter(|n| n.is_element()).map(move |n| (index, n)))
            .collect();
        CityObjectIter {
            parser: self,
            codelists: CodelistStore::new(self.base_dir.clone()),
            members: members.into(),
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

/// Lazy sequence of feature records
///
/// Yields an error at most once, after which it is exhausted. Records already
/// yielded stay valid.
pub struct CityObjectIter<'p, 'input> {
    parser: &'p CityGmlParser<'input>,
    codelists: CodelistStore,
    members: VecDeque<(usize, Node<'p, 'input>)>,
    pending: VecDeque<(usize, Arc<CityObject>)>,
    finished: bool,
}

impl CityObjectIter<'_, '_> {
    /// Code list store of this session
    pub fn codelists(&self) -> &CodelistStore {
        &self.codelists
    }
}

impl Iterator for CityObjectIter<'_, '_> {
    type Item = Result<(usize, Arc<CityObject>)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(Ok(item));
            }
            if self.finished {
                return None;
            }
            if self.parser.cancellation.is_cancelled() {
                log::debug!("Parsing cancelled with {} members left", self.members.len());
                self.finished = true;
                return None;
            }
            let Some((index, element)) = self.members.pop_front() else {
                self.finished = true;
                return None;
            };

            let walker = Walker {
                registry: &self.parser.registry,
                ns: &self.parser.ns,
                codelists: &self.codelists,
                appearance: self.parser.appearance.as_ref(),
                settings: &self.parser.settings,
            };
            let mut records = Vec::new();
            if let Err(e) = walker.process(element, None, &mut records) {
                self.finished = true;
                return Some(Err(e));
            }
            self.pending.extend(records.into_iter().map(|r| (index, r)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ParserSettings::default();
        assert_eq!(settings.target_lods, [true; 5]);
        assert!(settings.emit_geometryless_features);
        assert!(!settings.load_semantic_parts);
        assert!(!settings.only_first_found_lod);
    }

    #[test]
    fn test_settings_builder() {
        let settings = ParserSettings::new()
            .with_semantic_parts(true)
            .with_lod(0, false)
            .with_lod(7, false)
            .with_only_first_found_lod(true)
            .with_dm(true);
        assert_eq!(settings.target_lods, [false, true, true, true, true]);
        assert!(settings.load_semantic_parts && settings.only_first_found_lod && settings.load_dm);
    }

    #[test]
    fn test_settings_json_fills_defaults() {
        let settings: ParserSettings = serde_json::from_str(r#"{"load_semantic_parts": true}"#).unwrap();
        assert!(settings.load_semantic_parts);
        assert_eq!(settings.target_lods, [true; 5]);

        let json = serde_json::to_string(&settings).unwrap();
        let back: ParserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_cancellation_token_is_shared() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_count_and_malformed_document() {
        let source = CityGmlSource::from_string(
            r#"<core:CityModel xmlns:core="http://www.opengis.net/citygml/2.0">
                <core:cityObjectMember/><core:cityObjectMember/></core:CityModel>"#,
            ".",
        );
        let parser = CityGmlParser::new(&source, ParserSettings::default()).unwrap();
        assert_eq!(parser.count_toplevel_city_objects(), 2);
        assert_eq!(parser.city_objects().count(), 0);

        let broken = CityGmlSource::from_string("<core:CityModel", ".");
        assert!(matches!(
            CityGmlParser::new(&broken, ParserSettings::default()),
            Err(crate::Error::Xml(_))
        ));
    }
}
