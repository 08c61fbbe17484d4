//! # plateau-citygml
//!
//! Schema-driven feature extraction for PLATEAU CityGML 3D city models.
//!
//! A CityGML document is walked feature by feature. Each recognised feature
//! element is matched against a [`FeatureRule`] from a [`Registry`]; the rule
//! says which attributes to read, where the geometry of each LOD lives, and
//! which child elements (wall surfaces, risk attributes, ...) become features
//! of their own. The result is a lazy sequence of flat [`CityObject`] records
//! that a sink can turn into layers or tables.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Bundled rule catalogue covering buildings, bridges, tunnels,
//!   transportation, land use, vegetation, water bodies, city furniture,
//!   underground utilities, urban planning zones, relief and disaster risk
//!   attributes
//! - i-UR versions 1.4 to 3.x detected per document
//! - Code list resolution through bundled tables and the document's own
//!   dictionaries
//! - Polygon, line and point geometry with optional materials and textures
//!
//! ## Example
//!
//! ```no_run
//! use plateau_citygml::{CityGmlParser, CityGmlSource, ParserSettings};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CityGmlSource::from_path("udx/bldg/53394525_bldg_6697_op.gml")?;
//! let parser = CityGmlParser::new(&source, ParserSettings::default())?;
//!
//! for item in parser.city_objects() {
//!     let (_, obj) = item?;
//!     if let Some(geometry) = &obj.geometry {
//!         println!("{} has {} vertices", obj.layer_id(), geometry.vertex_count());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalogue;
pub mod codelist;
pub mod error;
pub mod model;
pub mod namespace;
pub mod parser;
pub mod registry;

pub use codelist::{CodelistStore, StaticTables};
pub use error::{Error, ErrorContext, Result};
pub use model::{
    Appearance, AttributeGroup, AttributeRule, Attributes, CityObject, Codelist, Coord, Datatype,
    FeatureRule, FieldDefinition, Geometry, GeometryRules, LodRule, LodRules, Material, Polygon,
    Texture, Uv, Value,
};
pub use namespace::Namespace;
pub use parser::{CancellationToken, CityGmlParser, CityGmlSource, CityObjectIter, ParserSettings};
pub use registry::{Registry, default_registry};
