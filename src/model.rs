//! Data structures for rules, records, geometry and appearance

mod appearance;
mod feature;
mod geometry;
mod rule;

pub use appearance::{Appearance, Material, Texture};

pub use feature::{Attributes, CityObject, Value};

pub use geometry::{Coord, Geometry, Polygon, Uv};

pub use rule::{
    AttributeGroup, AttributeRule, Codelist, Datatype, FeatureRule, FieldDefinition,
    GeometryRules, LodRule, LodRules,
};
