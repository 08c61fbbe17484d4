//! Flat feature records

use std::sync::Arc;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::geometry::Geometry;
use super::rule::{FeatureRule, FieldDefinition, LodRules};

/// Attribute value
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Text, possibly resolved through a code list
    String(String),
    /// List of texts
    StringList(Vec<String>),
    /// Integer
    Integer(i64),
    /// Floating-point number
    Double(f64),
    /// List of floating-point numbers
    DoubleList(Vec<f64>),
    /// Boolean
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Nested attributes (generic attribute sets)
    Object(Attributes),
}

impl Value {
    /// Text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of an integer or double
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Nested attributes of an object value
    pub fn as_object(&self) -> Option<&Attributes> {
        match self {
            Value::Object(attrs) => Some(attrs),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Insertion-ordered attribute map
///
/// Serializes as a JSON object with keys in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A flat feature record
///
/// Produced once per (element, LOD) pair with geometry, plus one record
/// without geometry for attribute containers and for parents of split-off
/// child features. Records are immutable and shared through `Arc`.
#[derive(Debug, Clone)]
pub struct CityObject {
    /// Selected LOD; `None` for records without geometry
    pub lod: Option<u8>,
    /// Prefixed tag of the element (e.g. `bldg:Building`)
    pub feature_type: String,
    /// `gml:id`
    pub id: Option<String>,
    /// `gml:name`, resolved through its code space if it has one
    pub name: Option<String>,
    /// `gml:description`
    pub description: Option<String>,
    /// `core:creationDate`
    pub creation_date: Option<NaiveDate>,
    /// `core:terminationDate`
    pub termination_date: Option<NaiveDate>,
    /// Extracted attributes, shared by all records of the same element
    pub attributes: Arc<Attributes>,
    /// Geometry at `lod`
    pub geometry: Option<Geometry>,
    /// Rule that produced the record
    pub rule: Arc<FeatureRule>,
    /// Record of the feature this one was split off from
    pub parent: Option<Arc<CityObject>>,
}

impl CityObject {
    /// Whether the record's geometry is two-dimensional by convention
    pub fn is_2d(&self) -> bool {
        let Some(lod) = self.lod else {
            return false;
        };
        match &self.rule.geometries.lods {
            LodRules::PerLod(_) => self.rule.lod_rule(lod as usize).is_some_and(|r| r.is2d),
            LodRules::Explicit { geometry, .. } => geometry.is2d,
        }
    }

    /// Ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = &CityObject> {
        std::iter::successors(self.parent.as_deref(), |p| p.parent.as_deref())
    }

    /// Rule names from the top-level feature down to this record
    ///
    /// e.g. `"Building / WallSurface"`
    pub fn layer_path(&self) -> String {
        let mut names: Vec<&str> = self.ancestors().map(|p| p.rule.name).collect();
        names.reverse();
        names.push(self.rule.name);
        names.join(" / ")
    }

    /// Layer key combining the layer path, LOD and geometry kind
    ///
    /// Records without geometry are keyed `"<path> (NoGeometry)"`.
    pub fn layer_id(&self) -> String {
        match (&self.geometry, self.lod) {
            (Some(geometry), Some(lod)) => {
                format!("{} (LOD{}, {})", self.layer_path(), lod, geometry.type_name())
            }
            _ => format!("{} (NoGeometry)", self.layer_path()),
        }
    }

    /// Table definition of records produced by the same rule
    pub fn fields(&self) -> Vec<FieldDefinition> {
        self.rule.fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rule::{GeometryRules, LodRule};

    const PARENT_RULE: FeatureRule = FeatureRule {
        id: "bldg",
        name: "Building",
        ..FeatureRule::DEFAULT
    };

    const CHILD_RULE: FeatureRule = FeatureRule {
        id: "bldg_boundary",
        name: "WallSurface",
        geometries: GeometryRules::per_lod([
            Some(LodRule::new(&["./bldg:lod0RoofEdge"], &["./bldg:lod0RoofEdge//gml:Polygon"]).is2d()),
            None,
            None,
            None,
            None,
        ]),
        ..FeatureRule::DEFAULT
    };

    fn record(rule: FeatureRule, lod: Option<u8>, parent: Option<Arc<CityObject>>) -> CityObject {
        CityObject {
            lod,
            feature_type: "bldg:Building".to_string(),
            id: None,
            name: None,
            description: None,
            creation_date: None,
            termination_date: None,
            attributes: Arc::new(Attributes::new()),
            geometry: lod.map(|_| Geometry::Points(vec![[0.0, 0.0, 0.0]])),
            rule: Arc::new(rule),
            parent,
        }
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.insert("b", Value::Integer(1));
        attrs.insert("a", Value::from("x"));
        attrs.insert("b", Value::Integer(2));
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(attrs.get("b"), Some(&Value::Integer(2)));
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"b":2,"a":"x"}"#
        );
    }

    #[test]
    fn test_date_serializes_as_iso_string() {
        let attrs: Attributes = [(
            "surveyDate",
            Value::Date(NaiveDate::from_ymd_opt(2021, 3, 31).unwrap()),
        )]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"surveyDate":"2021-03-31"}"#
        );
    }

    #[test]
    fn test_layer_naming() {
        let parent = Arc::new(record(PARENT_RULE, None, None));
        let child = record(CHILD_RULE, Some(0), Some(parent.clone()));
        assert_eq!(parent.layer_id(), "Building (NoGeometry)");
        assert_eq!(child.layer_path(), "Building / WallSurface");
        assert_eq!(child.layer_id(), "Building / WallSurface (LOD0, MultiPoint)");
        assert!(child.is_2d());
        assert!(!parent.is_2d());
        assert_eq!(child.ancestors().count(), 1);
    }
}
