//! Feature rule types
//!
//! A [`FeatureRule`] declares how one feature type is read: which element tags
//! it matches, which attributes to pull from where, where its geometry lives
//! per LOD, and which child elements are features of their own. Rules are
//! plain `'static` data so the bundled catalogue can be written as constants.

/// Datatype of an extracted attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// Text of the first match, optionally resolved through a code list
    String,
    /// Text of every match, each resolved through a code list
    StringList,
    /// Integer parsed from the first match
    Integer,
    /// Floating-point number parsed from the first match
    Double,
    /// Floating-point number parsed from every match
    DoubleList,
    /// `true`, `True` or `1` in the first match
    Boolean,
    /// ISO-8601 calendar date in the first match
    Date,
    /// Nested attribute tree
    Object,
    /// List of nested attribute trees
    ObjectList,
    /// Structured (xAL) address, all descendant text joined
    Address,
}

impl Datatype {
    /// Name of this datatype as used in table definitions
    pub fn name(&self) -> &'static str {
        match self {
            Datatype::String => "string",
            Datatype::StringList => "[]string",
            Datatype::Integer => "integer",
            Datatype::Double => "double",
            Datatype::DoubleList => "[]double",
            Datatype::Boolean => "boolean",
            Datatype::Date => "date",
            Datatype::Object => "object",
            Datatype::ObjectList => "[]object",
            Datatype::Address => "xAL",
        }
    }
}

/// Static code table reference of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codelist {
    /// No static table; only a `codeSpace` on the element can resolve codes
    None,
    /// One table for every tag the rule matches
    Named(&'static str),
    /// Table selected by the prefixed tag of the element being read
    ByTag(&'static [(&'static str, &'static str)]),
}

impl Codelist {
    /// Check whether a static table is referenced
    pub fn is_some(&self) -> bool {
        !matches!(self, Codelist::None)
    }

    /// Table name for an element spelled `tag` (e.g. `uro:BuildingTsunamiRiskAttribute`)
    ///
    /// Versioned i-UR spellings (`uro2:...`) fall back to the canonical prefix.
    pub fn table_for(&self, tag: &str) -> Option<&'static str> {
        match self {
            Codelist::None => None,
            Codelist::Named(name) => Some(*name),
            Codelist::ByTag(entries) => {
                let find = |t: &str| entries.iter().find(|(k, _)| *k == t).map(|(_, v)| *v);
                find(tag).or_else(|| {
                    let (prefix, local) = tag.split_once(':')?;
                    let vocabulary = crate::namespace::Vocabulary::from_prefix(prefix)?;
                    find(&format!("{}:{}", vocabulary.prefix(), local))
                })
            }
        }
    }

    /// Every table name this reference can resolve to
    pub fn table_names(&self) -> Vec<&'static str> {
        match self {
            Codelist::None => Vec::new(),
            Codelist::Named(name) => vec![*name],
            Codelist::ByTag(entries) => entries.iter().map(|(_, v)| *v).collect(),
        }
    }
}

/// One attribute to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    /// Key in the record's attribute map
    pub name: &'static str,
    /// Element path relative to the group's base element
    pub path: &'static str,
    /// How the matched text is converted
    pub datatype: Datatype,
    /// Static code table for coded values
    pub codelist: Codelist,
}

impl AttributeRule {
    /// Attribute without a static code table
    pub const fn new(name: &'static str, path: &'static str, datatype: Datatype) -> Self {
        Self {
            name,
            path,
            datatype,
            codelist: Codelist::None,
        }
    }

    /// Attribute resolved through the static table `table`
    pub const fn coded(name: &'static str, path: &'static str, datatype: Datatype, table: &'static str) -> Self {
        Self {
            name,
            path,
            datatype,
            codelist: Codelist::Named(table),
        }
    }

    /// Attribute whose static table depends on the matched tag
    pub const fn coded_by_tag(
        name: &'static str,
        path: &'static str,
        datatype: Datatype,
        tables: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            path,
            datatype,
            codelist: Codelist::ByTag(tables),
        }
    }
}

/// Attributes read relative to a common base element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeGroup {
    /// Path to the base element; `None` means the feature element itself.
    /// The group is skipped when the path matches nothing.
    pub base_element: Option<&'static str>,
    /// Attributes of the group, in output order
    pub attributes: &'static [AttributeRule],
}

impl AttributeGroup {
    /// Group anchored at the feature element
    pub const fn direct(attributes: &'static [AttributeRule]) -> Self {
        Self {
            base_element: None,
            attributes,
        }
    }

    /// Group anchored at a sub-element
    pub const fn at(base_element: &'static str, attributes: &'static [AttributeRule]) -> Self {
        Self {
            base_element: Some(base_element),
            attributes,
        }
    }
}

/// Geometry paths of one LOD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LodRule {
    /// Paths whose presence marks the LOD as available
    pub lod_detection: &'static [&'static str],
    /// Paths collecting all geometry below the feature (no decomposition)
    pub collect_all: &'static [&'static str],
    /// Paths collecting only the feature's own geometry (decomposition on)
    pub only_direct: Option<&'static [&'static str]>,
    /// Geometry is two-dimensional by convention (heights are zero)
    pub is2d: bool,
}

impl LodRule {
    /// LOD rule without a direct-only path set
    pub const fn new(lod_detection: &'static [&'static str], collect_all: &'static [&'static str]) -> Self {
        Self {
            lod_detection,
            collect_all,
            only_direct: None,
            is2d: false,
        }
    }

    /// Set the direct-only path set
    pub const fn only_direct(mut self, paths: &'static [&'static str]) -> Self {
        self.only_direct = Some(paths);
        self
    }

    /// Mark the geometry as two-dimensional
    pub const fn is2d(mut self) -> Self {
        self.is2d = true;
        self
    }

    /// Path set to assemble, depending on whether semantic parts are split off
    pub fn geometry_paths(&self, decompose: bool) -> &'static [&'static str] {
        match (decompose, self.only_direct) {
            (true, Some(direct)) => direct,
            _ => self.collect_all,
        }
    }
}

/// How the available LODs of a feature are determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodRules {
    /// One optional rule per LOD 0 to 4, tested by presence
    PerLod([Option<LodRule>; 5]),
    /// A single geometry whose LOD is written as an integer at `lod_path`
    Explicit {
        /// Path to the element holding the LOD value
        lod_path: &'static str,
        /// Geometry paths for whichever LOD is declared
        geometry: LodRule,
    },
}

impl LodRules {
    /// No geometry at any LOD
    pub const NONE: LodRules = LodRules::PerLod([None; 5]);
}

/// Geometry extraction of a feature type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryRules {
    /// Geometry per LOD
    pub lods: LodRules,
    /// Paths to child elements processed as features of their own when
    /// decomposition is enabled
    pub semantic_parts: &'static [&'static str],
}

impl GeometryRules {
    /// No geometry and no semantic parts
    pub const NONE: GeometryRules = GeometryRules {
        lods: LodRules::NONE,
        semantic_parts: &[],
    };

    /// Geometry rules with one optional rule per LOD
    pub const fn per_lod(lods: [Option<LodRule>; 5]) -> Self {
        Self {
            lods: LodRules::PerLod(lods),
            semantic_parts: &[],
        }
    }

    /// Set the semantic part paths
    pub const fn semantic_parts(mut self, paths: &'static [&'static str]) -> Self {
        self.semantic_parts = paths;
        self
    }
}

/// A column of the table a sink creates for records of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Column name
    pub name: &'static str,
    /// Column datatype
    pub datatype: Datatype,
}

/// Extraction rule of one feature type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRule {
    /// Unique identifier
    pub id: &'static str,
    /// Display name (e.g. for layer names)
    pub name: &'static str,
    /// Prefixed tags this rule matches (`uro:` / `urf:` are expanded to all versions)
    pub target_elements: &'static [&'static str],
    /// Attributes to extract
    pub attribute_groups: &'static [AttributeGroup],
    /// Geometry to extract
    pub geometries: GeometryRules,
    /// Read `gen:*` generic attributes
    pub load_generic_attributes: bool,
    /// Container of DM (public survey) attributes
    pub dm_attr_container_path: Option<&'static str>,
    /// Container of facility identifier attributes
    pub facility_id_container_path: Option<&'static str>,
    /// Container of disaster risk attributes
    pub disaster_risk_attr_container_path: Option<&'static str>,
    /// Other paths whose matches are emitted as attribute-only child features
    pub nested_attributes: &'static [&'static str],
    /// Attribute container without geometry, always emitted
    pub non_geometric: bool,
}

impl FeatureRule {
    /// Rule matching nothing, used as the base of struct update syntax
    pub const DEFAULT: FeatureRule = FeatureRule {
        id: "",
        name: "",
        target_elements: &[],
        attribute_groups: &[],
        geometries: GeometryRules::NONE,
        load_generic_attributes: false,
        dm_attr_container_path: None,
        facility_id_container_path: None,
        disaster_risk_attr_container_path: None,
        nested_attributes: &[],
        non_geometric: false,
    };

    /// Rule for LOD `lod`, if the rule tests LODs by presence
    pub fn lod_rule(&self, lod: usize) -> Option<&LodRule> {
        match &self.geometries.lods {
            LodRules::PerLod(lods) => lods.get(lod).and_then(Option::as_ref),
            LodRules::Explicit { .. } => None,
        }
    }

    /// Every attribute of every group, in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &'static AttributeRule> + '_ {
        self.attribute_groups.iter().flat_map(|g| g.attributes.iter())
    }

    /// Ordered field list of records produced by this rule
    ///
    /// Each attribute name appears once, at its first declaration.
    pub fn fields(&self) -> Vec<FieldDefinition> {
        let mut fields = vec![
            FieldDefinition { name: "id", datatype: Datatype::String },
            FieldDefinition { name: "type", datatype: Datatype::String },
            FieldDefinition { name: "name", datatype: Datatype::String },
            FieldDefinition { name: "creationDate", datatype: Datatype::Date },
            FieldDefinition { name: "terminationDate", datatype: Datatype::Date },
        ];
        if self.load_generic_attributes {
            fields.push(FieldDefinition { name: "generic", datatype: Datatype::Object });
        }
        for attr in self.attributes() {
            if !fields.iter().any(|f| f.name == attr.name) {
                fields.push(FieldDefinition {
                    name: attr.name,
                    datatype: attr.datatype,
                });
            }
        }
        fields
    }

    /// Attribute names declared more than once with different datatypes
    pub fn conflicting_fields(&self) -> Vec<&'static str> {
        let mut seen: Vec<(&'static str, Datatype)> = Vec::new();
        let mut conflicts = Vec::new();
        for attr in self.attributes() {
            match seen.iter().find(|(n, _)| *n == attr.name) {
                Some((_, dt)) if *dt != attr.datatype => conflicts.push(attr.name),
                Some(_) => {}
                None => seen.push((attr.name, attr.datatype)),
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRS: &[AttributeRule] = &[
        AttributeRule::coded("class", "./bldg:class", Datatype::String, "Building_class"),
        AttributeRule::new("measuredHeight", "./bldg:measuredHeight", Datatype::Double),
        AttributeRule::new("class", "./bldg:class", Datatype::String),
    ];

    const RULE: FeatureRule = FeatureRule {
        id: "test",
        name: "Test",
        target_elements: &["bldg:Building"],
        attribute_groups: &[AttributeGroup::direct(ATTRS)],
        load_generic_attributes: true,
        ..FeatureRule::DEFAULT
    };

    #[test]
    fn test_fields_deduplicate_attribute_names() {
        let names: Vec<_> = RULE.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "type",
                "name",
                "creationDate",
                "terminationDate",
                "generic",
                "class",
                "measuredHeight"
            ]
        );
        assert!(RULE.conflicting_fields().is_empty());
    }

    #[test]
    fn test_field_definitions_carry_datatypes() {
        let fields = RULE.fields();
        let height = fields.iter().find(|f| f.name == "measuredHeight").copied();
        assert_eq!(
            height,
            Some(FieldDefinition { name: "measuredHeight", datatype: Datatype::Double })
        );
        assert_eq!(fields.iter().find(|f| f.name == "class").map(|f| f.datatype), Some(Datatype::String));
    }

    #[test]
    fn test_conflicting_field_types() {
        const BAD: &[AttributeRule] = &[
            AttributeRule::new("height", "./a:height", Datatype::Double),
            AttributeRule::new("height", "./b:height", Datatype::String),
        ];
        let rule = FeatureRule {
            attribute_groups: const { &[AttributeGroup::direct(BAD)] },
            ..FeatureRule::DEFAULT
        };
        assert_eq!(rule.conflicting_fields(), vec!["height"]);
    }

    #[test]
    fn test_codelist_by_tag_accepts_versioned_prefix() {
        const TABLES: &[(&str, &str)] = &[
            ("uro:BuildingTsunamiRiskAttribute", "BuildingTsunamiRiskAttribute_rank"),
            ("uro:TsunamiRiskAttribute", "TsunamiRiskAttribute_rank"),
        ];
        let codelist = Codelist::ByTag(TABLES);
        assert_eq!(
            codelist.table_for("uro:TsunamiRiskAttribute"),
            Some("TsunamiRiskAttribute_rank")
        );
        assert_eq!(
            codelist.table_for("uro2:BuildingTsunamiRiskAttribute"),
            Some("BuildingTsunamiRiskAttribute_rank")
        );
        assert_eq!(codelist.table_for("bldg:Building"), None);
        assert_eq!(codelist.table_names().len(), 2);
    }

    #[test]
    fn test_geometry_paths_selection() {
        let lod = LodRule::new(&["./bldg:lod2Solid"], &["./bldg:lod2Solid//gml:Polygon", "./bldg:boundedBy//gml:Polygon"])
            .only_direct(&["./bldg:lod2Solid//gml:Polygon"]);
        assert_eq!(lod.geometry_paths(false).len(), 2);
        assert_eq!(lod.geometry_paths(true), &["./bldg:lod2Solid//gml:Polygon"]);

        let plain = LodRule::new(&["./bldg:lod1Solid"], &["./bldg:lod1Solid//gml:Polygon"]);
        assert_eq!(plain.geometry_paths(true), plain.collect_all);
    }
}
