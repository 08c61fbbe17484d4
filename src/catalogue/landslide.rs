//! Sediment disaster prone areas (`urf:SedimentDisasterProneArea`)

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const SEDIMENT_DISASTER_PRONE_AREA: &[AttributeRule] = &[
    AttributeRule::coded("prefecture", "./urf:prefecture", Datatype::String, "Common_prefecture"),
    AttributeRule::new("location", "./urf:location", Datatype::String),
    AttributeRule::coded(
        "disasterType",
        "./urf:disasterType",
        Datatype::String,
        "SedimentDisasterProneArea_disasterType",
    ),
    AttributeRule::coded(
        "areaType",
        "./urf:areaType",
        Datatype::String,
        "SedimentDisasterProneArea_areaType",
    ),
    AttributeRule::coded("status", "./urf:status", Datatype::String, "SedimentDisasterProneArea_status"),
    AttributeRule::new("zoneName", "./urf:zoneName", Datatype::String),
    AttributeRule::new("zoneNumber", "./urf:zoneNumber", Datatype::String),
];

pub const RULES: &[FeatureRule] = &[FeatureRule {
    id: "urf:SedimentDisasterProneArea",
    name: "SedimentDisasterProneArea",
    target_elements: &["urf:SedimentDisasterProneArea"],
    attribute_groups: &[AttributeGroup::direct(SEDIMENT_DISASTER_PRONE_AREA)],
    geometries: GeometryRules::per_lod([
        None,
        Some(LodRule::new(&["./urf:lod1MultiSurface"], &["./urf:lod1MultiSurface//gml:Polygon"]).is2d()),
        None,
        None,
        None,
    ]),
    ..FeatureRule::DEFAULT
}];
