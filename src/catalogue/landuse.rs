//! Land use model (`luse:`)

use super::common::URBAN_PLANNING;
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const LAND_USE: &[AttributeRule] = &[
    AttributeRule::coded("class", "./luse:class", Datatype::String, "Common_landUseType"),
    AttributeRule::coded("function", "./luse:function", Datatype::StringList, "LandUse_function"),
    AttributeRule::coded("usage", "./luse:usage", Datatype::StringList, "LandUse_usage"),
];

const DETAIL: &[AttributeRule] = &[
    AttributeRule::new("uro:id", "./uro:id", Datatype::String),
    AttributeRule::new("orgLandUse", "./uro:orgLandUse", Datatype::String),
    AttributeRule::new("nominalArea", "./uro:nominalArea", Datatype::Double),
    AttributeRule::coded("ownerType", "./uro:ownerType", Datatype::String, "Common_ownerType"),
    AttributeRule::new("owner", "./uro:owner", Datatype::String),
    AttributeRule::new("areaInSquareMeter", "./uro:areaInSquareMeter", Datatype::Double),
    AttributeRule::new("areaInHa", "./uro:areaInHa", Datatype::Double),
    AttributeRule::new("buildingCoverageRate", "./uro:buildingCoverageRate", Datatype::Double),
    AttributeRule::new("floorAreaRate", "./uro:floorAreaRate", Datatype::Double),
    AttributeRule::new(
        "specifiedBuildingCoverageRate",
        "./uro:specifiedBuildingCoverageRate",
        Datatype::Double,
    ),
    AttributeRule::new("specifiedFloorAreaRate", "./uro:specifiedFloorAreaRate", Datatype::Double),
    AttributeRule::new("standardFloorAreaRate", "./uro:standardFloorAreaRate", Datatype::Double),
    AttributeRule::coded("prefecture", "./uro:prefecture", Datatype::String, "Common_prefecture"),
    AttributeRule::coded("city", "./uro:city", Datatype::String, "Common_localPublicAuthorities"),
    AttributeRule::new("reference", "./uro:reference", Datatype::String),
    AttributeRule::new("note", "./uro:note", Datatype::String),
    AttributeRule::new("surveyYear", "./uro:surveyYear", Datatype::Integer),
];

pub const RULES: &[FeatureRule] = &[FeatureRule {
    id: "luse:LandUse",
    name: "LandUse",
    target_elements: &["luse:LandUse"],
    attribute_groups: &[
        AttributeGroup::direct(LAND_USE),
        AttributeGroup::at("./uro:landUseDetailAttribute/uro:LandUseDetailAttribute", DETAIL),
        AttributeGroup::at("./uro:landUseDetailAttribute/uro:LandUseDetailAttribute", URBAN_PLANNING),
    ],
    geometries: GeometryRules::per_lod([
        Some(LodRule::new(&["./luse:lod0MultiSurface"], &["./luse:lod0MultiSurface//gml:Polygon"]).is2d()),
        Some(LodRule::new(&["./luse:lod1MultiSurface"], &["./luse:lod1MultiSurface//gml:Polygon"])),
        Some(LodRule::new(&["./luse:lod2MultiSurface"], &["./luse:lod2MultiSurface//gml:Polygon"])),
        None,
        None,
    ]),
    dm_attr_container_path: Some("./uro:luseDmAttribute"),
    facility_id_container_path: Some("./uro:luseFacilityIdAttribute"),
    ..FeatureRule::DEFAULT
}];
