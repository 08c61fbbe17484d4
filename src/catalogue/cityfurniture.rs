//! City furniture model (`frn:`)

use super::common::{FURNITURE_DATA_QUALITY, FURNITURE_DATA_QUALITY_PATH};
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const CITY_FURNITURE: &[AttributeRule] = &[
    AttributeRule::coded("class", "./frn:class", Datatype::String, "CityFurniture_class"),
    AttributeRule::coded("function", "./frn:function", Datatype::StringList, "CityFurniture_function"),
    AttributeRule::coded("usage", "./frn:usage", Datatype::StringList, "CityFurniture_usage"),
];

const DETAIL: &[AttributeRule] = &[
    AttributeRule::new("facilityType", "./uro:facilityType", Datatype::String),
    AttributeRule::new("description", "./uro:description", Datatype::String),
    AttributeRule::new("kana", "./uro:kana", Datatype::String),
    AttributeRule::new("height", "./uro:height", Datatype::Double),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
    AttributeRule::new("installationYear", "./uro:installationYear", Datatype::Integer),
    AttributeRule::new("note", "./uro:note", Datatype::String),
];

pub(super) const FURNITURE_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    Some(LodRule::new(&["./frn:lod0Geometry"], &["./frn:lod0Geometry//gml:Point"]).is2d()),
    Some(LodRule::new(&["./frn:lod1Geometry"], &["./frn:lod1Geometry//gml:Polygon"])),
    Some(LodRule::new(&["./frn:lod2Geometry"], &["./frn:lod2Geometry//gml:Polygon"])),
    Some(LodRule::new(&["./frn:lod3Geometry"], &["./frn:lod3Geometry//gml:Polygon"])),
    Some(LodRule::new(&["./frn:lod4Geometry"], &["./frn:lod4Geometry//gml:Polygon"])),
]);

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "frn:CityFurniture",
        name: "CityFurniture",
        target_elements: &["frn:CityFurniture"],
        attribute_groups: &[
            AttributeGroup::direct(CITY_FURNITURE),
            AttributeGroup::at(FURNITURE_DATA_QUALITY_PATH, FURNITURE_DATA_QUALITY),
        ],
        geometries: FURNITURE_GEOMETRY,
        load_generic_attributes: true,
        dm_attr_container_path: Some("./uro:frnDmAttribute"),
        facility_id_container_path: Some("./uro:frnFacilityIdAttribute"),
        nested_attributes: &["./uro:cityFurnitureDetailAttribute/uro:CityFurnitureDetailAttribute"],
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:CityFurnitureDetailAttribute",
        name: "CityFurnitureDetailAttribute",
        target_elements: &["uro:CityFurnitureDetailAttribute"],
        attribute_groups: &[AttributeGroup::direct(DETAIL)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
];
