//! Attribute lists shared by several thematic modules

use crate::model::{AttributeRule, Datatype};

/// Columns of `uro:FacilityIdAttribute` and its subtypes
pub const FACILITY_ID: &[AttributeRule] = &[
    AttributeRule::new("uro:id", "./uro:id", Datatype::String),
    AttributeRule::new("partId", "./uro:partId", Datatype::String),
    AttributeRule::new("branchId", "./uro:branchId", Datatype::String),
    AttributeRule::coded("prefecture", "./uro:prefecture", Datatype::String, "Common_prefecture"),
    AttributeRule::coded("city", "./uro:city", Datatype::String, "Common_localPublicAuthorities"),
    AttributeRule::new("route", "./uro:route", Datatype::String),
    AttributeRule::new("startLat", "./uro:startLat", Datatype::Double),
    AttributeRule::new("startLong", "./uro:startLong", Datatype::Double),
    AttributeRule::new("endLat", "./uro:endLat", Datatype::Double),
    AttributeRule::new("endLong", "./uro:endLong", Datatype::Double),
    AttributeRule::new("alternativeName", "./uro:alternativeName", Datatype::StringList),
];

/// Zoning and land-use planning columns repeated across building, land use
/// and large customer facility details
pub const URBAN_PLANNING: &[AttributeRule] = &[
    AttributeRule::coded("urbanPlanType", "./uro:urbanPlanType", Datatype::String, "Common_urbanPlanType"),
    AttributeRule::coded(
        "areaClassificationType",
        "./uro:areaClassificationType",
        Datatype::String,
        "Common_areaClassificationType",
    ),
    AttributeRule::coded(
        "districtsAndZonesType",
        "./uro:districtsAndZonesType",
        Datatype::StringList,
        "Common_districtsAndZonesType",
    ),
    AttributeRule::coded("landUseType", "./uro:landUseType", Datatype::String, "Common_landUseType"),
];

/// Data quality columns of city furniture and the underground facilities
/// modelled on it
pub const FURNITURE_DATA_QUALITY: &[AttributeRule] = &[
    AttributeRule::coded(
        "srcScale",
        "./uro:srcScale",
        Datatype::StringList,
        "CityFurnitureDataQualityAttribute_srcScale",
    ),
    AttributeRule::coded(
        "geometrySrcDesc",
        "./uro:geometrySrcDesc",
        Datatype::StringList,
        "CityFurnitureDataQualityAttribute_geometrySrcDesc",
    ),
    AttributeRule::coded(
        "thematicSrcDesc",
        "./uro:thematicSrcDesc",
        Datatype::StringList,
        "CityFurnitureDataQualityAttribute_thematicSrcDesc",
    ),
    AttributeRule::coded(
        "appearanceSrcDesc",
        "./uro:appearanceSrcDesc",
        Datatype::StringList,
        "CityFurnitureDataQualityAttribute_appearanceSrcDesc",
    ),
    AttributeRule::new("lodType", "./uro:lodType", Datatype::StringList),
];

/// Base element of [`FURNITURE_DATA_QUALITY`]
pub const FURNITURE_DATA_QUALITY_PATH: &str =
    "./uro:cityFurnitureDataQualityAttribute/uro:CityFurnitureDataQualityAttribute";

/// Data quality columns of transportation objects
pub const TRANSPORTATION_DATA_QUALITY: &[AttributeRule] = &[
    AttributeRule::coded(
        "srcScale",
        "./uro:srcScale",
        Datatype::StringList,
        "TransportationDataQualityAttribute_srcScale",
    ),
    AttributeRule::coded(
        "geometrySrcDesc",
        "./uro:geometrySrcDesc",
        Datatype::StringList,
        "TransportationDataQualityAttribute_geometrySrcDesc",
    ),
    AttributeRule::coded(
        "thematicSrcDesc",
        "./uro:thematicSrcDesc",
        Datatype::StringList,
        "TransportationDataQualityAttribute_thematicSrcDesc",
    ),
    AttributeRule::coded(
        "appearanceSrcDesc",
        "./uro:appearanceSrcDesc",
        Datatype::StringList,
        "TransportationDataQualityAttribute_appearanceSrcDesc",
    ),
    AttributeRule::new("lodType", "./uro:lodType", Datatype::StringList),
];
