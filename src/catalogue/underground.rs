//! Underground buildings and utility networks (`uro:`)
//!
//! Utility network elements reuse the city furniture geometry and data
//! quality layout.

use super::building::{BUILDING_ID, BUILDING_ID_PATH, DATA_QUALITY, DATA_QUALITY_PATH};
use super::cityfurniture::FURNITURE_GEOMETRY;
use super::common::{FURNITURE_DATA_QUALITY, FURNITURE_DATA_QUALITY_PATH};
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const UNDERGROUND_BUILDING: &[AttributeRule] = &[
    AttributeRule::coded("class", "./bldg:class", Datatype::String, "Building_class"),
    AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "Building_usage"),
    AttributeRule::new("yearOfConstruction", "./bldg:yearOfConstruction", Datatype::Integer),
    AttributeRule::new("yearOfDemolition", "./bldg:yearOfDemolition", Datatype::Integer),
    AttributeRule::new("storeysBelowGround", "./bldg:storeysBelowGround", Datatype::Integer),
    AttributeRule::new("storeyHeightsBelowGround", "./bldg:storeyHeightsBelowGround", Datatype::DoubleList),
    AttributeRule::new("address", "./bldg:address", Datatype::Address),
];

const NETWORK_ELEMENT: &[AttributeRule] = &[
    AttributeRule::coded("class", "./frn:class", Datatype::String, "CityFurniture_class"),
    AttributeRule::coded("function", "./frn:function", Datatype::StringList, "CityFurniture_function"),
    AttributeRule::new("occupierName", "./uro:occupierName", Datatype::String),
    AttributeRule::coded(
        "occupierType",
        "./uro:occupierType",
        Datatype::String,
        "UtilityNetworkElement_occupierType",
    ),
    AttributeRule::new("year", "./uro:year", Datatype::Integer),
    AttributeRule::coded("yearType", "./uro:yearType", Datatype::String, "UtilityNetworkElement_yearType"),
];

const NODE: &[AttributeRule] = &[
    AttributeRule::coded(
        "appurtenanceType",
        "./uro:appurtenanceType",
        Datatype::String,
        "Appurtenance_appurtenanceType",
    ),
    AttributeRule::new("nextLink", "./uro:nextLink", Datatype::StringList),
    AttributeRule::new("previousLink", "./uro:previousLink", Datatype::StringList),
];

const NODE_CONTAINER: &[AttributeRule] = &[
    AttributeRule::new("appurtenance", "./uro:appurtenance", Datatype::StringList),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
    AttributeRule::new("innerDiamiterLong", "./uro:innerDiamiterLong", Datatype::Double),
    AttributeRule::new("innerDiamiterShort", "./uro:innerDiamiterShort", Datatype::Double),
    AttributeRule::new("outerDiamiterLong", "./uro:outerDiamiterLong", Datatype::Double),
    AttributeRule::new("outerDiamiterShort", "./uro:outerDiamiterShort", Datatype::Double),
];

const LINK: &[AttributeRule] = &[
    AttributeRule::new("cables", "./uro:cables", Datatype::Integer),
    AttributeRule::new("columns", "./uro:columns", Datatype::Integer),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
    AttributeRule::new("endNode", "./uro:endNode", Datatype::String),
    AttributeRule::new("horizontalLength", "./uro:horizontalLength", Datatype::Double),
    AttributeRule::new("innerDiamiter", "./uro:innerDiamiter", Datatype::Double),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
    AttributeRule::new("material", "./uro:material", Datatype::String),
    AttributeRule::new("maxDepth", "./uro:maxDepth", Datatype::Double),
    AttributeRule::new("minDepth", "./uro:minDepth", Datatype::Double),
    AttributeRule::new("offset", "./uro:offset", Datatype::Double),
    AttributeRule::new("outerDiamiter", "./uro:outerDiamiter", Datatype::Double),
    AttributeRule::new("rows", "./uro:rows", Datatype::Integer),
    AttributeRule::new("sewerWaterType", "./uro:sewerWaterType", Datatype::String),
    AttributeRule::new("sleeveType", "./uro:sleeveType", Datatype::String),
    AttributeRule::new("startNode", "./uro:startNode", Datatype::String),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
];

const NETWORK_GROUPS: [AttributeGroup; 2] = [
    AttributeGroup::direct(NETWORK_ELEMENT),
    AttributeGroup::at(FURNITURE_DATA_QUALITY_PATH, FURNITURE_DATA_QUALITY),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "uro:UndergroundBuilding",
        name: "UndergroundBuilding",
        target_elements: &["uro:UndergroundBuilding"],
        attribute_groups: &[
            AttributeGroup::direct(UNDERGROUND_BUILDING),
            AttributeGroup::at(BUILDING_ID_PATH, BUILDING_ID),
            AttributeGroup::at(DATA_QUALITY_PATH, DATA_QUALITY),
        ],
        geometries: GeometryRules::per_lod([
            Some(LodRule::new(&["./bldg:lod0RoofEdge"], &["./bldg:lod0RoofEdge//gml:Polygon"]).is2d()),
            Some(LodRule::new(&["./bldg:lod1Solid"], &["./bldg:lod1Solid//gml:Polygon"])),
            Some(
                LodRule::new(
                    &["./bldg:lod2Solid"],
                    &[".//bldg:lod2MultiSurface//gml:Polygon", ".//bldg:lod2Geometry//gml:Polygon"],
                )
                .only_direct(&["./bldg:lod2Solid//gml:Polygon"]),
            ),
            Some(
                LodRule::new(
                    &["./bldg:lod3Solid"],
                    &[".//bldg:lod3MultiSurface//gml:Polygon", ".//bldg:lod3Geometry//gml:Polygon"],
                )
                .only_direct(&["./bldg:lod3Solid//gml:Polygon"]),
            ),
            Some(
                LodRule::new(
                    &["./bldg:lod4Solid", "./bldg:lod4MultiSurface"],
                    &[".//bldg:lod4MultiSurface//gml:Polygon", ".//bldg:lod4Geometry//gml:Polygon"],
                )
                .only_direct(&["./bldg:lod4Solid//gml:Polygon", "./bldg:lod4MultiSurface//gml:Polygon"]),
            ),
        ])
        .semantic_parts(&[
            "./bldg:boundedBy/bldg:RoofSurface",
            "./bldg:boundedBy/bldg:WallSurface",
            "./bldg:boundedBy/bldg:GroundSurface",
            "./bldg:boundedBy/bldg:OuterCeilingSurface",
            "./bldg:boundedBy/bldg:OuterFloorSurface",
            "./bldg:boundedBy/bldg:ClosureSurface",
            "./bldg:outerBuildingInstallation/bldg:BuildingInstallation",
            "./bldg:interiorBuildingInstallation/bldg:IntBuildingInstallation",
            "./bldg:interiorRoom/bldg:Room",
        ]),
        dm_attr_container_path: Some("./uro:bldgDmAttribute"),
        facility_id_container_path: Some("./uro:bldgFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:buildingDisasterRiskAttribute"),
        nested_attributes: &[
            "./uro:buildingDetailAttribute/uro:BuildingDetailAttribute",
            "./uro:largeCustomerFacilityAttribute/uro:LargeCustomerFacilityAttribute",
        ],
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:UtilityNode",
        name: "UtilityNode",
        target_elements: &["uro:Appurtenance"],
        attribute_groups: &[NETWORK_GROUPS[0], NETWORK_GROUPS[1], AttributeGroup::direct(NODE)],
        geometries: FURNITURE_GEOMETRY,
        dm_attr_container_path: Some("./uro:frnDmAttribute"),
        facility_id_container_path: Some("./uro:frnFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:UtilityNodeContainer",
        name: "UtilityNodeContainer",
        target_elements: &["uro:Manhole", "uro:Handhole"],
        attribute_groups: &[NETWORK_GROUPS[0], NETWORK_GROUPS[1], AttributeGroup::direct(NODE_CONTAINER)],
        geometries: FURNITURE_GEOMETRY,
        dm_attr_container_path: Some("./uro:frnDmAttribute"),
        facility_id_container_path: Some("./uro:frnFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:UtilityLink",
        name: "UtilityLink",
        target_elements: &[
            "uro:Pipe",
            "uro:WaterPipe",
            "uro:ThermalPipe",
            "uro:SewerPipe",
            "uro:OilGasChemicalsPipe",
            "uro:Duct",
            "uro:Cable",
            "uro:TelecommunicationsCable",
            "uro:ElectricityCable",
        ],
        attribute_groups: &[NETWORK_GROUPS[0], NETWORK_GROUPS[1], AttributeGroup::direct(LINK)],
        geometries: FURNITURE_GEOMETRY,
        dm_attr_container_path: Some("./uro:frnDmAttribute"),
        facility_id_container_path: Some("./uro:frnFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
];
