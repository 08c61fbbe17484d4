//! Transportation model (`tran:`)
//!
//! Roads, railways, tracks, squares and waterways share one layout: a LOD1
//! surface of the whole complex, and from LOD2 on the surfaces of its traffic
//! areas, which become records of their own when decomposed.

use super::common::TRANSPORTATION_DATA_QUALITY;
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const DATA_QUALITY_PATH: &str =
    "./uro:tranDataQualityAttribute/uro:TransportationDataQualityAttribute";

const ROAD: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tran:class", Datatype::String, "TransportationComplex_class"),
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "Road_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "Road_usage"),
];

const ROAD_STRUCTURE: &[AttributeRule] = &[
    AttributeRule::new("widthType", "./uro:widthType", Datatype::String),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
    AttributeRule::new("numberOfLanes", "./uro:numberOfLanes", Datatype::Integer),
    AttributeRule::new("sectionType", "./uro:sectionType", Datatype::String),
];

const RAILWAY: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tran:class", Datatype::String, "TransportationComplex_class"),
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "Railway_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "Railway_usage"),
];

const RAILWAY_ROUTE: &[AttributeRule] = &[
    AttributeRule::new("operatorType", "./uro:operatorType", Datatype::String),
    AttributeRule::new("operator", "./uro:operator", Datatype::String),
    AttributeRule::new("railwayType", "./uro:railwayType", Datatype::String),
    AttributeRule::new("alternativeName", "./uro:alternativeName", Datatype::StringList),
    AttributeRule::new("startStation", "./uro:startStation", Datatype::String),
    AttributeRule::new("endStation", "./uro:endStation", Datatype::String),
];

const RAILWAY_TRACK: &[AttributeRule] = &[
    AttributeRule::new("routeName", "./uro:routeName", Datatype::String),
    AttributeRule::new("trackType", "./uro:trackType", Datatype::String),
    AttributeRule::new("structureType", "./uro:structureType", Datatype::String),
    AttributeRule::new("directionType", "./uro:directionType", Datatype::String),
    AttributeRule::new("startPost", "./uro:startPost", Datatype::String),
    AttributeRule::new("endPost", "./uro:endPost", Datatype::String),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
];

const TRACK: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tran:class", Datatype::String, "TransportationComplex_class"),
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "Track_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "Track_usage"),
];

const SQUARE: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tran:class", Datatype::String, "TransportationComplex_class"),
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "Square_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "Square_usage"),
];

const WATERWAY: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tran:class", Datatype::String, "TransportationComplex_class"),
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "Waterway_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "Waterway_usage"),
];

const TRAFFIC_AREA: &[AttributeRule] = &[
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "TrafficArea_function"),
    AttributeRule::coded("usage", "./tran:usage", Datatype::StringList, "TrafficArea_usage"),
    AttributeRule::coded(
        "surfaceMaterial",
        "./tran:surfaceMaterial",
        Datatype::String,
        "TrafficArea_surfaceMaterial",
    ),
];

const AUXILIARY_TRAFFIC_AREA: &[AttributeRule] = &[
    AttributeRule::coded("function", "./tran:function", Datatype::StringList, "AuxiliaryTrafficArea_function"),
    AttributeRule::coded(
        "surfaceMaterial",
        "./tran:surfaceMaterial",
        Datatype::String,
        "TrafficArea_surfaceMaterial",
    ),
];

const COMPLEX_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    Some(LodRule::new(&["./tran:lod0Network"], &["./tran:lod0Network//gml:LineString"]).is2d()),
    Some(LodRule::new(&["./tran:lod1MultiSurface"], &["./tran:lod1MultiSurface//gml:Polygon"])),
    Some(
        LodRule::new(
            &["./tran:lod2MultiSurface", "./tran:trafficArea/*/tran:lod2MultiSurface"],
            &["./tran:lod2MultiSurface//gml:Polygon", "./tran:*/*/tran:lod2MultiSurface//gml:Polygon"],
        )
        .only_direct(&["./tran:lod2MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./tran:lod3MultiSurface", "./tran:trafficArea/*/tran:lod3MultiSurface"],
            &["./tran:lod3MultiSurface//gml:Polygon", "./tran:*/*/tran:lod3MultiSurface//gml:Polygon"],
        )
        .only_direct(&["./tran:lod3MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./tran:lod4MultiSurface", "./tran:trafficArea/*/tran:lod4MultiSurface"],
            &["./tran:lod4MultiSurface//gml:Polygon", "./tran:*/*/tran:lod4MultiSurface//gml:Polygon"],
        )
        .only_direct(&["./tran:lod4MultiSurface//gml:Polygon"]),
    ),
])
.semantic_parts(&[
    "./tran:trafficArea/tran:TrafficArea",
    "./tran:auxiliaryTrafficArea/tran:AuxiliaryTrafficArea",
]);

const AREA_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    None,
    None,
    Some(LodRule::new(&["./tran:lod2MultiSurface"], &["./tran:lod2MultiSurface//gml:Polygon"])),
    Some(LodRule::new(&["./tran:lod3MultiSurface"], &["./tran:lod3MultiSurface//gml:Polygon"])),
    Some(LodRule::new(&["./tran:lod4MultiSurface"], &["./tran:lod4MultiSurface//gml:Polygon"])),
]);

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "tran:Road",
        name: "Road",
        target_elements: &["tran:Road"],
        attribute_groups: &[
            AttributeGroup::direct(ROAD),
            AttributeGroup::at("./uro:roadStructureAttribute/uro:RoadStructureAttribute", ROAD_STRUCTURE),
            AttributeGroup::at(DATA_QUALITY_PATH, TRANSPORTATION_DATA_QUALITY),
        ],
        geometries: COMPLEX_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        facility_id_container_path: Some("./uro:tranFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tran:Railway",
        name: "Railway",
        target_elements: &["tran:Railway"],
        attribute_groups: &[
            AttributeGroup::direct(RAILWAY),
            AttributeGroup::at("./uro:railwayRouteAttribute/uro:RailwayRouteAttribute", RAILWAY_ROUTE),
            AttributeGroup::at(DATA_QUALITY_PATH, TRANSPORTATION_DATA_QUALITY),
        ],
        geometries: COMPLEX_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        facility_id_container_path: Some("./uro:tranFacilityIdAttribute"),
        nested_attributes: &["./uro:railwayTrackAttribute/uro:RailwayTrackAttribute"],
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tran:Track",
        name: "Track",
        target_elements: &["tran:Track"],
        attribute_groups: &[
            AttributeGroup::direct(TRACK),
            AttributeGroup::at(DATA_QUALITY_PATH, TRANSPORTATION_DATA_QUALITY),
        ],
        geometries: COMPLEX_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        facility_id_container_path: Some("./uro:tranFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tran:Square",
        name: "Square",
        target_elements: &["tran:Square"],
        attribute_groups: &[
            AttributeGroup::direct(SQUARE),
            AttributeGroup::at(DATA_QUALITY_PATH, TRANSPORTATION_DATA_QUALITY),
        ],
        geometries: COMPLEX_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        facility_id_container_path: Some("./uro:tranFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:Waterway",
        name: "Waterway",
        target_elements: &["uro:Waterway"],
        attribute_groups: &[
            AttributeGroup::direct(WATERWAY),
            AttributeGroup::at(DATA_QUALITY_PATH, TRANSPORTATION_DATA_QUALITY),
        ],
        geometries: COMPLEX_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        facility_id_container_path: Some("./uro:tranFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tran:TrafficArea",
        name: "TrafficArea",
        target_elements: &["tran:TrafficArea"],
        attribute_groups: &[AttributeGroup::direct(TRAFFIC_AREA)],
        geometries: AREA_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tran:AuxiliaryTrafficArea",
        name: "AuxiliaryTrafficArea",
        target_elements: &["tran:AuxiliaryTrafficArea"],
        attribute_groups: &[AttributeGroup::direct(AUXILIARY_TRAFFIC_AREA)],
        geometries: AREA_GEOMETRY,
        dm_attr_container_path: Some("./uro:tranDmAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:RailwayTrackAttribute",
        name: "RailwayTrackAttribute",
        target_elements: &["uro:RailwayTrackAttribute"],
        attribute_groups: &[AttributeGroup::direct(RAILWAY_TRACK)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
];
