//! Bridge model (`brid:`)

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const BRIDGE: &[AttributeRule] = &[
    AttributeRule::coded("class", "./brid:class", Datatype::String, "Bridge_class"),
    AttributeRule::coded("function", "./brid:function", Datatype::StringList, "Bridge_function"),
    AttributeRule::coded("usage", "./brid:usage", Datatype::StringList, "Bridge_usage"),
    AttributeRule::new("yearOfConstruction", "./brid:yearOfConstruction", Datatype::Integer),
    AttributeRule::new("yearOfDemolition", "./brid:yearOfDemolition", Datatype::Integer),
    AttributeRule::new("isMovable", "./brid:isMovable", Datatype::Boolean),
    AttributeRule::new("address", "./brid:address", Datatype::Address),
];

const STRUCTURE: &[AttributeRule] = &[
    AttributeRule::new("material", "./uro:material", Datatype::String),
    AttributeRule::new("memberType", "./uro:memberType", Datatype::String),
    AttributeRule::new("structureOrgType", "./uro:structureOrgType", Datatype::String),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
    AttributeRule::new("heightFromGround", "./uro:heightFromGround", Datatype::Double),
];

const PART: &[AttributeRule] = &[
    AttributeRule::coded("class", "./brid:class", Datatype::String, "BridgeConstructionElement_class"),
    AttributeRule::coded("function", "./brid:function", Datatype::StringList, "BridgeConstructionElement_function"),
    AttributeRule::coded("usage", "./brid:usage", Datatype::StringList, "BridgeConstructionElement_usage"),
];

const BOUNDARY_SURFACES: &[&str] = &[
    "./brid:boundedBy/brid:RoofSurface",
    "./brid:boundedBy/brid:WallSurface",
    "./brid:boundedBy/brid:GroundSurface",
    "./brid:boundedBy/brid:OuterCeilingSurface",
    "./brid:boundedBy/brid:OuterFloorSurface",
    "./brid:boundedBy/brid:ClosureSurface",
];

const SURFACE_LOD2: LodRule = LodRule::new(
    &["./brid:lod2MultiSurface"],
    &[".//brid:lod2MultiSurface//gml:Polygon", ".//brid:lod2Geometry//gml:Polygon"],
)
.only_direct(&["./brid:lod2MultiSurface//gml:Polygon"]);
const SURFACE_LOD3: LodRule = LodRule::new(
    &["./brid:lod3MultiSurface"],
    &[".//brid:lod3MultiSurface//gml:Polygon", ".//brid:lod3Geometry//gml:Polygon"],
)
.only_direct(&["./brid:lod3MultiSurface//gml:Polygon"]);
const SURFACE_LOD4: LodRule = LodRule::new(
    &["./brid:lod4MultiSurface"],
    &[".//brid:lod4MultiSurface//gml:Polygon", ".//brid:lod4Geometry//gml:Polygon"],
)
.only_direct(&["./brid:lod4MultiSurface//gml:Polygon"]);

const GEOMETRY_LOD2: LodRule = LodRule::new(&["./brid:lod2Geometry"], &[".//brid:lod2Geometry//gml:Polygon"])
    .only_direct(&["./brid:lod2Geometry//gml:Polygon"]);
const GEOMETRY_LOD3: LodRule = LodRule::new(&["./brid:lod3Geometry"], &[".//brid:lod3Geometry//gml:Polygon"])
    .only_direct(&["./brid:lod3Geometry//gml:Polygon"]);
const GEOMETRY_LOD4: LodRule = LodRule::new(&["./brid:lod4Geometry"], &[".//brid:lod4Geometry//gml:Polygon"])
    .only_direct(&["./brid:lod4Geometry//gml:Polygon"]);

const BRIDGE_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    None,
    Some(LodRule::new(&["./brid:lod1Solid"], &["./brid:lod1Solid//gml:Polygon"])),
    Some(
        LodRule::new(
            &["./brid:lod2Solid", "./brid:lod2MultiSurface"],
            &[
                "./brid:lod2Solid//gml:Polygon",
                ".//brid:lod2MultiSurface//gml:Polygon",
                ".//brid:lod2Geometry//gml:Polygon",
            ],
        )
        .only_direct(&[
            "./brid:lod2Solid//gml:Polygon",
            "./brid:lod2MultiSurface//gml:Polygon",
            "./brid:lod2Geometry//gml:Polygon",
        ]),
    ),
    Some(
        LodRule::new(
            &["./brid:lod3Solid", "./brid:lod3MultiSurface"],
            &[
                "./brid:lod3Solid//gml:Polygon",
                ".//brid:lod3MultiSurface//gml:Polygon",
                ".//brid:lod3Geometry//gml:Polygon",
            ],
        )
        .only_direct(&[
            "./brid:lod3Solid//gml:Polygon",
            "./brid:lod3MultiSurface//gml:Polygon",
            "./brid:lod3Geometry//gml:Polygon",
        ]),
    ),
    Some(
        LodRule::new(
            &["./brid:lod4Solid", "./brid:lod4MultiSurface"],
            &[
                "./brid:lod4Solid//gml:Polygon",
                ".//brid:lod4MultiSurface//gml:Polygon",
                ".//brid:lod4Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./brid:lod4Solid//gml:Polygon", "./brid:lod4MultiSurface//gml:Polygon"]),
    ),
]);

const BRIDGE_PARTS: &[&str] = &[
    "./brid:boundedBy/brid:RoofSurface",
    "./brid:boundedBy/brid:WallSurface",
    "./brid:boundedBy/brid:GroundSurface",
    "./brid:boundedBy/brid:OuterCeilingSurface",
    "./brid:boundedBy/brid:OuterFloorSurface",
    "./brid:boundedBy/brid:ClosureSurface",
    "./brid:outerBridgeConstruction/brid:BridgeConstructionElement",
    "./brid:outerBridgeInstallation/brid:BridgeInstallation",
    "./brid:interiorBridgeInstallation/brid:IntBridgeInstallation",
    "./brid:interiorBridgeRoom/brid:BridgeRoom",
    "./brid:consistsOfBridgePart/brid:BridgePart",
];

const BRIDGE_GROUPS: &[AttributeGroup] = &[
    AttributeGroup::direct(BRIDGE),
    AttributeGroup::at("./uro:bridgeStructureAttribute/uro:BridgeStructureAttribute", STRUCTURE),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "brid:Bridge",
        name: "Bridge",
        target_elements: &["brid:Bridge"],
        attribute_groups: BRIDGE_GROUPS,
        geometries: BRIDGE_GEOMETRY.semantic_parts(BRIDGE_PARTS),
        dm_attr_container_path: Some("./uro:bridDmAttribute"),
        facility_id_container_path: Some("./uro:bridFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:bridDisasterRiskAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:BridgePart",
        name: "BridgePart",
        target_elements: &["brid:BridgePart"],
        attribute_groups: BRIDGE_GROUPS,
        geometries: BRIDGE_GEOMETRY.semantic_parts(BRIDGE_PARTS),
        dm_attr_container_path: Some("./uro:bridDmAttribute"),
        facility_id_container_path: Some("./uro:bridFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:_BoundarySurface",
        name: "BoundarySurface",
        target_elements: &[
            "brid:RoofSurface",
            "brid:WallSurface",
            "brid:GroundSurface",
            "brid:OuterCeilingSurface",
            "brid:OuterFloorSurface",
            "brid:ClosureSurface",
            "brid:CeilingSurface",
            "brid:InteriorWallSurface",
            "brid:FloorSurface",
        ],
        geometries: GeometryRules::per_lod([None, None, Some(SURFACE_LOD2), Some(SURFACE_LOD3), Some(SURFACE_LOD4)])
            .semantic_parts(&["./brid:opening/brid:Window", "./brid:opening/brid:Door"]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:_Opening",
        name: "Opening",
        target_elements: &["brid:Window", "brid:Door"],
        geometries: GeometryRules::per_lod([None, None, None, Some(SURFACE_LOD3), Some(SURFACE_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:BridgeConstructionElement",
        name: "BridgeConstructionElement",
        target_elements: &["brid:BridgeConstructionElement"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([
            None,
            Some(LodRule::new(&["./brid:lod1Geometry"], &[".//brid:lod1Geometry//gml:Polygon"])),
            Some(GEOMETRY_LOD2),
            Some(GEOMETRY_LOD3),
            Some(GEOMETRY_LOD4),
        ])
        .semantic_parts(BOUNDARY_SURFACES),
        dm_attr_container_path: Some("./uro:bridDmAttribute"),
        facility_id_container_path: Some("./uro:bridFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:BridgeInstallation",
        name: "BridgeInstallation",
        target_elements: &["brid:BridgeInstallation"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, Some(GEOMETRY_LOD2), Some(GEOMETRY_LOD3), Some(GEOMETRY_LOD4)])
            .semantic_parts(BOUNDARY_SURFACES),
        dm_attr_container_path: Some("./uro:bridDmAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:IntBridgeInstallation",
        name: "IntBridgeInstallation",
        target_elements: &["brid:IntBridgeInstallation"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:BridgeRoom",
        name: "BridgeRoom",
        target_elements: &["brid:BridgeRoom"],
        geometries: GeometryRules::per_lod([
            None,
            None,
            None,
            None,
            Some(
                LodRule::new(
                    &["./brid:lod4Solid", "./brid:lod4MultiSurface"],
                    &["./brid:lod4MultiSurface//gml:Polygon", ".//brid:boundedBy/*/brid:lod4MultiSurface//gml:Polygon"],
                )
                .only_direct(&["./brid:lod4Solid//gml:Polygon", "./brid:lod4MultiSurface//gml:Polygon"]),
            ),
        ])
        .semantic_parts(&[
            "./brid:boundedBy/brid:CeilingSurface",
            "./brid:boundedBy/brid:InteriorWallSurface",
            "./brid:boundedBy/brid:FloorSurface",
            "./brid:interiorFurniture/brid:BridgeFurniture",
            "./brid:bridgeRoomInstallation/brid:IntBridgeInstallation",
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "brid:BridgeFurniture",
        name: "BridgeFurniture",
        target_elements: &["brid:BridgeFurniture"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
];
