//! Tunnel model (`tun:`)

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const TUNNEL: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tun:class", Datatype::String, "Tunnel_class"),
    AttributeRule::coded("function", "./tun:function", Datatype::StringList, "Tunnel_function"),
    AttributeRule::coded("usage", "./tun:usage", Datatype::StringList, "Tunnel_usage"),
    AttributeRule::new("yearOfConstruction", "./tun:yearOfConstruction", Datatype::Integer),
    AttributeRule::new("yearOfDemolition", "./tun:yearOfDemolition", Datatype::Integer),
];

const STRUCTURE: &[AttributeRule] = &[
    AttributeRule::new("tunnelType", "./uro:tunnelType", Datatype::String),
    AttributeRule::new("innerDiameter", "./uro:innerDiameter", Datatype::Double),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
    AttributeRule::new("height", "./uro:height", Datatype::Double),
];

const PART: &[AttributeRule] = &[
    AttributeRule::coded("class", "./tun:class", Datatype::String, "TunnelInstallation_class"),
    AttributeRule::coded("function", "./tun:function", Datatype::StringList, "TunnelInstallation_function"),
    AttributeRule::coded("usage", "./tun:usage", Datatype::StringList, "TunnelInstallation_usage"),
];

const SURFACE_LOD2: LodRule = LodRule::new(&["./tun:lod2MultiSurface"], &[".//tun:lod2MultiSurface//gml:Polygon"])
    .only_direct(&["./tun:lod2MultiSurface//gml:Polygon"]);
const SURFACE_LOD3: LodRule = LodRule::new(&["./tun:lod3MultiSurface"], &[".//tun:lod3MultiSurface//gml:Polygon"])
    .only_direct(&["./tun:lod3MultiSurface//gml:Polygon"]);
const SURFACE_LOD4: LodRule = LodRule::new(&["./tun:lod4MultiSurface"], &[".//tun:lod4MultiSurface//gml:Polygon"])
    .only_direct(&["./tun:lod4MultiSurface//gml:Polygon"]);

const GEOMETRY_LOD2: LodRule = LodRule::new(&["./tun:lod2Geometry"], &[".//tun:lod2Geometry//gml:Polygon"])
    .only_direct(&["./tun:lod2Geometry//gml:Polygon"]);
const GEOMETRY_LOD3: LodRule = LodRule::new(&["./tun:lod3Geometry"], &[".//tun:lod3Geometry//gml:Polygon"])
    .only_direct(&["./tun:lod3Geometry//gml:Polygon"]);
const GEOMETRY_LOD4: LodRule = LodRule::new(&["./tun:lod4Geometry"], &[".//tun:lod4Geometry//gml:Polygon"])
    .only_direct(&["./tun:lod4Geometry//gml:Polygon"]);

const TUNNEL_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    None,
    Some(LodRule::new(&["./tun:lod1Solid"], &["./tun:lod1Solid//gml:Polygon"])),
    Some(
        LodRule::new(
            &["./tun:lod2Solid", "./tun:lod2MultiSurface", "./tun:boundedBy/*/tun:lod2MultiSurface"],
            &[
                "./tun:lod2MultiSurface//gml:Polygon",
                ".//tun:boundedBy/*/tun:lod2MultiSurface//gml:Polygon",
                ".//tun:lod2Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./tun:lod2Solid//gml:Polygon", "./tun:lod2MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./tun:lod3Solid", "./tun:lod3MultiSurface", "./tun:boundedBy/*/tun:lod3MultiSurface"],
            &[
                "./tun:lod3MultiSurface//gml:Polygon",
                ".//tun:boundedBy/*/tun:lod3MultiSurface//gml:Polygon",
                ".//tun:lod3Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./tun:lod3Solid//gml:Polygon", "./tun:lod3MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./tun:lod4Solid", "./tun:lod4MultiSurface", "./tun:boundedBy/*/tun:lod4MultiSurface"],
            &[
                "./tun:lod4MultiSurface//gml:Polygon",
                ".//tun:boundedBy/*/tun:lod4MultiSurface//gml:Polygon",
                ".//tun:lod4Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./tun:lod4Solid//gml:Polygon", "./tun:lod4MultiSurface//gml:Polygon"]),
    ),
]);

const BOUNDARY_SURFACES: &[&str] = &[
    "./tun:boundedBy/tun:RoofSurface",
    "./tun:boundedBy/tun:WallSurface",
    "./tun:boundedBy/tun:GroundSurface",
    "./tun:boundedBy/tun:OuterCeilingSurface",
    "./tun:boundedBy/tun:OuterFloorSurface",
    "./tun:boundedBy/tun:ClosureSurface",
];

const TUNNEL_PARTS: &[&str] = &[
    "./tun:boundedBy/tun:RoofSurface",
    "./tun:boundedBy/tun:WallSurface",
    "./tun:boundedBy/tun:GroundSurface",
    "./tun:boundedBy/tun:OuterCeilingSurface",
    "./tun:boundedBy/tun:OuterFloorSurface",
    "./tun:boundedBy/tun:ClosureSurface",
    "./tun:outerTunnelInstallation/tun:TunnelInstallation",
    "./tun:interiorTunnelInstallation/tun:IntTunnelInstallation",
    "./tun:interiorHollowSpace/tun:HollowSpace",
    "./tun:consistsOfTunnelPart/tun:TunnelPart",
];

const TUNNEL_GROUPS: &[AttributeGroup] = &[
    AttributeGroup::direct(TUNNEL),
    AttributeGroup::at("./uro:tunnelStructureAttribute/uro:TunnelStructureAttribute", STRUCTURE),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "tun:Tunnel",
        name: "Tunnel",
        target_elements: &["tun:Tunnel"],
        attribute_groups: TUNNEL_GROUPS,
        geometries: TUNNEL_GEOMETRY.semantic_parts(TUNNEL_PARTS),
        dm_attr_container_path: Some("./uro:tunDmAttribute"),
        facility_id_container_path: Some("./uro:tunFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:tunDisasterRiskAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:TunnelPart",
        name: "TunnelPart",
        target_elements: &["tun:TunnelPart"],
        attribute_groups: TUNNEL_GROUPS,
        geometries: TUNNEL_GEOMETRY.semantic_parts(TUNNEL_PARTS),
        dm_attr_container_path: Some("./uro:tunDmAttribute"),
        facility_id_container_path: Some("./uro:tunFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:_BoundarySurface",
        name: "BoundarySurface",
        target_elements: &[
            "tun:RoofSurface",
            "tun:WallSurface",
            "tun:GroundSurface",
            "tun:OuterCeilingSurface",
            "tun:OuterFloorSurface",
            "tun:ClosureSurface",
            "tun:CeilingSurface",
            "tun:InteriorWallSurface",
            "tun:FloorSurface",
        ],
        geometries: GeometryRules::per_lod([None, None, Some(SURFACE_LOD2), Some(SURFACE_LOD3), Some(SURFACE_LOD4)])
            .semantic_parts(&["./tun:opening/tun:Window", "./tun:opening/tun:Door"]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:_Opening",
        name: "Opening",
        target_elements: &["tun:Window", "tun:Door"],
        geometries: GeometryRules::per_lod([None, None, None, Some(SURFACE_LOD3), Some(SURFACE_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:TunnelInstallation",
        name: "TunnelInstallation",
        target_elements: &["tun:TunnelInstallation"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, Some(GEOMETRY_LOD2), Some(GEOMETRY_LOD3), Some(GEOMETRY_LOD4)])
            .semantic_parts(BOUNDARY_SURFACES),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:IntTunnelInstallation",
        name: "IntTunnelInstallation",
        target_elements: &["tun:IntTunnelInstallation"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:HollowSpace",
        name: "HollowSpace",
        target_elements: &["tun:HollowSpace"],
        geometries: GeometryRules::per_lod([
            None,
            None,
            None,
            None,
            Some(
                LodRule::new(
                    &["./tun:lod4Solid", "./tun:lod4MultiSurface"],
                    &["./tun:lod4MultiSurface//gml:Polygon", ".//tun:boundedBy/*/tun:lod4MultiSurface//gml:Polygon"],
                )
                .only_direct(&["./tun:lod4Solid//gml:Polygon", "./tun:lod4MultiSurface//gml:Polygon"]),
            ),
        ])
        .semantic_parts(&[
            "./tun:boundedBy/tun:CeilingSurface",
            "./tun:boundedBy/tun:InteriorWallSurface",
            "./tun:boundedBy/tun:FloorSurface",
            "./tun:interiorFurniture/tun:TunnelFurniture",
            "./tun:hollowSpaceInstallation/tun:IntTunnelInstallation",
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "tun:TunnelFurniture",
        name: "TunnelFurniture",
        target_elements: &["tun:TunnelFurniture"],
        attribute_groups: &[AttributeGroup::direct(PART)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
];
