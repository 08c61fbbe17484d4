//! Other constructions (`uro:OtherConstruction`): retaining walls, embankments, etc.

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const CONSTRUCTION: &[AttributeRule] = &[
    AttributeRule::coded("class", "./uro:class", Datatype::String, "OtherConstruction_class"),
    AttributeRule::coded("function", "./uro:function", Datatype::StringList, "OtherConstruction_function"),
    AttributeRule::new("usage", "./uro:usage", Datatype::StringList),
    AttributeRule::new("yearOfConstruction", "./uro:yearOfConstruction", Datatype::Integer),
    AttributeRule::new("yearOfDemolition", "./uro:yearOfDemolition", Datatype::Integer),
    AttributeRule::new("conditionOfConstruction", "./uro:conditionOfConstruction", Datatype::String),
    AttributeRule::new("dateOfConstruction", "./uro:dateOfConstruction", Datatype::Date),
    AttributeRule::new("dateOfDemolition", "./uro:dateOfDemolition", Datatype::Date),
];

const STRUCTURE: &[AttributeRule] = &[
    AttributeRule::new("height", "./uro:height", Datatype::Double),
    AttributeRule::new("width", "./uro:width", Datatype::Double),
    AttributeRule::new("length", "./uro:length", Datatype::Double),
];

const INSTALLATION: &[AttributeRule] = &[
    AttributeRule::new("class", "./uro:class", Datatype::String),
    AttributeRule::coded(
        "function",
        "./uro:function",
        Datatype::StringList,
        "ConstructionInstallation_function",
    ),
    AttributeRule::new("usage", "./uro:usage", Datatype::StringList),
];

const BOUNDARY_SURFACES: &[&str] = &[
    "./uro:boundedBy/uro:RoofSurface",
    "./uro:boundedBy/uro:WallSurface",
    "./uro:boundedBy/uro:GroundSurface",
    "./uro:boundedBy/uro:OuterCeilingSurface",
    "./uro:boundedBy/uro:OuterFloorSurface",
    "./uro:boundedBy/uro:ClosureSurface",
];

const CONSTRUCTION_PARTS: &[&str] = &[
    "./uro:boundedBy/uro:RoofSurface",
    "./uro:boundedBy/uro:WallSurface",
    "./uro:boundedBy/uro:GroundSurface",
    "./uro:boundedBy/uro:OuterCeilingSurface",
    "./uro:boundedBy/uro:OuterFloorSurface",
    "./uro:boundedBy/uro:ClosureSurface",
    "./uro:constructionInstallation/uro:ConstructionInstallation",
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "uro:OtherConstruction",
        name: "OtherConstruction",
        target_elements: &["uro:OtherConstruction"],
        attribute_groups: &[
            AttributeGroup::direct(CONSTRUCTION),
            AttributeGroup::at(
                "./uro:constructionStructureAttribute/uro:ConstructionStructureAttribute",
                STRUCTURE,
            ),
        ],
        geometries: GeometryRules::per_lod([
            None,
            Some(LodRule::new(&["./uro:lod1Solid", "./uro:lod1Geometry"], &["./uro:lod1Solid//gml:Polygon", "./uro:lod1Geometry//gml:Polygon"])),
            Some(
                LodRule::new(
                    &["./uro:lod2Solid", "./uro:lod2MultiSurface", "./uro:lod2Geometry"],
                    &[
                        "./uro:lod2Solid//gml:Polygon",
                        ".//uro:lod2MultiSurface//gml:Polygon",
                        ".//uro:lod2Geometry//gml:Polygon",
                    ],
                )
                .only_direct(&[
                    "./uro:lod2Solid//gml:Polygon",
                    "./uro:lod2MultiSurface//gml:Polygon",
                    "./uro:lod2Geometry//gml:Polygon",
                ]),
            ),
            Some(
                LodRule::new(
                    &["./uro:lod3Solid", "./uro:lod3MultiSurface", "./uro:lod3Geometry"],
                    &[
                        "./uro:lod3Solid//gml:Polygon",
                        ".//uro:lod3MultiSurface//gml:Polygon",
                        ".//uro:lod3Geometry//gml:Polygon",
                    ],
                )
                .only_direct(&[
                    "./uro:lod3Solid//gml:Polygon",
                    "./uro:lod3MultiSurface//gml:Polygon",
                    "./uro:lod3Geometry//gml:Polygon",
                ]),
            ),
            None,
        ])
        .semantic_parts(CONSTRUCTION_PARTS),
        dm_attr_container_path: Some("./uro:consDmAttribute"),
        facility_id_container_path: Some("./uro:consFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:consDisasterRiskAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:_BoundarySurface",
        name: "BoundarySurface",
        target_elements: &[
            "uro:RoofSurface",
            "uro:WallSurface",
            "uro:GroundSurface",
            "uro:OuterCeilingSurface",
            "uro:OuterFloorSurface",
            "uro:ClosureSurface",
        ],
        geometries: GeometryRules::per_lod([
            None,
            None,
            Some(LodRule::new(&["./uro:lod2MultiSurface"], &[".//uro:lod2MultiSurface//gml:Polygon"])),
            Some(LodRule::new(&["./uro:lod3MultiSurface"], &[".//uro:lod3MultiSurface//gml:Polygon"])),
            Some(LodRule::new(&["./uro:lod4MultiSurface"], &[".//uro:lod4MultiSurface//gml:Polygon"])),
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:ConstructionInstallation",
        name: "ConstructionInstallation",
        target_elements: &["uro:ConstructionInstallation"],
        attribute_groups: &[AttributeGroup::direct(INSTALLATION)],
        geometries: GeometryRules::per_lod([
            None,
            None,
            Some(
                LodRule::new(&["./uro:lod2Geometry"], &[".//uro:lod2Geometry//gml:Polygon"])
                    .only_direct(&["./uro:lod2Geometry//gml:Polygon"]),
            ),
            Some(
                LodRule::new(&["./uro:lod3Geometry"], &[".//uro:lod3Geometry//gml:Polygon"])
                    .only_direct(&["./uro:lod3Geometry//gml:Polygon"]),
            ),
            Some(
                LodRule::new(&["./uro:lod4Geometry"], &[".//uro:lod4Geometry//gml:Polygon"])
                    .only_direct(&["./uro:lod4Geometry//gml:Polygon"]),
            ),
        ])
        .semantic_parts(BOUNDARY_SURFACES),
        ..FeatureRule::DEFAULT
    },
];
