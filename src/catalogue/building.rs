//! Building model (`bldg:`)

use super::common::URBAN_PLANNING;
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const BUILDING: &[AttributeRule] = &[
    AttributeRule::coded("class", "./bldg:class", Datatype::String, "Building_class"),
    AttributeRule::coded("function", "./bldg:function", Datatype::StringList, "Building_function"),
    AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "Building_usage"),
    AttributeRule::new("yearOfConstruction", "./bldg:yearOfConstruction", Datatype::Integer),
    AttributeRule::new("yearOfDemolition", "./bldg:yearOfDemolition", Datatype::Integer),
    AttributeRule::coded("roofType", "./bldg:roofType", Datatype::String, "Building_roofType"),
    AttributeRule::new("measuredHeight", "./bldg:measuredHeight", Datatype::Double),
    AttributeRule::new("storeysAboveGround", "./bldg:storeysAboveGround", Datatype::Integer),
    AttributeRule::new("storeysBelowGround", "./bldg:storeysBelowGround", Datatype::Integer),
    AttributeRule::new("storeyHeightsAboveGround", "./bldg:storeyHeightsAboveGround", Datatype::DoubleList),
    AttributeRule::new("storeyHeightsBelowGround", "./bldg:storeyHeightsBelowGround", Datatype::DoubleList),
    AttributeRule::new("address", "./bldg:address", Datatype::Address),
];

pub(super) const BUILDING_ID_PATH: &str = "./uro:buildingIDAttribute/uro:BuildingIDAttribute";

pub(super) const BUILDING_ID: &[AttributeRule] = &[
    AttributeRule::new("buildingID", "./uro:buildingID", Datatype::String),
    AttributeRule::new("branchID", "./uro:branchID", Datatype::Integer),
    AttributeRule::new("partID", "./uro:partID", Datatype::Integer),
    AttributeRule::coded("prefecture", "./uro:prefecture", Datatype::String, "Common_localPublicAuthorities"),
    AttributeRule::coded("city", "./uro:city", Datatype::String, "Common_localPublicAuthorities"),
];

pub(super) const DATA_QUALITY_PATH: &str =
    "./uro:buildingDataQualityAttribute/uro:BuildingDataQualityAttribute";

pub(super) const DATA_QUALITY: &[AttributeRule] = &[
    AttributeRule::coded(
        "srcScale",
        "./uro:srcScale",
        Datatype::StringList,
        "BuildingDataQualityAttribute_srcScale",
    ),
    AttributeRule::coded(
        "geometrySrcDesc",
        "./uro:geometrySrcDesc",
        Datatype::StringList,
        "BuildingDataQualityAttribute_geometrySrcDesc",
    ),
    AttributeRule::coded(
        "thematicSrcDesc",
        "./uro:thematicSrcDesc",
        Datatype::StringList,
        "BuildingDataQualityAttribute_thematicSrcDesc",
    ),
    AttributeRule::coded(
        "appearanceSrcDesc",
        "./uro:appearanceSrcDesc",
        Datatype::StringList,
        "BuildingDataQualityAttribute_appearanceSrcDesc",
    ),
    AttributeRule::new("lod1HeightType", "./uro:lod1HeightType", Datatype::String),
    AttributeRule::new("lodType", "./uro:lodType", Datatype::StringList),
];

const DETAIL: &[AttributeRule] = &[
    AttributeRule::new(
        "serialNumberOfBuildingCertification",
        "./uro:serialNumberOfBuildingCertification",
        Datatype::String,
    ),
    AttributeRule::new("siteArea", "./uro:siteArea", Datatype::Double),
    AttributeRule::new("totalFloorArea", "./uro:totalFloorArea", Datatype::Double),
    AttributeRule::new("buildingFootprintArea", "./uro:buildingFootprintArea", Datatype::Double),
    AttributeRule::new("buildingRoofEdgeArea", "./uro:buildingRoofEdgeArea", Datatype::Double),
    AttributeRule::new("developmentArea", "./uro:developmentArea", Datatype::Double),
    AttributeRule::coded(
        "buildingStructureType",
        "./uro:buildingStructureType",
        Datatype::String,
        "BuildingDetailAttribute_buildingStructureType",
    ),
    AttributeRule::new("buildingStructureOrgType", "./uro:buildingStructureOrgType", Datatype::String),
    AttributeRule::coded(
        "fireproofStructureType",
        "./uro:fireproofStructureType",
        Datatype::String,
        "BuildingDetailAttribute_fireproofStructureType",
    ),
    AttributeRule::new("reference", "./uro:reference", Datatype::String),
    AttributeRule::new("majorUsage", "./uro:majorUsage", Datatype::String),
    AttributeRule::new("majorUsage2", "./uro:majorUsage2", Datatype::String),
    AttributeRule::new("orgUsage", "./uro:orgUsage", Datatype::String),
    AttributeRule::new("orgUsage2", "./uro:orgUsage2", Datatype::String),
    AttributeRule::new("detailedUsage", "./uro:detailedUsage", Datatype::String),
    AttributeRule::new("detailedUsage2", "./uro:detailedUsage2", Datatype::String),
    AttributeRule::new("detailedUsage3", "./uro:detailedUsage3", Datatype::String),
    AttributeRule::new("groundFloorUsage", "./uro:groundFloorUsage", Datatype::String),
    AttributeRule::new("secondFloorUsage", "./uro:secondFloorUsage", Datatype::String),
    AttributeRule::new("thirdFloorUsage", "./uro:thirdFloorUsage", Datatype::String),
    AttributeRule::new("basementUsage", "./uro:basementUsage", Datatype::String),
    AttributeRule::new("basementFirstUsage", "./uro:basementFirstUsage", Datatype::String),
    AttributeRule::new("basementSecondUsage", "./uro:basementSecondUsage", Datatype::String),
    AttributeRule::coded("vacancy", "./uro:vacancy", Datatype::String, "BuildingDetailAttribute_vacancy"),
    AttributeRule::new("buildingCoverageRate", "./uro:buildingCoverageRate", Datatype::Double),
    AttributeRule::new("floorAreaRate", "./uro:floorAreaRate", Datatype::Double),
    AttributeRule::new(
        "specifiedBuildingCoverageRate",
        "./uro:specifiedBuildingCoverageRate",
        Datatype::Double,
    ),
    AttributeRule::new("specifiedFloorAreaRate", "./uro:specifiedFloorAreaRate", Datatype::Double),
    AttributeRule::new("standardFloorAreaRate", "./uro:standardFloorAreaRate", Datatype::Double),
    AttributeRule::new("buildingHeight", "./uro:buildingHeight", Datatype::Double),
    AttributeRule::new("eaveHeight", "./uro:eaveHeight", Datatype::Double),
    AttributeRule::new("surveyYear", "./uro:surveyYear", Datatype::Integer),
];

const LARGE_CUSTOMER_FACILITY: &[AttributeRule] = &[
    AttributeRule::coded("class", "./uro:class", Datatype::String, "LargeCustomerFacilityAttribute_class"),
    AttributeRule::new("uro:name", "./uro:name", Datatype::String),
    AttributeRule::new("capacity", "./uro:capacity", Datatype::Integer),
    AttributeRule::new("owner", "./uro:owner", Datatype::String),
    AttributeRule::new("totalFloorArea", "./uro:totalFloorArea", Datatype::Double),
    AttributeRule::new("totalStoreFloorArea", "./uro:totalStoreFloorArea", Datatype::Double),
    AttributeRule::new("inauguralDate", "./uro:inauguralDate", Datatype::Date),
    AttributeRule::new("yearOpened", "./uro:yearOpened", Datatype::Integer),
    AttributeRule::new("yearClosed", "./uro:yearClosed", Datatype::Integer),
    AttributeRule::new("keyTenants", "./uro:keyTenants", Datatype::String),
    AttributeRule::new("availability", "./uro:availability", Datatype::Boolean),
    AttributeRule::new("reference", "./uro:reference", Datatype::String),
    AttributeRule::new("note", "./uro:note", Datatype::String),
    AttributeRule::new("surveyYear", "./uro:surveyYear", Datatype::Integer),
];

const INSTALLATION: &[AttributeRule] = &[
    AttributeRule::coded("class", "./bldg:class", Datatype::String, "BuildingInstallation_class"),
    AttributeRule::coded("function", "./bldg:function", Datatype::StringList, "BuildingInstallation_function"),
    AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "BuildingInstallation_usage"),
];

const ROOM: &[AttributeRule] = &[
    AttributeRule::coded("class", "./bldg:class", Datatype::String, "Room_class"),
    AttributeRule::coded("function", "./bldg:function", Datatype::StringList, "Room_function"),
    AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "Room_usage"),
];

const FURNITURE: &[AttributeRule] = &[
    AttributeRule::coded("class", "./bldg:class", Datatype::String, "BuildingFurniture_class"),
    AttributeRule::coded("function", "./bldg:function", Datatype::StringList, "BuildingFurniture_function"),
    AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "BuildingFurniture_usage"),
];

const BOUNDARY_SURFACES: &[&str] = &[
    "./bldg:boundedBy/bldg:RoofSurface",
    "./bldg:boundedBy/bldg:WallSurface",
    "./bldg:boundedBy/bldg:GroundSurface",
    "./bldg:boundedBy/bldg:OuterCeilingSurface",
    "./bldg:boundedBy/bldg:OuterFloorSurface",
    "./bldg:boundedBy/bldg:ClosureSurface",
];

const BUILDING_PARTS: &[&str] = &[
    "./bldg:boundedBy/bldg:RoofSurface",
    "./bldg:boundedBy/bldg:WallSurface",
    "./bldg:boundedBy/bldg:GroundSurface",
    "./bldg:boundedBy/bldg:OuterCeilingSurface",
    "./bldg:boundedBy/bldg:OuterFloorSurface",
    "./bldg:boundedBy/bldg:ClosureSurface",
    "./bldg:outerBuildingInstallation/bldg:BuildingInstallation",
    "./bldg:interiorBuildingInstallation/bldg:IntBuildingInstallation",
    "./bldg:interiorRoom/bldg:Room",
    "./bldg:consistsOfBuildingPart/bldg:BuildingPart",
];

const BUILDING_GEOMETRY: GeometryRules = GeometryRules::per_lod([
    Some(
        LodRule::new(
            &["./bldg:lod0RoofEdge", "./bldg:lod0FootPrint"],
            &["./bldg:lod0RoofEdge//gml:Polygon", "./bldg:lod0FootPrint//gml:Polygon"],
        )
        .is2d(),
    ),
    Some(LodRule::new(&["./bldg:lod1Solid"], &["./bldg:lod1Solid//gml:Polygon"])),
    Some(
        LodRule::new(
            &["./bldg:lod2Solid", "./bldg:lod2MultiSurface", "./bldg:boundedBy/*/bldg:lod2MultiSurface"],
            &[
                "./bldg:lod2MultiSurface//gml:Polygon",
                ".//bldg:boundedBy/*/bldg:lod2MultiSurface//gml:Polygon",
                ".//bldg:lod2Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./bldg:lod2Solid//gml:Polygon", "./bldg:lod2MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./bldg:lod3Solid", "./bldg:lod3MultiSurface", "./bldg:boundedBy/*/bldg:lod3MultiSurface"],
            &[
                "./bldg:lod3MultiSurface//gml:Polygon",
                ".//bldg:boundedBy/*/bldg:lod3MultiSurface//gml:Polygon",
                ".//bldg:opening/*/bldg:lod3MultiSurface//gml:Polygon",
                ".//bldg:lod3Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./bldg:lod3Solid//gml:Polygon", "./bldg:lod3MultiSurface//gml:Polygon"]),
    ),
    Some(
        LodRule::new(
            &["./bldg:lod4Solid", "./bldg:lod4MultiSurface", "./bldg:boundedBy/*/bldg:lod4MultiSurface"],
            &[
                "./bldg:lod4MultiSurface//gml:Polygon",
                ".//bldg:boundedBy/*/bldg:lod4MultiSurface//gml:Polygon",
                ".//bldg:opening/*/bldg:lod4MultiSurface//gml:Polygon",
                ".//bldg:lod4Geometry//gml:Polygon",
            ],
        )
        .only_direct(&["./bldg:lod4Solid//gml:Polygon", "./bldg:lod4MultiSurface//gml:Polygon"]),
    ),
]);

const BUILDING_GROUPS: &[AttributeGroup] = &[
    AttributeGroup::direct(BUILDING),
    AttributeGroup::at(BUILDING_ID_PATH, BUILDING_ID),
    AttributeGroup::at(DATA_QUALITY_PATH, DATA_QUALITY),
];

const BUILDING_NESTED: &[&str] = &[
    "./uro:buildingDetailAttribute/uro:BuildingDetailAttribute",
    "./uro:largeCustomerFacilityAttribute/uro:LargeCustomerFacilityAttribute",
];

const SURFACE_LOD2: LodRule = LodRule::new(&["./bldg:lod2MultiSurface"], &[".//bldg:lod2MultiSurface//gml:Polygon"])
    .only_direct(&["./bldg:lod2MultiSurface//gml:Polygon"]);
const SURFACE_LOD3: LodRule = LodRule::new(&["./bldg:lod3MultiSurface"], &[".//bldg:lod3MultiSurface//gml:Polygon"])
    .only_direct(&["./bldg:lod3MultiSurface//gml:Polygon"]);
const SURFACE_LOD4: LodRule = LodRule::new(&["./bldg:lod4MultiSurface"], &[".//bldg:lod4MultiSurface//gml:Polygon"])
    .only_direct(&["./bldg:lod4MultiSurface//gml:Polygon"]);

const GEOMETRY_LOD2: LodRule = LodRule::new(
    &["./bldg:lod2Geometry"],
    &[".//bldg:lod2Geometry//gml:Polygon", ".//bldg:lod2MultiSurface//gml:Polygon"],
)
.only_direct(&["./bldg:lod2Geometry//gml:Polygon"]);
const GEOMETRY_LOD3: LodRule = LodRule::new(
    &["./bldg:lod3Geometry"],
    &[".//bldg:lod3Geometry//gml:Polygon", ".//bldg:lod3MultiSurface//gml:Polygon"],
)
.only_direct(&["./bldg:lod3Geometry//gml:Polygon"]);
const GEOMETRY_LOD4: LodRule = LodRule::new(
    &["./bldg:lod4Geometry"],
    &[".//bldg:lod4Geometry//gml:Polygon", ".//bldg:lod4MultiSurface//gml:Polygon"],
)
.only_direct(&["./bldg:lod4Geometry//gml:Polygon"]);

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "bldg:Building",
        name: "Building",
        target_elements: &["bldg:Building"],
        attribute_groups: BUILDING_GROUPS,
        geometries: BUILDING_GEOMETRY.semantic_parts(BUILDING_PARTS),
        dm_attr_container_path: Some("./uro:bldgDmAttribute"),
        facility_id_container_path: Some("./uro:bldgFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:buildingDisasterRiskAttribute"),
        nested_attributes: BUILDING_NESTED,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:BuildingPart",
        name: "BuildingPart",
        target_elements: &["bldg:BuildingPart"],
        attribute_groups: BUILDING_GROUPS,
        geometries: BUILDING_GEOMETRY.semantic_parts(BUILDING_PARTS),
        dm_attr_container_path: Some("./uro:bldgDmAttribute"),
        facility_id_container_path: Some("./uro:bldgFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:buildingDisasterRiskAttribute"),
        nested_attributes: BUILDING_NESTED,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:_BoundarySurface",
        name: "BoundarySurface",
        target_elements: &[
            "bldg:RoofSurface",
            "bldg:WallSurface",
            "bldg:GroundSurface",
            "bldg:OuterCeilingSurface",
            "bldg:OuterFloorSurface",
            "bldg:ClosureSurface",
        ],
        geometries: GeometryRules::per_lod([None, None, Some(SURFACE_LOD2), Some(SURFACE_LOD3), Some(SURFACE_LOD4)])
            .semantic_parts(&["./bldg:opening/bldg:Window", "./bldg:opening/bldg:Door"]),
        dm_attr_container_path: Some("./uro:bldgDmAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:_InteriorBoundarySurface",
        name: "InteriorBoundarySurface",
        target_elements: &["bldg:CeilingSurface", "bldg:InteriorWallSurface", "bldg:FloorSurface"],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(SURFACE_LOD4)])
            .semantic_parts(&["./bldg:opening/bldg:Window", "./bldg:opening/bldg:Door"]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:_Opening",
        name: "Opening",
        target_elements: &["bldg:Window", "bldg:Door"],
        geometries: GeometryRules::per_lod([None, None, None, Some(SURFACE_LOD3), Some(SURFACE_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:BuildingInstallation",
        name: "BuildingInstallation",
        target_elements: &["bldg:BuildingInstallation"],
        attribute_groups: &[AttributeGroup::direct(INSTALLATION)],
        geometries: GeometryRules::per_lod([None, None, Some(GEOMETRY_LOD2), Some(GEOMETRY_LOD3), Some(GEOMETRY_LOD4)])
            .semantic_parts(BOUNDARY_SURFACES),
        dm_attr_container_path: Some("./uro:bldgDmAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:IntBuildingInstallation",
        name: "IntBuildingInstallation",
        target_elements: &["bldg:IntBuildingInstallation"],
        attribute_groups: &[AttributeGroup::direct(INSTALLATION)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:Room",
        name: "Room",
        target_elements: &["bldg:Room"],
        attribute_groups: &[AttributeGroup::direct(ROOM)],
        geometries: GeometryRules::per_lod([
            None,
            None,
            None,
            None,
            Some(
                LodRule::new(
                    &["./bldg:lod4Solid", "./bldg:lod4MultiSurface"],
                    &[
                        "./bldg:lod4MultiSurface//gml:Polygon",
                        ".//bldg:boundedBy/*/bldg:lod4MultiSurface//gml:Polygon",
                    ],
                )
                .only_direct(&["./bldg:lod4Solid//gml:Polygon", "./bldg:lod4MultiSurface//gml:Polygon"]),
            ),
        ])
        .semantic_parts(&[
            "./bldg:boundedBy/bldg:CeilingSurface",
            "./bldg:boundedBy/bldg:InteriorWallSurface",
            "./bldg:boundedBy/bldg:FloorSurface",
            "./bldg:interiorFurniture/bldg:BuildingFurniture",
            "./bldg:roomInstallation/bldg:IntBuildingInstallation",
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "bldg:BuildingFurniture",
        name: "BuildingFurniture",
        target_elements: &["bldg:BuildingFurniture"],
        attribute_groups: &[AttributeGroup::direct(FURNITURE)],
        geometries: GeometryRules::per_lod([None, None, None, None, Some(GEOMETRY_LOD4)]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:BuildingDetailAttribute",
        name: "BuildingDetailAttribute",
        target_elements: &["uro:BuildingDetailAttribute"],
        attribute_groups: &[AttributeGroup::direct(DETAIL), AttributeGroup::direct(URBAN_PLANNING)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:LargeCustomerFacilityAttribute",
        name: "LargeCustomerFacilityAttribute",
        target_elements: &["uro:LargeCustomerFacilityAttribute"],
        attribute_groups: &[
            AttributeGroup::direct(LARGE_CUSTOMER_FACILITY),
            AttributeGroup::direct(URBAN_PLANNING),
        ],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
];

