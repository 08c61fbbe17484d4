//! Water body model (`wtr:`)

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const WATER_BODY: &[AttributeRule] = &[
    AttributeRule::coded("class", "./wtr:class", Datatype::String, "WaterBody_class"),
    AttributeRule::coded("function", "./wtr:function", Datatype::StringList, "WaterBody_function"),
    AttributeRule::coded("usage", "./wtr:usage", Datatype::StringList, "WaterBody_usage"),
];

const DETAIL: &[AttributeRule] = &[
    AttributeRule::coded("adminType", "./uro:adminType", Datatype::String, "WaterBodyDetailAttribute_adminType"),
    AttributeRule::new("area", "./uro:area", Datatype::Double),
    AttributeRule::coded("city", "./uro:city", Datatype::StringList, "Common_localPublicAuthorities"),
    AttributeRule::new("flowDirection", "./uro:flowDirection", Datatype::Boolean),
    AttributeRule::new("kana", "./uro:kana", Datatype::String),
    AttributeRule::new("maximumDepth", "./uro:maximumDepth", Datatype::Double),
    AttributeRule::new("measurementYearMonth", "./uro:measurementYearMonth", Datatype::String),
    AttributeRule::coded("prefecture", "./uro:prefecture", Datatype::StringList, "Common_prefecture"),
    AttributeRule::new("riverCode", "./uro:riverCode", Datatype::String),
    AttributeRule::new("waterSurfaceElevation", "./uro:waterSurfaceElevation", Datatype::Double),
    AttributeRule::new("waterSystemCode", "./uro:waterSystemCode", Datatype::String),
];

const SURFACE: &[AttributeRule] = &[AttributeRule::coded(
    "waterLevel",
    "./wtr:waterLevel",
    Datatype::String,
    "WaterSurface_waterLevel",
)];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "wtr:WaterBody",
        name: "WaterBody",
        target_elements: &["wtr:WaterBody"],
        attribute_groups: &[
            AttributeGroup::direct(WATER_BODY),
            AttributeGroup::at("./uro:waterBodyDetailAttribute/uro:WaterBodyDetailAttribute", DETAIL),
        ],
        geometries: GeometryRules::per_lod([
            Some(LodRule::new(&["./wtr:lod0MultiCurve"], &["./wtr:lod0MultiCurve//gml:LineString"]).is2d()),
            Some(LodRule::new(
                &["./wtr:lod1MultiSurface", "./wtr:lod1Solid"],
                &["./wtr:lod1MultiSurface//gml:Polygon", "./wtr:lod1Solid//gml:Polygon"],
            )),
            Some(
                LodRule::new(
                    &["./wtr:lod2Solid", "./wtr:boundedBy/*/wtr:lod2Surface"],
                    &["./wtr:boundedBy/*/wtr:lod2Surface//gml:Polygon"],
                )
                .only_direct(&["./wtr:lod2Solid//gml:Polygon"]),
            ),
            Some(
                LodRule::new(
                    &["./wtr:lod3Solid", "./wtr:boundedBy/*/wtr:lod3Surface"],
                    &["./wtr:boundedBy/*/wtr:lod3Surface//gml:Polygon"],
                )
                .only_direct(&["./wtr:lod3Solid//gml:Polygon"]),
            ),
            Some(
                LodRule::new(
                    &["./wtr:lod4Solid", "./wtr:boundedBy/*/wtr:lod4Surface"],
                    &["./wtr:boundedBy/*/wtr:lod4Surface//gml:Polygon"],
                )
                .only_direct(&["./wtr:lod4Solid//gml:Polygon"]),
            ),
        ])
        .semantic_parts(&[
            "./wtr:boundedBy/wtr:WaterSurface",
            "./wtr:boundedBy/wtr:WaterGroundSurface",
            "./wtr:boundedBy/wtr:WaterClosureSurface",
        ]),
        dm_attr_container_path: Some("./uro:wtrDmAttribute"),
        facility_id_container_path: Some("./uro:wtrFacilityIdAttribute"),
        disaster_risk_attr_container_path: Some("./uro:floodingRiskAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "wtr:_WaterBoundarySurface",
        name: "WaterBoundarySurface",
        target_elements: &["wtr:WaterSurface", "wtr:WaterGroundSurface", "wtr:WaterClosureSurface"],
        attribute_groups: &[AttributeGroup::direct(SURFACE)],
        geometries: GeometryRules::per_lod([
            None,
            None,
            Some(LodRule::new(&["./wtr:lod2Surface"], &["./wtr:lod2Surface//gml:Polygon"])),
            Some(LodRule::new(&["./wtr:lod3Surface"], &["./wtr:lod3Surface//gml:Polygon"])),
            Some(LodRule::new(&["./wtr:lod4Surface"], &["./wtr:lod4Surface//gml:Polygon"])),
        ]),
        ..FeatureRule::DEFAULT
    },
];
