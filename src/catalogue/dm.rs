//! Public survey (DM) attributes and facility identifiers
//!
//! Both are containers hanging off many feature types; their children become
//! records of their own, parented to the feature.

use super::common::FACILITY_ID;
use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const DM_GEOMETRIC: &[AttributeRule] = &[
    AttributeRule::coded("dmCode", "./uro:dmCode", Datatype::String, "Common_dmCode"),
    AttributeRule::new("meshCode", "./uro:meshCode", Datatype::String),
    AttributeRule::new("dmElement", "./uro:dmElement", Datatype::String),
    AttributeRule::new("geometryType", "./uro:geometryType", Datatype::String),
];

const DM_ANNOTATION: &[AttributeRule] = &[
    AttributeRule::coded("dmCode", "./uro:dmCode", Datatype::String, "Common_dmCode"),
    AttributeRule::new("meshCode", "./uro:meshCode", Datatype::String),
    AttributeRule::new("label", "./uro:label", Datatype::String),
    AttributeRule::new("isVertical", "./uro:isVertical", Datatype::Boolean),
    AttributeRule::new("size", "./uro:size", Datatype::Integer),
    AttributeRule::new("orientation", "./uro:orientation", Datatype::Double),
];

const RIVER_FACILITY_ID: &[AttributeRule] = &[
    AttributeRule::new("riverCode", "./uro:riverCode", Datatype::String),
    AttributeRule::new("riverName", "./uro:riverName", Datatype::String),
    AttributeRule::new("leftRightType", "./uro:leftRightType", Datatype::String),
    AttributeRule::new("distance", "./uro:distance", Datatype::Double),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "uro:DmGeometric",
        name: "DmGeometric",
        target_elements: &["uro:DmGeometricAttribute"],
        attribute_groups: &[AttributeGroup::direct(DM_GEOMETRIC)],
        geometries: GeometryRules::per_lod([
            Some(
                LodRule::new(
                    &["./uro:lod0Geometry"],
                    &[
                        "./uro:lod0Geometry//gml:Polygon",
                        "./uro:lod0Geometry//gml:LineString",
                        "./uro:lod0Geometry//gml:Point",
                    ],
                )
                .is2d(),
            ),
            None,
            None,
            None,
            None,
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:DmAnnotation",
        name: "DmAnnotation",
        target_elements: &["uro:DmAnnotation"],
        attribute_groups: &[AttributeGroup::direct(DM_ANNOTATION)],
        geometries: GeometryRules::per_lod([
            Some(LodRule::new(&["./uro:lod0anchorPoint"], &["./uro:lod0anchorPoint//gml:Point"]).is2d()),
            None,
            None,
            None,
            None,
        ]),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:FacilityId",
        name: "FacilityId",
        target_elements: &["uro:FacilityIdAttribute"],
        attribute_groups: &[AttributeGroup::direct(FACILITY_ID)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:RiverFacilityId",
        name: "RiverFacilityId",
        target_elements: &["uro:RiverFacilityIdAttribute"],
        attribute_groups: &[AttributeGroup::direct(FACILITY_ID), AttributeGroup::direct(RIVER_FACILITY_ID)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
];
