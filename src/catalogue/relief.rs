//! Relief (`dem:`) and generic city objects (`gen:`)

use crate::model::{
    AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule, LodRules,
};

const GENERIC: &[AttributeRule] = &[
    AttributeRule::new("class", "./gen:class", Datatype::String),
    AttributeRule::new("function", "./gen:function", Datatype::StringList),
    AttributeRule::new("usage", "./gen:usage", Datatype::StringList),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "dem:ReliefFeature",
        name: "ReliefFeature",
        target_elements: &["dem:ReliefFeature"],
        geometries: GeometryRules {
            lods: LodRules::Explicit {
                lod_path: "./dem:lod",
                geometry: LodRule::new(
                    &["./dem:reliefComponent"],
                    &[
                        "./dem:reliefComponent/dem:TINRelief/dem:tin//gml:Triangle",
                        "./dem:reliefComponent/dem:TINRelief/dem:tin//gml:Polygon",
                    ],
                ),
            },
            semantic_parts: &[],
        },
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "gen:GenericCityObject",
        name: "GenericCityObject",
        target_elements: &["gen:GenericCityObject"],
        attribute_groups: &[AttributeGroup::direct(GENERIC)],
        geometries: GeometryRules::per_lod([
            Some(
                LodRule::new(
                    &["./gen:lod0Geometry"],
                    &["./gen:lod0Geometry//gml:Polygon", "./gen:lod0Geometry//gml:LineString"],
                )
                .is2d(),
            ),
            Some(LodRule::new(&["./gen:lod1Geometry"], &["./gen:lod1Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./gen:lod2Geometry"], &["./gen:lod2Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./gen:lod3Geometry"], &["./gen:lod3Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./gen:lod4Geometry"], &["./gen:lod4Geometry//gml:Polygon"])),
        ]),
        load_generic_attributes: true,
        dm_attr_container_path: Some("./uro:genDmAttribute"),
        ..FeatureRule::DEFAULT
    },
];
