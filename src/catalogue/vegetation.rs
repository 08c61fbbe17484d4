//! Vegetation model (`veg:`)

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const DATA_QUALITY_PATH: &str =
    "./uro:vegetationDataQualityAttribute/uro:VegetationDataQualityAttribute";

const DATA_QUALITY: &[AttributeRule] = &[
    AttributeRule::coded(
        "srcScale",
        "./uro:srcScale",
        Datatype::StringList,
        "VegetationDataQualityAttribute_srcScale",
    ),
    AttributeRule::coded(
        "geometrySrcDesc",
        "./uro:geometrySrcDesc",
        Datatype::StringList,
        "VegetationDataQualityAttribute_geometrySrcDesc",
    ),
    AttributeRule::coded(
        "thematicSrcDesc",
        "./uro:thematicSrcDesc",
        Datatype::StringList,
        "VegetationDataQualityAttribute_thematicSrcDesc",
    ),
    AttributeRule::coded(
        "appearanceSrcDesc",
        "./uro:appearanceSrcDesc",
        Datatype::StringList,
        "VegetationDataQualityAttribute_appearanceSrcDesc",
    ),
];

const SOLITARY: &[AttributeRule] = &[
    AttributeRule::coded("class", "./veg:class", Datatype::String, "SolitaryVegetationObject_class"),
    AttributeRule::coded(
        "function",
        "./veg:function",
        Datatype::StringList,
        "SolitaryVegetationObject_function",
    ),
    AttributeRule::coded("species", "./veg:species", Datatype::String, "SolitaryVegetationObject_species"),
    AttributeRule::new("height", "./veg:height", Datatype::Double),
    AttributeRule::new("trunkDiameter", "./veg:trunkDiameter", Datatype::Double),
    AttributeRule::new("crownDiameter", "./veg:crownDiameter", Datatype::Double),
];

const PLANT_COVER: &[AttributeRule] = &[
    AttributeRule::coded("class", "./veg:class", Datatype::String, "PlantCover_class"),
    AttributeRule::coded("function", "./veg:function", Datatype::StringList, "PlantCover_function"),
    AttributeRule::new("averageHeight", "./veg:averageHeight", Datatype::Double),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "veg:SolitaryVegetationObject",
        name: "SolitaryVegetationObject",
        target_elements: &["veg:SolitaryVegetationObject"],
        attribute_groups: &[
            AttributeGroup::direct(SOLITARY),
            AttributeGroup::at(DATA_QUALITY_PATH, DATA_QUALITY),
        ],
        geometries: GeometryRules::per_lod([
            None,
            Some(LodRule::new(&["./veg:lod1Geometry"], &["./veg:lod1Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./veg:lod2Geometry"], &["./veg:lod2Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./veg:lod3Geometry"], &["./veg:lod3Geometry//gml:Polygon"])),
            Some(LodRule::new(&["./veg:lod4Geometry"], &["./veg:lod4Geometry//gml:Polygon"])),
        ]),
        dm_attr_container_path: Some("./uro:vegDmAttribute"),
        facility_id_container_path: Some("./uro:vegFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "veg:PlantCover",
        name: "PlantCover",
        target_elements: &["veg:PlantCover"],
        attribute_groups: &[
            AttributeGroup::direct(PLANT_COVER),
            AttributeGroup::at(DATA_QUALITY_PATH, DATA_QUALITY),
        ],
        geometries: GeometryRules::per_lod([
            None,
            Some(LodRule::new(
                &["./veg:lod1MultiSolid", "./veg:lod1MultiSurface"],
                &["./veg:lod1MultiSolid//gml:Polygon", "./veg:lod1MultiSurface//gml:Polygon"],
            )),
            Some(LodRule::new(
                &["./veg:lod2MultiSolid", "./veg:lod2MultiSurface"],
                &["./veg:lod2MultiSolid//gml:Polygon", "./veg:lod2MultiSurface//gml:Polygon"],
            )),
            Some(LodRule::new(
                &["./veg:lod3MultiSolid", "./veg:lod3MultiSurface"],
                &["./veg:lod3MultiSolid//gml:Polygon", "./veg:lod3MultiSurface//gml:Polygon"],
            )),
            Some(LodRule::new(
                &["./veg:lod4MultiSolid", "./veg:lod4MultiSurface"],
                &["./veg:lod4MultiSolid//gml:Polygon", "./veg:lod4MultiSurface//gml:Polygon"],
            )),
        ]),
        dm_attr_container_path: Some("./uro:vegDmAttribute"),
        facility_id_container_path: Some("./uro:vegFacilityIdAttribute"),
        ..FeatureRule::DEFAULT
    },
];
