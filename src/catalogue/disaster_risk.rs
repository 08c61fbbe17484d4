//! Disaster risk attributes (`uro:*RiskAttribute`)
//!
//! Buildings, water bodies and other features carry their hazard map
//! classifications in a `*DisasterRiskAttribute` container. Each child is a
//! record of its own without geometry, parented to the feature. Rank tables
//! differ between the building-specific and the generic spellings of a tag.

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule};

const RIVER_FLOODING_TAGS: &[&str] = &[
    "uro:BuildingRiverFloodingRiskAttribute",
    "uro:RiverFloodingRiskAttribute",
    "uro:WaterBodyRiverFloodingRiskAttribute",
];

const RIVER_FLOODING: &[AttributeRule] = &[
    AttributeRule::new("description", "./uro:description", Datatype::String),
    AttributeRule::coded_by_tag(
        "rank",
        "./uro:rank",
        Datatype::String,
        &[
            ("uro:BuildingRiverFloodingRiskAttribute", "BuildingRiverFloodingRiskAttribute_rank"),
            ("uro:RiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_rank"),
            ("uro:WaterBodyRiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_rank"),
        ],
    ),
    AttributeRule::new("rankOrg", "./uro:rankOrg", Datatype::String),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
    AttributeRule::coded_by_tag(
        "adminType",
        "./uro:adminType",
        Datatype::String,
        &[
            ("uro:BuildingRiverFloodingRiskAttribute", "BuildingRiverFloodingRiskAttribute_adminType"),
            ("uro:RiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_adminType"),
            ("uro:WaterBodyRiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_adminType"),
        ],
    ),
    AttributeRule::coded_by_tag(
        "scale",
        "./uro:scale",
        Datatype::String,
        &[
            ("uro:BuildingRiverFloodingRiskAttribute", "BuildingRiverFloodingRiskAttribute_scale"),
            ("uro:RiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_scale"),
            ("uro:WaterBodyRiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_scale"),
        ],
    ),
    AttributeRule::new("duration", "./uro:duration", Datatype::Double),
];

const TSUNAMI: &[AttributeRule] = &[
    AttributeRule::new("description", "./uro:description", Datatype::String),
    AttributeRule::coded_by_tag(
        "rank",
        "./uro:rank",
        Datatype::String,
        &[
            ("uro:BuildingTsunamiRiskAttribute", "BuildingTsunamiRiskAttribute_rank"),
            ("uro:TsunamiRiskAttribute", "TsunamiRiskAttribute_rank"),
            ("uro:WaterBodyTsunamiRiskAttribute", "TsunamiRiskAttribute_rank"),
        ],
    ),
    AttributeRule::new("rankOrg", "./uro:rankOrg", Datatype::String),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
];

const HIGH_TIDE: &[AttributeRule] = &[
    AttributeRule::new("description", "./uro:description", Datatype::String),
    AttributeRule::coded_by_tag(
        "rank",
        "./uro:rank",
        Datatype::String,
        &[
            ("uro:BuildingHighTideRiskAttribute", "BuildingHighTideRiskAttribute_rank"),
            ("uro:HighTideRiskAttribute", "HighTideRiskAttribute_rank"),
            ("uro:WaterBodyHighTideRiskAttribute", "HighTideRiskAttribute_rank"),
        ],
    ),
    AttributeRule::new("rankOrg", "./uro:rankOrg", Datatype::String),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
];

const INLAND_FLOODING: &[AttributeRule] = &[
    AttributeRule::new("description", "./uro:description", Datatype::String),
    AttributeRule::coded_by_tag(
        "rank",
        "./uro:rank",
        Datatype::String,
        &[
            ("uro:BuildingInlandFloodingRiskAttribute", "BuildingInlandFloodingRiskAttribute_rank"),
            ("uro:InlandFloodingRiskAttribute", "InlandFloodingRiskAttribute_rank"),
            ("uro:WaterBodyInlandFloodingRiskAttribute", "InlandFloodingRiskAttribute_rank"),
        ],
    ),
    AttributeRule::new("rankOrg", "./uro:rankOrg", Datatype::String),
    AttributeRule::new("depth", "./uro:depth", Datatype::Double),
];

const LAND_SLIDE: &[AttributeRule] = &[
    AttributeRule::coded_by_tag(
        "description",
        "./uro:description",
        Datatype::String,
        &[
            ("uro:BuildingLandSlideRiskAttribute", "BuildingLandSlideRiskAttribute_description"),
            ("uro:LandSlideRiskAttribute", "LandSlideRiskAttribute_description"),
        ],
    ),
    AttributeRule::coded_by_tag(
        "areaType",
        "./uro:areaType",
        Datatype::String,
        &[
            ("uro:BuildingLandSlideRiskAttribute", "BuildingLandSlideRiskAttribute_areaType"),
            ("uro:LandSlideRiskAttribute", "LandSlideRiskAttribute_areaType"),
        ],
    ),
];

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        id: "uro:RiverFloodingRisk",
        name: "RiverFloodingRisk",
        target_elements: RIVER_FLOODING_TAGS,
        attribute_groups: &[AttributeGroup::direct(RIVER_FLOODING)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:TsunamiRisk",
        name: "TsunamiRisk",
        target_elements: &[
            "uro:BuildingTsunamiRiskAttribute",
            "uro:TsunamiRiskAttribute",
            "uro:WaterBodyTsunamiRiskAttribute",
        ],
        attribute_groups: &[AttributeGroup::direct(TSUNAMI)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:HighTideRisk",
        name: "HighTideRisk",
        target_elements: &[
            "uro:BuildingHighTideRiskAttribute",
            "uro:HighTideRiskAttribute",
            "uro:WaterBodyHighTideRiskAttribute",
        ],
        attribute_groups: &[AttributeGroup::direct(HIGH_TIDE)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:InlandFloodingRisk",
        name: "InlandFloodingRisk",
        target_elements: &[
            "uro:BuildingInlandFloodingRiskAttribute",
            "uro:InlandFloodingRiskAttribute",
            "uro:WaterBodyInlandFloodingRiskAttribute",
        ],
        attribute_groups: &[AttributeGroup::direct(INLAND_FLOODING)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
    FeatureRule {
        id: "uro:LandSlideRisk",
        name: "LandSlideRisk",
        target_elements: &["uro:BuildingLandSlideRiskAttribute", "uro:LandSlideRiskAttribute"],
        attribute_groups: &[AttributeGroup::direct(LAND_SLIDE)],
        non_geometric: true,
        ..FeatureRule::DEFAULT
    },
];
