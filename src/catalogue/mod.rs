//! Bundled feature rule catalogue
//!
//! One submodule per thematic model of the PLATEAU data model.
//! Rules are `'static` constants; [`rules`] collects them in registration
//! order for [`Registry::with_rules`](crate::registry::Registry::with_rules).
//!
//! Canonical `uro:` / `urf:` tags are written once here and expanded to every
//! i-UR version by the registry.

mod bridge;
mod building;
mod cityfurniture;
mod common;
mod disaster_risk;
mod dm;
mod landslide;
mod landuse;
mod other_construction;
mod relief;
mod transportation;
mod tunnel;
mod underground;
mod vegetation;
mod waterbody;
mod zone;

use crate::model::FeatureRule;

/// Every bundled rule
pub fn rules() -> Vec<FeatureRule> {
    [
        building::RULES,
        underground::RULES,
        bridge::RULES,
        tunnel::RULES,
        transportation::RULES,
        cityfurniture::RULES,
        vegetation::RULES,
        landuse::RULES,
        waterbody::RULES,
        other_construction::RULES,
        relief::RULES,
        zone::RULES,
        landslide::RULES,
        disaster_risk::RULES,
        dm::RULES,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
}
