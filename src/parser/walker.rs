//! Feature tree walker
//!
//! Turns one feature element, and whatever its rule splits off from it, into
//! flat records. Records are appended to the caller's buffer in emission
//! order: split-off children first, then the element's geometric records,
//! then its trailing non-geometric record.

use std::sync::Arc;

use chrono::NaiveDate;
use roxmltree::Node;

use crate::codelist::CodelistStore;
use crate::error::{Error, ErrorContext, Result};
use crate::model::{Appearance, Attributes, CityObject, FeatureRule, Geometry, LodRule, LodRules};
use crate::namespace::Namespace;
use crate::registry::Registry;

use super::ParserSettings;
use super::attributes::extract_attributes;
use super::geometry::assemble;
use super::path::{exists, find, gml_id, select};

/// Fields every record of one element shares
struct Header {
    feature_type: String,
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    creation_date: Option<NaiveDate>,
    termination_date: Option<NaiveDate>,
}

/// Document-scoped state of one parsing session
pub(crate) struct Walker<'a> {
    pub registry: &'a Registry,
    pub ns: &'a Namespace,
    pub codelists: &'a CodelistStore,
    pub appearance: Option<&'a Appearance>,
    pub settings: &'a ParserSettings,
}

impl Walker<'_> {
    /// Process `element` and append its records to `out`
    ///
    /// Elements without a registered rule produce nothing.
    pub fn process(
        &self,
        element: Node<'_, '_>,
        parent: Option<Arc<CityObject>>,
        out: &mut Vec<Arc<CityObject>>,
    ) -> Result<()> {
        let Some(rule) = self.registry.lookup_element(element) else {
            log::debug!("Skipping unrecognised element {}", self.ns.element_name(element));
            return Ok(());
        };
        let rule = Arc::clone(rule);

        let header = self.read_header(element)?;
        let ctx = ErrorContext::feature(header.feature_type.as_str(), header.id.as_deref());
        let attributes = Arc::new(extract_attributes(element, &rule, self.ns, self.codelists, &ctx)?);

        let anchor = Arc::new(record(&header, None, None, &attributes, &rule, parent.clone()));

        let before = out.len();
        for child in self.split_off_children(element, &rule)? {
            self.process(child, Some(Arc::clone(&anchor)), out)?;
        }
        let emitted_children = out.len() > before;

        if rule.non_geometric {
            out.push(anchor);
            return Ok(());
        }

        let mut emitted_geometry = false;
        for (lod, geometry) in self.geometries(element, &rule, &ctx)? {
            let obj = record(&header, Some(lod), Some(geometry), &attributes, &rule, parent.clone());
            log::trace!("Emitting {} {:?}", obj.layer_id(), obj.id);
            out.push(Arc::new(obj));
            emitted_geometry = true;
        }

        if emitted_children || (!emitted_geometry && self.settings.emit_geometryless_features) {
            log::trace!("Emitting {} {:?}", anchor.layer_id(), anchor.id);
            out.push(anchor);
        }
        Ok(())
    }

    fn read_header(&self, element: Node<'_, '_>) -> Result<Header> {
        let feature_type = self.ns.element_name(element);
        let id = gml_id(element).map(str::to_owned);
        let ctx = ErrorContext::feature(feature_type.as_str(), id.as_deref());

        let name = match find(element, "./gml:name", self.ns)? {
            Some(el) => el.text().map(|text| match el.attribute("codeSpace") {
                Some(path) => self.codelists.lookup(None, Some(path), text),
                None => text.to_string(),
            }),
            None => None,
        };
        let description = find(element, "./gml:description", self.ns)?
            .and_then(|el| el.text())
            .map(str::to_owned);

        Ok(Header {
            creation_date: self.read_date(element, "./core:creationDate", &ctx.clone().attribute("creationDate"))?,
            termination_date: self.read_date(
                element,
                "./core:terminationDate",
                &ctx.attribute("terminationDate"),
            )?,
            feature_type,
            id,
            name,
            description,
        })
    }

    fn read_date(&self, element: Node<'_, '_>, path: &str, ctx: &ErrorContext) -> Result<Option<NaiveDate>> {
        let Some(text) = find(element, path, self.ns)?.and_then(|el| el.text()) else {
            return Ok(None);
        };
        let text = text.trim();
        text.parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| Error::value_conversion(ctx, text, "date (YYYY-MM-DD)"))
    }

    /// Child elements processed as features of their own, in processing order
    fn split_off_children<'a, 'input>(
        &self,
        element: Node<'a, 'input>,
        rule: &FeatureRule,
    ) -> Result<Vec<Node<'a, 'input>>> {
        let mut children = Vec::new();

        let containers = [rule.disaster_risk_attr_container_path, rule.facility_id_container_path];
        for container in containers.into_iter().flatten() {
            children.extend(select(element, &format!("{}/*", container), self.ns)?);
        }
        for path in rule.nested_attributes {
            children.extend(select(element, path, self.ns)?);
        }
        if self.settings.load_dm
            && let Some(container) = rule.dm_attr_container_path
        {
            children.extend(select(element, &format!("{}/*", container), self.ns)?);
        }

        if self.settings.load_semantic_parts && !rule.geometries.semantic_parts.is_empty() {
            let mut parts = Vec::new();
            for path in rule.geometries.semantic_parts {
                parts.extend(select(element, path, self.ns)?);
            }
            parts.sort_by_key(|n| n.range().start);
            parts.dedup_by_key(|n| n.id());
            children.extend(parts);
        }

        Ok(children)
    }

    /// Geometry of every present, enabled LOD in iteration order
    ///
    /// Stops after the first non-empty geometry when only the first found
    /// LOD is wanted.
    fn geometries(&self, element: Node<'_, '_>, rule: &FeatureRule, ctx: &ErrorContext) -> Result<Vec<(u8, Geometry)>> {
        let candidates: Vec<(u8, &LodRule)> = match &rule.geometries.lods {
            LodRules::PerLod(_) => {
                let order: Vec<u8> = if self.settings.lowest_lod_first {
                    (0..5).collect()
                } else {
                    (0..5).rev().collect()
                };
                order
                    .into_iter()
                    .filter_map(|lod| rule.lod_rule(lod as usize).map(|r| (lod, r)))
                    .collect()
            }
            LodRules::Explicit { lod_path, geometry } => match self.explicit_lod(element, lod_path, ctx)? {
                Some(lod) => vec![(lod, geometry)],
                None => Vec::new(),
            },
        };

        let mut geometries = Vec::new();
        for (lod, lod_rule) in candidates {
            if !self.settings.target_lods[lod as usize] || !self.detect(element, lod_rule)? {
                continue;
            }
            let paths = lod_rule.geometry_paths(self.settings.load_semantic_parts);
            if let Some(geometry) = assemble(element, paths, self.ns, self.appearance)?
                && !geometry.is_empty()
            {
                geometries.push((lod, geometry));
                if self.settings.only_first_found_lod {
                    break;
                }
            }
        }
        Ok(geometries)
    }

    fn detect(&self, element: Node<'_, '_>, lod_rule: &LodRule) -> Result<bool> {
        for path in lod_rule.lod_detection {
            if exists(element, path, self.ns)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn explicit_lod(&self, element: Node<'_, '_>, lod_path: &str, ctx: &ErrorContext) -> Result<Option<u8>> {
        let Some(text) = find(element, lod_path, self.ns)?.and_then(|el| el.text()) else {
            return Ok(None);
        };
        let text = text.trim();
        let ctx = ctx.clone().attribute("lod");
        match text.parse::<u8>() {
            Ok(lod) if lod <= 4 => Ok(Some(lod)),
            _ => Err(Error::value_conversion(&ctx, text, "LOD between 0 and 4")),
        }
    }
}

fn record(
    header: &Header,
    lod: Option<u8>,
    geometry: Option<Geometry>,
    attributes: &Arc<Attributes>,
    rule: &Arc<FeatureRule>,
    parent: Option<Arc<CityObject>>,
) -> CityObject {
    CityObject {
        lod,
        feature_type: header.feature_type.clone(),
        id: header.id.clone(),
        name: header.name.clone(),
        description: header.description.clone(),
        creation_date: header.creation_date,
        termination_date: header.termination_date,
        attributes: Arc::clone(attributes),
        geometry,
        rule: Arc::clone(rule),
        parent,
    }
}
