//! Shared helpers for building CityGML documents in tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use plateau_citygml::{CityGmlParser, CityGmlSource, CityObject, ParserSettings, Registry};

/// Wrap `members` in a `core:CityModel` declaring the usual namespaces
pub fn city_model(members: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<core:CityModel
    xmlns:core="http://www.opengis.net/citygml/2.0"
    xmlns:gml="http://www.opengis.net/gml"
    xmlns:bldg="http://www.opengis.net/citygml/building/2.0"
    xmlns:tran="http://www.opengis.net/citygml/transportation/2.0"
    xmlns:app="http://www.opengis.net/citygml/appearance/2.0"
    xmlns:gen="http://www.opengis.net/citygml/generics/2.0"
    xmlns:uro="https://www.geospatial.jp/iur/uro/3.0"
    xmlns:urf="https://www.geospatial.jp/iur/urf/3.0">
{}
</core:CityModel>"#,
        members
    )
}

/// Wrap a feature element in a `core:cityObjectMember`
pub fn member(feature: &str) -> String {
    format!("<core:cityObjectMember>{}</core:cityObjectMember>", feature)
}

/// A `gml:Polygon` with one exterior ring
pub fn polygon(id: &str, pos_list: &str) -> String {
    format!(
        r#"<gml:Polygon gml:id="{id}"><gml:exterior><gml:LinearRing gml:id="{id}_ring"><gml:posList>{pos_list}</gml:posList></gml:LinearRing></gml:exterior></gml:Polygon>"#
    )
}

/// LOD1 solid made of one square polygon
pub fn lod1_solid(id: &str) -> String {
    format!(
        r#"<bldg:lod1Solid><gml:Solid><gml:exterior><gml:CompositeSurface><gml:surfaceMember>{}</gml:surfaceMember></gml:CompositeSurface></gml:exterior></gml:Solid></bldg:lod1Solid>"#,
        polygon(
            &format!("{}_lod1", id),
            "35.0 139.0 0.0 35.0 139.1 0.0 35.1 139.1 0.0 35.0 139.0 0.0"
        )
    )
}

/// LOD2 multi-surface made of one polygon
pub fn lod2_multi_surface(id: &str) -> String {
    format!(
        r#"<bldg:lod2MultiSurface><gml:MultiSurface><gml:surfaceMember>{}</gml:surfaceMember></gml:MultiSurface></bldg:lod2MultiSurface>"#,
        polygon(
            &format!("{}_lod2", id),
            "35.0 139.0 10.0 35.0 139.1 10.0 35.1 139.1 10.0 35.0 139.0 10.0"
        )
    )
}

/// Wall surface bounding a building at LOD2
pub fn wall_surface(id: &str) -> String {
    format!(
        r#"<bldg:boundedBy><bldg:WallSurface gml:id="{id}"><bldg:lod2MultiSurface><gml:MultiSurface><gml:surfaceMember>{}</gml:surfaceMember></gml:MultiSurface></bldg:lod2MultiSurface></bldg:WallSurface></bldg:boundedBy>"#,
        polygon(
            &format!("{}_poly", id),
            "35.0 139.0 0.0 35.0 139.0 10.0 35.1 139.0 10.0 35.0 139.0 0.0"
        )
    )
}

/// Parse a document and collect every record
pub fn parse(document: &str, settings: ParserSettings) -> Vec<(usize, Arc<CityObject>)> {
    parse_in(document, settings, Path::new("."), None)
}

/// Parse a document resolving code lists against `base_dir`, optionally with a custom registry
pub fn parse_in(
    document: &str,
    settings: ParserSettings,
    base_dir: &Path,
    registry: Option<Arc<Registry>>,
) -> Vec<(usize, Arc<CityObject>)> {
    let source = CityGmlSource::from_string(document, base_dir);
    let mut parser = CityGmlParser::new(&source, settings).unwrap();
    if let Some(registry) = registry {
        parser = parser.with_registry(registry);
    }
    parser.city_objects().collect::<Result<Vec<_>, _>>().unwrap()
}
