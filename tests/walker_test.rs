//! Feature tree walker behaviour: LOD selection, decomposition, cancellation

mod common;

use common::{city_model, lod1_solid, lod2_multi_surface, member, parse, wall_surface};
use plateau_citygml::{CancellationToken, CityGmlParser, CityGmlSource, ParserSettings};

fn building_with_lod1_and_lod2(id: &str) -> String {
    member(&format!(
        r#"<bldg:Building gml:id="{id}">{}{}</bldg:Building>"#,
        lod1_solid(id),
        lod2_multi_surface(id)
    ))
}

fn building_with_walls(id: &str) -> String {
    member(&format!(
        r#"<bldg:Building gml:id="{id}">{}{}{}</bldg:Building>"#,
        lod1_solid(id),
        wall_surface(&format!("{}_wall_1", id)),
        wall_surface(&format!("{}_wall_2", id)),
    ))
}

#[test]
fn test_every_lod_descending_by_default() {
    let records = parse(&city_model(&building_with_lod1_and_lod2("b")), ParserSettings::default());
    let lods: Vec<_> = records.iter().map(|(_, r)| r.lod).collect();
    assert_eq!(lods, vec![Some(2), Some(1)]);
}

#[test]
fn test_only_first_found_lod_prefers_highest() {
    let settings = ParserSettings::default().with_only_first_found_lod(true);
    let records = parse(&city_model(&building_with_lod1_and_lod2("b")), settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.lod, Some(2));
}

#[test]
fn test_only_first_found_lod_ascending() {
    let settings = ParserSettings::default()
        .with_only_first_found_lod(true)
        .with_lowest_lod_first(true);
    let records = parse(&city_model(&building_with_lod1_and_lod2("b")), settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.lod, Some(1));
}

#[test]
fn test_excluded_lods_are_skipped() {
    let settings = ParserSettings::default()
        .with_lod(2, false)
        .with_only_first_found_lod(true);
    let records = parse(&city_model(&building_with_lod1_and_lod2("b")), settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.lod, Some(1));

    let settings = ParserSettings::default().with_target_lods([false; 5]);
    let records = parse(&city_model(&building_with_lod1_and_lod2("b")), settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.lod, None);
}

#[test]
fn test_semantic_parts_split_off() {
    let settings = ParserSettings::default().with_semantic_parts(true);
    let records = parse(&city_model(&building_with_walls("b")), settings);

    let summary: Vec<_> = records
        .iter()
        .map(|(_, r)| (r.id.clone().unwrap_or_default(), r.layer_id()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("b_wall_1".to_string(), "Building / BoundarySurface (LOD2, MultiPolygon)".to_string()),
            ("b_wall_2".to_string(), "Building / BoundarySurface (LOD2, MultiPolygon)".to_string()),
            ("b".to_string(), "Building (LOD1, MultiPolygon)".to_string()),
            ("b".to_string(), "Building (NoGeometry)".to_string()),
        ]
    );

    let anchor = &records[3].1;
    for (_, wall) in &records[..2] {
        let parent = wall.parent.as_ref().unwrap();
        assert!(std::sync::Arc::ptr_eq(parent, anchor));
        assert_eq!(wall.feature_type, "bldg:WallSurface");
    }
    assert!(records[2].1.parent.is_none());
}

#[test]
fn test_semantic_parts_folded_into_parent() {
    let records = parse(&city_model(&building_with_walls("b")), ParserSettings::default());

    let lods: Vec<_> = records.iter().map(|(_, r)| r.lod).collect();
    assert_eq!(lods, vec![Some(2), Some(1)]);
    assert!(records.iter().all(|(_, r)| r.id.as_deref() == Some("b")));
    assert!(records.iter().all(|(_, r)| r.parent.is_none()));
    // LOD2 collects both wall polygons from the bounded-by surfaces
    assert_eq!(records[0].1.geometry.as_ref().map(|g| g.len()), Some(2));
}

#[test]
fn test_output_is_deterministic() {
    let document = city_model(&format!("{}{}", building_with_walls("a"), building_with_lod1_and_lod2("b")));
    let settings = ParserSettings::default().with_semantic_parts(true);

    let first: Vec<_> = parse(&document, settings.clone())
        .into_iter()
        .map(|(i, r)| (i, r.layer_id(), r.id.clone(), r.geometry.clone()))
        .collect();
    let second: Vec<_> = parse(&document, settings)
        .into_iter()
        .map(|(i, r)| (i, r.layer_id(), r.id.clone(), r.geometry.clone()))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_cancellation_between_members() {
    let document = city_model(&format!(
        "{}{}{}",
        building_with_walls("first"),
        building_with_walls("second"),
        building_with_walls("third"),
    ));
    let source = CityGmlSource::from_string(document, ".");
    let token = CancellationToken::new();
    let parser = CityGmlParser::new(&source, ParserSettings::default().with_semantic_parts(true))
        .unwrap()
        .with_cancellation_token(token.clone());
    assert_eq!(parser.count_toplevel_city_objects(), 3);

    let mut iter = parser.city_objects();
    let (index, first) = iter.next().unwrap().unwrap();
    assert_eq!(index, 0);
    assert_eq!(first.id.as_deref(), Some("first_wall_1"));

    // the member already started completes
    token.cancel();
    let rest: Vec<_> = iter.map(|r| r.unwrap()).collect();
    assert_eq!(rest.len(), 3);
    assert!(rest.iter().all(|(i, _)| *i == 0));
}

#[test]
fn test_cancelled_before_start_yields_nothing() {
    let document = city_model(&building_with_lod1_and_lod2("b"));
    let source = CityGmlSource::from_string(document, ".");
    let token = CancellationToken::new();
    token.cancel();
    let parser = CityGmlParser::new(&source, ParserSettings::default())
        .unwrap()
        .with_cancellation_token(token);
    assert_eq!(parser.city_objects().count(), 0);
}

#[test]
fn test_legacy_iur_version_resolves_rule_paths() {
    let document = city_model(&member(
        r#"<bldg:Building gml:id="legacy">
            <uro:buildingIDAttribute><uro:BuildingIDAttribute>
              <uro:buildingID>13101-bldg-7</uro:buildingID>
            </uro:BuildingIDAttribute></uro:buildingIDAttribute>
        </bldg:Building>"#,
    ))
    .replace(
        "https://www.geospatial.jp/iur/uro/3.0",
        "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/uro/1.4",
    );

    let records = parse(&document, ParserSettings::default());
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].1.attributes.get("buildingID"),
        Some(&plateau_citygml::Value::from("13101-bldg-7"))
    );
}

#[test]
fn test_lod0_only_zone_is_collected() {
    let document = city_model(&member(&format!(
        r#"<urf:UseDistrict gml:id="z0">
            <urf:lod0MultiSurface><gml:MultiSurface><gml:surfaceMember>{}</gml:surfaceMember></gml:MultiSurface></urf:lod0MultiSurface>
        </urf:UseDistrict>"#,
        common::polygon("z0_p", "35 139 0 35 139.1 0 35.1 139.1 0 35 139 0")
    )));

    let records = parse(&document, ParserSettings::default());
    assert_eq!(records.len(), 1);
    let zone = &records[0].1;
    assert_eq!(zone.lod, Some(0));
    assert!(zone.is_2d());
    assert_eq!(zone.feature_type, "urf:UseDistrict");
    assert_eq!(zone.layer_id(), "Zone (LOD0, MultiPolygon)");
}
