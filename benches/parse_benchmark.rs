use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plateau_citygml::{CityGmlParser, CityGmlSource, ParserSettings};

/// Generate a city model with `buildings` LOD1+LOD2 buildings, each bounded by `walls` wall surfaces
fn generate_city_model(buildings: usize, walls: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<core:CityModel
    xmlns:core="http://www.opengis.net/citygml/2.0"
    xmlns:gml="http://www.opengis.net/gml"
    xmlns:bldg="http://www.opengis.net/citygml/building/2.0"
    xmlns:gen="http://www.opengis.net/citygml/generics/2.0"
    xmlns:uro="https://www.geospatial.jp/iur/uro/3.0">
"#,
    );

    for b in 0..buildings {
        let x = 35.0 + (b % 100) as f64 * 0.001;
        let y = 139.0 + (b / 100) as f64 * 0.001;
        let square = |z: f64| {
            format!(
                "{x} {y} {z} {x} {y2} {z} {x2} {y2} {z} {x2} {y} {z} {x} {y} {z}",
                x2 = x + 0.0005,
                y2 = y + 0.0005,
            )
        };

        xml.push_str(&format!(
            r#"<core:cityObjectMember><bldg:Building gml:id="bldg_{b}">
<gen:stringAttribute name="note"><gen:value>generated</gen:value></gen:stringAttribute>
<bldg:class codeSpace="../../codelists/Building_class.xml">3001</bldg:class>
<bldg:usage codeSpace="../../codelists/Building_usage.xml">411</bldg:usage>
<bldg:measuredHeight uom="m">{height}</bldg:measuredHeight>
<bldg:lod1Solid><gml:Solid><gml:exterior><gml:CompositeSurface><gml:surfaceMember><gml:Polygon><gml:exterior><gml:LinearRing><gml:posList>{base}</gml:posList></gml:LinearRing></gml:exterior></gml:Polygon></gml:surfaceMember></gml:CompositeSurface></gml:exterior></gml:Solid></bldg:lod1Solid>
"#,
            height = 3.0 + (b % 20) as f64,
            base = square(0.0),
        ));

        for w in 0..walls {
            xml.push_str(&format!(
                r#"<bldg:boundedBy><bldg:WallSurface gml:id="wall_{b}_{w}"><bldg:lod2MultiSurface><gml:MultiSurface><gml:surfaceMember><gml:Polygon><gml:exterior><gml:LinearRing><gml:posList>{ring}</gml:posList></gml:LinearRing></gml:exterior></gml:Polygon></gml:surfaceMember></gml:MultiSurface></bldg:lod2MultiSurface></bldg:WallSurface></bldg:boundedBy>
"#,
                ring = square(w as f64),
            ));
        }

        xml.push_str("</bldg:Building></core:cityObjectMember>\n");
    }

    xml.push_str("</core:CityModel>");
    xml
}

fn parse_all(source: &CityGmlSource, settings: &ParserSettings) -> usize {
    let parser = CityGmlParser::new(source, settings.clone()).unwrap();
    parser.city_objects().map(|item| item.unwrap()).count()
}

fn bench_parse_buildings(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_buildings");
    let settings = ParserSettings::default();

    for &buildings in &[10, 100, 1000] {
        let source = CityGmlSource::from_string(generate_city_model(buildings, 4), ".");

        group.bench_with_input(BenchmarkId::new("buildings", buildings), &source, |b, source| {
            b.iter(|| black_box(parse_all(source, &settings)));
        });
    }

    group.finish();
}

fn bench_semantic_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_parts");
    let source = CityGmlSource::from_string(generate_city_model(200, 8), ".");

    for decompose in [false, true] {
        let settings = ParserSettings::default().with_semantic_parts(decompose);
        group.bench_with_input(BenchmarkId::new("decompose", decompose), &settings, |b, settings| {
            b.iter(|| black_box(parse_all(&source, settings)));
        });
    }

    group.finish();
}

fn bench_first_lod_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_lod_only");
    group.sample_size(20);
    let source = CityGmlSource::from_string(generate_city_model(2000, 4), ".");
    let settings = ParserSettings::default().with_only_first_found_lod(true);

    group.bench_function("2000_buildings", |b| {
        b.iter(|| black_box(parse_all(&source, &settings)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_buildings, bench_semantic_parts, bench_first_lod_only);
criterion_main!(benches);
