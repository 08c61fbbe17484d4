//! Property-based tests for coordinate parsing and namespace handling

use plateau_citygml::Namespace;
use plateau_citygml::parser::geometry::{parse_pos_list, parse_texture_coordinates};
use proptest::prelude::*;

const PREFIXES: &[&str] = &[
    "gml", "core", "app", "bldg", "brid", "dem", "frn", "gen", "luse", "tran", "veg", "wtr", "tun", "uro",
    "urf",
];

const IUR_URIS: &[&str] = &[
    "http://www.kantei.go.jp/jp/singi/tiiki/toshisaisei/itoshisaisei/iur/uro/1.4",
    "https://www.chisou.go.jp/tiiki/toshisaisei/itoshisaisei/iur/uro/1.5",
    "https://www.geospatial.jp/iur/uro/2.0",
    "https://www.geospatial.jp/iur/uro/3.0",
];

fn coordinate_strategy() -> impl Strategy<Value = [f64; 3]> {
    (-90.0f64..90.0, -180.0f64..180.0, -500.0f64..5000.0).prop_map(|(a, b, c)| [a, b, c])
}

fn local_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,24}"
}

proptest! {
    #[test]
    fn test_pos_list_keeps_triples_in_order(coords in prop::collection::vec(coordinate_strategy(), 0..64)) {
        let text = coords
            .iter()
            .map(|c| format!("{} {} {}", c[0], c[1], c[2]))
            .collect::<Vec<_>>()
            .join(" ");

        let parsed = parse_pos_list(&text).unwrap();
        prop_assert_eq!(parsed, coords);
    }

    #[test]
    fn test_pos_list_tolerates_any_whitespace(
        coords in prop::collection::vec(coordinate_strategy(), 1..16),
        separator in prop::sample::select(vec![" ", "  ", "\n", "\t", " \n\t "]),
    ) {
        let text = coords
            .iter()
            .flat_map(|c| c.iter().map(f64::to_string))
            .collect::<Vec<_>>()
            .join(separator);

        let parsed = parse_pos_list(&format!("{}{}{}", separator, text, separator)).unwrap();
        prop_assert_eq!(parsed.len(), coords.len());
    }

    #[test]
    fn test_pos_list_rejects_partial_positions(
        coords in prop::collection::vec(coordinate_strategy(), 0..16),
        extra in 1usize..3,
    ) {
        let mut ordinates: Vec<String> = coords.iter().flat_map(|c| c.iter().map(f64::to_string)).collect();
        ordinates.extend((0..extra).map(|i| i.to_string()));

        prop_assert!(parse_pos_list(&ordinates.join(" ")).is_err());
    }

    #[test]
    fn test_texture_coordinates_pairs(uvs in prop::collection::vec((0.0f32..1.0, 0.0f32..1.0), 0..32)) {
        let text = uvs.iter().map(|(u, v)| format!("{} {}", u, v)).collect::<Vec<_>>().join(" ");

        let parsed = parse_texture_coordinates(&text).unwrap();
        prop_assert_eq!(parsed.len(), uvs.len());
    }

    #[test]
    fn test_qualified_name_round_trip(
        prefix in prop::sample::select(PREFIXES),
        local in local_name_strategy(),
        declared in prop::sample::select(IUR_URIS),
    ) {
        let ns = Namespace::resolve([declared]);
        let prefixed = format!("{}:{}", prefix, local);

        let qualified = ns.to_qualified_name(&prefixed).unwrap();
        prop_assert!(qualified.starts_with('{'), "qualified name should start with '{{': {}", qualified);
        prop_assert_eq!(ns.to_prefixed_name(&qualified).unwrap(), prefixed);
    }

    #[test]
    fn test_declared_iur_version_is_bound(declared in prop::sample::select(IUR_URIS)) {
        let ns = Namespace::resolve([declared]);
        prop_assert_eq!(ns.uri("uro"), Some(declared));
        prop_assert_eq!(ns.prefix(declared), Some("uro"));
        prop_assert_eq!(ns.uri("urf"), Some("https://www.geospatial.jp/iur/urf/3.0"));
    }

    #[test]
    fn test_unknown_uris_fall_back_to_latest(path in "[a-z]{1,12}(/[a-z0-9.]{1,8}){0,3}") {
        let uri = format!("https://example.com/{}", path);
        let ns = Namespace::resolve([uri.as_str()]);
        prop_assert_eq!(ns, Namespace::latest());
    }
}
