//! Attribute extraction
//!
//! Converts the elements addressed by a rule's attribute groups into
//! [`Value`]s. Absent singular attributes are omitted; list attributes are
//! always present, possibly empty. Malformed literals abort with a
//! [`ParseError`](crate::Error::ParseError) naming the feature and attribute.

use chrono::NaiveDate;
use roxmltree::Node;

use crate::codelist::CodelistStore;
use crate::error::{Error, ErrorContext, Result};
use crate::model::{AttributeRule, Attributes, Datatype, FeatureRule, Value};
use crate::namespace::Namespace;

use super::path::{collapsed_text, find, select};

const GEN_NS: &str = "http://www.opengis.net/citygml/generics/2.0";

const BOOLEAN_TRUE: &[&str] = &["true", "True", "1"];

/// Resolve a coded value through the static table and/or the element's `codeSpace`
fn resolve_code(
    element: Node<'_, '_>,
    table: Option<&str>,
    codelists: &CodelistStore,
    code: &str,
) -> String {
    let path = element.attribute("codeSpace");
    if table.is_none() && path.is_none() {
        return code.to_string();
    }
    codelists.lookup(table, path, code)
}

fn parse_literal<T: std::str::FromStr>(text: &str, ctx: &ErrorContext, expected: &str) -> Result<T> {
    let text = text.trim();
    text.parse::<T>()
        .map_err(|_| Error::value_conversion(ctx, text, expected))
}

fn extract_one(
    base: Node<'_, '_>,
    attr: &AttributeRule,
    table: Option<&str>,
    ns: &Namespace,
    codelists: &CodelistStore,
    ctx: &ErrorContext,
) -> Result<Option<Value>> {
    let value = match attr.datatype {
        Datatype::StringList => {
            let values = select(base, attr.path, ns)?
                .into_iter()
                .filter_map(|el| el.text().map(|code| resolve_code(el, table, codelists, code)))
                .collect();
            Value::StringList(values)
        }
        Datatype::DoubleList => {
            let mut values = Vec::new();
            for el in select(base, attr.path, ns)? {
                for literal in el.text().unwrap_or_default().split_whitespace() {
                    values.push(parse_literal::<f64>(literal, ctx, "floating-point number")?);
                }
            }
            Value::DoubleList(values)
        }
        Datatype::Object | Datatype::ObjectList => {
            return Err(Error::UnsupportedDatatype(format!(
                "{} ({}){}",
                attr.name,
                attr.datatype.name(),
                ctx
            )));
        }
        Datatype::Address => match find(base, attr.path, ns)? {
            Some(el) => Value::String(collapsed_text(el)),
            None => return Ok(None),
        },
        Datatype::String => match first_text(base, attr.path, ns)? {
            Some((el, text)) => Value::String(resolve_code(el, table, codelists, text)),
            None => return Ok(None),
        },
        Datatype::Integer => match first_text(base, attr.path, ns)? {
            Some((_, text)) => Value::Integer(parse_literal(text, ctx, "integer")?),
            None => return Ok(None),
        },
        Datatype::Double => match first_text(base, attr.path, ns)? {
            Some((_, text)) => Value::Double(parse_literal(text, ctx, "floating-point number")?),
            None => return Ok(None),
        },
        Datatype::Boolean => match first_text(base, attr.path, ns)? {
            Some((_, text)) => Value::Boolean(BOOLEAN_TRUE.contains(&text.trim())),
            None => return Ok(None),
        },
        Datatype::Date => match first_text(base, attr.path, ns)? {
            Some((_, text)) => Value::Date(parse_literal::<NaiveDate>(text, ctx, "date (YYYY-MM-DD)")?),
            None => return Ok(None),
        },
    };
    Ok(Some(value))
}

/// First element matching `path` together with its text
fn first_text<'a, 'input>(
    base: Node<'a, 'input>,
    path: &str,
    ns: &Namespace,
) -> Result<Option<(Node<'a, 'input>, &'a str)>> {
    Ok(find(base, path, ns)?.and_then(|el| el.text().map(|text| (el, text))))
}

/// Extract the attributes a rule declares for `element`
///
/// Generic attributes come first under the key `generic` when the rule
/// loads them. Groups whose base element is missing are skipped.
pub fn extract_attributes(
    element: Node<'_, '_>,
    rule: &FeatureRule,
    ns: &Namespace,
    codelists: &CodelistStore,
    feature: &ErrorContext,
) -> Result<Attributes> {
    let mut attributes = Attributes::new();

    if rule.load_generic_attributes {
        attributes.insert("generic", Value::Object(parse_generic_attributes(element, feature)?));
    }

    let element_name = ns.element_name(element);
    for group in rule.attribute_groups {
        let base = match group.base_element {
            None => element,
            Some(path) => match find(element, path, ns)? {
                Some(base) => base,
                None => continue,
            },
        };

        for attr in group.attributes {
            let table = attr.codelist.table_for(&element_name);
            let ctx = feature.clone().attribute(attr.name);
            if let Some(value) = extract_one(base, attr, table, ns, codelists, &ctx)? {
                attributes.insert(attr.name, value);
            }
        }
    }

    Ok(attributes)
}

fn generic_value<'a>(element: Node<'a, '_>) -> Option<&'a str> {
    element
        .children()
        .find(|n| n.is_element() && n.tag_name().namespace() == Some(GEN_NS) && n.tag_name().name() == "value")
        .and_then(|n| n.text())
}

/// Parse the `gen:*` generic attributes directly below `element`
///
/// Sets become nested objects. Generic geometry properties (`gen:lod*`) and
/// the `gen:class`/`gen:function`/`gen:usage` attributes are left to the rule;
/// any other `gen:` element is rejected.
pub fn parse_generic_attributes(element: Node<'_, '_>, feature: &ErrorContext) -> Result<Attributes> {
    let mut attributes = Attributes::new();

    for child in element.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(GEN_NS) {
            continue;
        }
        let kind = child.tag_name().name();
        if kind.starts_with("lod") || matches!(kind, "class" | "function" | "usage") {
            continue;
        }
        let Some(name) = child.attribute("name") else {
            continue;
        };
        let ctx = feature.clone().attribute(format!("generic/{}", name));

        if kind == "genericAttributeSet" {
            attributes.insert(name, Value::Object(parse_generic_attributes(child, feature)?));
            continue;
        }

        let Some(text) = generic_value(child) else {
            continue;
        };
        let value = match kind {
            "stringAttribute" | "uriAttribute" => Value::String(text.to_string()),
            "intAttribute" => Value::Integer(parse_literal(text, &ctx, "integer")?),
            "doubleAttribute" | "measureAttribute" => {
                Value::Double(parse_literal(text, &ctx, "floating-point number")?)
            }
            "dateAttribute" => Value::Date(parse_literal(text, &ctx, "date (YYYY-MM-DD)")?),
            other => {
                return Err(Error::Unsupported(format!("generic attribute gen:{}{}", other, ctx)));
            }
        };
        attributes.insert(name, value);
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codelist::StaticTables;
    use crate::model::{AttributeGroup, Codelist};
    use roxmltree::Document;
    use std::sync::Arc;

    const BUILDING: &str = r#"<bldg:Building
        xmlns:bldg="http://www.opengis.net/citygml/building/2.0"
        xmlns:gml="http://www.opengis.net/gml"
        xmlns:gen="http://www.opengis.net/citygml/generics/2.0"
        xmlns:uro="https://www.geospatial.jp/iur/uro/3.0"
        xmlns:xAL="urn:oasis:names:tc:ciq:xsdschema:xAL:2.0"
        gml:id="bldg_001">
      <gen:stringAttribute name="survey"><gen:value>2021</gen:value></gen:stringAttribute>
      <gen:genericAttributeSet name="detail">
        <gen:intAttribute name="floors"><gen:value>3</gen:value></gen:intAttribute>
        <gen:measureAttribute name="area"><gen:value uom="m2">12.5</gen:value></gen:measureAttribute>
      </gen:genericAttributeSet>
      <bldg:class codeSpace="../../codelists/Building_class.xml">3001</bldg:class>
      <bldg:usage>411</bldg:usage>
      <bldg:usage>999</bldg:usage>
      <bldg:measuredHeight uom="m"> 9.5 </bldg:measuredHeight>
      <bldg:storeysAboveGround>3</bldg:storeysAboveGround>
      <bldg:storeyHeightsAboveGround>3.1 2.9</bldg:storeyHeightsAboveGround>
      <bldg:address><core:Address xmlns:core="http://www.opengis.net/citygml/2.0"><core:xalAddress>
        <xAL:AddressDetails><xAL:Country><xAL:CountryName>日本</xAL:CountryName>
        <xAL:Locality><xAL:LocalityName>東京都 千代田区</xAL:LocalityName></xAL:Locality>
        </xAL:Country></xAL:AddressDetails></core:xalAddress></core:Address></bldg:address>
      <uro:buildingDetailAttribute><uro:BuildingDetailAttribute>
        <uro:surveyYear>2020</uro:surveyYear>
        <uro:fireproofStructureType>1001</uro:fireproofStructureType>
      </uro:BuildingDetailAttribute></uro:buildingDetailAttribute>
      <uro:isLandmark>True</uro:isLandmark>
      <core:creationDate xmlns:core="http://www.opengis.net/citygml/2.0">2024-03-15</core:creationDate>
    </bldg:Building>"#;

    const DIRECT: &[AttributeRule] = &[
        AttributeRule::coded("class", "./bldg:class", Datatype::String, "Building_class"),
        AttributeRule::coded("usage", "./bldg:usage", Datatype::StringList, "Building_usage"),
        AttributeRule::new("measuredHeight", "./bldg:measuredHeight", Datatype::Double),
        AttributeRule::new("storeysAboveGround", "./bldg:storeysAboveGround", Datatype::Integer),
        AttributeRule::new("storeysBelowGround", "./bldg:storeysBelowGround", Datatype::Integer),
        AttributeRule::new("storeyHeightsAboveGround", "./bldg:storeyHeightsAboveGround", Datatype::DoubleList),
        AttributeRule::new("roofType", "./bldg:roofType", Datatype::StringList),
        AttributeRule::new("address", "./bldg:address", Datatype::Address),
        AttributeRule::new("isLandmark", "./uro:isLandmark", Datatype::Boolean),
    ];

    const DETAIL: &[AttributeRule] = &[
        AttributeRule::new("surveyYear", "./uro:surveyYear", Datatype::Integer),
        AttributeRule::coded(
            "fireproofStructureType",
            "./uro:fireproofStructureType",
            Datatype::String,
            "BuildingDetailAttribute_fireproofStructureType",
        ),
    ];

    const MISSING: &[AttributeRule] = &[AttributeRule::new("buildingID", "./uro:buildingID", Datatype::String)];

    const RULE: FeatureRule = FeatureRule {
        id: "bldg:Building",
        name: "Building",
        target_elements: &["bldg:Building"],
        attribute_groups: &[
            AttributeGroup::direct(DIRECT),
            AttributeGroup::at("./uro:buildingDetailAttribute/uro:BuildingDetailAttribute", DETAIL),
            AttributeGroup::at("./uro:buildingIDAttribute/uro:BuildingIDAttribute", MISSING),
        ],
        load_generic_attributes: true,
        ..FeatureRule::DEFAULT
    };

    fn store() -> CodelistStore {
        let tables = StaticTables::default()
            .with_table("Building_class", [("3001", "普通建物")])
            .with_table("Building_usage", [("411", "住宅")])
            .with_table("BuildingDetailAttribute_fireproofStructureType", [("1001", "耐火")]);
        CodelistStore::with_tables("/nonexistent", Arc::new(tables))
    }

    #[test]
    fn test_extract_declared_attributes() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::from_document(&doc);
        let ctx = ErrorContext::feature("bldg:Building", Some("bldg_001"));
        let attrs = extract_attributes(doc.root_element(), &RULE, &ns, &store(), &ctx).unwrap();

        assert_eq!(attrs.keys().next(), Some("generic"));
        assert_eq!(attrs.get("class"), Some(&Value::from("普通建物")));
        assert_eq!(
            attrs.get("usage"),
            Some(&Value::StringList(vec!["住宅".to_string(), "999".to_string()]))
        );
        assert_eq!(attrs.get("measuredHeight"), Some(&Value::Double(9.5)));
        assert_eq!(attrs.get("storeysAboveGround"), Some(&Value::Integer(3)));
        assert!(!attrs.contains_key("storeysBelowGround"));
        assert_eq!(attrs.get("storeyHeightsAboveGround"), Some(&Value::DoubleList(vec![3.1, 2.9])));
        assert_eq!(attrs.get("roofType"), Some(&Value::StringList(vec![])));
        assert_eq!(attrs.get("address"), Some(&Value::from("日本 東京都 千代田区")));
        assert_eq!(attrs.get("isLandmark"), Some(&Value::Boolean(true)));
        assert_eq!(attrs.get("surveyYear"), Some(&Value::Integer(2020)));
        assert_eq!(attrs.get("fireproofStructureType"), Some(&Value::from("耐火")));
        assert!(!attrs.contains_key("buildingID"));
    }

    #[test]
    fn test_generic_attributes_nest() {
        let doc = Document::parse(BUILDING).unwrap();
        let generic = parse_generic_attributes(doc.root_element(), &ErrorContext::new()).unwrap();
        assert_eq!(generic.get("survey"), Some(&Value::from("2021")));
        let detail = generic.get("detail").and_then(Value::as_object).unwrap();
        assert_eq!(detail.get("floors"), Some(&Value::Integer(3)));
        assert_eq!(detail.get("area"), Some(&Value::Double(12.5)));
    }

    #[test]
    fn test_malformed_number_names_feature_and_attribute() {
        let xml = r#"<bldg:Building xmlns:bldg="http://www.opengis.net/citygml/building/2.0">
            <bldg:storeysAboveGround>three</bldg:storeysAboveGround></bldg:Building>"#;
        let doc = Document::parse(xml).unwrap();
        let ctx = ErrorContext::feature("bldg:Building", Some("bldg_002"));
        let err = extract_attributes(doc.root_element(), &RULE, &Namespace::latest(), &store(), &ctx)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'three'"));
        assert!(err.contains("gml:id=bldg_002"));
        assert!(err.contains("Attribute: storeysAboveGround"));
    }

    #[test]
    fn test_malformed_date_is_fatal() {
        const DATES: &[AttributeRule] = &[AttributeRule::new("surveyDate", "./uro:surveyDate", Datatype::Date)];
        let rule = FeatureRule {
            attribute_groups: const { &[AttributeGroup::direct(DATES)] },
            ..FeatureRule::DEFAULT
        };
        let xml = r#"<uro:X xmlns:uro="https://www.geospatial.jp/iur/uro/3.0"><uro:surveyDate>2020/04/01</uro:surveyDate></uro:X>"#;
        let doc = Document::parse(xml).unwrap();
        let result = extract_attributes(doc.root_element(), &rule, &Namespace::latest(), &store(), &ErrorContext::new());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_object_datatype_is_unsupported() {
        const OBJECTS: &[AttributeRule] = &[AttributeRule::new("parts", "./bldg:parts", Datatype::ObjectList)];
        let rule = FeatureRule {
            attribute_groups: const { &[AttributeGroup::direct(OBJECTS)] },
            ..FeatureRule::DEFAULT
        };
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::from_document(&doc);
        let result = extract_attributes(doc.root_element(), &rule, &ns, &store(), &ErrorContext::new());
        assert!(matches!(result, Err(Error::UnsupportedDatatype(_))));
    }

    #[test]
    fn test_code_table_selected_by_element_tag() {
        const TABLES: &[(&str, &str)] = &[("uro:RiverFloodingRiskAttribute", "RiverFloodingRiskAttribute_rank")];
        const RANK: &[AttributeRule] = &[AttributeRule::coded_by_tag("rank", "./uro:rank", Datatype::String, TABLES)];
        let rule = FeatureRule {
            attribute_groups: const { &[AttributeGroup::direct(RANK)] },
            ..FeatureRule::DEFAULT
        };
        let codelists = CodelistStore::with_tables(
            "/nonexistent",
            Arc::new(StaticTables::default().with_table("RiverFloodingRiskAttribute_rank", [("2", "0.5m以上3m未満")])),
        );
        let xml = r#"<uro:RiverFloodingRiskAttribute xmlns:uro="https://www.geospatial.jp/iur/uro/2.0">
            <uro:rank>2</uro:rank></uro:RiverFloodingRiskAttribute>"#;
        let doc = Document::parse(xml).unwrap();
        let ns = Namespace::from_document(&doc);
        let attrs = extract_attributes(doc.root_element(), &rule, &ns, &codelists, &ErrorContext::new()).unwrap();
        assert_eq!(attrs.get("rank"), Some(&Value::from("0.5m以上3m未満")));
        assert!(matches!(RANK[0].codelist, Codelist::ByTag(_)));
    }

    #[test]
    fn test_unknown_generic_element_is_rejected() {
        let xml = r#"<gen:GenericCityObject xmlns:gen="http://www.opengis.net/citygml/generics/2.0">
            <gen:lod0Geometry/>
            <gen:function>1</gen:function>
            <gen:fooAttribute name="x"><gen:value>1</gen:value></gen:fooAttribute>
            </gen:GenericCityObject>"#;
        let doc = Document::parse(xml).unwrap();
        let result = parse_generic_attributes(doc.root_element(), &ErrorContext::new());
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }
}
