//! Appearance index construction
//!
//! Reads every `app:Appearance` of a document, both the global
//! `app:appearanceMember` ones and those local to a feature, in document
//! order. X3D materials are indexed by surface id, parameterized textures by
//! ring id together with the ring's texture coordinates.

use roxmltree::{Document, Node};

use crate::error::{Error, Result};
use crate::model::{Appearance, Material, Texture};
use crate::namespace::Namespace;

use super::geometry::parse_texture_coordinates;
use super::path::{find, select};

const APP_NS: &str = "http://www.opengis.net/citygml/appearance/2.0";

fn target_id(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('#').unwrap_or(text)
}

fn parse_scalar(node: Node<'_, '_>, path: &str, ns: &Namespace) -> Result<Option<f64>> {
    let Some(child) = find(node, path, ns)? else {
        return Ok(None);
    };
    let text = child.text().unwrap_or_default().trim();
    let value = text
        .parse::<f64>()
        .map_err(|_| Error::parse_error_with_context(path, text, "floating-point number"))?;
    Ok(Some(value))
}

fn parse_color(node: Node<'_, '_>, path: &str, ns: &Namespace) -> Result<Option<[f64; 3]>> {
    let Some(child) = find(node, path, ns)? else {
        return Ok(None);
    };
    let text = child.text().unwrap_or_default();
    let values = text
        .split_whitespace()
        .map(|v| v.parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .map_err(|_| Error::parse_error_with_context(path, text, "RGB color"))?;
    match values.as_slice() {
        [r, g, b] => Ok(Some([*r, *g, *b])),
        _ => Err(Error::parse_error_with_context(path, text, "RGB color")),
    }
}

fn parse_material(node: Node<'_, '_>, ns: &Namespace) -> Result<Material> {
    Ok(Material {
        diffuse_color: parse_color(node, "./app:diffuseColor", ns)?,
        emissive_color: parse_color(node, "./app:emissiveColor", ns)?,
        specular_color: parse_color(node, "./app:specularColor", ns)?,
        shininess: parse_scalar(node, "./app:shininess", ns)?,
        transparency: parse_scalar(node, "./app:transparency", ns)?,
        ambient_intensity: parse_scalar(node, "./app:ambientIntensity", ns)?,
    })
}

fn add_material(appearance: &mut Appearance, node: Node<'_, '_>, ns: &Namespace) -> Result<()> {
    let index = appearance.add_material(parse_material(node, ns)?);
    for target in select(node, "./app:target", ns)? {
        appearance.map_material(target_id(target.text().unwrap_or_default()), index);
    }
    Ok(())
}

fn add_texture(appearance: &mut Appearance, node: Node<'_, '_>, ns: &Namespace) -> Result<()> {
    let image_uri = find(node, "./app:imageURI", ns)?
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .ok_or_else(|| Error::invalid_xml_element("app:ParameterizedTexture", "missing app:imageURI"))?;
    let index = appearance.add_texture(Texture { image_uri });

    for coords in select(node, "./app:target//app:textureCoordinates", ns)? {
        let Some(ring) = coords.attribute("ring") else {
            continue;
        };
        let uvs = parse_texture_coordinates(coords.text().unwrap_or_default())?;
        appearance.map_texture(target_id(ring), index, uvs);
    }
    Ok(())
}

/// Build the appearance index of a document
pub fn build_appearance(doc: &Document<'_>, ns: &Namespace) -> Result<Appearance> {
    let mut appearance = Appearance::new();

    let declarations = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(APP_NS) && n.tag_name().name() == "Appearance");

    for declaration in declarations {
        for surface_data in select(declaration, "./app:surfaceDataMember/*", ns)? {
            match surface_data.tag_name().name() {
                "X3DMaterial" => add_material(&mut appearance, surface_data, ns)?,
                "ParameterizedTexture" => add_texture(&mut appearance, surface_data, ns)?,
                other => log::debug!("Ignoring surface data app:{}", other),
            }
        }
    }

    log::debug!(
        "Indexed {} materials and {} textures",
        appearance.materials().len(),
        appearance.textures().len()
    );
    Ok(appearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"<core:CityModel xmlns:core="http://www.opengis.net/citygml/2.0"
        xmlns:app="http://www.opengis.net/citygml/appearance/2.0"
        xmlns:bldg="http://www.opengis.net/citygml/building/2.0"
        xmlns:gml="http://www.opengis.net/gml">
      <app:appearanceMember><app:Appearance>
        <app:theme>rgbTexture</app:theme>
        <app:surfaceDataMember><app:ParameterizedTexture>
          <app:imageURI>53394525_bldg_6697_appearance/hnap0001.jpg</app:imageURI>
          <app:target uri="#poly_1"><app:TexCoordList>
            <app:textureCoordinates ring="#ring_1">0 0 1 0 1 1 0 0</app:textureCoordinates>
            <app:textureCoordinates ring="#ring_2">0.1 0.1 0.2 0.1 0.1 0.1</app:textureCoordinates>
          </app:TexCoordList></app:target>
        </app:ParameterizedTexture></app:surfaceDataMember>
        <app:surfaceDataMember><app:X3DMaterial>
          <app:diffuseColor>0.8 0.2 0.2</app:diffuseColor>
          <app:shininess>0.3</app:shininess>
          <app:target>#poly_1</app:target>
          <app:target>#poly_2</app:target>
        </app:X3DMaterial></app:surfaceDataMember>
      </app:Appearance></app:appearanceMember>
      <core:cityObjectMember><bldg:Building gml:id="b1">
        <app:appearance><app:Appearance>
          <app:surfaceDataMember><app:X3DMaterial>
            <app:diffuseColor>0 0 1</app:diffuseColor>
            <app:target>#poly_2</app:target>
            <app:target>#poly_3</app:target>
          </app:X3DMaterial></app:surfaceDataMember>
        </app:Appearance></app:appearance>
      </bldg:Building></core:cityObjectMember>
    </core:CityModel>"##;

    #[test]
    fn test_global_and_local_appearances() {
        let doc = Document::parse(DOCUMENT).unwrap();
        let ns = Namespace::from_document(&doc);
        let appearance = build_appearance(&doc, &ns).unwrap();

        assert_eq!(appearance.materials().len(), 2);
        assert_eq!(appearance.textures().len(), 1);

        let red = appearance.material_for("poly_1").unwrap();
        assert_eq!(appearance.materials()[red].diffuse_color, Some([0.8, 0.2, 0.2]));
        assert_eq!(appearance.materials()[red].shininess, Some(0.3));
        assert_eq!(appearance.materials()[red].transparency, None);

        // declared first in the global appearance
        assert_eq!(appearance.material_for("poly_2"), Some(red));
        assert_ne!(appearance.material_for("poly_3"), Some(red));
        assert!(appearance.material_for("poly_3").is_some());

        let (tex, uvs) = appearance.texture_for("ring_1").unwrap();
        assert_eq!(appearance.textures()[tex].image_uri, "53394525_bldg_6697_appearance/hnap0001.jpg");
        assert_eq!(uvs, &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        assert_eq!(appearance.texture_for("ring_2").unwrap().1.len(), 3);
    }

    #[test]
    fn test_document_without_appearance() {
        let doc = Document::parse(r#"<core:CityModel xmlns:core="http://www.opengis.net/citygml/2.0"/>"#).unwrap();
        let appearance = build_appearance(&doc, &Namespace::latest()).unwrap();
        assert!(appearance.is_empty());
    }

    #[test]
    fn test_malformed_color() {
        let xml = r#"<app:Appearance xmlns:app="http://www.opengis.net/citygml/appearance/2.0">
            <app:surfaceDataMember><app:X3DMaterial>
              <app:diffuseColor>0.5 0.5</app:diffuseColor>
            </app:X3DMaterial></app:surfaceDataMember></app:Appearance>"#;
        let doc = Document::parse(xml).unwrap();
        let result = build_appearance(&doc, &Namespace::latest());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
