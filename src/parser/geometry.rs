//! Geometry assembly
//!
//! Collects the GML primitives addressed by a rule's path set into a single
//! multi-part [`Geometry`]. The kind of primitive is taken from the last step
//! of each path: `gml:Polygon` / `gml:Triangle` become polygons,
//! `gml:LineString` lines and `gml:Point` points. When polygons and lines are
//! both found, polygons win; lines win over points.

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::model::{Appearance, Coord, Geometry, Polygon, Uv};
use crate::namespace::{GML_NS, Namespace};

use super::path::{find, gml_id, last_step, select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimitiveKind {
    Polygon,
    Line,
    Point,
}

fn primitive_kind(path: &str) -> Result<PrimitiveKind> {
    match last_step(path) {
        "gml:Polygon" | "gml:Triangle" => Ok(PrimitiveKind::Polygon),
        "gml:LineString" => Ok(PrimitiveKind::Line),
        "gml:Point" => Ok(PrimitiveKind::Point),
        _ => Err(Error::UnsupportedGeometryPath(path.to_string())),
    }
}

/// Parse a whitespace-separated ordinate list into coordinate triples
///
/// Ordinates are kept in source order (latitude, longitude, height).
pub fn parse_pos_list(text: &str) -> Result<Vec<Coord>> {
    let ordinates = text
        .split_whitespace()
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| Error::parse_error_with_context("gml:posList", v, "floating-point number"))
        })
        .collect::<Result<Vec<f64>>>()?;

    if ordinates.len() % 3 != 0 {
        return Err(Error::ParseError(format!(
            "Coordinate list of {} values is not a sequence of 3D positions",
            ordinates.len()
        )));
    }

    Ok(ordinates.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// Parse a whitespace-separated list of texture coordinate pairs
pub fn parse_texture_coordinates(text: &str) -> Result<Vec<Uv>> {
    let values = text
        .split_whitespace()
        .map(|v| {
            v.parse::<f32>()
                .map_err(|_| Error::parse_error_with_context("app:textureCoordinates", v, "floating-point number"))
        })
        .collect::<Result<Vec<f32>>>()?;

    if values.len() % 2 != 0 {
        return Err(Error::ParseError(format!(
            "Texture coordinate list of {} values is not a sequence of pairs",
            values.len()
        )));
    }

    Ok(values.chunks_exact(2).map(|c| [c[0], c[1]]).collect())
}

/// Coordinates of a ring, line string or point
///
/// Reads a single `gml:posList`, or else every `gml:pos` child in order.
fn coordinates(node: Node<'_, '_>, ns: &Namespace, element: &str) -> Result<Vec<Coord>> {
    if let Some(pos_list) = find(node, "./gml:posList", ns)? {
        return parse_pos_list(pos_list.text().unwrap_or_default());
    }

    let positions = select(node, "./gml:pos", ns)?;
    if positions.is_empty() {
        return Err(Error::invalid_xml_element(element, "missing gml:posList or gml:pos"));
    }

    let mut coords = Vec::with_capacity(positions.len());
    for pos in positions {
        coords.extend(parse_pos_list(pos.text().unwrap_or_default())?);
    }
    Ok(coords)
}

fn is_gml(node: Node<'_, '_>, local: &str) -> bool {
    let tag = node.tag_name();
    tag.namespace() == Some(GML_NS) && tag.name() == local
}

/// Enclosing geometry of a primitive, skipping the property element between them
///
/// e.g. the `gml:CompositeSurface` around `gml:surfaceMember/gml:Polygon`.
fn structural_parent<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.parent_element()?.parent_element()
}

fn polygon_material(polygon: Node<'_, '_>, appearance: &Appearance) -> Option<usize> {
    if let Some(material) = gml_id(polygon).and_then(|id| appearance.material_for(id)) {
        return Some(material);
    }

    let surface = structural_parent(polygon)?;
    if let Some(material) = gml_id(surface).and_then(|id| appearance.material_for(id)) {
        return Some(material);
    }

    if is_gml(surface, "CompositeSurface") {
        let outer = structural_parent(surface)?;
        return gml_id(outer).and_then(|id| appearance.material_for(id));
    }

    None
}

/// Texture and UVs mapped onto a ring
///
/// UVs that do not pair up with the ring's vertices are dropped with a warning.
fn ring_texture(ring: Node<'_, '_>, coords: &[Coord], appearance: &Appearance) -> Option<(usize, Vec<Uv>)> {
    let id = gml_id(ring)?;
    let (texture, uvs) = appearance.texture_for(id)?;

    if uvs.len() != coords.len() {
        log::warn!(
            "Ignoring texture of ring '{}': {} vertices but {} texture coordinates",
            id,
            coords.len(),
            uvs.len()
        );
        return None;
    }

    Some((texture, uvs.to_vec()))
}

fn assemble_polygon(node: Node<'_, '_>, ns: &Namespace, appearance: Option<&Appearance>) -> Result<Polygon> {
    let exterior = find(node, "./gml:exterior/gml:LinearRing", ns)?
        .ok_or_else(|| Error::invalid_xml_element("gml:Polygon", "missing exterior gml:LinearRing"))?;
    let interiors = select(node, "./gml:interior/gml:LinearRing", ns)?;

    let mut rings = Vec::with_capacity(1 + interiors.len());
    let mut ring_uvs = Vec::with_capacity(1 + interiors.len());
    let mut texture = None;

    for ring in std::iter::once(exterior).chain(interiors) {
        let coords = coordinates(ring, ns, "gml:LinearRing")?;
        if let Some(appearance) = appearance {
            match ring_texture(ring, &coords, appearance) {
                Some((tex, uvs)) => {
                    // first textured ring names the polygon's texture
                    texture.get_or_insert(tex);
                    ring_uvs.push(Some(uvs));
                }
                None => ring_uvs.push(None),
            }
        }
        rings.push(coords);
    }

    Ok(Polygon {
        rings,
        material: appearance.and_then(|a| polygon_material(node, a)),
        texture,
        uvs: appearance.map(|_| ring_uvs),
    })
}

/// Assemble the geometry addressed by `paths` below `node`
///
/// Returns `None` when no path matches anything. An unknown primitive kind at
/// the end of a path is an error even if the path matches nothing.
pub fn assemble(
    node: Node<'_, '_>,
    paths: &[&str],
    ns: &Namespace,
    appearance: Option<&Appearance>,
) -> Result<Option<Geometry>> {
    let mut polygons = Vec::new();
    let mut lines = Vec::new();
    let mut points = Vec::new();

    for path in paths {
        let kind = primitive_kind(path)?;
        for primitive in select(node, path, ns)? {
            match kind {
                PrimitiveKind::Polygon => polygons.push(assemble_polygon(primitive, ns, appearance)?),
                PrimitiveKind::Line => lines.push(coordinates(primitive, ns, "gml:LineString")?),
                PrimitiveKind::Point => points.extend(coordinates(primitive, ns, "gml:Point")?),
            }
        }
    }

    let geometry = if !polygons.is_empty() {
        Some(Geometry::Polygons(polygons))
    } else if !lines.is_empty() {
        Some(Geometry::Lines(lines))
    } else if !points.is_empty() {
        Some(Geometry::Points(points))
    } else {
        None
    };
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Material, Texture};
    use roxmltree::Document;

    const BUILDING: &str = r#"<bldg:Building xmlns:bldg="http://www.opengis.net/citygml/building/2.0"
        xmlns:gml="http://www.opengis.net/gml" gml:id="bldg_1">
      <bldg:lod1Solid><gml:Solid gml:id="solid_1"><gml:exterior><gml:CompositeSurface gml:id="cs_1">
        <gml:surfaceMember><gml:Polygon gml:id="poly_1">
          <gml:exterior><gml:LinearRing gml:id="ring_1">
            <gml:posList>35.0 139.0 10.0 35.0 139.1 10.0 35.1 139.1 10.0 35.0 139.0 10.0</gml:posList>
          </gml:LinearRing></gml:exterior>
          <gml:interior><gml:LinearRing gml:id="ring_2">
            <gml:pos>35.01 139.01 10.0</gml:pos>
            <gml:pos>35.01 139.02 10.0</gml:pos>
            <gml:pos>35.02 139.02 10.0</gml:pos>
            <gml:pos>35.01 139.01 10.0</gml:pos>
          </gml:LinearRing></gml:interior>
        </gml:Polygon></gml:surfaceMember>
        <gml:surfaceMember><gml:Polygon gml:id="poly_2">
          <gml:exterior><gml:LinearRing gml:id="ring_3">
            <gml:posList>35.0 139.0 0.0 35.0 139.1 0.0 35.0 139.0 0.0</gml:posList>
          </gml:LinearRing></gml:exterior>
        </gml:Polygon></gml:surfaceMember>
      </gml:CompositeSurface></gml:exterior></gml:Solid></bldg:lod1Solid>
      <bldg:lod0FootPrint><gml:MultiCurve><gml:curveMember><gml:LineString>
        <gml:posList>35.0 139.0 0 35.1 139.1 0</gml:posList>
      </gml:LineString></gml:curveMember></gml:MultiCurve></bldg:lod0FootPrint>
      <bldg:lod0RoofEdge><gml:Point><gml:pos>35.0 139.0 0</gml:pos></gml:Point></bldg:lod0RoofEdge>
    </bldg:Building>"#;

    const POLYGONS: &[&str] = &["./bldg:lod1Solid//gml:Polygon"];

    #[test]
    fn test_polygon_rings_keep_source_order() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();
        let geometry = assemble(doc.root_element(), POLYGONS, &ns, None).unwrap().unwrap();

        let Geometry::Polygons(polygons) = geometry else {
            panic!("expected polygons");
        };
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].rings.len(), 2);
        assert_eq!(polygons[0].exterior()[1], [35.0, 139.1, 10.0]);
        assert_eq!(polygons[0].interiors()[0].len(), 4);
        assert_eq!(polygons[0].uvs, None);
        assert_eq!(polygons[0].material, None);
    }

    #[test]
    fn test_lines_and_points() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();
        let root = doc.root_element();

        let lines = assemble(root, &["./bldg:lod0FootPrint//gml:LineString"], &ns, None).unwrap();
        assert_eq!(lines, Some(Geometry::Lines(vec![vec![[35.0, 139.0, 0.0], [35.1, 139.1, 0.0]]])));

        let points = assemble(root, &["./bldg:lod0RoofEdge/gml:Point"], &ns, None).unwrap();
        assert_eq!(points, Some(Geometry::Points(vec![[35.0, 139.0, 0.0]])));
    }

    #[test]
    fn test_polygons_take_precedence() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();
        let paths = ["./bldg:lod0FootPrint//gml:LineString", "./bldg:lod1Solid//gml:Polygon"];
        let geometry = assemble(doc.root_element(), &paths, &ns, None).unwrap().unwrap();
        assert_eq!(geometry.type_name(), "MultiPolygon");
    }

    #[test]
    fn test_nothing_matched() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();
        let geometry = assemble(doc.root_element(), &["./bldg:lod2Solid//gml:Polygon"], &ns, None).unwrap();
        assert!(geometry.is_none());
    }

    #[test]
    fn test_unsupported_path() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();
        let result = assemble(doc.root_element(), &["./bldg:lod1Solid//gml:Solid"], &ns, None);
        assert!(matches!(result, Err(Error::UnsupportedGeometryPath(_))));
    }

    #[test]
    fn test_material_falls_back_to_composite_surface_owner() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();

        let mut appearance = Appearance::new();
        let wall = appearance.add_material(Material::default());
        let roof = appearance.add_material(Material::default());
        appearance.map_material("solid_1", wall);
        appearance.map_material("poly_2", roof);

        let geometry = assemble(doc.root_element(), POLYGONS, &ns, Some(&appearance)).unwrap();
        let Some(Geometry::Polygons(polygons)) = geometry else {
            panic!("expected polygons");
        };
        assert_eq!(polygons[0].material, Some(wall));
        assert_eq!(polygons[1].material, Some(roof));
    }

    #[test]
    fn test_texture_per_ring() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();

        let mut appearance = Appearance::new();
        let tex = appearance.add_texture(Texture {
            image_uri: "appearance/0.jpg".to_string(),
        });
        appearance.map_texture("ring_1", tex, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);

        let geometry = assemble(doc.root_element(), POLYGONS, &ns, Some(&appearance)).unwrap();
        let Some(Geometry::Polygons(polygons)) = geometry else {
            panic!("expected polygons");
        };
        assert_eq!(polygons[0].texture, Some(tex));
        let uvs = polygons[0].uvs.as_ref().unwrap();
        assert_eq!(uvs.len(), 2);
        assert_eq!(uvs[0].as_ref().map(Vec::len), Some(4));
        assert!(uvs[1].is_none());
        assert_eq!(polygons[1].texture, None);
        assert_eq!(polygons[1].uvs, Some(vec![None]));
    }

    #[test]
    fn test_texture_coordinate_count_mismatch_drops_uvs() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();

        let mut appearance = Appearance::new();
        let tex = appearance.add_texture(Texture {
            image_uri: "appearance/0.jpg".to_string(),
        });
        appearance.map_texture("ring_3", tex, vec![[0.0, 0.0]]);

        let geometry = assemble(doc.root_element(), POLYGONS, &ns, Some(&appearance)).unwrap();
        let Some(Geometry::Polygons(polygons)) = geometry else {
            panic!("expected polygons");
        };
        assert_eq!(polygons[1].texture, None);
        assert_eq!(polygons[1].uvs, Some(vec![None]));
    }

    #[test]
    fn test_texture_from_interior_ring() {
        let doc = Document::parse(BUILDING).unwrap();
        let ns = Namespace::latest();

        let mut appearance = Appearance::new();
        let tex = appearance.add_texture(Texture {
            image_uri: "appearance/1.jpg".to_string(),
        });
        appearance.map_texture("ring_2", tex, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);

        let geometry = assemble(doc.root_element(), POLYGONS, &ns, Some(&appearance)).unwrap();
        let Some(Geometry::Polygons(polygons)) = geometry else {
            panic!("expected polygons");
        };
        assert_eq!(polygons[0].texture, Some(tex));
        let uvs = polygons[0].uvs.as_ref().unwrap();
        assert!(uvs[0].is_none());
        assert_eq!(uvs[1].as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_pos_list_errors() {
        assert!(matches!(parse_pos_list("1 2"), Err(Error::ParseError(_))));
        assert!(matches!(parse_pos_list("1 2 x"), Err(Error::ParseError(_))));
        assert!(parse_pos_list("").unwrap().is_empty());
        assert_eq!(parse_texture_coordinates("0 1 0.5 0.5").unwrap(), vec![[0.0, 1.0], [0.5, 0.5]]);
    }

    #[test]
    fn test_ring_without_coordinates() {
        let xml = r#"<gml:Polygon xmlns:gml="http://www.opengis.net/gml">
            <gml:exterior><gml:LinearRing/></gml:exterior></gml:Polygon>"#;
        let doc = Document::parse(xml).unwrap();
        let ns = Namespace::latest();
        let result = assemble(doc.root_element(), &[".//gml:Polygon"], &ns, None);
        // the root itself is not a descendant
        assert!(result.unwrap().is_none());
        let result = assemble(doc.root(), &[".//gml:Polygon"], &ns, None);
        assert!(matches!(result, Err(Error::InvalidXml(_))));
    }
}
