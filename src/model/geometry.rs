//! Geometry values of extracted features

/// A coordinate triple in source ordinate order (latitude, longitude, height)
pub type Coord = [f64; 3];

/// Texture coordinate pair
pub type Uv = [f32; 2];

/// A polygon with optional appearance references
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Closed rings; ring 0 is the exterior, the rest are holes
    pub rings: Vec<Vec<Coord>>,
    /// Index into the document's material list
    pub material: Option<usize>,
    /// Index into the document's texture list, from the exterior ring
    pub texture: Option<usize>,
    /// Per-ring texture coordinates
    ///
    /// `None` when appearance was not loaded. Otherwise one entry per ring,
    /// `None` for rings without a texture mapping.
    pub uvs: Option<Vec<Option<Vec<Uv>>>>,
}

impl Polygon {
    /// Polygon without appearance references
    pub fn new(rings: Vec<Vec<Coord>>) -> Self {
        Self {
            rings,
            material: None,
            texture: None,
            uvs: None,
        }
    }

    /// Exterior ring
    pub fn exterior(&self) -> &[Coord] {
        self.rings.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Interior rings (holes)
    pub fn interiors(&self) -> &[Vec<Coord>] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

/// Geometry of a flat feature record
///
/// A record's geometry is `Option<Geometry>`; `None` marks a record without
/// spatial representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Multi-part polygon geometry
    Polygons(Vec<Polygon>),
    /// Multi-part line geometry
    Lines(Vec<Vec<Coord>>),
    /// Point set
    Points(Vec<Coord>),
}

impl Geometry {
    /// Simple-features type name of the geometry
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygons(_) => "MultiPolygon",
            Geometry::Lines(_) => "MultiLineString",
            Geometry::Points(_) => "MultiPoint",
        }
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        match self {
            Geometry::Polygons(polygons) => polygons.len(),
            Geometry::Lines(lines) => lines.len(),
            Geometry::Points(points) => points.len(),
        }
    }

    /// Check whether the geometry has no parts
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of coordinates across all parts
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Polygons(polygons) => polygons
                .iter()
                .flat_map(|p| p.rings.iter())
                .map(Vec::len)
                .sum(),
            Geometry::Lines(lines) => lines.iter().map(Vec::len).sum(),
            Geometry::Points(points) => points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_and_counts() {
        let square = vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        let hole = vec![[0.2, 0.2, 0.0], [0.2, 0.4, 0.0], [0.4, 0.4, 0.0], [0.2, 0.2, 0.0]];
        let poly = Polygon::new(vec![square.clone(), hole]);
        assert_eq!(poly.exterior().len(), 4);
        assert_eq!(poly.interiors().len(), 1);

        let g = Geometry::Polygons(vec![poly]);
        assert_eq!(g.type_name(), "MultiPolygon");
        assert_eq!(g.len(), 1);
        assert_eq!(g.vertex_count(), 8);

        assert_eq!(Geometry::Lines(vec![square]).type_name(), "MultiLineString");
        assert!(Geometry::Points(vec![]).is_empty());
    }

    #[test]
    fn test_empty_polygon_accessors() {
        let poly = Polygon::new(vec![]);
        assert!(poly.exterior().is_empty());
        assert!(poly.interiors().is_empty());
    }
}
