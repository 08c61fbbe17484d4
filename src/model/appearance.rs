//! Appearance (material and texture) types

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::geometry::Uv;

/// X3D material
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    /// Diffuse RGB color
    pub diffuse_color: Option<[f64; 3]>,
    /// Emissive RGB color
    pub emissive_color: Option<[f64; 3]>,
    /// Specular RGB color
    pub specular_color: Option<[f64; 3]>,
    /// Shininess in `[0, 1]`
    pub shininess: Option<f64>,
    /// Transparency in `[0, 1]`
    pub transparency: Option<f64>,
    /// Ambient intensity in `[0, 1]`
    pub ambient_intensity: Option<f64>,
}

/// Parameterized texture image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Image URI as written in the document (relative to the document)
    pub image_uri: String,
}

impl Texture {
    /// Image URI with percent-escapes decoded
    pub fn image_path(&self) -> Cow<'_, str> {
        urlencoding::decode(&self.image_uri).unwrap_or(Cow::Borrowed(&self.image_uri))
    }
}

/// Index from document identifiers to materials and textures
///
/// Built once per document; the first declaration for an identifier wins.
#[derive(Debug, Clone, Default)]
pub struct Appearance {
    materials: Vec<Material>,
    textures: Vec<Texture>,
    target_to_material: HashMap<String, usize>,
    ring_to_texture: HashMap<String, (usize, Vec<Uv>)>,
}

impl Appearance {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, returning its index
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add a texture, returning its index
    pub fn add_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Map a surface identifier to a material; returns false if already mapped
    pub fn map_material(&mut self, target: impl Into<String>, material: usize) -> bool {
        match self.target_to_material.entry(target.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(material);
                true
            }
        }
    }

    /// Map a ring identifier to a texture; returns false if already mapped
    pub fn map_texture(&mut self, ring: impl Into<String>, texture: usize, uvs: Vec<Uv>) -> bool {
        match self.ring_to_texture.entry(ring.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert((texture, uvs));
                true
            }
        }
    }

    /// Material index mapped to a surface identifier
    pub fn material_for(&self, target: &str) -> Option<usize> {
        self.target_to_material.get(target).copied()
    }

    /// Texture index and texture coordinates mapped to a ring identifier
    pub fn texture_for(&self, ring: &str) -> Option<(usize, &[Uv])> {
        self.ring_to_texture
            .get(ring)
            .map(|(texture, uvs)| (*texture, uvs.as_slice()))
    }

    /// All materials, indexed by [`Polygon::material`](super::Polygon::material)
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All textures, indexed by [`Polygon::texture`](super::Polygon::texture)
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Check whether nothing was declared
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty() && self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declaration_wins() {
        let mut app = Appearance::new();
        let red = app.add_material(Material {
            diffuse_color: Some([1.0, 0.0, 0.0]),
            ..Default::default()
        });
        let blue = app.add_material(Material {
            diffuse_color: Some([0.0, 0.0, 1.0]),
            ..Default::default()
        });
        assert!(app.map_material("poly_1", red));
        assert!(!app.map_material("poly_1", blue));
        assert_eq!(app.material_for("poly_1"), Some(red));
        assert_eq!(app.material_for("poly_2"), None);
    }

    #[test]
    fn test_texture_mapping() {
        let mut app = Appearance::new();
        let tex = app.add_texture(Texture {
            image_uri: "53394525_bldg_6697_appearance/hnap0001.jpg".to_string(),
        });
        app.map_texture("ring_1", tex, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        let (idx, uvs) = app.texture_for("ring_1").unwrap();
        assert_eq!(idx, tex);
        assert_eq!(uvs.len(), 4);
        assert!(!app.is_empty());
    }

    #[test]
    fn test_image_path_is_decoded() {
        let tex = Texture {
            image_uri: "appearance/%E5%A3%81.png".to_string(),
        };
        assert_eq!(tex.image_path(), "appearance/壁.png");
    }
}
