use crate::api::error::EngineError;
use crate::api::types::MaterialId;
use crate::assets::manifest::AssetManifest;
use crate::components::material::{StandardMaterial, TextureSource};

/// Registry of materials, indexed by `MaterialId`.
/// Texture names are kept symbolic and resolved against the manifest when the
/// table is handed to the renderer, so the manifest may arrive after init.
pub struct MaterialRegistry {
    materials: Vec<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
        }
    }

    pub fn add(&mut self, material: StandardMaterial) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() as u32 - 1)
    }

    /// Look up a material by id. Returns None if not found.
    pub fn get(&self, id: MaterialId) -> Option<&StandardMaterial> {
        self.materials.get(id.0 as usize)
    }

    /// Look up a material by name.
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .iter()
            .position(|m| m.name == name)
            .map(|idx| MaterialId(idx as u32))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Materials with every texture turned into a concrete URL.
    pub fn resolved(&self, manifest: &AssetManifest) -> Vec<StandardMaterial> {
        self.materials
            .iter()
            .map(|m| {
                let mut m = m.clone();
                m.diffuse_texture = m.diffuse_texture.and_then(|t| resolve(t, manifest));
                m.reflection_texture = m.reflection_texture.and_then(|t| resolve(t, manifest));
                m
            })
            .collect()
    }

    /// JSON array of resolved materials, in `MaterialId` order.
    pub fn to_json(&self, manifest: &AssetManifest) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.resolved(manifest))?)
    }
}

fn resolve(texture: TextureSource, manifest: &AssetManifest) -> Option<TextureSource> {
    match texture {
        TextureSource::Named { name } => Some(TextureSource::Path {
            path: manifest.texture_path(&name),
        }),
        TextureSource::Skybox => manifest.skybox.as_ref().map(|sky| TextureSource::Cube {
            path: sky.path.clone(),
            faces: sky.faces.clone(),
            extension: sky.extension.clone(),
        }),
        other => Some(other),
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut reg = MaterialRegistry::new();
        let a = reg.add(StandardMaterial::new("a"));
        let b = reg.add(StandardMaterial::new("b"));
        assert_eq!(a, MaterialId(0));
        assert_eq!(b, MaterialId(1));
        assert_eq!(reg.find("b"), Some(b));
        assert!(reg.get(MaterialId(5)).is_none());
    }

    #[test]
    fn named_textures_resolve_through_manifest() {
        let mut reg = MaterialRegistry::new();
        reg.add(StandardMaterial::new("earth_mat").with_diffuse_texture(TextureSource::Named {
            name: "earth".into(),
        }));
        let resolved = reg.resolved(&AssetManifest::default());
        assert_eq!(
            resolved[0].diffuse_texture,
            Some(TextureSource::Path { path: "assets/textures/earth.jpg".into() })
        );
    }

    #[test]
    fn skybox_texture_dropped_without_manifest_entry() {
        let mut reg = MaterialRegistry::new();
        reg.add(StandardMaterial::new("sky").with_reflection_texture(TextureSource::Skybox));
        let manifest = AssetManifest { skybox: None, ..AssetManifest::default() };
        assert!(reg.resolved(&manifest)[0].reflection_texture.is_none());

        let with_sky = reg.resolved(&AssetManifest::default());
        assert!(matches!(with_sky[0].reflection_texture, Some(TextureSource::Cube { .. })));
    }

    #[test]
    fn json_is_tagged() {
        let mut reg = MaterialRegistry::new();
        reg.add(StandardMaterial::new("sol_mat").with_diffuse_texture(TextureSource::Named {
            name: "sol".into(),
        }));
        let json = reg.to_json(&AssetManifest::default()).unwrap();
        assert!(json.contains(r#""kind":"path""#));
        assert!(json.contains("assets/textures/sol.jpg"));
    }
}
