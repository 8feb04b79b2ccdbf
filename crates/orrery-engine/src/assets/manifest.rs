use serde::{Deserialize, Serialize};

/// Describes where the renderer finds textures for a game.
/// Loaded from a JSON file at runtime; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Directory holding per-name textures (e.g., "assets/textures").
    #[serde(default = "default_texture_root")]
    pub texture_root: String,
    /// File extension for named textures, without the dot.
    #[serde(default = "default_texture_extension")]
    pub texture_extension: String,
    /// Cube texture used by the skybox. `null` disables it.
    #[serde(default = "default_skybox")]
    pub skybox: Option<SkyboxDescriptor>,
}

/// Six-face cube texture on disk: `<path><face>.<extension>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyboxDescriptor {
    /// Path prefix shared by all faces (e.g., "assets/textures/skybox/skybox").
    pub path: String,
    /// Face suffixes in +X, +Y, +Z, -X, -Y, -Z order.
    #[serde(default = "default_faces")]
    pub faces: Vec<String>,
    #[serde(default = "default_texture_extension")]
    pub extension: String,
}

fn default_texture_root() -> String {
    "assets/textures".to_string()
}

fn default_texture_extension() -> String {
    "jpg".to_string()
}

fn default_faces() -> Vec<String> {
    ["_px", "_py", "_pz", "_nx", "_ny", "_nz"]
        .iter()
        .map(|f| f.to_string())
        .collect()
}

fn default_skybox() -> Option<SkyboxDescriptor> {
    Some(SkyboxDescriptor {
        path: "assets/textures/skybox/skybox".to_string(),
        faces: default_faces(),
        extension: default_texture_extension(),
    })
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            texture_root: default_texture_root(),
            texture_extension: default_texture_extension(),
            skybox: default_skybox(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// URL of a named texture.
    pub fn texture_path(&self, name: &str) -> String {
        format!("{}/{}.{}", self.texture_root.trim_end_matches('/'), name, self.texture_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert_eq!(manifest, AssetManifest::default());
        assert_eq!(manifest.texture_path("earth"), "assets/textures/earth.jpg");
        assert_eq!(manifest.skybox.unwrap().faces.len(), 6);
    }

    #[test]
    fn parse_custom_manifest() {
        let json = r#"{
            "texture_root": "cdn/tex/",
            "texture_extension": "png",
            "skybox": { "path": "cdn/sky/stars" }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.texture_path("sol"), "cdn/tex/sol.png");
        let skybox = manifest.skybox.unwrap();
        assert_eq!(skybox.path, "cdn/sky/stars");
        assert_eq!(skybox.faces[0], "_px");
        assert_eq!(skybox.extension, "jpg");
    }

    #[test]
    fn null_skybox_disables_it() {
        let manifest = AssetManifest::from_json(r#"{ "skybox": null }"#).unwrap();
        assert!(manifest.skybox.is_none());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(AssetManifest::from_json(r#"{ "texture_root": 3 }"#).is_err());
    }
}
