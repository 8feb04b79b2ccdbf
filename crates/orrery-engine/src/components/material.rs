use serde::Serialize;

/// Where a texture comes from. Named textures are resolved against the
/// asset manifest when the material table is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextureSource {
    /// `<texture_root>/<name>.<texture_extension>`.
    Named { name: String },
    /// Literal URL.
    Path { path: String },
    /// Six-face cube texture: `<path><face>.<extension>` for each face suffix.
    Cube { path: String, faces: Vec<String>, extension: String },
    /// The manifest's skybox cube texture (dropped if the manifest has none).
    Skybox,
    /// Text rendered into a transparent texture on the renderer side.
    Text { text: String, color: String },
}

/// Phong-style material, mirroring what the renderer's standard pipeline consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardMaterial {
    pub name: String,
    pub diffuse_texture: Option<TextureSource>,
    pub reflection_texture: Option<TextureSource>,
    pub diffuse_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub emissive_color: [f32; 3],
    pub back_face_culling: bool,
    /// Skip lighting entirely (skyboxes, labels).
    pub disable_lighting: bool,
}

impl StandardMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse_texture: None,
            reflection_texture: None,
            diffuse_color: [1.0, 1.0, 1.0],
            specular_color: [1.0, 1.0, 1.0],
            emissive_color: [0.0, 0.0, 0.0],
            back_face_culling: true,
            disable_lighting: false,
        }
    }

    pub fn with_diffuse_texture(mut self, texture: TextureSource) -> Self {
        self.diffuse_texture = Some(texture);
        self
    }

    pub fn with_reflection_texture(mut self, texture: TextureSource) -> Self {
        self.reflection_texture = Some(texture);
        self
    }

    pub fn with_diffuse_color(mut self, color: [f32; 3]) -> Self {
        self.diffuse_color = color;
        self
    }

    pub fn with_specular_color(mut self, color: [f32; 3]) -> Self {
        self.specular_color = color;
        self
    }

    pub fn with_back_face_culling(mut self, culling: bool) -> Self {
        self.back_face_culling = culling;
        self
    }

    pub fn with_disable_lighting(mut self, disable: bool) -> Self {
        self.disable_lighting = disable;
        self
    }
}
