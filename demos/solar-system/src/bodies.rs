//! Body catalog: the fixed list of celestial bodies the scene is built from.
//!
//! Ids are dense and zero-based, so an id doubles as the index into the
//! catalog. Body 0 is the root every other body orbits.

use std::fmt;

use glam::Vec3;
use serde::Serialize;

use crate::error::SolarError;

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl BodyId {
    /// The body every other body is parented to.
    pub const ROOT: BodyId = BodyId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One celestial body. Immutable after catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    pub id: BodyId,
    /// Display name; also the texture name.
    pub name: String,
    pub diameter: f32,
    /// Orbital radius from the root body.
    pub distance: f32,
    /// Axial tilt in degrees.
    pub axis: f32,
    /// Orbital phase in radians.
    pub rev_speed: f32,
}

impl CelestialBody {
    pub fn new(id: u32, name: impl Into<String>, diameter: f32, distance: f32, axis: f32, rev_speed: f32) -> Self {
        Self {
            id: BodyId(id),
            name: name.into(),
            diameter,
            distance,
            axis,
            rev_speed,
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == BodyId::ROOT
    }

    /// Spin axis for this body's tilt.
    pub fn tilt_axis(&self) -> Vec3 {
        tilt_axis(self.axis)
    }
}

/// Spin axis for a tilt of `axis_deg` degrees, leaning from +Y towards +X.
pub fn tilt_axis(axis_deg: f32) -> Vec3 {
    let radians = axis_deg.to_radians();
    Vec3::new(radians.sin(), radians.cos(), 0.0)
}

/// UI-facing id/name pair.
#[derive(Serialize)]
struct BodyLabel<'a> {
    id: BodyId,
    name: &'a str,
}

/// Validated, ordered list of bodies.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
}

impl Catalog {
    /// Validate and wrap `bodies`. Ids must equal their position in the list.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, SolarError> {
        if bodies.is_empty() {
            return Err(SolarError::InvalidCatalog("catalog has no bodies".into()));
        }
        for (index, body) in bodies.iter().enumerate() {
            if body.id.index() != index {
                return Err(SolarError::InvalidCatalog(format!(
                    "body '{}' has id {} at position {}",
                    body.name, body.id, index
                )));
            }
            if !(body.diameter.is_finite() && body.diameter > 0.0) {
                return Err(SolarError::InvalidCatalog(format!(
                    "body '{}' has non-positive diameter {}",
                    body.name, body.diameter
                )));
            }
            if !(body.distance.is_finite() && body.distance >= 0.0) {
                return Err(SolarError::InvalidCatalog(format!(
                    "body '{}' has negative distance {}",
                    body.name, body.distance
                )));
            }
        }
        Ok(Self { bodies })
    }

    /// Sol and the three inner planets.
    pub fn standard() -> Self {
        Self {
            bodies: vec![
                CelestialBody::new(0, "sol", 100.0, 0.0, 7.25, 0.0),
                CelestialBody::new(1, "mercury", 0.351, 4162.0, 0.0, 47.4),
                CelestialBody::new(2, "venus", 0.891, 7754.0, 177.3, 35.0),
                CelestialBody::new(3, "earth", 0.916, 10763.0, 23.5, 29.8),
            ],
        }
    }

    pub fn get(&self, id: BodyId) -> Result<&CelestialBody, SolarError> {
        self.bodies.get(id.index()).ok_or(SolarError::UnknownBody(id))
    }

    pub fn root(&self) -> &CelestialBody {
        &self.bodies[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// `[{"id":0,"name":"sol"}, ...]` for the UI's body buttons.
    pub fn labels_json(&self) -> Result<String, serde_json::Error> {
        let labels: Vec<BodyLabel> = self
            .bodies
            .iter()
            .map(|b| BodyLabel { id: b.id, name: &b.name })
            .collect();
        serde_json::to_string(&labels)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid() {
        let standard = Catalog::standard();
        let validated = Catalog::new(standard.iter().cloned().collect()).unwrap();
        assert_eq!(validated.len(), 4);
        assert_eq!(validated.root().name, "sol");
        assert_eq!(validated.get(BodyId(3)).unwrap().distance, 10763.0);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.get(BodyId(4)),
            Err(SolarError::UnknownBody(BodyId(4)))
        ));
    }

    #[test]
    fn sparse_ids_are_rejected() {
        let bodies = vec![
            CelestialBody::new(0, "sol", 100.0, 0.0, 0.0, 0.0),
            CelestialBody::new(2, "venus", 1.0, 10.0, 0.0, 0.0),
        ];
        assert!(matches!(Catalog::new(bodies), Err(SolarError::InvalidCatalog(_))));
    }

    #[test]
    fn bad_geometry_is_rejected() {
        let zero = vec![CelestialBody::new(0, "sol", 0.0, 0.0, 0.0, 0.0)];
        assert!(Catalog::new(zero).is_err());
        let negative = vec![CelestialBody::new(0, "sol", 1.0, -5.0, 0.0, 0.0)];
        assert!(Catalog::new(negative).is_err());
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn tilt_axis_leans_towards_x() {
        assert!((tilt_axis(0.0) - Vec3::Y).length() < 1e-6);
        assert!((tilt_axis(90.0) - Vec3::X).length() < 1e-6);
        let venus = tilt_axis(177.3);
        assert!(venus.y < -0.99);
    }

    #[test]
    fn labels_json_lists_ids_and_names() {
        let json = Catalog::standard().labels_json().unwrap();
        assert!(json.starts_with(r#"[{"id":0,"name":"sol"}"#));
        assert!(json.contains(r#"{"id":3,"name":"earth"}"#));
    }
}
