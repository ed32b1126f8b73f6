//! Scene objects and modifiers

use sceneops_core::{Euler, Vec3};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Mesh primitive an object was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Cube,
    UvSphere,
    Cylinder,
    Plane,
    Cone,
    Torus,
}

impl PrimitiveKind {
    /// Resolve a `mesh.primitive_<shape>_add` operator
    #[must_use]
    pub fn from_operator(operator: &str) -> Option<Self> {
        let shape = operator
            .strip_prefix("mesh.primitive_")?
            .strip_suffix("_add")?;
        match shape {
            "cube" => Some(Self::Cube),
            "uv_sphere" => Some(Self::UvSphere),
            "cylinder" => Some(Self::Cylinder),
            "plane" => Some(Self::Plane),
            "cone" => Some(Self::Cone),
            "torus" => Some(Self::Torus),
            _ => None,
        }
    }

    /// Base name given to new objects of this kind
    #[must_use]
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::UvSphere => "Sphere",
            Self::Cylinder => "Cylinder",
            Self::Plane => "Plane",
            Self::Cone => "Cone",
            Self::Torus => "Torus",
        }
    }
}

/// Modifier on an object's stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub name: String,
    /// Modifier type as requested, e.g. `SUBSURF`
    pub kind: String,
}

impl Modifier {
    /// Display name derived from a type: `BEVEL` becomes `Bevel`
    #[must_use]
    pub fn default_name(kind: &str) -> String {
        let mut chars = kind.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

/// Object in the in-memory scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: PrimitiveKind,
    pub location: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
    pub modifiers: Vec<Modifier>,
    pub smooth: bool,
    pub visible: bool,
    /// Shape parameters passed at creation (`size`, `radius`, ...)
    pub params: Map<String, Value>,
}

impl SceneObject {
    /// Create at the origin with identity transform
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: Vec3::ZERO,
            rotation: Euler::default(),
            scale: Vec3::ONE,
            modifiers: Vec::new(),
            smooth: false,
            visible: true,
            params: Map::new(),
        }
    }

    /// Find a modifier by name
    #[must_use]
    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotation = Vec3::from_array(self.rotation.to_array());
        write!(
            f,
            "{} [{:?}] loc {} rot {} scale {}",
            self.name, self.kind, self.location, rotation, self.scale
        )?;
        if self.smooth {
            f.write_str(" smooth")?;
        }
        if !self.modifiers.is_empty() {
            let names: Vec<&str> = self.modifiers.iter().map(|m| m.name.as_str()).collect();
            write!(f, " modifiers [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_from_operator() {
        assert_eq!(
            PrimitiveKind::from_operator("mesh.primitive_uv_sphere_add"),
            Some(PrimitiveKind::UvSphere)
        );
        assert_eq!(PrimitiveKind::from_operator("mesh.primitive_monkey_add"), None);
        assert_eq!(PrimitiveKind::from_operator("object.delete"), None);
    }

    #[test]
    fn modifier_names() {
        assert_eq!(Modifier::default_name("BEVEL"), "Bevel");
        assert_eq!(Modifier::default_name("subsurf"), "Subsurf");
        assert_eq!(Modifier::default_name(""), "");
    }
}
