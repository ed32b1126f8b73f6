//! In-memory scene
//!
//! Deterministic stand-in for a 3D editor scene. Every whitelisted operator
//! has a small, predictable effect on a list of [`SceneObject`]s.

use crate::error::{Result, SceneError};
use crate::object::{Modifier, PrimitiveKind, SceneObject};
use sceneops_core::{Arg, Axis, HostContext, HostError, ObjectSummary, TypedArgs, Vec3};
use serde_json::{json, Value};
use std::fmt;

/// Scene held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    objects: Vec<SceneObject>,
    active: Option<String>,
}

impl InMemoryScene {
    /// Create an empty scene
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects, oldest first
    #[inline]
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Look up an object by name
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Name of the active object
    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active object
    #[must_use]
    pub fn active(&self) -> Option<&SceneObject> {
        self.active.as_deref().and_then(|name| self.object(name))
    }

    /// Number of objects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Make the named object active
    ///
    /// # Errors
    /// Returns [`SceneError::ObjectNotFound`] if no object has that name.
    pub fn select(&mut self, name: &str) -> Result<()> {
        if self.object(name).is_none() {
            return Err(SceneError::ObjectNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Apply a whitelisted operator
    ///
    /// # Errors
    /// Returns [`SceneError`] for unknown operators, a missing active object
    /// or malformed arguments.
    pub fn apply(&mut self, operator: &str, args: &TypedArgs) -> Result<()> {
        if let Some(kind) = PrimitiveKind::from_operator(operator) {
            self.add_primitive(kind, args);
            return Ok(());
        }

        match operator {
            "object.modifier_add" => {
                let kind = args
                    .get("type")
                    .and_then(|a| a.as_str())
                    .ok_or_else(|| SceneError::invalid_argument(operator, "type"))?
                    .to_string();
                let object = self.active_mut(operator)?;
                let name = unique_modifier_name(object, &Modifier::default_name(&kind));
                object.modifiers.push(Modifier { name, kind });
            }
            "object.modifier_apply" => {
                let name = args
                    .get("modifier")
                    .and_then(|a| a.as_str())
                    .ok_or_else(|| SceneError::invalid_argument(operator, "modifier"))?
                    .to_string();
                let object = self.active_mut(operator)?;
                let position = object
                    .modifiers
                    .iter()
                    .position(|m| m.name == name)
                    .ok_or(SceneError::ModifierNotFound(name))?;
                object.modifiers.remove(position);
            }
            "object.shade_smooth" => {
                self.active_mut(operator)?.smooth = true;
            }
            "transform.translate" => {
                let offset = vector_arg(operator, args)?;
                let object = self.active_mut(operator)?;
                object.location = object.location.add(offset);
            }
            "transform.rotate" => {
                let angle = args
                    .get("value")
                    .and_then(|a| a.as_f64())
                    .ok_or_else(|| SceneError::invalid_argument(operator, "value"))?;
                let axis = args
                    .get("orient_axis")
                    .and_then(|a| a.as_axis())
                    .unwrap_or(Axis::Z);
                let object = self.active_mut(operator)?;
                object.rotation = object.rotation.rotated(axis, angle);
            }
            "transform.resize" => {
                let factor = vector_arg(operator, args)?;
                let object = self.active_mut(operator)?;
                object.scale = object.scale.scale(factor);
            }
            "object.duplicate" => {
                let mut copy = self.active_mut(operator)?.clone();
                copy.name = self.unique_name(base_name(&copy.name));
                self.active = Some(copy.name.clone());
                self.objects.push(copy);
            }
            "object.delete" => {
                let name = self
                    .active
                    .take()
                    .ok_or_else(|| SceneError::no_active(operator))?;
                self.objects.retain(|o| o.name != name);
            }
            _ => return Err(SceneError::UnknownOperator(operator.to_string())),
        }
        Ok(())
    }

    fn add_primitive(&mut self, kind: PrimitiveKind, args: &TypedArgs) {
        let mut object = SceneObject::new(self.unique_name(kind.base_name()), kind);
        for (key, arg) in args.iter() {
            match key {
                "location" => {
                    if let Some(location) = arg.as_vec3() {
                        object.location = location;
                    }
                }
                "rotation" => {
                    if let Some(rotation) = arg.as_euler() {
                        object.rotation = rotation;
                    }
                }
                _ => {
                    let value = match arg {
                        Arg::Raw(value) => value.clone(),
                        other => serde_json::to_value(other).unwrap_or(Value::Null),
                    };
                    object.params.insert(key.to_string(), value);
                }
            }
        }

        tracing::debug!("Added {} at {}", object.name, object.location);
        self.active = Some(object.name.clone());
        self.objects.push(object);
    }

    fn active_mut(&mut self, operator: &str) -> Result<&mut SceneObject> {
        let name = self
            .active
            .as_deref()
            .ok_or_else(|| SceneError::no_active(operator))?;
        self.objects
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| SceneError::ObjectNotFound(name.to_string()))
    }

    /// `base`, then `base.001`, `base.002`, ...
    fn unique_name(&self, base: &str) -> String {
        if self.object(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| self.object(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }
}

impl HostContext for InMemoryScene {
    fn has_active_selection(&self) -> bool {
        self.active().is_some()
    }

    fn set_active_selection(&mut self, object: &str) -> std::result::Result<(), HostError> {
        self.select(object).map_err(HostError::from)
    }

    fn objects(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.name.clone()).collect()
    }

    fn active_object(&self) -> Option<ObjectSummary> {
        self.active().map(|object| ObjectSummary {
            name: object.name.clone(),
            location: object.location,
            visible: object.visible,
        })
    }

    fn invoke(&mut self, operator: &str, args: &TypedArgs) -> std::result::Result<Value, HostError> {
        self.apply(operator, args)?;
        Ok(json!("FINISHED"))
    }
}

impl fmt::Display for InMemoryScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.objects.is_empty() {
            return f.write_str("(empty scene)");
        }
        for (i, object) in self.objects.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let marker = if self.active.as_deref() == Some(object.name.as_str()) {
                '*'
            } else {
                ' '
            };
            write!(f, "{marker} {object}")?;
        }
        Ok(())
    }
}

fn vector_arg(operator: &str, args: &TypedArgs) -> Result<Vec3> {
    args.get("value")
        .and_then(|a| a.as_vec3())
        .ok_or_else(|| SceneError::invalid_argument(operator, "value"))
}

fn unique_modifier_name(object: &SceneObject, base: &str) -> String {
    if object.modifier(base).is_none() {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base}.{n:03}"))
        .find(|candidate| object.modifier(candidate).is_none())
        .unwrap_or_else(|| base.to_string())
}

/// Strip a `.NNN` suffix so duplicates of `Cube.001` are named from `Cube`
fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, suffix)) if suffix.len() == 3 && suffix.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => name,
    }
}
