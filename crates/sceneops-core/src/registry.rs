//! Capability registry
//!
//! Provides [`CapabilityRegistry`], the closed whitelist of scene operations a
//! plan may request. The table is fixed at construction; there is no way to
//! register additional capabilities from plan input.

use crate::args::TypedArgs;
use crate::error::DispatchError;
use crate::host::{HostContext, HostError};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Identifier of the resize capability (x/y/z merge applies to it)
pub const RESIZE: &str = "transform.resize";

/// Identifier of the rotate capability (rotation collapse applies to it)
pub const ROTATE: &str = "transform.rotate";

/// Identifier of the translate capability
pub const TRANSLATE: &str = "transform.translate";

/// Prefix shared by transform-family identifiers
pub const TRANSFORM_PREFIX: &str = "transform.";

/// Prefix shared by primitive-shape creation identifiers
pub const PRIMITIVE_PREFIX: &str = "mesh.primitive_";

/// Invocable behind a capability identifier
pub trait Capability: Send + Sync {
    /// Perform the operation against the host
    fn invoke(&self, host: &mut dyn HostContext, args: &TypedArgs) -> Result<Value, HostError>;
}

/// Capability that forwards to a named host operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostOperator {
    operator: &'static str,
}

impl HostOperator {
    /// Create for a host operator name
    #[inline]
    #[must_use]
    pub const fn new(operator: &'static str) -> Self {
        Self { operator }
    }
}

impl Capability for HostOperator {
    fn invoke(&self, host: &mut dyn HostContext, args: &TypedArgs) -> Result<Value, HostError> {
        host.invoke(self.operator, args)
    }
}

/// Coarse grouping of capabilities by identifier namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityFamily {
    /// `mesh.primitive_*`
    Primitive,
    /// `transform.*`
    Transform,
    /// `object.*`
    Object,
}

impl CapabilityFamily {
    /// Classify an identifier
    #[must_use]
    pub fn of(id: &str) -> Self {
        if id.starts_with(PRIMITIVE_PREFIX) {
            Self::Primitive
        } else if id.starts_with(TRANSFORM_PREFIX) {
            Self::Transform
        } else {
            Self::Object
        }
    }
}

/// Registered capability: identifier, parameter schema and invocable
#[derive(Clone)]
pub struct CapabilityDescriptor {
    id: &'static str,
    allowed_params: &'static [&'static str],
    requires_active_selection: bool,
    invoke: Arc<dyn Capability>,
}

impl CapabilityDescriptor {
    fn host_operator(
        id: &'static str,
        allowed_params: &'static [&'static str],
        requires_active_selection: bool,
    ) -> Self {
        Self {
            id,
            allowed_params,
            requires_active_selection,
            invoke: Arc::new(HostOperator::new(id)),
        }
    }

    /// Capability identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Allowed parameter names
    #[inline]
    #[must_use]
    pub fn allowed_params(&self) -> &'static [&'static str] {
        self.allowed_params
    }

    /// Whether `key` is in the parameter schema
    #[inline]
    #[must_use]
    pub fn allows(&self, key: &str) -> bool {
        self.allowed_params.contains(&key)
    }

    /// Whether an active selection must exist before invocation
    #[inline]
    #[must_use]
    pub fn requires_active_selection(&self) -> bool {
        self.requires_active_selection
    }

    /// Namespace grouping
    #[inline]
    #[must_use]
    pub fn family(&self) -> CapabilityFamily {
        CapabilityFamily::of(self.id)
    }

    /// Invoke the underlying capability
    pub fn invoke(&self, host: &mut dyn HostContext, args: &TypedArgs) -> Result<Value, HostError> {
        self.invoke.invoke(host, args)
    }
}

impl fmt::Debug for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityDescriptor")
            .field("id", &self.id)
            .field("allowed_params", &self.allowed_params)
            .field("requires_active_selection", &self.requires_active_selection)
            .finish_non_exhaustive()
    }
}

/// Serializable view of a descriptor, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityInfo {
    pub id: &'static str,
    pub allowed_params: Vec<&'static str>,
    pub requires_active_selection: bool,
}

impl From<&CapabilityDescriptor> for CapabilityInfo {
    fn from(descriptor: &CapabilityDescriptor) -> Self {
        Self {
            id: descriptor.id,
            allowed_params: descriptor.allowed_params.to_vec(),
            requires_active_selection: descriptor.requires_active_selection,
        }
    }
}

/// Closed registry of whitelisted capabilities
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    descriptors: IndexMap<&'static str, CapabilityDescriptor>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CapabilityRegistry {
    /// Create registry with the built-in capability table
    #[must_use]
    pub fn with_defaults() -> Self {
        const PRIMITIVES: [(&str, &[&str]); 6] = [
            ("mesh.primitive_cube_add", &["size", "location", "rotation"]),
            (
                "mesh.primitive_uv_sphere_add",
                &["radius", "segments", "rings", "location", "rotation"],
            ),
            (
                "mesh.primitive_cylinder_add",
                &["radius", "depth", "vertices", "location", "rotation"],
            ),
            ("mesh.primitive_plane_add", &["size", "location", "rotation"]),
            (
                "mesh.primitive_cone_add",
                &["radius1", "radius2", "depth", "vertices", "location", "rotation"],
            ),
            (
                "mesh.primitive_torus_add",
                &[
                    "major_radius",
                    "minor_radius",
                    "abso_major_rad",
                    "abso_minor_rad",
                    "location",
                    "rotation",
                ],
            ),
        ];
        const SELECTION_BOUND: [(&str, &[&str]); 8] = [
            ("object.modifier_add", &["type"]),
            ("object.modifier_apply", &["modifier", "apply_as"]),
            ("object.shade_smooth", &[]),
            (TRANSLATE, &["value"]),
            (ROTATE, &["value", "orient_axis"]),
            (RESIZE, &["value"]),
            ("object.duplicate", &["linked", "mode"]),
            ("object.delete", &["use_global"]),
        ];

        let primitives = PRIMITIVES
            .into_iter()
            .map(|(id, params)| CapabilityDescriptor::host_operator(id, params, false));
        let selection_bound = SELECTION_BOUND
            .into_iter()
            .map(|(id, params)| CapabilityDescriptor::host_operator(id, params, true));

        Self {
            descriptors: primitives
                .chain(selection_bound)
                .map(|descriptor| (descriptor.id, descriptor))
                .collect(),
        }
    }

    /// Resolve an identifier against the whitelist
    ///
    /// # Errors
    /// Returns [`DispatchError::UnknownCapability`] if `id` is not registered.
    pub fn lookup(&self, id: &str) -> Result<&CapabilityDescriptor, DispatchError> {
        self.descriptors
            .get(id)
            .ok_or_else(|| DispatchError::UnknownCapability(id.to_string()))
    }

    /// Check if capability exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.descriptors.contains_key(id)
    }

    /// All identifiers in table order
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.descriptors.keys().copied().collect()
    }

    /// Number of registered capabilities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate over descriptors in table order
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityDescriptor> {
        self.descriptors.values()
    }

    /// Serializable listing of the table
    #[must_use]
    pub fn infos(&self) -> Vec<CapabilityInfo> {
        self.iter().map(CapabilityInfo::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_with_defaults() {
        let registry = CapabilityRegistry::with_defaults();
        assert_eq!(registry.len(), 14);
        assert!(!registry.is_empty());
        assert!(registry.contains("mesh.primitive_cube_add"));
        assert!(registry.contains(RESIZE));
        assert!(!registry.contains("object.join"));
    }

    #[test]
    fn registry_lookup_unknown() {
        let registry = CapabilityRegistry::default();
        let err = registry.lookup("bpy.ops.wm.quit_blender").unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownCapability("bpy.ops.wm.quit_blender".to_string())
        );
    }

    #[test]
    fn primitives_do_not_require_selection() {
        let registry = CapabilityRegistry::default();
        for descriptor in registry.iter() {
            let expected = descriptor.family() != CapabilityFamily::Primitive;
            assert_eq!(
                descriptor.requires_active_selection(),
                expected,
                "{}",
                descriptor.id()
            );
        }
    }

    #[test]
    fn allowed_params_schema() {
        let registry = CapabilityRegistry::default();
        let rotate = registry.lookup(ROTATE).unwrap();
        assert!(rotate.allows("value"));
        assert!(rotate.allows("orient_axis"));
        assert!(!rotate.allows("angle"));

        let smooth = registry.lookup("object.shade_smooth").unwrap();
        assert!(smooth.allowed_params().is_empty());

        let resize = registry.lookup(RESIZE).unwrap();
        assert!(!resize.allows("x"));
    }

    #[test]
    fn family_of_identifiers() {
        assert_eq!(CapabilityFamily::of(TRANSLATE), CapabilityFamily::Transform);
        assert_eq!(
            CapabilityFamily::of("mesh.primitive_torus_add"),
            CapabilityFamily::Primitive
        );
        assert_eq!(CapabilityFamily::of("object.delete"), CapabilityFamily::Object);
    }

    #[test]
    fn infos_follow_table_order() {
        let infos = CapabilityRegistry::default().infos();
        assert_eq!(infos.first().map(|i| i.id), Some("mesh.primitive_cube_add"));
        assert_eq!(infos.last().map(|i| i.id), Some("object.delete"));
    }
}
