//! Single-step dispatch
//!
//! The dispatcher is the only path from a requested tool to the host. It
//! performs no policy of its own beyond composing the stages:
//! lookup → repair → validate → convert → invoke.

use crate::context;
use crate::convert::convert_args;
use crate::error::DispatchError;
use crate::host::HostContext;
use crate::registry::{CapabilityFamily, CapabilityRegistry};
use serde_json::{Map, Value};

/// Whitelist-enforcing dispatcher
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r CapabilityRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create dispatcher over a registry
    #[inline]
    #[must_use]
    pub fn new(registry: &'r CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Registry this dispatcher enforces
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &'r CapabilityRegistry {
        self.registry
    }

    /// Safely invoke one capability
    ///
    /// `raw_args` is read-only; disallowed keys are dropped from the
    /// converted copy.
    ///
    /// # Errors
    /// - [`DispatchError::UnknownCapability`] if `tool` is not whitelisted
    /// - [`DispatchError::Precondition`] if an active selection is required
    ///   and still missing after repair
    /// - [`DispatchError::Execution`] if the capability itself fails
    pub fn dispatch(
        &self,
        host: &mut dyn HostContext,
        tool: &str,
        raw_args: &Map<String, Value>,
    ) -> Result<Value, DispatchError> {
        let descriptor = self.registry.lookup(tool)?;

        context::repair_selection(tool, host);
        context::validate(descriptor, host)?;

        let args = convert_args(descriptor, raw_args);
        if args.is_empty() {
            tracing::debug!("Calling operator {} without arguments", tool);
        } else {
            tracing::debug!("Calling operator {} with args {:?}", tool, args);
        }

        let result = descriptor
            .invoke(host, &args)
            .map_err(|e| DispatchError::execution(tool, e.message()))?;

        if descriptor.family() == CapabilityFamily::Primitive {
            post_creation_check(host);
        }

        Ok(result)
    }
}

fn post_creation_check(host: &dyn HostContext) {
    match host.active_object() {
        Some(object) => tracing::info!(
            "Created object '{}' at {}, visible: {}",
            object.name,
            object.location,
            object.visible
        ),
        None => tracing::warn!("No active object after primitive add"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Arg, Axis, TypedArgs};
    use crate::host::HostError;
    use serde_json::json;

    #[derive(Default)]
    struct Scene {
        objects: Vec<String>,
        active: Option<String>,
        calls: Vec<(String, TypedArgs)>,
        fail_with: Option<&'static str>,
    }

    impl HostContext for Scene {
        fn has_active_selection(&self) -> bool {
            self.active.is_some()
        }

        fn set_active_selection(&mut self, object: &str) -> Result<(), HostError> {
            self.active = Some(object.to_string());
            Ok(())
        }

        fn objects(&self) -> Vec<String> {
            self.objects.clone()
        }

        fn invoke(&mut self, operator: &str, args: &TypedArgs) -> Result<Value, HostError> {
            self.calls.push((operator.to_string(), args.clone()));
            match self.fail_with {
                Some(message) => Err(HostError::new(message)),
                None => Ok(json!("FINISHED")),
            }
        }
    }

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn dispatch_invokes_with_converted_args() {
        let registry = CapabilityRegistry::default();
        let dispatcher = Dispatcher::new(&registry);
        let mut scene = Scene {
            objects: vec!["Cube".into()],
            ..Scene::default()
        };

        let result = dispatcher
            .dispatch(&mut scene, "transform.rotate", &raw(json!({"value": [0, 0, 90]})))
            .unwrap();

        assert_eq!(result, json!("FINISHED"));
        assert_eq!(scene.active.as_deref(), Some("Cube"));
        let (operator, args) = &scene.calls[0];
        assert_eq!(operator, "transform.rotate");
        assert_eq!(args.get("orient_axis"), Some(&Arg::Axis(Axis::Z)));
    }

    #[test]
    fn dispatch_rejects_unknown_before_touching_host() {
        let registry = CapabilityRegistry::default();
        let mut scene = Scene {
            objects: vec!["Cube".into()],
            ..Scene::default()
        };

        let err = Dispatcher::new(&registry)
            .dispatch(&mut scene, "transform.shear", &Map::new())
            .unwrap_err();

        assert_eq!(err, DispatchError::UnknownCapability("transform.shear".into()));
        assert!(scene.active.is_none(), "repair must not run for unknown tools");
        assert!(scene.calls.is_empty());
    }

    #[test]
    fn dispatch_precondition_failure_skips_invocation() {
        let registry = CapabilityRegistry::default();
        let mut scene = Scene::default();

        let err = Dispatcher::new(&registry)
            .dispatch(&mut scene, "object.shade_smooth", &Map::new())
            .unwrap_err();

        assert!(matches!(err, DispatchError::Precondition { .. }));
        assert!(scene.calls.is_empty());
    }

    #[test]
    fn dispatch_wraps_host_failure() {
        let registry = CapabilityRegistry::default();
        let mut scene = Scene {
            fail_with: Some("context is incorrect"),
            ..Scene::default()
        };

        let err = Dispatcher::new(&registry)
            .dispatch(&mut scene, "mesh.primitive_plane_add", &raw(json!({"size": 4})))
            .unwrap_err();

        assert_eq!(
            err,
            DispatchError::execution("mesh.primitive_plane_add", "context is incorrect")
        );
    }

    #[test]
    fn dispatch_empty_args_after_filtering() {
        let registry = CapabilityRegistry::default();
        let mut scene = Scene {
            active: Some("Cube".into()),
            ..Scene::default()
        };

        Dispatcher::new(&registry)
            .dispatch(&mut scene, "object.shade_smooth", &raw(json!({"angle": 0.5})))
            .unwrap();

        assert!(scene.calls[0].1.is_empty());
    }
}
