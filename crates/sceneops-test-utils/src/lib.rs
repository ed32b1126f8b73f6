//! Testing utilities for sceneops workspace
//!
//! Shared host double and plan-text fixtures.

#![allow(missing_docs)]

use sceneops_core::{HostContext, HostError, ObjectSummary, TypedArgs, Vec3};
use serde_json::{json, Value};

/// One recorded host operator call
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub operator: String,
    pub args: TypedArgs,
}

/// Host double that records every call
///
/// Primitive operators (`mesh.primitive_*`) append a new object and make it
/// active, so selection repair has something to promote.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    objects: Vec<String>,
    active: Option<String>,
    invocations: Vec<Invocation>,
    selections: Vec<String>,
    failing: Vec<(String, String)>,
    refuse_selection: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_active(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.objects.contains(&name) {
            self.objects.push(name.clone());
        }
        self.active = Some(name);
        self
    }

    /// Make `operator` fail with `message`
    pub fn failing_on(mut self, operator: impl Into<String>, message: impl Into<String>) -> Self {
        self.failing.push((operator.into(), message.into()));
        self
    }

    /// Reject every `set_active_selection` call
    pub fn refusing_selection(mut self) -> Self {
        self.refuse_selection = true;
        self
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn operators(&self) -> Vec<&str> {
        self.invocations.iter().map(|i| i.operator.as_str()).collect()
    }

    /// Objects promoted through `set_active_selection`, in order
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

impl HostContext for RecordingHost {
    fn has_active_selection(&self) -> bool {
        self.active.is_some()
    }

    fn set_active_selection(&mut self, object: &str) -> Result<(), HostError> {
        if self.refuse_selection {
            return Err(HostError::new(format!("cannot select {object}")));
        }
        self.selections.push(object.to_string());
        self.active = Some(object.to_string());
        Ok(())
    }

    fn objects(&self) -> Vec<String> {
        self.objects.clone()
    }

    fn active_object(&self) -> Option<ObjectSummary> {
        self.active.as_ref().map(|name| ObjectSummary {
            name: name.clone(),
            location: Vec3::ZERO,
            visible: true,
        })
    }

    fn invoke(&mut self, operator: &str, args: &TypedArgs) -> Result<Value, HostError> {
        self.invocations.push(Invocation {
            operator: operator.to_string(),
            args: args.clone(),
        });

        if let Some((_, message)) = self.failing.iter().find(|(op, _)| op == operator) {
            return Err(HostError::new(message.clone()));
        }

        if let Some(shape) = operator.strip_prefix("mesh.primitive_") {
            let name = format!("{}.{:03}", shape.trim_end_matches("_add"), self.objects.len());
            self.objects.push(name.clone());
            self.active = Some(name);
        }

        Ok(json!("FINISHED"))
    }
}

/// Serialize `(tool, args)` pairs into plan text
pub fn plan_text(steps: &[(&str, Value)]) -> String {
    let steps: Vec<Value> = steps
        .iter()
        .map(|(tool, args)| json!({ "tool": tool, "args": args }))
        .collect();
    json!({ "plan": steps }).to_string()
}

/// Surround plan text with chatty prose and a code fence
pub fn wrap_in_prose(plan: &str) -> String {
    format!("Sure! Here is the plan you asked for:\n```json\n{plan}\n```\nLet me know if you need anything else.")
}

/// Plan creating a cube then smoothing it
pub fn cube_and_smooth_plan() -> String {
    plan_text(&[
        ("mesh.primitive_cube_add", json!({ "size": 2, "location": [0, 0, 0] })),
        ("object.shade_smooth", json!({})),
    ])
}
