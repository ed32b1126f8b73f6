//! Plan and step types

use serde::Serialize;
use serde_json::{Map, Value};

/// One requested capability invocation with its raw arguments
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Step {
    tool: Option<String>,
    args: Map<String, Value>,
}

impl Step {
    /// Create a step for a tool
    #[must_use]
    pub fn new(tool: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            tool: Some(tool.into()),
            args,
        }
    }

    /// Create a step with no tool
    #[must_use]
    pub fn without_tool(args: Map<String, Value>) -> Self {
        Self { tool: None, args }
    }

    /// Read a step from a decoded plan element
    ///
    /// A non-object element or a missing/non-string `tool` yields a step with
    /// no tool; a missing or non-object `args` yields empty arguments.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            tool: object.get("tool").and_then(Value::as_str).map(str::to_string),
            args: object
                .get("args")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Requested tool, if present and non-empty
    #[must_use]
    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref().filter(|tool| !tool.is_empty())
    }

    /// Raw arguments
    #[inline]
    #[must_use]
    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }
}

/// Ordered, immutable sequence of steps
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Create from steps
    #[inline]
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Steps in order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if plan has no steps
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over steps in order
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl FromIterator<Step> for Plan {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
