//! Prompt template
//!
//! The template asks the model for the bare `{"plan": [...]}` schema. The
//! tool list is rendered from the capability registry so the model is only
//! ever told about whitelisted operations.

use sceneops_core::registry::CapabilityFamily;
use sceneops_core::CapabilityRegistry;

/// Placeholder replaced by the user's request
pub const USER_TEXT_PLACEHOLDER: &str = "{user_text}";

const TOOLS_PLACEHOLDER: &str = "{tools}";

const DEFAULT_TEMPLATE: &str = r#"You are a 3D scene plan generator. Output ONLY a compact JSON plan with this schema and NOTHING else:
{
  "plan": [
    {"tool": "<operator_name>", "args": { /* kwargs for operator */ }}
  ]
}
Rules:
- Use ONLY these tools (operators):
{tools}
- Args must use exact operator parameter names:
  - For transforms: use "value" as a 3-element list [x, y, z] (e.g., {"value": [1.0, 0.0, 0.0]})
  - For primitives: use "size" for cubes/planes (meters), "radius"/"depth" for others
  - transform.resize scales relative to current size (default cube is 2m, so for 1m cube: add cube, then resize with {"value": [0.5, 0.5, 0.5]})
- Keep args minimal and valid for default units (meters).
- Do not include comments or extra keys.
- DO NOT include code.
- Respond with pure JSON (no markdown, no backticks, no text before/after).

User request:
{user_text}
"#;

/// Prompt used when none is given
pub const DEFAULT_PROMPT: &str = "Create a 1m cube at origin";

/// Quick example requests as `(label, prompt)`
pub const EXAMPLES: [(&str, &str); 3] = [
    ("Cube", "Create a 2m cube at origin"),
    ("Sphere", "Add a UV sphere with radius 1.5"),
    ("Cylinder", "Create a cylinder and smooth shade it"),
];

/// Prompt template with the tool list already filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Built-in template listing the registry's tools
    #[must_use]
    pub fn for_registry(registry: &CapabilityRegistry) -> Self {
        Self::from_template(DEFAULT_TEMPLATE, registry)
    }

    /// Custom template; `{tools}` and `{user_text}` are substituted
    #[must_use]
    pub fn from_template(template: &str, registry: &CapabilityRegistry) -> Self {
        Self {
            template: template.replace(TOOLS_PLACEHOLDER, &tool_list(registry)),
        }
    }

    /// Render the prompt for a request
    #[must_use]
    pub fn render(&self, user_text: &str) -> String {
        self.template.replace(USER_TEXT_PLACEHOLDER, user_text.trim())
    }
}

/// One indented line per capability family, in registry order
fn tool_list(registry: &CapabilityRegistry) -> String {
    let mut lines: Vec<(CapabilityFamily, Vec<&str>)> = Vec::new();
    for descriptor in registry.iter() {
        match lines.iter_mut().find(|(family, _)| *family == descriptor.family()) {
            Some((_, ids)) => ids.push(descriptor.id()),
            None => lines.push((descriptor.family(), vec![descriptor.id()])),
        }
    }
    lines
        .iter()
        .map(|(_, ids)| format!("  {}", ids.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
