//! Plan parser
//!
//! Generated completions often wrap the JSON plan in prose. The parser takes
//! everything between the first `{` and the last `}` and decodes that.

use crate::error::ParseError;
use crate::plan::{Plan, Step};
use serde_json::Value;

/// Locate the outermost object candidate: first `{` through last `}`.
#[must_use]
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse generated text into a plan
///
/// # Errors
/// - [`ParseError::NoObject`] if no `{ ... }` span exists
/// - [`ParseError::Decode`] if the span is not valid JSON
/// - [`ParseError::MissingPlan`] if `plan` is absent or not a sequence
pub fn parse_plan(text: &str) -> Result<Plan, ParseError> {
    let trimmed = text.trim();
    let Some(candidate) = extract_object(trimmed) else {
        tracing::warn!("No JSON object found in plan text");
        return Err(ParseError::no_object(trimmed));
    };

    let data: Value = serde_json::from_str(candidate).map_err(|e| {
        tracing::warn!("JSON decode error: {}", e);
        ParseError::decode(e.to_string(), trimmed)
    })?;

    let Some(steps) = data.get("plan").and_then(Value::as_array) else {
        tracing::warn!("Invalid plan structure");
        return Err(ParseError::MissingPlan);
    };

    tracing::info!("Parsed plan with {} steps", steps.len());
    Ok(steps.iter().map(Step::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXCERPT_LIMIT;

    #[test]
    fn parses_bare_plan() {
        let plan = parse_plan(r#"{"plan":[{"tool":"mesh.primitive_cube_add","args":{"size":2}}]}"#)
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps()[0].tool(), Some("mesh.primitive_cube_add"));
    }

    #[test]
    fn parses_plan_wrapped_in_prose() {
        let text = "Sure! Here is the plan:\n```json\n{\"plan\": [{\"tool\": \"object.shade_smooth\"}]}\n```\nEnjoy.";
        let plan = parse_plan(text).unwrap();
        assert_eq!(plan.steps()[0].tool(), Some("object.shade_smooth"));
    }

    #[test]
    fn rejects_text_without_braces() {
        let err = parse_plan("I cannot help with that.").unwrap_err();
        assert!(matches!(err, ParseError::NoObject { .. }));
        assert_eq!(err.excerpt(), Some("I cannot help with that."));
    }

    #[test]
    fn rejects_reversed_braces() {
        assert!(extract_object("} nothing here {").is_none());
        assert!(matches!(
            parse_plan("} nothing here {"),
            Err(ParseError::NoObject { .. })
        ));
    }

    #[test]
    fn decode_error_carries_diagnostic_and_bounded_excerpt() {
        let text = format!("{{\"plan\": [}}{}", "x".repeat(EXCERPT_LIMIT * 2));
        let err = parse_plan(&text).unwrap_err();
        match &err {
            ParseError::Decode { message, excerpt } => {
                assert!(!message.is_empty());
                assert_eq!(excerpt.chars().count(), EXCERPT_LIMIT);
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_or_non_list_plan() {
        assert_eq!(parse_plan(r#"{"steps": []}"#), Err(ParseError::MissingPlan));
        assert_eq!(parse_plan(r#"{"plan": {"tool": "x"}}"#), Err(ParseError::MissingPlan));
    }

    #[test]
    fn empty_plan_is_valid() {
        assert!(parse_plan(r#"{"plan": []}"#).unwrap().is_empty());
    }
}
