//! Argument conversion
//!
//! Coerces raw step arguments into the typed shapes a capability expects.
//! Conversion is total: unrecognized shapes pass through as [`Arg::Raw`] and
//! keys outside the capability's schema are dropped, never reported.
//!
//! # Rotation collapse
//!
//! `value` on `transform.rotate` arrives as `[x, y, z]` but the host rotates
//! about one axis at a time. The first non-zero component (x, then y, then z)
//! wins; a magnitude above 2π is read as degrees. Requests spanning several
//! axes therefore keep only the first one.

use crate::args::{numeric_triple, Arg, Axis, Euler, TypedArgs, Vec3};
use crate::registry::{CapabilityDescriptor, RESIZE, ROTATE, TRANSLATE};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::f64::consts::TAU;

const RESIZE_AXES: [&str; 3] = ["x", "y", "z"];

/// Convert a step's raw arguments for the given capability.
///
/// Keys outside `allowed_params` are dropped, except bare `x`/`y`/`z` on
/// resize which are first merged into `value`.
#[must_use]
pub fn convert_args(descriptor: &CapabilityDescriptor, raw: &Map<String, Value>) -> TypedArgs {
    let tool = descriptor.id();
    let raw = if tool == RESIZE {
        Cow::Owned(merge_resize_axes(raw))
    } else {
        Cow::Borrowed(raw)
    };

    let mut converted = TypedArgs::new();
    let mut collapsed_axis = false;

    for (key, value) in raw.iter() {
        if !descriptor.allows(key) {
            tracing::debug!("Dropping argument '{}' not accepted by {}", key, tool);
            continue;
        }

        if tool == ROTATE && key == "value" {
            if let Some(components) = numeric_triple(value) {
                let (angle, axis) = collapse_rotation(components);
                tracing::debug!("Collapsed rotation {:?} to {} on {:?}", components, angle, axis);
                converted.insert("value", Arg::Angle(angle));
                if let Some(axis) = axis {
                    converted.insert("orient_axis", Arg::Axis(axis));
                    collapsed_axis = true;
                }
                continue;
            }
        }

        // the axis derived from the collapsed vector must match the angle
        if tool == ROTATE && key == "orient_axis" && collapsed_axis {
            continue;
        }

        converted.insert(key.clone(), convert_argument(tool, key, value));
    }

    converted
}

/// Convert a single allowed argument.
///
/// Rotate's `value` collapse is handled by [`convert_args`]; here a rotate
/// `value` that is not a numeric triple passes through unchanged.
#[must_use]
pub fn convert_argument(tool: &str, key: &str, value: &Value) -> Arg {
    let triple = numeric_triple(value);
    match (key, triple) {
        ("location", Some(components)) => Arg::Point(Vec3::from_array(components)),
        ("rotation", Some(components)) => Arg::Euler(Euler::from_array(components)),
        ("value", Some(components)) if tool == TRANSLATE || tool == RESIZE => {
            Arg::Vector(Vec3::from_array(components))
        }
        ("value", Some(components)) if tool == ROTATE => {
            let (angle, _) = collapse_rotation(components);
            Arg::Angle(angle)
        }
        _ => Arg::Raw(value.clone()),
    }
}

/// Collapse an `[x, y, z]` rotation to a single angle (radians) and axis.
///
/// All-zero input yields angle `0.0` and no axis.
#[must_use]
pub fn collapse_rotation(components: [f64; 3]) -> (f64, Option<Axis>) {
    components
        .into_iter()
        .enumerate()
        .find(|(_, component)| *component != 0.0)
        .map_or((0.0, None), |(index, component)| {
            let angle = if component.abs() > TAU {
                component.to_radians()
            } else {
                component
            };
            (angle, Axis::from_index(index))
        })
}

/// Fold bare `x`/`y`/`z` keys into a `value` array for resize.
///
/// Unspecified axes default to `1.0`. When `value` is already a 3-element
/// sequence, the bare keys override its components instead. Input is left
/// untouched; the merged map is a copy.
#[must_use]
pub fn merge_resize_axes(raw: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::with_capacity(raw.len());
    let mut overrides: [Option<&Value>; 3] = [None; 3];

    for (key, value) in raw {
        match RESIZE_AXES.iter().position(|axis| *axis == key.as_str()) {
            Some(index) => overrides[index] = Some(value),
            None => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    if overrides.iter().all(Option::is_none) {
        return merged;
    }

    let mut components = match merged.get("value") {
        Some(Value::Array(existing)) if existing.len() == 3 => existing.clone(),
        _ => vec![Value::from(1.0); 3],
    };
    for (slot, value) in components.iter_mut().zip(overrides) {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
    merged.insert("value".to_string(), Value::Array(components));
    merged
}
