use proptest::prelude::*;
use sceneops_core::args::Axis;
use sceneops_core::convert::collapse_rotation;
use sceneops_core::error::EXCERPT_LIMIT;
use sceneops_core::{parse_plan, ParseError};
use sceneops_test_utils::{cube_and_smooth_plan, wrap_in_prose};

#[test]
fn test_fenced_plan() {
    let plan = parse_plan(&wrap_in_prose(&cube_and_smooth_plan())).unwrap();
    assert_eq!(plan.len(), 2);
}

#[test]
fn test_decode_error_message() {
    let err = parse_plan("Plan: {\"plan\": [ {\"tool\": } ]}").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid plan (JSON): "));
    assert!(rendered.contains("\n---\nPlan: {\"plan\""));
}

#[test]
fn test_collapse_prefers_first_nonzero_axis() {
    assert_eq!(collapse_rotation([0.0, 1.2, 3.0]), (1.2, Some(Axis::Y)));
    assert_eq!(collapse_rotation([0.0, 0.0, 0.0]), (0.0, None));
    assert_eq!(collapse_rotation([-180.0, 0.0, 0.0]), ((-180f64).to_radians(), Some(Axis::X)));
}

proptest! {
    #[test]
    fn prop_prose_around_plan_is_ignored(
        prefix in "[a-zA-Z0-9 .,:!\n]{0,40}",
        suffix in "[a-zA-Z0-9 .,:!\n]{0,40}",
    ) {
        let bare = cube_and_smooth_plan();
        let wrapped = format!("{prefix}{bare}{suffix}");
        prop_assert_eq!(parse_plan(&wrapped), parse_plan(&bare));
    }

    #[test]
    fn prop_text_without_braces_never_parses(text in "[^{}]{0,600}") {
        match parse_plan(&text) {
            Err(ParseError::NoObject { excerpt }) => {
                prop_assert!(excerpt.chars().count() <= EXCERPT_LIMIT);
            }
            other => prop_assert!(false, "expected NoObject, got {:?}", other),
        }
    }

    #[test]
    fn prop_collapse_picks_first_nonzero(
        x in prop_oneof![Just(0.0), -360.0f64..360.0],
        y in prop_oneof![Just(0.0), -360.0f64..360.0],
        z in prop_oneof![Just(0.0), -360.0f64..360.0],
    ) {
        let components = [x, y, z];
        let (angle, axis) = collapse_rotation(components);

        match components.iter().position(|c| *c != 0.0) {
            Some(index) => {
                prop_assert_eq!(axis.map(Axis::index), Some(index));
                let source = components[index];
                prop_assert!(angle.abs() <= source.abs());
                prop_assert!(angle.abs() <= std::f64::consts::TAU * 2.0);
            }
            None => {
                prop_assert_eq!(axis, None);
                prop_assert_eq!(angle, 0.0);
            }
        }
    }
}
