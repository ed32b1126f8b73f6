use pretty_assertions::assert_eq;
use sceneops_core::{execute_plan_text, CapabilityRegistry, Vec3};
use sceneops_scene::InMemoryScene;
use sceneops_test_utils::plan_text;
use serde_json::json;

#[test]
fn test_cube_plan_builds_scene() {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();
    let text = plan_text(&[
        ("mesh.primitive_cube_add", json!({"size": 2, "location": [0, 0, 0]})),
        ("object.modifier_add", json!({"type": "BEVEL"})),
        ("object.modifier_apply", json!({"modifier": "Bevel"})),
        ("object.shade_smooth", json!({})),
        ("transform.translate", json!({"value": [0, 0, 1]})),
        ("transform.resize", json!({"z": 3})),
    ]);

    let report = execute_plan_text(&text, &registry, &mut scene).unwrap();

    assert!(report.succeeded(), "{}", report.render());
    let cube = scene.object("Cube").unwrap();
    assert_eq!(cube.location, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(cube.scale, Vec3::new(1.0, 1.0, 3.0));
    assert!(cube.smooth);
    assert!(cube.modifiers.is_empty());
}

#[test]
fn test_rotation_in_degrees_reaches_scene_as_radians() {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();
    let text = plan_text(&[
        ("mesh.primitive_cube_add", json!({})),
        ("transform.rotate", json!({"value": [0, 0, 90]})),
    ]);

    execute_plan_text(&text, &registry, &mut scene).unwrap();

    let yaw = scene.object("Cube").unwrap().rotation.yaw;
    assert!((yaw - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_apply_missing_modifier_is_logged() {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();
    let text = plan_text(&[
        ("mesh.primitive_cube_add", json!({})),
        ("object.modifier_apply", json!({"modifier": "Subsurf"})),
    ]);

    let report = execute_plan_text(&text, &registry, &mut scene).unwrap();

    assert_eq!(
        report.render(),
        "[0] mesh.primitive_cube_add ✓\n[1] object.modifier_apply ✗ execution failed: Modifier 'Subsurf' not found"
    );
}

#[test]
fn test_transform_after_delete_repairs_to_remaining_object() {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();
    let text = plan_text(&[
        ("mesh.primitive_cube_add", json!({})),
        ("mesh.primitive_plane_add", json!({"size": 10})),
        ("object.delete", json!({"use_global": false})),
        ("transform.translate", json!({"value": [2, 0, 0]})),
    ]);

    let report = execute_plan_text(&text, &registry, &mut scene).unwrap();

    assert!(report.succeeded(), "{}", report.render());
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.active_name(), Some("Cube"));
    assert_eq!(scene.object("Cube").unwrap().location, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_duplicate_chain() {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();
    let text = plan_text(&[
        ("mesh.primitive_torus_add", json!({"major_radius": 2})),
        ("object.duplicate", json!({"linked": false})),
        ("transform.translate", json!({"value": [0, 3, 0]})),
        ("object.duplicate", json!({})),
    ]);

    execute_plan_text(&text, &registry, &mut scene).unwrap();

    let names: Vec<_> = scene.objects().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Torus", "Torus.001", "Torus.002"]);
    assert_eq!(scene.object("Torus.002").unwrap().location, Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(scene.object("Torus").unwrap().params.get("major_radius"), Some(&json!(2)));
}
