//! The demo configuration end to end: two pillars and the arc between them.

use glam::DVec3;
use orbis_config::Config;
use orbis_scene::{SceneDescription, build_scene};

const EPSILON: f64 = 1e-9;

fn demo_scene() -> SceneDescription {
    build_scene(&Config::with_demo_sites()).unwrap()
}

#[test]
fn demo_scene_has_pillars_and_arc() {
    let scene = demo_scene();
    assert_eq!(scene.pillars.len(), 2);
    assert_eq!(scene.arcs.len(), 1);
    assert_eq!(scene.pillars[0].site, "Beijing");
    assert_eq!(scene.pillars[1].color, 0x00ffff);
    assert_eq!(scene.arcs[0].world_points.len(), 81);
    assert_eq!(scene.arcs[0].curve.color, 0xffffff);
    assert_eq!(scene.arcs[0].curve.fly_line_color, Some(0x000000));
}

#[test]
fn demo_arc_starts_and_ends_at_pillars() {
    let scene = demo_scene();
    let arc = &scene.arcs[0];
    let from = scene.pillar(&arc.from).unwrap().placement.position;
    let to = scene.pillar(&arc.to).unwrap().placement.position;

    let first = arc.world_points[0];
    let last = *arc.world_points.last().unwrap();
    assert!((first - from).length() < EPSILON, "{first:?} vs {from:?}");
    assert!((last - to).length() < EPSILON, "{last:?} vs {to:?}");
}

#[test]
fn demo_traveller_moves_along_arc() {
    let scene = demo_scene();
    let arc = &scene.arcs[0];
    let center = arc.curve.world_center();

    for i in 0..=10 {
        let p = arc.traveller_at(i as f64 / 10.0);
        assert!(((p - center).length() - arc.curve.radius).abs() < EPSILON);
    }
    assert!((arc.traveller_at(0.5) - arc.curve.world_top()).length() < EPSILON);
}

#[test]
fn demo_pillars_stand_upright() {
    let scene = demo_scene();
    for pillar in &scene.pillars {
        let up = pillar.placement.orientation * DVec3::Z;
        let normal = pillar.placement.position.normalize();
        assert!((up - normal).length() < EPSILON, "{} leans", pillar.site);

        let top_mid = (pillar.quads[0][2] + pillar.quads[0][3]) * 0.5;
        assert!((top_mid.length() - (1.0 + pillar.height)).abs() < EPSILON);
    }
}

#[test]
fn spin_rotates_group_not_geometry() {
    let mut scene = demo_scene();
    let before = scene.arcs[0].world_points.clone();
    scene.advance(1000);

    assert!((scene.spin.angle - 1.0).abs() < 1e-12);
    assert_eq!(scene.arcs[0].world_points, before);

    let rotated = scene.group_rotation() * before[0];
    assert!((rotated.length() - before[0].length()).abs() < EPSILON);
    assert!((rotated.y - before[0].y).abs() < EPSILON);
}

#[test]
fn scene_serializes_to_ron_and_json() {
    let scene = demo_scene();

    let ron_text = scene.to_ron().unwrap();
    assert!(ron_text.contains("Los Angeles"));
    let from_ron: SceneDescription = ron::from_str(&ron_text).unwrap();
    assert_eq!(from_ron.pillars.len(), 2);
    assert_eq!(from_ron.arcs[0].world_points.len(), 81);

    let json_text = scene.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json_text).unwrap();
    assert_eq!(value["earth"]["texture"], "earth.jpg");
    assert_eq!(value["glow"]["color"], 0x4390d1);
    assert_eq!(value["arcs"][0]["from"], "Beijing");
    assert_eq!(value["arcs"][0]["curve"]["points"].as_array().unwrap().len(), 81);
}

#[test]
fn building_twice_is_identical() {
    assert_eq!(demo_scene(), demo_scene());
}
