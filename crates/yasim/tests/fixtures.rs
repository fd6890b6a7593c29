mod test_helpers;

use glam::DVec3;
use test_helpers::{assert_close, parse_compressed};
use yasim::{Primitive, PrimitiveKind, Renderer, ScadRenderer, SurfaceKind, WingKind};

#[test]
fn parse_single_engine_trainer() {
    let result = parse_compressed("tests/data/c172.xml");
    let scene = match result {
        Ok(scene) => scene,
        Err(e) => panic!("Failed to parse c172: {e}"),
    };

    let ids: Vec<&str> = scene.iter().map(Primitive::id).collect();
    assert_eq!(
        ids,
        [
            "YASim_cockpit#0",
            "YASim_fuselage#0",
            "YASim_wing#0",
            "YASim_hstab#0",
            "YASim_vstab#0",
            "YASim_propeller#0",
            "YASim_gear#0",
            "YASim_gear#1",
            "YASim_gear#2",
            "YASim_tank#0",
            "YASim_tank#1",
            "YASim_ballast#0",
            "YASim_weight#0",
            "YASim_weight#1",
            "YASim_hitch#0",
        ]
    );

    let counts = scene.counts();
    assert_eq!(counts[&PrimitiveKind::Wing], 3);
    assert_eq!(counts[&PrimitiveKind::Gear], 3);
    assert_eq!(scene.control_surface_count(), 4);

    let offsets = scene.offsets().expect("offsets comment");
    assert_eq!(offsets.x, 0.25);
    assert_eq!(offsets.z, -0.1);
}

#[test]
fn trainer_offsets_are_applied() {
    let scene = parse_compressed("tests/data/c172.xml").unwrap();

    // (-0.8, 0.2, 0.4) flipped into scene axes, then shifted by the offsets
    let cockpit = scene.find("YASim_cockpit#0").unwrap();
    assert_close(cockpit.position(), DVec3::new(1.05, -0.2, 0.3));
}

#[test]
fn trainer_wing_surfaces() {
    let scene = parse_compressed("tests/data/c172.xml").unwrap();

    let wing = scene.find("YASim_wing#0").and_then(Primitive::as_wing).unwrap();
    assert_eq!(wing.kind, WingKind::Wing);
    assert!(wing.is_symmetric());
    let surfaces: Vec<_> = wing
        .control_surfaces
        .iter()
        .map(|s| (s.id.as_str(), s.kind, s.start, s.end))
        .collect();
    assert_eq!(
        surfaces,
        [
            ("YASim_flap0#0", SurfaceKind::Flap0, 0.0, 0.45),
            ("YASim_flap1#0", SurfaceKind::Flap1, 0.5, 0.95),
        ]
    );

    let vstab = scene.find("YASim_vstab#0").and_then(Primitive::as_wing).unwrap();
    assert!(!vstab.is_symmetric());
    assert_eq!(vstab.params.dihedral, 90.0);
    assert_eq!(vstab.control_surfaces[0].id, "YASim_flap0#2");
}

#[test]
fn trainer_propeller_action_point() {
    let scene = parse_compressed("tests/data/c172.xml").unwrap();
    let Some(Primitive::Propeller(prop)) = scene.find("YASim_propeller#0") else {
        panic!("missing propeller");
    };
    assert_eq!(prop.radius, 0.95);
    assert_close(prop.thrust.action_point, DVec3::new(-1.65, 0.0, 0.0));
    // Forward thrust: YASim -X is scene +X
    assert_close(prop.thrust.unit_direction(), DVec3::X);
}

#[test]
fn parse_carrier_jet() {
    let scene = parse_compressed("tests/data/carrier-jet.xml").unwrap();

    assert_eq!(scene.len(), 16);
    assert!(scene.offsets().is_none());
    assert_eq!(scene.control_surface_count(), 7);

    let wing = scene.find("YASim_wing#0").and_then(Primitive::as_wing).unwrap();
    let kinds: Vec<_> = wing.control_surfaces.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [
            SurfaceKind::Slat,
            SurfaceKind::Flap0,
            SurfaceKind::Flap1,
            SurfaceKind::Spoiler
        ]
    );

    let mstab = scene.find("YASim_mstab#0").and_then(Primitive::as_wing).unwrap();
    assert_eq!(mstab.kind, WingKind::Mstab);

    let second_fin = scene.find("YASim_vstab#1").and_then(Primitive::as_wing).unwrap();
    assert_eq!(second_fin.params.dihedral, 110.0);
    assert_eq!(second_fin.control_surfaces[0].id, "YASim_flap0#3");
}

#[test]
fn carrier_jet_thrust() {
    let scene = parse_compressed("tests/data/carrier-jet.xml").unwrap();

    let Some(Primitive::Jet(left)) = scene.find("YASim_jet#0") else {
        panic!("missing jet");
    };
    assert_eq!(left.rotate, -2.0);
    assert_close(left.thrust.action_point, DVec3::new(8.2, -0.6, 0.4));
    // Tilted thrust keeps pointing forward
    assert!(left.thrust.unit_direction().x > 0.99);

    let Some(Primitive::Jet(right)) = scene.find("YASim_jet#1") else {
        panic!("missing jet");
    };
    assert_close(right.thrust.direction, DVec3::new(1.0, 0.0, 0.05));

    let Some(Primitive::Thruster(lift)) = scene.find("YASim_thruster#0") else {
        panic!("missing thruster");
    };
    assert_close(lift.thrust.action_point, lift.center);
    assert_close(lift.thrust.direction, DVec3::Z);
}

#[test]
fn carrier_jet_deck_gear() {
    let scene = parse_compressed("tests/data/carrier-jet.xml").unwrap();

    let Some(Primitive::Gear(nose)) = scene.find("YASim_gear#0") else {
        panic!("missing gear");
    };
    assert!((nose.compression_length() - 0.5).abs() < 1e-9);

    let Some(Primitive::Hook(hook)) = scene.find("YASim_hook#0") else {
        panic!("missing hook");
    };
    assert_eq!(hook.down_angle, 60.0);
    assert!(hook.down_tip.z < hook.position.z);

    let Some(Primitive::Launchbar(bar)) = scene.find("YASim_launchbar#0") else {
        panic!("missing launchbar");
    };
    assert_close(bar.holdback, DVec3::new(-4.3, 0.0, -1.1));
    assert!((bar.params.holdback_length - 1.5).abs() < 1e-9);
}

#[test]
fn parse_helicopter() {
    let scene = parse_compressed("tests/data/helicopter.xml").unwrap();

    assert_eq!(scene.len(), 11);
    let rotors: Vec<_> = scene
        .of_kind(PrimitiveKind::Rotor)
        .map(|p| match p {
            Primitive::Rotor(r) => r,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(rotors.len(), 2);

    let main = rotors[0];
    assert_eq!(main.id, "YASim_rotor#0");
    assert!(main.params.ccw);
    assert_eq!(main.params.numblades, 4);
    assert!((main.radius - 5.5).abs() < 1e-9);
    assert!((main.normal.length() - 1.0).abs() < 1e-9);
    assert!(((main.blade_tip() - main.center).length() - 5.5).abs() < 1e-9);

    let tail = rotors[1];
    assert!(!tail.params.ccw);
    assert_close(tail.normal, -DVec3::Y);
}

#[test]
fn render_every_fixture() {
    for path in [
        "tests/data/c172.xml",
        "tests/data/carrier-jet.xml",
        "tests/data/helicopter.xml",
    ] {
        let scene = parse_compressed(path).unwrap();
        let scad = ScadRenderer::default().render(&scene).unwrap();
        for primitive in &scene {
            let marker = format!("// {}\n", primitive.id());
            assert!(scad.contains(&marker), "{path}: no block for {}", primitive.id());
        }
    }
}
