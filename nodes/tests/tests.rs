use std::f64::consts::FRAC_PI_2;

use nodes::{Boundaries, Engine, Frame, KeyCommand, NVec2, Node, NodeTemplate, Parameters, Phase, PointerEvent};
use nodes::{Pointer, Scenario, ScenarioConfig, Vector, World};

use rand::rngs::StdRng;
use rand::SeedableRng;

const TOL: f64 = 1e-9;

/// Tolerance compare for floats
fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Vector representations agree with each other
fn consistent(v: &Vector) -> bool {
    close(v.x(), v.magnitude() * v.angle().cos(), 1e-9) && close(v.y(), v.magnitude() * v.angle().sin(), 1e-9)
}

fn square(size: f64) -> Boundaries {
    Boundaries::new(0.0, 0.0, size, size)
}

/// World without gravity or drag, so only what a test does moves nodes
fn still_world(size: f64) -> World {
    World::new(square(size), 0.0).with_gravity(0.0, 0.0)
}

/// Seeded, populated world with default physics
fn busy_world(n: usize, inset: f64) -> World {
    let template = NodeTemplate {
        inset,
        ..NodeTemplate::default()
    };
    let mut world = World::new(Boundaries::default(), 0.002)
        .with_gravity(0.2, FRAC_PI_2)
        .with_node_count(n)
        .with_template(template);
    world.initialize(&mut StdRng::seed_from_u64(42));
    world
}

fn small_config() -> ScenarioConfig {
    let mut cfg = ScenarioConfig::default();
    cfg.world.node_count = 10;
    cfg.world.seed = Some(3);
    cfg
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn vector_setters_keep_representations_consistent() {
    let mut v = Vector::new(3.0, 0.4);
    assert!(consistent(&v));

    for value in [-7.5, -1.0, 0.0, 0.25, 2.0, 12.0] {
        v.set_x(value);
        assert!(consistent(&v), "set_x({value}) broke {:?}", v);
        v.set_y(-value * 0.5);
        assert!(consistent(&v), "set_y broke {:?}", v);
        v.set_magnitude(value.abs() * 3.0);
        assert!(consistent(&v), "set_magnitude broke {:?}", v);
        v.set_angle(value);
        assert!(consistent(&v), "set_angle broke {:?}", v);
    }
}

#[test]
fn vector_polar_construction() {
    let v = Vector::new(2.0, FRAC_PI_2);
    assert!(close(v.x(), 0.0, TOL));
    assert!(close(v.y(), 2.0, TOL));

    let d = Vector::default();
    assert_eq!(d.magnitude(), 0.0);
    assert_eq!(d.x(), 0.0);
    assert_eq!(d.y(), 0.0);
}

#[test]
fn vector_setters_are_sequential() {
    let mut v = Vector::from_xy(1.0, 1.0);
    v.set_x(3.0);
    // y is read back from storage, not re-derived
    assert!(close(v.y(), 1.0, TOL));
    v.set_y(4.0);
    assert!(close(v.magnitude(), 5.0, TOL));
    assert!(close(v.angle(), 4.0f64.atan2(3.0), TOL));
}

#[test]
fn vector_non_finite_input_becomes_zero() {
    let mut v = Vector::from_xy(3.0, 4.0);
    v.set_x(f64::NAN);
    assert_eq!(v.x(), 0.0);
    assert!(close(v.magnitude(), 4.0, TOL));

    v.set_magnitude(f64::INFINITY);
    assert_eq!(v.magnitude(), 0.0);
    assert!(v.x().is_finite() && v.y().is_finite());
}

// ==================================================================================
// Node tests
// ==================================================================================

#[test]
fn node_bounces_off_left_wall() {
    let bounds = square(100.0);
    let mut node = Node::new(5.0, 50.0, 1.0)
        .with_velocity(Vector::from_xy(-10.0, 0.0))
        .with_bounce_damp(0.8)
        .with_inset(0.0);

    node.update(0.0, None, &bounds);

    assert!(node.velocity.x() > 0.0, "velocity should point back into the world");
    assert!(close(node.velocity.x(), 8.0, 1e-6));
    // -5 reflected by 1.8 * 5
    assert!(close(node.x, 4.0, 1e-6), "x = {}", node.x);
    assert!(node.x >= 0.0 && node.x <= 100.0);
}

#[test]
fn node_bounces_in_a_corner_on_both_axes() {
    let bounds = square(100.0);
    let mut node = Node::new(1.0, 1.0, 1.0)
        .with_velocity(Vector::from_xy(-5.0, -5.0))
        .with_bounce_damp(0.8);

    node.update(0.0, None, &bounds);

    assert!(node.velocity.x() > 0.0 && node.velocity.y() > 0.0);
    assert!(close(node.x, 3.2, 1e-6) && close(node.y, 3.2, 1e-6), "({}, {})", node.x, node.y);
}

#[test]
fn node_bounce_damps_the_other_axis() {
    let bounds = square(100.0);
    let mut node = Node::new(98.0, 50.0, 1.0)
        .with_velocity(Vector::from_xy(5.0, 2.0))
        .with_bounce_damp(0.5);

    node.update(0.0, None, &bounds);

    assert!(close(node.velocity.x(), -2.5, 1e-6));
    assert!(close(node.velocity.y(), 1.0, 1e-6));
}

#[test]
fn node_zero_bounce_snaps_flush() {
    let bounds = square(100.0);
    let mut node = Node::new(2.0, 50.0, 1.0)
        .with_velocity(Vector::from_xy(-6.0, 0.0))
        .with_bounce_damp(0.0);

    node.update(0.0, None, &bounds);

    assert!(close(node.x, 0.0, 1e-9));
    assert!(close(node.velocity.x(), 0.0, 1e-9));
}

#[test]
fn node_huge_overshoot_stays_inside() {
    let bounds = square(100.0);
    let mut node = Node::new(50.0, 50.0, 1.0)
        .with_velocity(Vector::from_xy(-5000.0, 3000.0))
        .with_bounce_damp(1.0)
        .with_inset(4.0);

    node.update(0.0, None, &bounds);

    assert!(bounds.contains(&NVec2::new(node.x, node.y), 4.0), "({}, {})", node.x, node.y);
}

#[test]
fn node_force_is_divided_by_mass() {
    let bounds = square(1000.0);
    let mut node = Node::new(500.0, 500.0, 4.0);
    node.update(0.0, Some(&Vector::from_xy(8.0, -4.0)), &bounds);

    assert!(close(node.velocity.x(), 2.0, 1e-9));
    assert!(close(node.velocity.y(), -1.0, 1e-9));
    assert!(close(node.x, 502.0, 1e-9));
    assert!(close(node.y, 499.0, 1e-9));
}

#[test]
fn node_zero_mass_is_guarded() {
    let bounds = square(100.0);
    let mut node = Node::new(50.0, 50.0, 0.0);
    assert!(node.mass() > 0.0);

    node.update(0.0, Some(&Vector::from_xy(1.0, 1.0)), &bounds);
    assert!(node.x.is_finite() && node.y.is_finite());
    assert!(node.velocity.x().is_finite() && node.velocity.y().is_finite());
}

#[test]
fn drag_reduces_speed() {
    let bounds = square(1.0e6);
    let mut node = Node::new(5.0e5, 5.0e5, 1.0).with_velocity(Vector::new(10.0, 0.7));

    let mut before = node.speed();
    for _ in 0..50 {
        node.update(0.1, None, &bounds);
        let after = node.speed();
        assert!(after <= before, "speed grew from {before} to {after}");
        before = after;
    }
}

// ==================================================================================
// World tests
// ==================================================================================

#[test]
fn world_initialize_places_nodes_inside() {
    let world = busy_world(1000, 3.0);
    assert_eq!(world.nodes.len(), 1000);
    assert!(close(world.gravity.0.magnitude(), 0.2, TOL));
    for n in &world.nodes {
        assert!(world.boundaries.contains(&NVec2::new(n.x, n.y), 3.0));
    }
}

#[test]
fn world_seeded_layout_is_reproducible() {
    let a = busy_world(50, 0.0);
    let b = busy_world(50, 0.0);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn world_keeps_every_node_inside_bounds() {
    let mut world = busy_world(500, 2.0);
    let center = NVec2::new(470.0, 330.0);

    for tick in 0..400 {
        let now = tick as f64 / 60.0;
        if tick % 50 == 0 {
            world.blast(5000.0, center);
        }
        world.update(now);
        for n in &world.nodes {
            assert!(
                world.boundaries.contains(&NVec2::new(n.x, n.y), 2.0),
                "tick {tick}: node escaped to ({}, {})",
                n.x,
                n.y
            );
        }
    }
}

#[test]
fn world_gravity_pulls_down() {
    let mut world = World::new(square(1000.0), 0.0).with_gravity(0.5, FRAC_PI_2);
    world.initialize(&mut StdRng::seed_from_u64(1));
    world.add_node(Node::new(500.0, 100.0, 1.0));
    world.update(0.0);

    let n = &world.nodes[0];
    assert!(close(n.velocity.y(), 0.5, 1e-9));
    assert!(n.y > 100.0);
    assert!(close(n.x, 500.0, 1e-9));
}

#[test]
fn world_gravity_is_built_on_initialize() {
    let mut world = World::new(square(1000.0), 0.0).with_gravity(0.5, FRAC_PI_2);
    assert_eq!(world.gravity.0.magnitude(), 0.0);

    world.initialize(&mut StdRng::seed_from_u64(1));
    assert!(close(world.gravity.0.magnitude(), 0.5, TOL));
    assert!(close(world.gravity.0.angle(), FRAC_PI_2, TOL));
}

#[test]
fn world_draw_mirrors_state() {
    let mut world = busy_world(20, 0.0);
    world.begin_shockwave(NVec2::new(10.0, 20.0), 0.0);
    let frame: Frame = world.draw();

    assert_eq!(frame.nodes.len(), 20);
    for (sprite, node) in frame.nodes.iter().zip(world.nodes.iter()) {
        assert_eq!(sprite.x, node.x);
        assert_eq!(sprite.y, node.y);
        assert_eq!(sprite.size, node.size);
    }
    assert_eq!(frame.shockwaves.len(), 1);
    assert!(frame.shockwaves[0].growing);
    assert_eq!((frame.shockwaves[0].x, frame.shockwaves[0].y), (10.0, 20.0));
}

// ==================================================================================
// Shock wave tests
// ==================================================================================

#[test]
fn shockwave_grows_then_rescales_on_release() {
    let mut world = still_world(100.0);
    world.begin_shockwave(NVec2::new(50.0, 50.0), 0.0);

    world.update(1.0);
    let wave = world.growing_shockwave().expect("wave should still be growing");
    assert!(close(wave.magnitude, 800.0, 1e-9));
    assert!(close(wave.inner_radius, 80.0, 1e-9));

    assert!(world.release_shockwave(1.0));
    let wave = &world.shockwaves[0];
    assert_eq!(wave.phase(), Phase::Decaying);
    assert!(close(wave.inner_radius, 20.0, 1e-9));
    assert!(close(wave.outer_radius, 800.0 / 12.0, 1e-9));
}

#[test]
fn shockwave_does_not_push_while_growing() {
    let mut world = still_world(200.0);
    world.add_node(Node::new(120.0, 100.0, 1.0));
    world.begin_shockwave(NVec2::new(100.0, 100.0), 0.0);
    for i in 1..30 {
        world.update(i as f64 / 60.0);
    }
    assert_eq!(world.nodes[0].speed(), 0.0);
}

#[test]
fn shockwave_release_twice_is_noop() {
    let mut world = still_world(100.0);
    world.begin_shockwave(NVec2::new(50.0, 50.0), 0.0);
    assert!(world.release_shockwave(0.5));
    assert!(!world.release_shockwave(0.6));

    let mut empty = still_world(100.0);
    assert!(!empty.release_shockwave(0.0));
}

#[test]
fn transparent_charging_wave_survives_until_release() {
    let params = Parameters {
        color: nodes::Rgba::new(255, 255, 255, 0.0),
        min_distance: 1.0,
        ..Parameters::default()
    };
    let mut world = still_world(200.0).with_params(params);
    world.add_node(Node::new(120.0, 100.0, 1.0));
    world.begin_shockwave(NVec2::new(100.0, 100.0), 0.0);

    world.update(0.5);
    assert!(world.growing_shockwave().is_some(), "charging wave was dropped");

    assert!(world.release_shockwave(1.0));
    // magnitude 800 at d = 20
    assert!(close(world.nodes[0].speed(), 40.0, 1e-9));

    // already transparent, so the next tick removes it
    world.update(1.1);
    assert!(world.shockwaves.is_empty());
}

#[test]
fn shockwave_only_latest_grows() {
    let mut world = still_world(100.0);
    world.begin_shockwave(NVec2::new(10.0, 10.0), 0.0);
    world.begin_shockwave(NVec2::new(90.0, 90.0), 0.2);

    assert_eq!(world.shockwaves.len(), 2);
    assert!(!world.shockwaves[0].is_growing());
    assert!(world.shockwaves[1].is_growing());
}

#[test]
fn blast_force_follows_inverse_distance() {
    let mut world = still_world(200.0);
    world.params.min_distance = 1.0;
    world.add_node(Node::new(110.0, 100.0, 1.0));
    world.add_node(Node::new(100.0, 80.0, 2.0));

    world.blast(100.0, NVec2::new(100.0, 100.0));

    // d = 10 to the right, mass 1
    let a = &world.nodes[0];
    assert!(close(a.velocity.magnitude(), 10.0, 1e-9));
    assert!(close(a.velocity.x(), 10.0, 1e-9));
    assert!(close(a.velocity.y(), 0.0, 1e-9));

    // d = 20 upwards (-y), mass 2
    let b = &world.nodes[1];
    assert!(close(b.velocity.magnitude(), 2.5, 1e-9));
    assert!(close(b.velocity.angle(), -FRAC_PI_2, 1e-9));
}

#[test]
fn blast_at_node_position_stays_finite() {
    let mut world = still_world(100.0);
    world.add_node(Node::new(50.0, 50.0, 1.0));
    world.blast(800.0, NVec2::new(50.0, 50.0));

    let n = &world.nodes[0];
    assert!(n.velocity.x().is_finite() && n.velocity.y().is_finite());
    // clamped to min_distance
    assert!(close(n.speed(), 800.0 / world.params.min_distance, 1e-9));

    for i in 0..10 {
        world.update(i as f64);
        let n = &world.nodes[0];
        assert!(n.x.is_finite() && n.y.is_finite());
    }
}

#[test]
fn blast_without_distance_floor_stays_finite() {
    let params = Parameters {
        min_distance: 0.0,
        ..Parameters::default()
    };
    let mut world = still_world(100.0).with_params(params);
    world.add_node(Node::new(50.0, 50.0, 1.0));
    world.blast(800.0, NVec2::new(50.0, 50.0));

    let n = &world.nodes[0];
    assert!(n.velocity.x().is_finite() && n.velocity.y().is_finite());
}

#[test]
fn shockwave_alpha_fades_and_wave_is_removed() {
    let mut world = still_world(100.0);
    world.blast(200.0, NVec2::new(50.0, 50.0));
    let cutoff = world.params.alpha_cutoff;
    let decay = world.params.alpha_decay;

    let mut ticks = 0;
    while let Some(wave) = world.shockwaves.first() {
        let alpha = wave.color.a;
        let next = alpha * (1.0 - decay);
        world.update(ticks as f64);
        ticks += 1;

        if next < cutoff {
            assert!(world.shockwaves.is_empty(), "spent wave kept at tick {ticks}");
        } else {
            let after = world.shockwaves[0].color.a;
            assert!(after <= alpha);
            assert!(after > 0.0);
        }
        assert!(ticks < 1000, "wave never faded");
    }
}

#[test]
fn shockwave_rings_relax_outward() {
    let mut world = still_world(100.0);
    world.blast(800.0, NVec2::new(50.0, 50.0));

    let mut inner = world.shockwaves[0].inner_radius;
    let mut outer = world.shockwaves[0].outer_radius;
    for i in 0..10 {
        world.update(i as f64);
        let w = &world.shockwaves[0];
        assert!(w.inner_radius > inner && w.outer_radius > outer);
        assert!(w.inner_radius < w.outer_radius);
        inner = w.inner_radius;
        outer = w.outer_radius;
    }
}

// ==================================================================================
// Engine tests
// ==================================================================================

#[test]
fn engine_start_stop_are_idempotent() {
    let mut engine = Engine::new(60.0);
    assert!(!engine.is_running());
    assert!(!engine.stop());
    assert!(engine.start());
    assert!(!engine.start());
    assert!(engine.is_running());
    engine.toggle();
    assert!(!engine.is_running());
    assert!(close(engine.interval().as_secs_f64(), 1.0 / 60.0, 1e-9));
}

#[test]
fn engine_rejects_bad_framerate() {
    let engine = Engine::new(0.0);
    assert_eq!(engine.framerate, 60.0);
    assert_eq!(engine.interval(), std::time::Duration::from_secs_f64(1.0 / 60.0));
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn config_defaults_validate() {
    let cfg = ScenarioConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.world.boundaries, Boundaries::new(0.0, 0.0, 940.0, 660.0));
    assert!(close(cfg.world.gravity.direction, FRAC_PI_2, TOL));
}

#[test]
fn config_partial_yaml_uses_defaults() {
    let yaml = r#"
world:
  node_count: 12
  gravity:
    force: 0.5
node:
  bounce_damp: 0.3
engine:
  start_paused: true
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("yaml should parse");
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.world.node_count, 12);
    assert!(close(cfg.world.gravity.force, 0.5, TOL));
    assert!(close(cfg.world.gravity.direction, FRAC_PI_2, TOL));
    assert!(close(cfg.node.bounce_damp, 0.3, TOL));
    assert!(close(cfg.node.mass, 1.0, TOL));
    assert!(cfg.engine.start_paused);
    assert!(close(cfg.shockwave.growth_rate, 800.0, TOL));
}

#[test]
fn config_rejects_bad_values() {
    let mut cfg = ScenarioConfig::default();
    cfg.node.mass = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.node.bounce_damp = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.shockwave.min_distance = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.node.inset = 400.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.engine.framerate = -1.0;
    assert!(cfg.validate().is_err());
}

// ==================================================================================
// Scenario (input + tick) tests
// ==================================================================================

#[test]
fn scenario_builds_from_config() {
    let scenario = Scenario::build_scenario(small_config());
    assert_eq!(scenario.world.nodes.len(), 10);
    assert!(scenario.engine.is_running());

    let mut cfg = small_config();
    cfg.engine.start_paused = true;
    let paused = Scenario::build_scenario(cfg);
    assert!(!paused.engine.is_running());
}

#[test]
fn scenario_pointer_press_and_release() {
    let mut scenario = Scenario::build_scenario(small_config());

    scenario.pointer_move(PointerEvent::new(100.0, 200.0, 0.0));
    scenario.pointer_down(PointerEvent::new(100.0, 200.0, 0.0));
    assert!(scenario.pointer.down);
    assert!(scenario.world.growing_shockwave().is_some());

    let frame = scenario.tick(0.5).expect("engine is running");
    assert!(frame.shockwaves[0].growing);
    assert!(close(scenario.world.shockwaves[0].magnitude, 400.0, 1e-9));

    scenario.pointer_up(PointerEvent::new(300.0, 300.0, 0.5));
    assert_eq!(scenario.pointer, Pointer { x: 300.0, y: 300.0, down: false });
    assert!(scenario.world.growing_shockwave().is_none());
    assert_eq!(scenario.world.shockwaves[0].phase(), Phase::Decaying);
    // the wave stays where the press happened
    let ring = &scenario.world.draw().shockwaves[0];
    assert_eq!((ring.x, ring.y), (100.0, 200.0));
}

#[test]
fn scenario_pointer_up_without_down_is_ignored() {
    let mut scenario = Scenario::build_scenario(small_config());
    scenario.pointer_up(PointerEvent::new(5.0, 5.0, 1.0));
    assert!(scenario.world.shockwaves.is_empty());
    assert_eq!((scenario.pointer.x, scenario.pointer.y), (5.0, 5.0));
}

#[test]
fn scenario_key_blast_uses_last_pointer_position() {
    let mut scenario = Scenario::build_scenario(small_config());
    scenario.pointer_move(PointerEvent::new(42.0, 24.0, 0.0));
    scenario.key_down(KeyCommand::Blast);

    assert_eq!(scenario.world.shockwaves.len(), 1);
    let ring = &scenario.world.draw().shockwaves[0];
    assert_eq!((ring.x, ring.y), (42.0, 24.0));
    assert!(!ring.growing);
    assert!(close(scenario.world.shockwaves[0].magnitude, scenario.world.params.blast_magnitude, TOL));
}

#[test]
fn scenario_blast_keeps_charging_wave_last() {
    let mut scenario = Scenario::build_scenario(small_config());
    scenario.pointer_down(PointerEvent::new(10.0, 10.0, 0.0));
    scenario.key_down(KeyCommand::Blast);

    assert_eq!(scenario.world.shockwaves.len(), 2);
    assert!(scenario.world.growing_shockwave().is_some());

    scenario.pointer_up(PointerEvent::new(10.0, 10.0, 0.3));
    assert!(scenario.world.shockwaves.iter().all(|w| !w.is_growing()));
}

#[test]
fn scenario_pause_stops_ticks() {
    let mut scenario = Scenario::build_scenario(small_config());
    let before: Vec<(f64, f64)> = scenario.world.nodes.iter().map(|n| (n.x, n.y)).collect();

    scenario.key_down(KeyCommand::TogglePause);
    assert!(scenario.tick(1.0).is_none());
    let after: Vec<(f64, f64)> = scenario.world.nodes.iter().map(|n| (n.x, n.y)).collect();
    assert_eq!(before, after);

    scenario.key_down(KeyCommand::TogglePause);
    assert!(scenario.tick(2.0).is_some());
}

#[test]
fn scenario_files_parse() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["default.yaml", "zero_gravity.yaml"] {
        let text = std::fs::read_to_string(path.join(name)).expect("scenario file present");
        let cfg: ScenarioConfig = serde_yaml::from_str(&text).expect("scenario parses");
        assert!(cfg.validate().is_ok(), "{name} should validate");
    }
}
