use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::input::{KeyCommand, PointerEvent};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Boundaries, Rgba};
use crate::simulation::world::Frame;

#[derive(Component)]
struct NodeIndex(pub usize);

/// Frame produced by the last tick; rendering reads only this
#[derive(Resource, Default)]
struct LatestFrame(Frame);

pub fn run_2d(scenario: Scenario) {
    let b = scenario.world.boundaries;
    let hz = scenario.engine.framerate;
    let interval = scenario.engine.interval();
    let first = scenario.world.draw();

    info!("run_2d: starting Bevy 2D viewer with {} nodes at {} Hz", first.nodes.len(), hz);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_duration(interval))
        .insert_resource(LatestFrame(first))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "nodes".into(),
                resolution: (b.width as f32, b.height as f32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_nodes_system)
        .add_systems(FixedUpdate, tick_system)
        .add_systems(
            Update,
            (pointer_input_system, key_input_system, sync_transforms_system, draw_shockwaves_system).chain(),
        )
        .run();
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, c.a as f32)
}

/// World coordinates (top-left origin, y down) -> Bevy 2D (centered, y up)
fn to_screen(b: &Boundaries, x: f64, y: f64) -> Vec2 {
    Vec2::new(
        (x - b.x - b.width / 2.0) as f32,
        (b.y + b.height / 2.0 - y) as f32,
    )
}

fn setup_nodes_system(mut commands: Commands, scenario: Res<Scenario>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let b = scenario.world.boundaries;
    for (i, node) in scenario.world.nodes.iter().enumerate() {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: to_color(node.color),
                    custom_size: Some(Vec2::splat(node.size as f32)),
                    ..default()
                },
                transform: Transform::from_translation(to_screen(&b, node.x, node.y).extend(0.0)),
                ..default()
            },
            NodeIndex(i),
        ));
    }
}

fn tick_system(mut scenario: ResMut<Scenario>, mut latest: ResMut<LatestFrame>, time: Res<Time<Real>>) {
    if let Some(frame) = scenario.tick(time.elapsed_seconds_f64()) {
        latest.0 = frame;
    }
}

/// Translate the cursor into world coordinates, keeping the world centered
/// in the window when the window is larger than the boundaries
fn pointer_input_system(
    mut scenario: ResMut<Scenario>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let now = time.elapsed_seconds_f64();
    let b = scenario.world.boundaries;

    let cursor = window.cursor_position().map(|c| {
        PointerEvent::new(
            c.x as f64 - (window.width() as f64 - b.width) / 2.0 + b.x,
            c.y as f64 - (window.height() as f64 - b.height) / 2.0 + b.y,
            now,
        )
    });

    if let Some(ev) = cursor {
        scenario.pointer_move(ev);
        if buttons.just_pressed(MouseButton::Left) {
            scenario.pointer_down(ev);
        }
    }

    // a release outside the window still fires the wave
    if buttons.just_released(MouseButton::Left) {
        let ev = cursor.unwrap_or(PointerEvent::new(scenario.pointer.x, scenario.pointer.y, now));
        scenario.pointer_up(ev);
    }
}

fn key_input_system(mut scenario: ResMut<Scenario>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyP) {
        scenario.key_down(KeyCommand::TogglePause);
    }
    if keys.just_pressed(KeyCode::Space) {
        scenario.key_down(KeyCommand::Blast);
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    latest: Res<LatestFrame>,
    mut query: Query<(&NodeIndex, &mut Transform)>,
) {
    if !latest.is_changed() {
        return;
    }
    let b = scenario.world.boundaries;
    for (NodeIndex(i), mut transform) in &mut query {
        if let Some(n) = latest.0.nodes.get(*i) {
            let p = to_screen(&b, n.x, n.y);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn draw_shockwaves_system(scenario: Res<Scenario>, latest: Res<LatestFrame>, mut gizmos: Gizmos) {
    let b = scenario.world.boundaries;
    for ring in &latest.0.shockwaves {
        let center = to_screen(&b, ring.x, ring.y);
        let color = to_color(ring.color);
        gizmos.circle_2d(center, ring.inner_radius as f32, color);
        if !ring.growing {
            gizmos.circle_2d(center, ring.outer_radius as f32, color);
        }
    }
}
