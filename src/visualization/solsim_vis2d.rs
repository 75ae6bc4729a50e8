//! Bevy 2D viewer for a running scenario
//!
//! Renders each body as a colored circle in the x/y plane and shows an
//! elapsed-time counter. One physics step runs per rendered frame; the
//! viewer itself only ever reads the system snapshot.

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::integrator::euler_semi_implicit;
use crate::simulation::scenario::Scenario;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Marker for the elapsed-time text overlay
#[derive(Component)]
struct SimClockText;

/// World-space → screen-space scaling factor for positions
/// Chosen so Neptune's orbit (~4.5e12 m) stays inside a default window
const SCALE: f32 = 7.0e-11;

pub fn run_2d(scenario: Scenario) {
    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, sim_clock_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!("starting 2D viewer with {} bodies", scenario.system.bodies.len());

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, (body, display)) in scenario.system.bodies.iter().zip(scenario.display.iter()).enumerate() {
        // Ensure a minimum marker size so small bodies stay visible
        let radius_screen = display.radius.max(1.0);
        let [r, g, b] = display.color;
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // Elapsed-time counter, top-left like the legend corner
    commands.spawn((
        TextBundle::from_section(
            "Time: 0.00 years",
            TextStyle {
                font_size: 20.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..Default::default()
        }),
        SimClockText,
    ));
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    // Keep rendering the final state once the configured duration is up
    if system.t >= parameters.t_end {
        return;
    }

    // A failed step has not touched the system; report and shut down
    if let Err(e) = euler_semi_implicit(system, forces, parameters) {
        error!("integration aborted at t = {:.0} s: {e}", system.t);
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}

fn sim_clock_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<SimClockText>>) {
    for mut text in &mut query {
        text.sections[0].value = format!("Time: {:.2} years", scenario.system.elapsed_years());
    }
}
