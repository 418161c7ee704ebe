use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Simulator;
use crate::simulation::states::{Body, BodyColor};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Physics ticks per second, one simulated day per tick
const TICK_HZ: f64 = 60.0;

pub fn run_2d(simulator: Simulator) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} bodies and {} force terms",
        simulator.system.bodies.len(),
        simulator.forces.term_count(),
    );

    let viewport = simulator.viewport;

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(simulator)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulator".into(),
                resolution: (viewport.width as f32, viewport.height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (sync_transforms_system, draw_trails_system))
        .run();
}

fn to_color(color: BodyColor) -> Color {
    let [r, g, b] = color.0;
    Color::srgb_u8(r, g, b)
}

/// Marker position in bevy's centered y-up world
fn world_position(simulator: &Simulator, body: &Body) -> Vec2 {
    let screen = simulator.viewport.to_screen(&body.x, simulator.parameters.scale());
    let (x, y) = simulator.viewport.screen_to_world(screen);
    Vec2::new(x as f32, y as f32)
}

fn setup_bodies_system(mut commands: Commands, simulator: Res<Simulator>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in simulator.system.bodies.iter().enumerate() {
        let pos = world_position(&simulator, body);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                // markers above trails
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut simulator: ResMut<Simulator>) {
    simulator.step();
}

fn sync_transforms_system(simulator: Res<Simulator>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = simulator.system.bodies.get(*i) {
            let pos = world_position(&simulator, b);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_trails_system(simulator: Res<Simulator>, mut gizmos: Gizmos) {
    let scale = simulator.parameters.scale();
    let viewport = simulator.viewport;

    for b in simulator.system.bodies.iter().filter(|b| b.path.is_drawable()) {
        let points = viewport
            .project_path(&b.path, scale)
            .into_iter()
            .map(|screen| {
                let (x, y) = viewport.screen_to_world(screen);
                Vec2::new(x as f32, y as f32)
            });
        gizmos.linestrip_2d(points, to_color(b.color));
    }
}
