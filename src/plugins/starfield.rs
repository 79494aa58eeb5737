//! Distant background stars standing in for a skybox
//!
//! A shell of small emissive spheres far outside the outermost orbit.
//! Purely decorative; none of these participate in the simulation.

use crate::physics::math::random_unit_vector;
use crate::prelude::*;
use bevy::render::mesh::SphereKind;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield);
    }
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    let mesh = meshes.add(
        Sphere::new(1.0)
            .mesh()
            .kind(SphereKind::Ico { subdivisions: 1 })
            .build(),
    );
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(2.0, 2.0, 2.4),
        unlit: true,
        ..default()
    });

    for _ in 0..config.rendering.starfield_count {
        let direction = random_unit_vector(&mut rng);
        let position = direction * config.rendering.starfield_radius;
        let scale = rng.random_range(0.4..=1.4);

        commands.spawn((
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
        ));
    }
}
