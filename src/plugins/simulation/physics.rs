//! Body spawning and the per-frame physics step

use crate::physics::catalog::SOLAR_SYSTEM;
use crate::physics::gravitation::{BodyState, advance};
use crate::prelude::*;
use bevy::render::mesh::SphereKind;

/// Spawn one body with its display mesh and material.
///
/// The display radius is exaggerated relative to the distance scale so
/// small bodies stay visible; the physical radius on the `Radius`
/// component is untouched.
pub(crate) fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: String,
    state: &BodyState,
    color: Color,
    is_star: bool,
    moon_insertable: bool,
    config: &SimulationConfig,
) -> Entity {
    let radius_scale = if is_star {
        config.rendering.star_radius_scale
    } else {
        config.rendering.planet_radius_scale
    };
    let display_radius = (state.radius * radius_scale) as f32;

    let mesh = meshes.add(
        Sphere::new(display_radius)
            .mesh()
            .kind(SphereKind::Ico { subdivisions: 4 })
            .build(),
    );
    let material = materials.add(if is_star {
        StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * 800.0,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        }
    });

    let mut body = commands.spawn((
        Name::new(name),
        CelestialBodyBundle::new(state, config.rendering.distance_scale),
        MeshMaterial3d(material),
        Mesh3d(mesh),
    ));

    if is_star {
        body.insert((
            PrimaryBody,
            PointLight {
                color: Color::WHITE,
                intensity: 2e9,
                range: 4000.0,
                shadows_enabled: false,
                ..default()
            },
        ));
    }

    if moon_insertable {
        body.insert(MoonInsertable);
    }

    body.id()
}

/// Spawn every catalog body in order and record it in the registry.
pub(crate) fn spawn_catalog(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut CelestialBodies,
    config: &SimulationConfig,
) {
    for spec in SOLAR_SYSTEM {
        let state = spec.state();
        let color = Color::srgb(spec.color[0], spec.color[1], spec.color[2]);
        let entity = spawn_body(
            commands,
            meshes,
            materials,
            spec.name.to_string(),
            &state,
            color,
            spec.is_star(),
            !spec.is_star(),
            config,
        );
        registry.push(entity);
    }
}

/// Startup system: populate the world from the catalog.
pub fn spawn_catalog_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<CelestialBodies>,
    mut selected: ResMut<SelectedBody>,
    config: Res<SimulationConfig>,
) {
    spawn_catalog(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut registry,
        &config,
    );

    selected.0 = registry
        .0
        .get(3)
        .copied()
        .or_else(|| registry.0.first().copied());
}

/// Advance every body by one frame's worth of motion.
///
/// Runs in `FixedUpdate`, so the frame delta is the fixed timestep.
/// Component state is mirrored through [`BodyState`], advanced, and
/// written back in the same iteration order.
pub fn step_simulation(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    g: Res<GravitationalConstant>,
    integrator: Res<CurrentIntegrator>,
    mut query: Query<
        (
            &mut Position,
            &mut Velocity,
            &mut Spin,
            &Mass,
            &Radius,
            &AxialTilt,
        ),
        With<CelestialBody>,
    >,
) {
    if clock.is_paused() {
        return;
    }

    let mut entries: Vec<_> = query.iter_mut().collect();
    if entries.is_empty() {
        return;
    }

    let mut states: Vec<BodyState> = entries
        .iter()
        .map(|(position, velocity, spin, mass, radius, tilt)| BodyState {
            position: position.value(),
            velocity: velocity.value(),
            radius: radius.value(),
            mass: mass.value(),
            axial_tilt: tilt.0,
            rotation_angle: spin.angle,
            rotation_speed: spin.speed,
        })
        .collect();

    advance(
        &mut states,
        integrator.0.as_ref(),
        time.delta_secs_f64(),
        clock.time_scale,
        clock.substeps,
        **g,
    );

    for ((position, velocity, spin, ..), state) in entries.iter_mut().zip(states) {
        *position.value_mut() = state.position;
        *velocity.value_mut() = state.velocity;
        spin.angle = state.rotation_angle;
        spin.speed = state.rotation_speed;
    }
}
