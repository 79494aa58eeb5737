//! Action handlers for simulation commands
//!
//! Pause/resume, selection cycling, body edits, moon spawning, restart,
//! and quit all arrive here as `SimulationCommand` events.

use super::physics::{spawn_body, spawn_catalog};
use crate::physics::gravitation::{BodyState, plan_moon};
use crate::prelude::*;

pub fn handle_toggle_pause_command(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut clock: ResMut<SimulationClock>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        match current_state.get() {
            AppState::Running => {
                next_state.set(AppState::Paused);
                clock.pause();
            }
            AppState::Paused => {
                next_state.set(AppState::Running);
                clock.unpause();
            }
        }
    }
}

pub fn handle_selection_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    registry: Res<CelestialBodies>,
    mut selected: ResMut<SelectedBody>,
) {
    for command in commands_reader.read() {
        match command {
            SimulationCommand::SelectNext => selected.0 = registry.next_after(selected.0),
            SimulationCommand::SelectPrevious => selected.0 = registry.previous_before(selected.0),
            _ => {}
        }
    }
}

/// Apply user edits to the selected body.
///
/// Values are applied as-is; nothing re-validates the result, matching the
/// hands-off stance of the integrator itself.
pub fn handle_body_edit_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    selected: Res<SelectedBody>,
    mut bodies: Query<(&mut Mass, &mut Spin, &mut Visibility), With<CelestialBody>>,
) {
    for command in commands_reader.read() {
        let Some(entity) = selected.0 else {
            continue;
        };
        let Ok((mut mass, mut spin, mut visibility)) = bodies.get_mut(entity) else {
            continue;
        };

        match command {
            SimulationCommand::ScaleMass(factor) => mass.0 *= factor,
            SimulationCommand::ScaleSpin(factor) => spin.speed *= factor,
            SimulationCommand::ToggleVisibility => {
                *visibility = match *visibility {
                    Visibility::Hidden => Visibility::Inherited,
                    _ => Visibility::Hidden,
                };
            }
            _ => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_spawn_moon_command(
    mut commands_reader: EventReader<SimulationCommand>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<CelestialBodies>,
    selected: Res<SelectedBody>,
    g: Res<GravitationalConstant>,
    config: Res<SimulationConfig>,
    hosts: Query<
        (&Position, &Velocity, &Mass, &Radius, &Name),
        (With<CelestialBody>, With<MoonInsertable>),
    >,
    primary: Query<&Position, With<PrimaryBody>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::SpawnMoon) {
            continue;
        }

        let Some(host_entity) = selected.0 else {
            continue;
        };
        // The UI only offers this action for eligible bodies; anything else
        // arriving here is ignored.
        let Ok((position, velocity, mass, radius, name)) = hosts.get(host_entity) else {
            debug!("selected body is not eligible for a moon");
            continue;
        };
        let Ok(primary_position) = primary.single() else {
            continue;
        };

        let host = BodyState {
            position: position.value(),
            velocity: velocity.value(),
            radius: radius.value(),
            mass: mass.value(),
            axial_tilt: 0.0,
            rotation_angle: 0.0,
            rotation_speed: 0.0,
        };
        let moon = plan_moon(&host, primary_position.value(), &config.physics.moon, **g);
        let moon_name = format!("{} I", name.as_str());

        let entity = spawn_body(
            &mut commands,
            &mut meshes,
            &mut materials,
            moon_name.clone(),
            &moon,
            Color::srgb(0.6, 0.6, 0.62),
            false,
            false,
            &config,
        );
        commands.entity(entity).insert(HostBody(host_entity));

        // One user-spawned moon per planet.
        commands.entity(host_entity).remove::<MoonInsertable>();
        registry.insert_after(host_entity, entity);

        info!("spawned {moon_name}");
    }
}

pub fn handle_restart_command(
    mut commands_reader: EventReader<SimulationCommand>,
    mut commands: Commands,
    simulation_bodies: Query<Entity, With<CelestialBody>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<CelestialBodies>,
    mut selected: ResMut<SelectedBody>,
    config: Res<SimulationConfig>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }

        simulation_bodies.iter().for_each(|entity| {
            commands.entity(entity).despawn();
        });

        registry.clear();
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
}

pub fn handle_quit_command(
    mut commands_reader: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::Quit) {
            exit.write_default();
        }
    }
}
