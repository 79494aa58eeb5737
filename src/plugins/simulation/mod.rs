//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the simulation resources and events, spawns the body catalog at
//! startup, advances physics in `FixedUpdate`, and handles
//! `SimulationCommand` events in `Update`.

use crate::prelude::*;

mod actions;
mod physics;

use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                info!("=== Current Configuration (TOML) ===\n{}", toml_string);
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(config.clone());
        app.insert_resource(SharedRng::from_optional_seed(config.physics.initial_seed));
        app.insert_resource(GravitationalConstant(config.physics.gravitational_constant));
        app.insert_resource(CurrentIntegrator(config.physics.integrator.create()));
        app.insert_resource(SimulationClock {
            time_scale: config.physics.time_scale,
            substeps: config.physics.substeps,
            paused: false,
        });
        app.init_resource::<CelestialBodies>();
        app.init_resource::<SelectedBody>();

        app.add_event::<SimulationCommand>();
        app.init_state::<AppState>();

        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.add_systems(Startup, physics::spawn_catalog_bodies);
        app.add_systems(
            FixedUpdate,
            physics::step_simulation.run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            (
                actions::handle_toggle_pause_command,
                actions::handle_selection_commands,
                actions::handle_body_edit_commands,
                actions::handle_spawn_moon_command,
                actions::handle_restart_command,
                actions::handle_quit_command,
            )
                .chain(),
        );
    }
}
