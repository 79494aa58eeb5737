use bevy::log::LogPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;
use clap::Parser;

use orrery::cli::{self, Args};
use orrery::plugins::{
    CameraPlugin, ControlsPlugin, HudPlugin, SimulationPlugin, StarfieldPlugin,
    VisualizationPlugin,
};
use orrery::prelude::*;

fn main() {
    let args = Args::parse();
    let config = cli::load_and_apply_config(&args);

    let filter = if args.verbose {
        "info,orrery=debug".to_string()
    } else {
        "info".to_string()
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Orrery".to_string(),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter,
                ..default()
            }),
    );

    app.insert_resource(config);

    app.add_plugins((
        PanOrbitCameraPlugin,
        SimulationPlugin,
        CameraPlugin,
        StarfieldPlugin,
        VisualizationPlugin,
        ControlsPlugin,
        HudPlugin,
    ));

    if args.paused {
        app.insert_state(AppState::Paused);
        app.world_mut().resource_mut::<SimulationClock>().pause();
    }

    app.run();
}
