//! Test utilities for plugin testing

use crate::prelude::*;

/// Creates a minimal test app with core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::asset::AssetPlugin::default(),
        bevy::input::InputPlugin,
        bevy::state::app::StatesPlugin,
        bevy::transform::TransformPlugin,
        bevy::diagnostic::DiagnosticsPlugin,
    ));

    // Initialize assets needed by body spawning
    app.init_asset::<bevy::render::mesh::Mesh>();
    app.init_asset::<bevy::render::prelude::Shader>();
    app.init_asset::<bevy::pbr::StandardMaterial>();

    app.add_event::<SimulationCommand>();

    app
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.world().contains_resource::<Time>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
    }
}
