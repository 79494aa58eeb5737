//! Visualization plugin
//!
//! Syncs render transforms from the high-precision physics components.
//! Display-only; nothing here feeds back into the simulation.

use crate::prelude::*;

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        let brightness = app
            .world()
            .get_resource::<SimulationConfig>()
            .map(|config| config.rendering.ambient_brightness)
            .unwrap_or_default();

        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness,
            ..default()
        });
        app.add_systems(Update, sync_body_transforms);
    }
}

/// Scale positions from meters to scene units and rebuild each body's
/// orientation from its tilt and spin phase.
fn sync_body_transforms(
    config: Res<SimulationConfig>,
    mut query: Query<(&Position, &AxialTilt, &Spin, &mut Transform), With<CelestialBody>>,
) {
    let distance_scale = config.rendering.distance_scale;

    for (position, tilt, spin, mut transform) in query.iter_mut() {
        transform.translation = (position.value() * distance_scale).as_vec3();

        // The spin phase is unbounded; wrap before narrowing to f32 so the
        // angle keeps full precision after long runs.
        let angle = spin.angle % std::f64::consts::TAU;
        transform.rotation =
            Quat::from_rotation_z(tilt.0 as f32) * Quat::from_rotation_y(angle as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_transforms_follow_positions() {
        let mut app = create_test_app();
        app.insert_resource(SimulationConfig::default());

        let entity = app
            .world_mut()
            .spawn((
                CelestialBody,
                Position::new(Vector::new(1.0e11, 0.0, -2.0e11)),
                AxialTilt(0.0),
                Spin::new(0.0),
                Transform::default(),
            ))
            .id();

        let _ = app.world_mut().run_system_once(sync_body_transforms);

        let translation = app
            .world()
            .entity(entity)
            .get::<Transform>()
            .unwrap()
            .translation;

        // Default scale is 1e-10 scene units per meter.
        assert!((translation - Vec3::new(10.0, 0.0, -20.0)).length() < 1e-4);
    }

    #[test]
    fn test_spin_wraps_before_display() {
        let mut app = create_test_app();
        app.insert_resource(SimulationConfig::default());

        let many_turns = 1000.0 * std::f64::consts::TAU + 0.5;
        let entity = app
            .world_mut()
            .spawn((
                CelestialBody,
                Position::new(Vector::ZERO),
                AxialTilt(0.0),
                Spin {
                    angle: many_turns,
                    speed: 0.0,
                },
                Transform::default(),
            ))
            .id();

        let _ = app.world_mut().run_system_once(sync_body_transforms);

        let rotation = app
            .world()
            .entity(entity)
            .get::<Transform>()
            .unwrap()
            .rotation;
        let expected = Quat::from_rotation_y(0.5);

        assert!(rotation.angle_between(expected) < 1e-3);
    }
}
