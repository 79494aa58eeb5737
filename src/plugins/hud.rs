//! HUD plugin
//!
//! Small text readout of the simulation status and the selected body.

use crate::prelude::*;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct SelectionReadout;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(Update, refresh_selection_readout);
    }
}

fn spawn_hud(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.spawn((
        SelectionReadout,
        Text::new(""),
        TextColor(Color::WHITE),
        TextFont {
            font_size: config.ui.font_size,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

#[allow(clippy::type_complexity)]
fn refresh_selection_readout(
    clock: Res<SimulationClock>,
    state: Res<State<AppState>>,
    selected: Res<SelectedBody>,
    registry: Res<CelestialBodies>,
    bodies: Query<
        (
            &Name,
            &Position,
            &Velocity,
            &Mass,
            &Spin,
            Option<&HostBody>,
        ),
        With<CelestialBody>,
    >,
    names: Query<&Name, With<CelestialBody>>,
    primary: Query<&Position, With<PrimaryBody>>,
    mut readout: Query<&mut Text, With<SelectionReadout>>,
) {
    let Ok(mut text) = readout.single_mut() else {
        return;
    };

    let status = if matches!(state.get(), AppState::Paused) {
        "paused"
    } else {
        "running"
    };
    let mut lines = vec![format!(
        "{} bodies | time x{:.0e} | {}",
        registry.0.len(),
        clock.time_scale,
        status
    )];

    if let Some(entity) = selected.0 {
        if let Ok((name, position, velocity, mass, spin, host)) = bodies.get(entity) {
            match host.and_then(|host| names.get(host.0).ok()) {
                Some(host_name) => {
                    lines.push(format!("{} (moon of {})", name.as_str(), host_name.as_str()));
                }
                None => lines.push(name.as_str().to_string()),
            }

            lines.push(format!("  mass      {:.4e} kg", mass.value()));
            lines.push(format!("  speed     {:.1} m/s", velocity.value().length()));
            if let Ok(primary_position) = primary.single() {
                let distance = (position.value() - primary_position.value()).length();
                lines.push(format!("  from Sun  {:.4e} m", distance));
            }
            lines.push(format!("  spin      {:.3e} rad/s", spin.speed));
        }
    }

    let combined = lines.join("\n");
    if text.0 != combined {
        text.0 = combined;
    }
}
