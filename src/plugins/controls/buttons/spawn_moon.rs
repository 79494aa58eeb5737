//! Moon spawn button component
//!
//! The label reflects whether the selected body is still eligible for a
//! moon, so the action is only ever offered for eligible bodies.

use crate::plugins::controls::ButtonWithLabel;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct SpawnMoonButton;

impl ButtonWithLabel for SpawnMoonButton {
    fn command() -> SimulationCommand {
        SimulationCommand::SpawnMoon
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Spawn Moon"
    }

    fn shortcut() -> &'static str {
        "M"
    }
}

pub fn sync_spawn_moon_button_text(
    selected: Res<SelectedBody>,
    eligible: Query<(), With<MoonInsertable>>,
    mut button_children_query: Query<&Children, With<SpawnMoonButton>>,
    mut text_query: Query<&mut Text>,
) {
    let dynamic_text = match selected.0 {
        Some(entity) if eligible.get(entity).is_ok() => "Spawn Moon (M)",
        _ => "Spawn Moon (n/a)",
    };

    for children in button_children_query.iter_mut() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                if text.0 != dynamic_text {
                    *text = Text::new(dynamic_text.to_string());
                }
                break;
            }
        }
    }
}
