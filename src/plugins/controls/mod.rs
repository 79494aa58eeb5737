//! Controls plugin - Self-contained plugin pattern
//!
//! Handles all user input (keyboard and UI buttons) and translates it into
//! `SimulationCommand` events, so the simulation never cares which input
//! path a command came from.

use crate::prelude::*;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};

mod builder;
mod buttons;
mod constants;

pub use builder::ButtonWithLabel;
use builder::ControlsCommandsExt;
use buttons::{
    PauseButton, QuitButton, RestartButton, SpawnMoonButton, sync_pause_button_text,
    sync_spawn_moon_button_text,
};
use constants::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_controls_ui);

        app.add_systems(
            Update,
            (
                keyboard_input_handler,
                button_interaction_handler::<PauseButton>,
                button_interaction_handler::<SpawnMoonButton>,
                button_interaction_handler::<RestartButton>,
                button_interaction_handler::<QuitButton>,
                sync_pause_button_text,
                sync_spawn_moon_button_text,
            ),
        );
    }
}

fn keyboard_input_handler(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut commands: EventWriter<SimulationCommand>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        match &event.logical_key {
            Key::Character(c) => {
                let ch = c.to_lowercase();
                match ch.as_str() {
                    "m" => {
                        commands.write(SimulationCommand::SpawnMoon);
                    }
                    "n" => {
                        commands.write(SimulationCommand::Restart);
                    }
                    "v" => {
                        commands.write(SimulationCommand::ToggleVisibility);
                    }
                    "]" => {
                        commands.write(SimulationCommand::SelectNext);
                    }
                    "[" => {
                        commands.write(SimulationCommand::SelectPrevious);
                    }
                    "+" | "=" => {
                        commands.write(SimulationCommand::ScaleMass(1.25));
                    }
                    "-" => {
                        commands.write(SimulationCommand::ScaleMass(0.8));
                    }
                    ">" | "." => {
                        commands.write(SimulationCommand::ScaleSpin(2.0));
                    }
                    "<" | "," => {
                        commands.write(SimulationCommand::ScaleSpin(0.5));
                    }
                    _ => {}
                }
            }
            Key::Space => {
                commands.write(SimulationCommand::TogglePause);
            }
            Key::Escape => {
                commands.write(SimulationCommand::Quit);
            }
            _ => {}
        }
    }
}

#[allow(clippy::type_complexity)]
fn button_interaction_handler<T: ButtonWithLabel>(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<T>),
    >,
    mut command_writer: EventWriter<SimulationCommand>,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                *color = BackgroundColor(BUTTON_COLOR_PRESSED);
                command_writer.write(T::command());
            }
            Interaction::Hovered => {
                *color = BackgroundColor(BUTTON_COLOR_HOVERED);
            }
            Interaction::None => {
                *color = BackgroundColor(BUTTON_COLOR_NORMAL);
            }
        }
    }
}

fn setup_controls_ui(mut commands: Commands, config: Res<SimulationConfig>) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::FlexEnd,
            ..default()
        })
        .with_children(|parent| {
            parent
                .spawn(Node {
                    margin: UiRect::all(Val::Px(config.ui.button_margin)),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(config.ui.button_gap),
                    ..default()
                })
                .with_children(|parent| {
                    parent.spawn_control_button::<PauseButton>(&config);
                    parent.spawn_control_button::<SpawnMoonButton>(&config);
                    parent.spawn_control_button::<RestartButton>(&config);
                    parent.spawn_control_button::<QuitButton>(&config);
                });
        });
}
