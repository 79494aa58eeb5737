//! Builder pattern utilities for controls UI

use crate::plugins::controls::constants::*;
use crate::prelude::*;
use bevy::ecs::hierarchy::ChildSpawnerCommands;

pub trait ControlsCommandsExt {
    fn spawn_control_button<T: ButtonWithLabel>(&mut self, config: &SimulationConfig) -> Entity;
}

impl ControlsCommandsExt for ChildSpawnerCommands<'_> {
    fn spawn_control_button<T: ButtonWithLabel>(&mut self, config: &SimulationConfig) -> Entity {
        self.spawn((
            Button,
            Node {
                width: Val::Px(BUTTON_WIDTH_PX),
                height: Val::Auto,
                padding: UiRect::all(Val::Px(config.ui.button_padding)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(1.0),
                ..default()
            },
            BorderRadius::all(Val::Px(config.ui.button_border_radius)),
            BackgroundColor(BUTTON_COLOR_NORMAL),
            T::marker(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(T::label()),
                TextColor(Color::WHITE),
                TextFont {
                    font_size: config.ui.font_size,
                    ..default()
                },
            ));
        })
        .id()
    }
}

pub trait ButtonWithLabel: Component + 'static {
    /// The command this button triggers
    fn command() -> SimulationCommand;

    /// The marker component instance
    fn marker() -> Self;

    /// The base text for the button (without shortcut)
    fn base_text() -> &'static str;

    /// The keyboard shortcut for this button
    fn shortcut() -> &'static str;

    /// The base text with shortcut appended
    fn label() -> String {
        format!("{} ({})", Self::base_text(), Self::shortcut())
    }
}
