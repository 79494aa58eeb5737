//! Restart button component

use crate::plugins::controls::ButtonWithLabel;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct RestartButton;

impl ButtonWithLabel for RestartButton {
    fn command() -> SimulationCommand {
        SimulationCommand::Restart
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Restart"
    }

    fn shortcut() -> &'static str {
        "N"
    }
}
