//! Centralized event definitions
//!
//! All commands the host UI can issue against the simulation flow through
//! a single event type, whether they come from the keyboard or from UI
//! buttons.

use crate::physics::math::Scalar;
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    TogglePause,
    Restart,
    /// Spawn a moon around the selected body, if it is eligible
    SpawnMoon,
    SelectNext,
    SelectPrevious,
    /// Multiply the selected body's mass by the given factor
    ScaleMass(Scalar),
    /// Multiply the selected body's spin rate by the given factor
    ScaleSpin(Scalar),
    /// Toggle rendering of the selected body (no physical effect)
    ToggleVisibility,
    Quit,
}
