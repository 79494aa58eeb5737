//! Orrery prelude module
//!
//! Re-exports the most commonly used types across the application to
//! reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Resources
pub use crate::resources::{CelestialBodies, GravitationalConstant, SelectedBody, SharedRng};

// Internal re-exports - Physics
pub use crate::physics::components::{
    AxialTilt, CelestialBody, CelestialBodyBundle, HostBody, Mass, MoonInsertable, Position,
    PrimaryBody, Radius, Spin, Velocity,
};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::resources::{CurrentIntegrator, SimulationClock};
