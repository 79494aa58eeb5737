//! Physics resources for the simulation

use super::integrators::Integrator;
use crate::physics::math::Scalar;
use bevy::prelude::*;

/// Resource holding the currently active integrator
#[derive(Resource)]
pub struct CurrentIntegrator(pub Box<dyn Integrator>);

impl Default for CurrentIntegrator {
    fn default() -> Self {
        Self(Box::new(super::integrators::SymplecticEuler))
    }
}

/// Frame-time shaping for the simulation step
///
/// The frame delta is multiplied by `time_scale` so orbital motion is
/// visible in real time, then divided into `substeps` equal sub-steps.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    /// Simulated seconds per wall-clock second
    pub time_scale: Scalar,
    /// Sub-steps per frame
    pub substeps: u32,
    /// Whether the simulation is paused
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time_scale: 1e5,
            substeps: 100,
            paused: false,
        }
    }
}

impl SimulationClock {
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
