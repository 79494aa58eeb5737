//! Symplectic Euler integration method

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// First-order method that updates velocity before position, so the
/// position update sees the *new* velocity:
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// The velocity-first ordering is what makes the method symplectic: energy
/// error stays bounded instead of drifting, which keeps near-circular
/// orbits near-circular over long runs. Same cost as explicit Euler.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using the new velocity
        *position += *velocity * dt;
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }

    fn order(&self) -> usize {
        1
    }
}
