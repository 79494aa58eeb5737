//! Explicit Euler integration method (forward Euler)
//!
//! Kept for comparison runs. Energy drifts over time with this method, so
//! orbits slowly spiral; prefer [`SymplecticEuler`](super::SymplecticEuler)
//! for anything long-running.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Explicit Euler integrator (forward Euler method)
///
/// Position is updated before velocity, using the *old* velocity:
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + a(t) * dt
/// ```
///
/// Not symplectic; the reversed update order is the only difference from
/// symplectic Euler and is what causes the energy drift.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        let current_velocity = *velocity;

        // Update position first using the current velocity
        *position += current_velocity * dt;

        // Then update velocity
        *velocity += acceleration * dt;
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_uses_old_velocity() {
        let integrator = ExplicitEuler;

        let mut position = Vector::new(1.0, 0.0, 0.0);
        let mut velocity = Vector::ZERO;
        let acceleration = Vector::new(-1.0, 0.0, 0.0);
        let dt = 0.1;

        integrator.step(&mut position, &mut velocity, acceleration, dt);

        // Position does not move (old velocity was zero); velocity picks up
        // the acceleration afterwards.
        assert_eq!(position, Vector::new(1.0, 0.0, 0.0));
        assert_eq!(velocity, Vector::new(-0.1, 0.0, 0.0));
    }

    #[test]
    fn test_differs_from_symplectic_euler() {
        use super::super::SymplecticEuler;

        let acceleration = Vector::new(0.0, -9.81, 0.0);
        let dt = 0.1;

        let mut explicit_position = Vector::new(0.0, 10.0, 0.0);
        let mut explicit_velocity = Vector::new(5.0, 0.0, 0.0);
        ExplicitEuler.step(
            &mut explicit_position,
            &mut explicit_velocity,
            acceleration,
            dt,
        );

        let mut symplectic_position = Vector::new(0.0, 10.0, 0.0);
        let mut symplectic_velocity = Vector::new(5.0, 0.0, 0.0);
        SymplecticEuler.step(
            &mut symplectic_position,
            &mut symplectic_velocity,
            acceleration,
            dt,
        );

        // Same velocity either way, different positions: that is the whole
        // difference between the two methods.
        assert_eq!(explicit_velocity, symplectic_velocity);
        assert!((explicit_position - symplectic_position).length() > 1e-6);
    }
}
