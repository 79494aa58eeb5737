//! Newtonian gravity and the per-frame advance loop.
//!
//! Everything in this module is plain data and free functions; the ECS
//! systems in the simulation plugin mirror component state through
//! [`BodyState`] and back.

use crate::config::MoonConfig;
use crate::physics::integrators::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Physical state for one simulated body.
///
/// Positions are meters from the system origin, velocities meters per
/// second, masses kilograms. Spin state is carried alongside the orbital
/// state so a body's rotation phase advances on the same clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vector,
    pub velocity: Vector,
    /// Meters; only used for display scale and moon placement, never by
    /// the force calculation.
    pub radius: Scalar,
    pub mass: Scalar,
    /// Radians; fixed at creation, only user edits change it.
    pub axial_tilt: Scalar,
    /// Radians; accumulates without normalization. The rendering layer
    /// wraps it for display.
    pub rotation_angle: Scalar,
    /// Radians per second.
    pub rotation_speed: Scalar,
}

impl BodyState {
    /// Body on the +Z axis at `distance` from the origin, moving along +X
    /// at `speed` - the shape orbital elements take in the body catalog.
    pub fn from_orbital_elements(
        distance: Scalar,
        speed: Scalar,
        radius: Scalar,
        mass: Scalar,
        axial_tilt: Scalar,
        rotation_speed: Scalar,
    ) -> Self {
        Self {
            position: Vector::new(0.0, 0.0, distance),
            velocity: Vector::new(speed, 0.0, 0.0),
            radius,
            mass,
            axial_tilt,
            rotation_angle: 0.0,
            rotation_speed,
        }
    }
}

/// Gravitational force exerted on the body at `position` by the body at
/// `other_position`.
///
/// The two positions must not coincide: a zero separation divides by zero
/// and the resulting non-finite force propagates through the integrator
/// unchecked. No softening is applied; the body catalog never places two
/// bodies at the same point.
pub fn newtonian_force(
    position: Vector,
    mass: Scalar,
    other_position: Vector,
    other_mass: Scalar,
    g: Scalar,
) -> Vector {
    let offset = other_position - position;
    let distance = offset.length();
    let magnitude = g * mass * other_mass / (distance * distance);

    offset / distance * magnitude
}

/// Net gravitational force on every body, all pairs, O(N²).
///
/// Forces are evaluated against a single position snapshot, so the result
/// is independent of body order. Each pair is evaluated once and applied
/// antisymmetrically, which conserves total momentum exactly.
pub fn net_forces(bodies: &[BodyState], g: Scalar) -> Vec<Vector> {
    let mut forces = vec![Vector::ZERO; bodies.len()];
    accumulate_net_forces(bodies, g, &mut forces);
    forces
}

fn accumulate_net_forces(bodies: &[BodyState], g: Scalar, forces: &mut [Vector]) {
    for force in forces.iter_mut() {
        *force = Vector::ZERO;
    }

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let force = newtonian_force(
                bodies[i].position,
                bodies[i].mass,
                bodies[j].position,
                bodies[j].mass,
                g,
            );
            forces[i] += force;
            forces[j] -= force;
        }
    }
}

/// Advance every body by one frame's worth of motion.
///
/// The frame delta is scaled by `time_scale` and divided into `substeps`
/// equal sub-steps to bound per-step displacement error. Within a
/// sub-step, forces for all bodies are computed from the positions at the
/// start of the sub-step before any body is moved.
///
/// A zero frame delta (or zero sub-step count) leaves all state
/// bit-for-bit unchanged.
pub fn advance(
    bodies: &mut [BodyState],
    integrator: &dyn Integrator,
    frame_dt: Scalar,
    time_scale: Scalar,
    substeps: u32,
    g: Scalar,
) {
    if bodies.is_empty() || substeps == 0 {
        return;
    }

    let sub_dt = frame_dt * time_scale / Scalar::from(substeps);
    if sub_dt == 0.0 {
        return;
    }

    let mut forces = vec![Vector::ZERO; bodies.len()];

    for _ in 0..substeps {
        accumulate_net_forces(bodies, g, &mut forces);

        for (body, force) in bodies.iter_mut().zip(forces.iter()) {
            debug_assert!(
                body.mass > 0.0,
                "non-positive mass destabilizes integration"
            );

            let acceleration = *force / body.mass;
            integrator.step(&mut body.position, &mut body.velocity, acceleration, sub_dt);
            body.rotation_angle += body.rotation_speed * sub_dt;
        }
    }
}

/// Speed at which centripetal force balances `force_magnitude` at
/// separation `distance`: from v²/r = F/m, v = sqrt(F·d/m).
pub fn circular_orbit_speed(force_magnitude: Scalar, distance: Scalar, mass: Scalar) -> Scalar {
    (force_magnitude * distance / mass).sqrt()
}

/// Derive the state for a new moon around `host`.
///
/// The moon is placed outward from the system primary along the
/// primary→host direction at a configurable multiple of the host radius,
/// and given the host's velocity plus the circular-orbit speed for the
/// host's pull at that distance. The boost is aligned with the host's
/// velocity direction rather than the exact tangent of the primary-host
/// radius; close enough for a stylized orbit.
pub fn plan_moon(
    host: &BodyState,
    primary_position: Vector,
    config: &MoonConfig,
    g: Scalar,
) -> BodyState {
    let radius = host.radius * config.radius_factor;
    let mass = host.mass * config.mass_factor;

    let outward = (host.position - primary_position).normalize();
    let distance = host.radius * config.distance_factor;
    let position = host.position + outward * distance;

    let force = newtonian_force(position, mass, host.position, host.mass, g);
    let speed = circular_orbit_speed(force.length(), distance, mass);
    let velocity = host.velocity + host.velocity.normalize() * speed;

    BodyState {
        position,
        velocity,
        radius,
        mass,
        axial_tilt: config.axial_tilt,
        rotation_angle: 0.0,
        rotation_speed: config.rotation_speed,
    }
}
