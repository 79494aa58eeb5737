//! Physics components for simulated bodies

use crate::physics::gravitation::BodyState;
use crate::physics::math::{Scalar, Vector};
use bevy::prelude::*;

/// High-precision position for physics calculations, meters from the
/// system origin
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Position(pub Vector);

impl Position {
    pub fn new(position: Vector) -> Self {
        Self(position)
    }

    #[inline]
    pub fn value(&self) -> Vector {
        self.0
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Vector {
        &mut self.0
    }
}

/// Velocity component, meters per second
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vector);

impl Velocity {
    pub fn new(velocity: Vector) -> Self {
        Self(velocity)
    }

    #[inline]
    pub fn value(&self) -> Vector {
        self.0
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Vector {
        &mut self.0
    }
}

/// Mass component, kilograms
#[derive(Component, Debug, Clone, Copy)]
pub struct Mass(pub Scalar);

impl Mass {
    pub fn new(mass: Scalar) -> Self {
        Self(mass)
    }

    #[inline]
    pub fn value(&self) -> Scalar {
        self.0
    }
}

/// Physical radius, meters (display scale and moon placement only; never
/// affects gravity)
#[derive(Component, Debug, Clone, Copy)]
pub struct Radius(pub Scalar);

impl Radius {
    pub fn new(radius: Scalar) -> Self {
        Self(radius)
    }

    #[inline]
    pub fn value(&self) -> Scalar {
        self.0
    }
}

/// Fixed axial tilt, radians
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AxialTilt(pub Scalar);

/// Spin phase and rate about the body's tilted axis
///
/// The angle accumulates every sub-step and is never normalized here; the
/// rendering layer wraps it before building a rotation.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Spin {
    /// Radians, unbounded
    pub angle: Scalar,
    /// Radians per second
    pub speed: Scalar,
}

impl Spin {
    pub fn new(speed: Scalar) -> Self {
        Self { angle: 0.0, speed }
    }
}

/// Marker component for bodies the simulation advances
#[derive(Component, Debug, Default)]
pub struct CelestialBody;

/// Marker for the central star; anchor for moon placement geometry
#[derive(Component, Debug, Default)]
pub struct PrimaryBody;

/// Present while "spawn moon" is still offered for this body; removed once
/// a moon has been spawned around it
#[derive(Component, Debug, Default)]
pub struct MoonInsertable;

/// Host planet reference carried by spawned moons
#[derive(Component, Debug, Clone, Copy)]
pub struct HostBody(pub Entity);

/// Component bundle for spawning simulated bodies
#[derive(Bundle)]
pub struct CelestialBodyBundle {
    pub body: CelestialBody,
    pub position: Position,
    pub velocity: Velocity,
    pub mass: Mass,
    pub radius: Radius,
    pub axial_tilt: AxialTilt,
    pub spin: Spin,
    pub transform: Transform,
    pub visibility: Visibility,
}

impl CelestialBodyBundle {
    /// Bundle from a physical state; `distance_scale` converts meters to
    /// scene units for the initial transform.
    pub fn new(state: &BodyState, distance_scale: Scalar) -> Self {
        Self {
            body: CelestialBody,
            position: Position::new(state.position),
            velocity: Velocity::new(state.velocity),
            mass: Mass::new(state.mass),
            radius: Radius::new(state.radius),
            axial_tilt: AxialTilt(state.axial_tilt),
            spin: Spin {
                angle: state.rotation_angle,
                speed: state.rotation_speed,
            },
            transform: Transform::from_translation((state.position * distance_scale).as_vec3()),
            visibility: Visibility::default(),
        }
    }
}
