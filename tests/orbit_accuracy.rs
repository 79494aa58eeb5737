//! Accuracy tests for the frame advance against known orbital behavior.

use orrery::physics::gravitation::{BodyState, advance};
use orrery::physics::integrators::{ExplicitEuler, SymplecticEuler};
use orrery::physics::math::{Scalar, Vector};

const G: Scalar = 6.6743e-11;
const SUN_MASS: Scalar = 1.9885e30;
const EARTH_MASS: Scalar = 5.97237e24;
const EARTH_DISTANCE: Scalar = 1.49598023e11;
const EARTH_SPEED: Scalar = 29780.0;
const SECONDS_PER_YEAR: Scalar = 3.1557e7;

fn sun_and_earth() -> Vec<BodyState> {
    vec![
        BodyState {
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            radius: 6.9634e8,
            mass: SUN_MASS,
            axial_tilt: 0.0,
            rotation_angle: 0.0,
            rotation_speed: 0.0,
        },
        BodyState {
            position: Vector::new(EARTH_DISTANCE, 0.0, 0.0),
            velocity: Vector::new(0.0, 0.0, EARTH_SPEED),
            radius: 6.371e6,
            mass: EARTH_MASS,
            axial_tilt: 0.4091,
            rotation_angle: 0.0,
            rotation_speed: 7.2921e-5,
        },
    ]
}

fn sun_distance(bodies: &[BodyState]) -> Scalar {
    (bodies[1].position - bodies[0].position).length()
}

#[test]
fn test_one_frame_displacement_matches_orbital_rate() {
    let mut bodies = sun_and_earth();

    let frame_dt = 1.0 / 60.0;
    let time_scale = 1e5;
    advance(&mut bodies, &SymplecticEuler, frame_dt, time_scale, 100, G);

    let elapsed = frame_dt * time_scale;
    let displacement = (bodies[1].position - Vector::new(EARTH_DISTANCE, 0.0, 0.0)).length();

    // Displacement over one frame is the tangential speed times the scaled
    // elapsed time, to first order.
    let expected = EARTH_SPEED * elapsed;
    assert!(
        (displacement - expected).abs() < expected * 1e-3,
        "Displacement {displacement} m, expected about {expected} m"
    );

    // Which corresponds to one year per orbit.
    let angular_rate = displacement / EARTH_DISTANCE / elapsed;
    let expected_rate = 2.0 * std::f64::consts::PI / SECONDS_PER_YEAR;
    assert!(
        (angular_rate - expected_rate).abs() < expected_rate * 0.01,
        "Angular rate {angular_rate} rad/s, expected about {expected_rate} rad/s"
    );
}

#[test]
fn test_circular_orbit_distance_stays_constant() {
    let mut bodies = sun_and_earth();

    let frame_dt = 1.0 / 60.0;
    let time_scale = 1e5;
    let mut max_drift: Scalar = 0.0;

    // 600 frames at the default scale is about 1e6 simulated seconds.
    for _ in 0..600 {
        advance(&mut bodies, &SymplecticEuler, frame_dt, time_scale, 100, G);
        let drift = (sun_distance(&bodies) - EARTH_DISTANCE).abs() / EARTH_DISTANCE;
        max_drift = max_drift.max(drift);
    }

    assert!(
        max_drift < 1e-4,
        "Sun distance drifted by a relative {max_drift}"
    );
}

#[test]
fn test_momentum_is_conserved() {
    let mut bodies = sun_and_earth();

    let momentum = |bodies: &[BodyState]| -> Vector {
        bodies
            .iter()
            .map(|body| body.velocity * body.mass)
            .sum::<Vector>()
    };

    let initial = momentum(&bodies);
    for _ in 0..100 {
        advance(&mut bodies, &SymplecticEuler, 1.0 / 60.0, 1e5, 100, G);
    }
    let drift = (momentum(&bodies) - initial).length();

    assert!(
        drift < initial.length() * 1e-9,
        "Momentum drift {drift} against initial {}",
        initial.length()
    );
}

#[test]
fn test_doubling_substeps_converges() {
    let simulate = |substeps: u32| -> Vector {
        let mut bodies = sun_and_earth();
        // One long frame so the sub-step size is coarse enough for the
        // truncation error to be measurable.
        advance(&mut bodies, &SymplecticEuler, 1.0, 1e6, substeps, G);
        bodies[1].position
    };

    let coarse = simulate(100);
    let medium = simulate(200);
    let fine = simulate(400);

    let first_refinement = (coarse - medium).length();
    let second_refinement = (medium - fine).length();

    assert!(first_refinement > 0.0);
    assert!(
        second_refinement < first_refinement,
        "Halving the sub-step should shrink the trajectory change: {first_refinement} -> {second_refinement}"
    );

    // Both changes stay small against the orbit radius.
    assert!(first_refinement < EARTH_DISTANCE * 1e-3);
}

#[test]
fn test_symplectic_euler_holds_orbits_better_than_explicit() {
    let drift_after = |integrator: &dyn orrery::physics::integrators::Integrator| -> Scalar {
        let mut bodies = sun_and_earth();
        for _ in 0..300 {
            advance(&mut bodies, integrator, 1.0, 1e6, 100, G);
        }
        (sun_distance(&bodies) - EARTH_DISTANCE).abs() / EARTH_DISTANCE
    };

    let symplectic_drift = drift_after(&SymplecticEuler);
    let explicit_drift = drift_after(&ExplicitEuler);

    assert!(
        symplectic_drift < 0.01,
        "Symplectic drift should stay bounded, was {symplectic_drift}"
    );
    assert!(
        explicit_drift > symplectic_drift * 2.0,
        "Explicit Euler should drift more: {explicit_drift} vs {symplectic_drift}"
    );
}

#[test]
fn test_zero_elapsed_time_is_idempotent() {
    let mut bodies = sun_and_earth();
    let before = bodies.clone();

    for _ in 0..10 {
        advance(&mut bodies, &SymplecticEuler, 0.0, 1e5, 100, G);
    }

    assert_eq!(bodies, before);
}
