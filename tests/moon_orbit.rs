//! Moon spawning: placement geometry and the resulting orbit.

use orrery::config::MoonConfig;
use orrery::physics::gravitation::{BodyState, advance, plan_moon};
use orrery::physics::integrators::SymplecticEuler;
use orrery::physics::math::{Scalar, Vector};

const G: Scalar = 6.6743e-11;

fn earth_like_host() -> BodyState {
    BodyState {
        position: Vector::new(1.49598023e11, 0.0, 0.0),
        velocity: Vector::new(0.0, 0.0, 29780.0),
        radius: 6.371e6,
        mass: 5.97237e24,
        axial_tilt: 0.4091,
        rotation_angle: 0.0,
        rotation_speed: 7.2921e-5,
    }
}

#[test]
fn test_moon_is_placed_outward_from_the_primary() {
    let host = earth_like_host();
    let config = MoonConfig::default();

    let moon = plan_moon(&host, Vector::ZERO, &config, G);

    let offset = moon.position - host.position;
    let expected_distance = host.radius * config.distance_factor;

    // Along the primary->host direction (+X here), at the configured
    // multiple of the host radius.
    assert!((offset.length() - expected_distance).abs() < 1.0);
    assert!((offset.normalize() - Vector::new(1.0, 0.0, 0.0)).length() < 1e-12);
}

#[test]
fn test_moon_speed_gives_circular_orbit_around_host() {
    let host = earth_like_host();
    let config = MoonConfig::default();
    let moon = plan_moon(&host, Vector::ZERO, &config, G);

    // v = sqrt(G * M / d) for a circular orbit around the host.
    let separation = (moon.position - host.position).length();
    let expected_speed = (G * host.mass / separation).sqrt();
    let boost = (moon.velocity - host.velocity).length();

    assert!(
        (boost - expected_speed).abs() < expected_speed * 1e-9,
        "Boost {boost} m/s, expected {expected_speed} m/s"
    );

    // With the host's velocity tangential to the primary->host radius, the
    // boost direction is perpendicular to the separation, so the pair alone
    // should trace a near-circular relative orbit.
    let mut bodies = vec![host, moon];
    let initial_separation = separation;
    let mut max_drift: Scalar = 0.0;

    for _ in 0..2000 {
        advance(&mut bodies, &SymplecticEuler, 0.1, 1e4, 100, G);
        let separation = (bodies[1].position - bodies[0].position).length();
        let drift = (separation - initial_separation).abs() / initial_separation;
        max_drift = max_drift.max(drift);
    }

    assert!(
        max_drift < 0.01,
        "Moon separation drifted by a relative {max_drift}"
    );
}

#[test]
fn test_moon_inherits_configured_spin_and_size() {
    let host = earth_like_host();
    let config = MoonConfig::default();
    let moon = plan_moon(&host, Vector::ZERO, &config, G);

    assert_eq!(moon.radius, host.radius * config.radius_factor);
    assert_eq!(moon.mass, host.mass * config.mass_factor);
    assert_eq!(moon.axial_tilt, config.axial_tilt);
    assert_eq!(moon.rotation_speed, config.rotation_speed);
    assert_eq!(moon.rotation_angle, 0.0);
}
