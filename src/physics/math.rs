use crate::resources::SharedRng;
use rand::Rng;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec3;

use crate::prelude::Vec3;

/// Uniformly distributed direction on the unit sphere.
///
/// Used for placing the background starfield; the simulation itself never
/// draws random numbers.
pub fn random_unit_vector(rng: &mut SharedRng) -> Vec3 {
    let theta = rng.random_range(0.0..=2.0 * std::f32::consts::PI);
    let phi = libm::acosf(rng.random_range(-1.0..=1.0));

    Vec3::new(
        libm::sinf(phi) * libm::cosf(theta),
        libm::sinf(phi) * libm::sinf(theta),
        libm::cosf(phi),
    )
}

#[cfg(test)]
mod math_tests {
    use super::*;

    #[test]
    fn test_random_unit_vector_length() {
        let mut rng = SharedRng::from_seed(7);

        for _ in 0..10_000 {
            let v = random_unit_vector(&mut rng);
            let length = libm::sqrtf(v.x * v.x + v.y * v.y + v.z * v.z);

            assert!(
                (length - 1.0).abs() < 1e-6,
                "Vector length should be 1, but was: {length}",
            );
        }
    }

    #[test]
    fn test_random_unit_vector_covers_all_octants() {
        let mut rng = SharedRng::from_seed(11);
        let mut octants = [false; 8];

        for _ in 0..10_000 {
            let v = random_unit_vector(&mut rng);
            let index = (v.x > 0.0) as usize | ((v.y > 0.0) as usize) << 1
                | ((v.z > 0.0) as usize) << 2;
            octants[index] = true;
        }

        assert!(
            octants.iter().all(|&hit| hit),
            "Directions should cover every octant: {octants:?}"
        );
    }
}
