use crate::physics::math::Scalar;
use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻²
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct GravitationalConstant(pub Scalar);

impl Default for GravitationalConstant {
    fn default() -> Self {
        Self(6.6743e-11)
    }
}

/// Spawn-ordered registry of simulated bodies
///
/// A spawned moon is inserted immediately after its host, so selection
/// cycling visits it right after the planet it orbits. Entries are only
/// removed on restart.
#[derive(Resource, Default, Debug)]
pub struct CelestialBodies(pub Vec<Entity>);

impl CelestialBodies {
    pub fn push(&mut self, body: Entity) {
        self.0.push(body);
    }

    /// Insert `body` immediately after `host`; appends if the host is
    /// missing from the registry.
    pub fn insert_after(&mut self, host: Entity, body: Entity) {
        match self.0.iter().position(|&entry| entry == host) {
            Some(index) => self.0.insert(index + 1, body),
            None => self.0.push(body),
        }
    }

    /// Next entry after `current`, wrapping around; the first entry when
    /// nothing is selected.
    pub fn next_after(&self, current: Option<Entity>) -> Option<Entity> {
        let index = current.and_then(|entity| self.0.iter().position(|&entry| entry == entity));
        match index {
            Some(index) => self.0.get((index + 1) % self.0.len()).copied(),
            None => self.0.first().copied(),
        }
    }

    /// Previous entry before `current`, wrapping around; the last entry
    /// when nothing is selected.
    pub fn previous_before(&self, current: Option<Entity>) -> Option<Entity> {
        let index = current.and_then(|entity| self.0.iter().position(|&entry| entry == entity));
        match index {
            Some(index) => self
                .0
                .get((index + self.0.len() - 1) % self.0.len())
                .copied(),
            None => self.0.last().copied(),
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// The body the HUD and edit commands operate on
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SelectedBody(pub Option<Entity>);
