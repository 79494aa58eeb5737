use crate::physics::integrators::{ExplicitEuler, Integrator, SymplecticEuler};
use crate::physics::math::Scalar;
use bevy::prelude::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub rendering: RenderingConfig,
    pub ui: UiConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Newtonian constant of gravitation, m³ kg⁻¹ s⁻²
    pub gravitational_constant: Scalar,
    /// Simulated seconds per wall-clock second
    pub time_scale: Scalar,
    /// Sub-steps per frame
    pub substeps: u32,
    pub integrator: IntegratorKind,
    /// Seed for the starfield RNG; random when absent
    pub initial_seed: Option<u64>,
    pub moon: MoonConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.6743e-11,
            time_scale: 1e5,
            substeps: 100,
            integrator: IntegratorKind::SymplecticEuler,
            initial_seed: None,
            moon: MoonConfig::default(),
        }
    }
}

/// Parameters for deriving a spawned moon from its host planet
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct MoonConfig {
    /// Moon radius as a fraction of the host radius
    pub radius_factor: Scalar,
    /// Moon mass as a fraction of the host mass
    pub mass_factor: Scalar,
    /// Placement distance from the host center, in host radii
    pub distance_factor: Scalar,
    /// Radians
    pub axial_tilt: Scalar,
    /// Radians per second
    pub rotation_speed: Scalar,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            radius_factor: 0.4,
            mass_factor: 1e-3,
            distance_factor: 100.0,
            axial_tilt: 0.5,
            rotation_speed: 1e-5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RenderingConfig {
    /// Scene units per meter for body positions
    pub distance_scale: Scalar,
    /// Scene units per meter for the star's displayed radius
    pub star_radius_scale: Scalar,
    /// Scene units per meter for planet and moon radii; exaggerated
    /// relative to `distance_scale` so small bodies stay visible
    pub planet_radius_scale: Scalar,
    /// Initial camera orbit radius, scene units
    pub camera_radius: f32,
    /// Number of background stars
    pub starfield_count: usize,
    /// Distance of the starfield shell from the origin, scene units
    pub starfield_radius: f32,
    pub ambient_brightness: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            distance_scale: 1e-10,
            star_radius_scale: 2e-9,
            planet_radius_scale: 2e-8,
            camera_radius: 120.0,
            starfield_count: 600,
            starfield_radius: 2500.0,
            ambient_brightness: 80.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    pub font_size: f32,
    pub button_padding: f32,
    pub button_gap: f32,
    pub button_margin: f32,
    pub button_border_radius: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            button_padding: 4.0,
            button_gap: 4.0,
            button_margin: 4.0,
            button_border_radius: 4.0,
        }
    }
}

/// Integration method selection, config- and CLI-facing
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum IntegratorKind {
    SymplecticEuler,
    ExplicitEuler,
}

impl IntegratorKind {
    pub fn create(self) -> Box<dyn Integrator> {
        match self {
            IntegratorKind::SymplecticEuler => Box::new(SymplecticEuler),
            IntegratorKind::ExplicitEuler => Box::new(ExplicitEuler),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Load configuration from the per-user config directory
    pub fn load_from_user_config() -> Self {
        let Some(dirs) = directories::ProjectDirs::from("", "", "orrery") else {
            return Self::default();
        };

        let path = dirs.config_dir().join("config.toml");
        match path.to_str() {
            Some(path) => Self::load_or_default(path),
            None => Self::default(),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
