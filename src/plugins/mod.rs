pub mod camera;
pub mod controls;
pub mod hud;
pub mod simulation;
pub mod starfield;
pub mod visualization;

pub use camera::CameraPlugin;
pub use controls::ControlsPlugin;
pub use hud::HudPlugin;
pub use simulation::SimulationPlugin;
pub use starfield::StarfieldPlugin;
pub use visualization::VisualizationPlugin;
