//! Button marker components and their label-sync systems

mod pause;
mod quit;
mod restart;
mod spawn_moon;

pub use pause::{PauseButton, sync_pause_button_text};
pub use quit::QuitButton;
pub use restart::RestartButton;
pub use spawn_moon::{SpawnMoonButton, sync_spawn_moon_button_text};
