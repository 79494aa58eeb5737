//! Shared styling constants for controls UI

use bevy::prelude::Color;

pub const BUTTON_WIDTH_PX: f32 = 160.0;

pub const BUTTON_COLOR_NORMAL: Color = Color::srgba(1.0, 1.0, 1.0, 0.01);
pub const BUTTON_COLOR_HOVERED: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);
pub const BUTTON_COLOR_PRESSED: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
