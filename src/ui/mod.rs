mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Vertical positions of the settings panel widgets
pub const SPEED_DROPDOWN_Y: f32 = 30.0;
pub const COLOR_DROPDOWN_Y: f32 = 80.0;
pub const PATTERN_DROPDOWN_Y: f32 = 130.0;

/// Speed presets as (frames per generation, label)
pub const SPEEDS: &[(u32, &str)] = &[
    (120, "Slow"),
    (60, "Normal"),
    (30, "Fast"),
    (10, "Faster"),
    (1, "Every frame"),
];

/// Get the X position where the settings panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Whether the cursor is over the open settings panel
pub fn is_over_panel(mouse_pos: (f32, f32), show_settings: bool) -> bool {
    show_settings && mouse_pos.0 >= panel_x()
}

/// Closest speed preset to an update rate, for the initial dropdown selection
pub fn speed_index(update_rate: u32) -> usize {
    SPEEDS
        .iter()
        .enumerate()
        .min_by_key(|(_, (rate, _))| rate.abs_diff(update_rate))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Create panel buttons below the dropdowns
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 330.0, PANEL_WIDTH, BUTTON_HEIGHT, "Play/Pause"),
        Button::new(px, 380.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 430.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
