use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Coord;
use crate::ui::{Button, is_over_panel};

/// Tile under a screen position
pub fn screen_to_grid(mouse_pos: (f32, f32), tile_size: f32) -> Coord {
    Coord::new(
        (mouse_pos.0 / tile_size).floor() as i32,
        (mouse_pos.1 / tile_size).floor() as i32,
    )
}

/// Toggle the clicked cell; clicks on the open settings panel are ignored
pub fn handle_mouse_click(state: &mut GameState, tile_size: f32, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || is_over_panel(mouse_pos, state.show_settings) {
        return;
    }
    state.toggle_cell(screen_to_grid(mouse_pos, tile_size));
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::N, GameState::reseed),
        (KeyCode::S, GameState::toggle_settings),
        (KeyCode::Up, |s| s.adjust_speed(10)),
        (KeyCode::Down, |s| s.adjust_speed(-10)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process panel button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.clear(),
                2 => s.reseed(),
                _ => s,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid() {
        assert_eq!(screen_to_grid((0.0, 0.0), 20.0), Coord::new(0, 0));
        assert_eq!(screen_to_grid((19.9, 20.0), 20.0), Coord::new(0, 1));
        assert_eq!(screen_to_grid((799.0, 401.0), 20.0), Coord::new(39, 20));
    }

    #[test]
    fn test_screen_to_grid_negative_is_off_grid() {
        assert_eq!(screen_to_grid((-1.0, 5.0), 20.0), Coord::new(-1, 0));
    }
}
