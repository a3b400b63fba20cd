use rand::Rng;

use crate::domain::{Coord, LifeEngine, Pattern};
use super::settings::{CellColor, MAX_UPDATE_RATE, MIN_UPDATE_RATE, Settings};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub engine: LifeEngine,
    pub is_running: bool,
    /// Frames rendered since the last generation
    pub frame_counter: u32,
    /// Frames between generations while running
    pub update_rate: u32,
    pub cell_color: CellColor,
    pub show_settings: bool,
    /// Index of pattern pending placement (None = normal mode)
    pub pending_pattern_index: Option<usize>,
}

impl GameState {
    /// Create a paused, empty game from validated settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: LifeEngine::new(settings.bounds()),
            is_running: false,
            frame_counter: 0,
            update_rate: settings.update_rate,
            cell_color: settings.cell_color,
            show_settings: false,
            pending_pattern_index: None,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("{}", if self.is_running { "Playing" } else { "Paused" });
        self
    }

    /// Clear the board, pause, and restart the frame count
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.is_running = false;
        self.frame_counter = 0;
        log::debug!("Cleared board");
        self
    }

    /// Reseed with a random pattern using the thread-local generator
    pub fn reseed(self) -> Self {
        self.reseed_with(&mut rand::rng())
    }

    /// Reseed with between 3 and 9 rows' worth of random cells
    pub fn reseed_with<R: Rng>(mut self, rng: &mut R) -> Self {
        let (width, _) = self.engine.bounds().dimensions();
        let count = rng.random_range(3..10) * width.max(0) as usize;
        self.engine.reseed(rng, count);
        log::debug!("Reseeded {} cells from {} samples", self.engine.population(), count);
        self
    }

    /// Flip the cell at `coord` if it lies on the visible grid
    pub fn toggle_cell(&mut self, coord: Coord) {
        if self.engine.bounds().contains(coord) {
            let alive = self.engine.toggle(coord);
            log::trace!("Toggled ({}, {}) -> {}", coord.col, coord.row, alive);
        }
    }

    /// Stamp a pattern centered on `coord`
    pub fn place_pattern(&mut self, pattern: &Pattern, coord: Coord) {
        let placed = self.engine.place(pattern, pattern.centered_on(coord));
        log::debug!("Placed {} ({} cells)", pattern.name, placed);
    }

    /// Set the number of frames between generations
    pub fn set_update_rate(&mut self, update_rate: u32) {
        self.update_rate = update_rate.clamp(MIN_UPDATE_RATE, MAX_UPDATE_RATE);
        self.frame_counter = self.frame_counter.min(self.update_rate);
    }

    /// Adjust simulation speed; positive `delta` means fewer frames per generation
    pub fn adjust_speed(mut self, delta: i32) -> Self {
        let rate = self.update_rate as i64 - delta as i64;
        self.set_update_rate(rate.clamp(MIN_UPDATE_RATE as i64, MAX_UPDATE_RATE as i64) as u32);
        self
    }

    pub fn set_cell_color(&mut self, cell_color: CellColor) {
        self.cell_color = cell_color;
    }

    /// Show or hide the settings panel
    pub fn toggle_settings(mut self) -> Self {
        self.show_settings = !self.show_settings;
        self
    }

    /// Update simulation by one rendered frame.
    /// A generation is computed once every `update_rate` frames while running.
    pub fn tick(mut self) -> Self {
        if !self.is_running {
            return self;
        }

        self.frame_counter += 1;
        if self.frame_counter >= self.update_rate {
            self.frame_counter = 0;
            self.engine.advance();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng};

    fn state_with_rate(update_rate: u32) -> GameState {
        let settings = Settings::new(200, 200, 20, 60, update_rate).unwrap();
        GameState::new(&settings)
    }

    fn with_blinker(mut state: GameState) -> GameState {
        for col in 4..=6 {
            state.toggle_cell(Coord::new(col, 5));
        }
        state
    }

    #[test]
    fn test_new_state_is_paused_and_empty() {
        let state = GameState::new(&Settings::default());
        assert!(!state.is_running);
        assert_eq!(state.engine.population(), 0);
        assert_eq!(state.update_rate, 120);
    }

    #[test]
    fn test_paused_never_steps() {
        let mut state = with_blinker(state_with_rate(2));
        for _ in 0..10 {
            state = state.tick();
        }
        assert_eq!(state.engine.generation(), 0);
        assert_eq!(state.frame_counter, 0);
    }

    #[test]
    fn test_steps_once_per_update_rate_frames() {
        let mut state = with_blinker(state_with_rate(3)).toggle_running();

        state = state.tick().tick();
        assert_eq!(state.engine.generation(), 0);
        state = state.tick();
        assert_eq!(state.engine.generation(), 1);
        assert!(state.engine.is_alive(Coord::new(5, 4)));

        for _ in 0..6 {
            state = state.tick();
        }
        assert_eq!(state.engine.generation(), 3);
    }

    #[test]
    fn test_clear_pauses_and_resets() {
        let mut state = with_blinker(state_with_rate(5)).toggle_running();
        state = state.tick().tick();
        state = state.clear();

        assert!(!state.is_running);
        assert_eq!(state.frame_counter, 0);
        assert_eq!(state.engine.population(), 0);
        assert_eq!(state.engine.generation(), 0);
    }

    #[test]
    fn test_toggle_cell_ignores_off_grid_clicks() {
        let mut state = state_with_rate(5);
        state.toggle_cell(Coord::new(10, 3));
        state.toggle_cell(Coord::new(-1, 3));
        assert_eq!(state.engine.population(), 0);

        state.toggle_cell(Coord::new(9, 3));
        assert!(state.engine.is_alive(Coord::new(9, 3)));
        state.toggle_cell(Coord::new(9, 3));
        assert!(!state.engine.is_alive(Coord::new(9, 3)));
    }

    #[test]
    fn test_reseed_fills_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let state = state_with_rate(5).reseed_with(&mut rng);
        let bounds = state.engine.bounds();

        assert!(state.engine.population() > 0);
        assert!(state.engine.population() <= 9 * 10);
        assert!(state.engine.cells().iter().all(|&c| bounds.contains(c)));
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let mut state = state_with_rate(2);
        state = state.adjust_speed(5);
        assert_eq!(state.update_rate, MIN_UPDATE_RATE);

        state = state.adjust_speed(-10_000);
        assert_eq!(state.update_rate, MAX_UPDATE_RATE);
    }

    #[test]
    fn test_place_pattern_centers_on_cursor() {
        let mut state = state_with_rate(5);
        state.place_pattern(&presets::block(), Coord::new(5, 5));

        for coord in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert!(state.engine.is_alive(Coord::from(coord)));
        }
    }
}
