mod game_state;
mod settings;

pub use game_state::GameState;
pub use settings::{CellColor, MAX_UPDATE_RATE, MIN_UPDATE_RATE, Settings, SettingsError};
