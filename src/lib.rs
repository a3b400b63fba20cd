// Domain layer - Life engine and patterns
pub mod domain;

// Application layer - Game loop state and settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, GridBounds, LifeEngine, LiveSet, Pattern, presets};
pub use application::{CellColor, GameState, Settings, SettingsError};
pub use ui::{Button, Dropdown};
