mod cell;
mod coord;
mod life;
mod patterns;

pub use cell::Cell;
pub use coord::{Coord, GridBounds};
pub use life::{LifeEngine, LiveSet, random_seed, step, step_parallel};
pub use patterns::{Pattern, presets};
