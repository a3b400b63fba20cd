use crate::domain::GridBounds;

/// Frames-per-generation limits accepted by the speed controls
pub const MIN_UPDATE_RATE: u32 = 1;
pub const MAX_UPDATE_RATE: u32 = 600;

/// Colors offered for live cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CellColor {
    #[default]
    Green,
    Yellow,
    Blue,
}

impl CellColor {
    pub fn all() -> Vec<CellColor> {
        vec![CellColor::Green, CellColor::Yellow, CellColor::Blue]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellColor::Green => "Green",
            CellColor::Yellow => "Yellow",
            CellColor::Blue => "Blue",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            CellColor::Green => (0, 255, 0),
            CellColor::Yellow => (255, 255, 0),
            CellColor::Blue => (0, 0, 255),
        }
    }
}

/// Invalid startup settings
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Tile size must be at least one pixel")]
    ZeroTileSize,
    #[error("Tile size {tile_size} does not fit in a {width}x{height} window")]
    TileLargerThanWindow {
        tile_size: u32,
        width: u32,
        height: u32,
    },
    #[error("Frame rate must be at least 1")]
    ZeroFps,
    #[error(
        "Update rate must be between {min} and {max} frames, got {0}",
        min = MIN_UPDATE_RATE,
        max = MAX_UPDATE_RATE
    )]
    UpdateRateOutOfRange(u32),
}

/// Validated window and simulation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub tile_size: u32,
    pub fps: u32,
    /// Rendered frames between generations while playing
    pub update_rate: u32,
    pub cell_color: CellColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 800,
            tile_size: 20,
            fps: 60,
            update_rate: 120,
            cell_color: CellColor::default(),
        }
    }
}

impl Settings {
    /// Build settings, rejecting values the shell cannot run with
    pub fn new(
        window_width: u32,
        window_height: u32,
        tile_size: u32,
        fps: u32,
        update_rate: u32,
    ) -> Result<Self, SettingsError> {
        if tile_size == 0 {
            return Err(SettingsError::ZeroTileSize);
        }
        if tile_size > window_width || tile_size > window_height {
            return Err(SettingsError::TileLargerThanWindow {
                tile_size,
                width: window_width,
                height: window_height,
            });
        }
        if fps == 0 {
            return Err(SettingsError::ZeroFps);
        }
        if !(MIN_UPDATE_RATE..=MAX_UPDATE_RATE).contains(&update_rate) {
            return Err(SettingsError::UpdateRateOutOfRange(update_rate));
        }

        Ok(Self {
            window_width,
            window_height,
            tile_size,
            fps,
            update_rate,
            cell_color: CellColor::default(),
        })
    }

    /// Set the live cell color (builder pattern)
    pub fn with_cell_color(mut self, cell_color: CellColor) -> Self {
        self.cell_color = cell_color;
        self
    }

    /// Grid size in tiles
    pub fn bounds(&self) -> GridBounds {
        GridBounds::from_screen(self.window_width, self.window_height, self.tile_size)
    }
}
