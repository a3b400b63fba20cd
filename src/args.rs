use clap::Parser;

use life_engine::{CellColor, Settings, SettingsError};

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life", long_about = None)]
pub struct Args {
    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Edge length of one cell in pixels.
    #[arg(short, long, default_value_t = 20)]
    pub tile_size: u32,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Rendered frames between generations while playing.
    #[arg(short, long, default_value_t = 120)]
    pub update_rate: u32,

    /// Colour of live cells.
    #[arg(short, long, value_enum, default_value_t = CellColor::Green)]
    pub color: CellColor,
}

impl TryFrom<Args> for Settings {
    type Error = SettingsError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Settings::new(args.width, args.height, args.tile_size, args.fps, args.update_rate)
            .map(|settings| settings.with_cell_color(args.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("life_engine").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::try_from(parse(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_color_flag_reaches_settings() {
        let settings = Settings::try_from(parse(&["--color", "yellow", "-t", "10"])).unwrap();
        assert_eq!(settings.cell_color, CellColor::Yellow);
        assert_eq!(settings.bounds().dimensions(), (80, 80));
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        assert!(Args::try_parse_from(["life_engine", "--color", "purple"]).is_err());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        assert_eq!(
            Settings::try_from(parse(&["--fps", "0"])),
            Err(SettingsError::ZeroFps)
        );
    }
}
