use macroquad::prelude::*;

use crate::application::{CellColor, GameState};
use crate::domain::{Coord, LifeEngine, Pattern};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, panel_x};

const GRID_LINE_COLOR: Color = GRAY;

/// macroquad color for a live-cell palette entry
pub fn cell_color(color: CellColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgba(r, g, b, 255)
}

/// Draw live cells as filled tiles, skipping the off-screen gutter
pub fn draw_cells(engine: &LifeEngine, tile_size: f32, color: Color) {
    let bounds = engine.bounds();
    engine
        .cells()
        .iter()
        .filter(|&&coord| bounds.contains(coord))
        .for_each(|coord| {
            draw_rectangle(
                coord.col as f32 * tile_size,
                coord.row as f32 * tile_size,
                tile_size,
                tile_size,
                color,
            );
        });
}

/// Draw grid lines over the whole window (origin is the top-left corner)
pub fn draw_grid_lines(engine: &LifeEngine, tile_size: f32) {
    let (cols, rows) = engine.bounds().dimensions();
    let (width, height) = (screen_width(), screen_height());

    for row in 0..rows {
        let y = row as f32 * tile_size;
        draw_line(0.0, y, width, y, 1.0, GRID_LINE_COLOR);
    }
    for col in 0..cols {
        let x = col as f32 * tile_size;
        draw_line(x, 0.0, x, height, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw a semi-transparent preview of a pattern centered on the cursor tile
pub fn draw_pattern_preview(pattern: &Pattern, cursor: Coord, tile_size: f32) {
    let origin = pattern.centered_on(cursor);

    for &(dcol, drow) in &pattern.cells {
        let coord = origin.offset(dcol, drow);
        let (x, y) = (coord.col as f32 * tile_size, coord.row as f32 * tile_size);
        draw_rectangle(x, y, tile_size, tile_size, Color::from_rgba(0, 255, 150, 120));
        draw_rectangle_lines(x, y, tile_size, tile_size, 1.5, Color::from_rgba(0, 255, 150, 200));
    }

    draw_rectangle_lines(
        origin.col as f32 * tile_size,
        origin.row as f32 * tile_size,
        pattern.width as f32 * tile_size,
        pattern.height as f32 * tile_size,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

/// Playing/Paused, generation and population in the top-left corner,
/// plus the pattern being placed if any
pub fn draw_status(state: &GameState, placing: Option<&Pattern>) {
    let (label, color) = if state.is_running {
        ("Playing", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    draw_rectangle(0.0, 0.0, 200.0, 48.0, Color::from_rgba(0, 0, 0, 180));
    draw_text(label, 6.0, 18.0, 20.0, color);
    draw_text(
        &format!("Gen {}  Pop {}", state.engine.generation(), state.engine.population()),
        6.0,
        38.0,
        16.0,
        LIGHTGRAY,
    );

    if let Some(pattern) = placing {
        let text = format!("Placing {}: {} (RMB/Esc cancels)", pattern.name, pattern.description);
        draw_text(&text, 6.0, screen_height() - 8.0, 16.0, YELLOW);
    }
}

/// A line of panel text: (text, y, font size, color)
pub type PanelLabel = (String, f32, f32, Color);

/// Text shown on the settings panel: selected pattern, key help and speed
pub fn panel_labels(state: &GameState, selected_pattern: &Pattern) -> Vec<PanelLabel> {
    let help = [
        ("Controls:", 190.0, 14.0, WHITE),
        ("LMB: Toggle cell", 205.0, 12.0, GRAY),
        ("Space: Play/Pause", 218.0, 12.0, GRAY),
        ("C: Clear  N: Random", 231.0, 12.0, GRAY),
        ("Up/Down: Speed", 244.0, 12.0, GRAY),
        ("S: Settings", 257.0, 12.0, GRAY),
    ];

    let mut labels = vec![(selected_pattern.description.to_owned(), 175.0, 12.0, LIGHTGRAY)];
    labels.extend(help.iter().map(|&(text, y, size, color)| (text.to_owned(), y, size, color)));
    labels.push((
        format!("{} frames/gen", state.update_rate),
        300.0,
        14.0,
        Color::from_rgba(180, 180, 180, 255),
    ));
    labels
}

/// Draw the settings panel with buttons, dropdowns, and key help
pub fn draw_settings_panel(
    state: &GameState,
    selected_pattern: &Pattern,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    for btn in buttons {
        btn.draw(mouse_pos);
    }

    for (text, y, size, color) in panel_labels(state, selected_pattern) {
        draw_text(&text, px, y, size, color);
    }

    // Open dropdown last so its menu sits on top
    dropdowns
        .iter()
        .filter(|d| !d.is_open())
        .chain(dropdowns.iter().filter(|d| d.is_open()))
        .for_each(|d| d.draw(mouse_pos));
}
