use std::time::{Duration, Instant};

use clap::Parser;
use macroquad::prelude::*;

use args::Args;
use life_engine::{
    CellColor, GameState, Settings, input, presets, rendering,
    ui::{self, Dropdown, SPEEDS},
};

mod args;

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let settings = match Settings::try_from(Args::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            std::process::exit(2);
        }
    };

    log::info!(
        "Starting {}x{} window, {}px tiles ({}x{} grid), {} fps, {} frames/gen",
        settings.window_width,
        settings.window_height,
        settings.tile_size,
        settings.bounds().dimensions().0,
        settings.bounds().dimensions().1,
        settings.fps,
        settings.update_rate,
    );

    macroquad::Window::from_config(window_conf(&settings), run(settings));
}

/// Sleep out the rest of the frame so ticks follow the configured frame rate
fn pace_frame(frame_start: Instant, fps: u32) {
    let target = Duration::from_secs_f64(1.0 / fps as f64);
    if let Some(rest) = target.checked_sub(frame_start.elapsed()) {
        std::thread::sleep(rest);
    }
}

async fn run(settings: Settings) {
    let tile_size = settings.tile_size as f32;
    let mut state = GameState::new(&settings);

    let px = ui::panel_x();
    let speed_items: Vec<String> = SPEEDS.iter().map(|(_, name)| name.to_string()).collect();
    let mut speed_dropdown = Dropdown::new(px, ui::SPEED_DROPDOWN_Y, ui::PANEL_WIDTH, "Speed", speed_items);
    speed_dropdown.set_selected(ui::speed_index(settings.update_rate));

    let colors = CellColor::all();
    let color_items: Vec<String> = colors.iter().map(|c| c.name().to_string()).collect();
    let mut color_dropdown = Dropdown::new(px, ui::COLOR_DROPDOWN_Y, ui::PANEL_WIDTH, "Color", color_items);
    color_dropdown.set_selected(colors.iter().position(|&c| c == settings.cell_color).unwrap_or(0));

    let patterns = presets::all_patterns();
    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, ui::PATTERN_DROPDOWN_Y, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let frame_start = Instant::now();
        let mouse_pos = mouse_position();
        let cursor = input::screen_to_grid(mouse_pos, tile_size);

        let px = ui::panel_x();
        speed_dropdown.set_position(px, ui::SPEED_DROPDOWN_Y);
        color_dropdown.set_position(px, ui::COLOR_DROPDOWN_Y);
        pattern_dropdown.set_position(px, ui::PATTERN_DROPDOWN_Y);
        let buttons = ui::create_buttons();

        if state.show_settings {
            let menu_was_open =
                speed_dropdown.is_open() || color_dropdown.is_open() || pattern_dropdown.is_open();

            if speed_dropdown.update(mouse_pos) {
                state.set_update_rate(SPEEDS[speed_dropdown.selected()].0);
            }
            if speed_dropdown.is_open() {
                color_dropdown.close();
                pattern_dropdown.close();
            }

            if color_dropdown.update(mouse_pos) {
                state.set_cell_color(colors[color_dropdown.selected()]);
            }
            if color_dropdown.is_open() {
                speed_dropdown.close();
                pattern_dropdown.close();
            }

            // Picking a pattern pauses and enters placement mode
            if pattern_dropdown.update(mouse_pos) {
                state.pending_pattern_index = Some(pattern_dropdown.selected());
                state.is_running = false;
            }
            if pattern_dropdown.is_open() {
                speed_dropdown.close();
                color_dropdown.close();
            }

            if !menu_was_open {
                state = input::process_button_clicks(state, &buttons, mouse_pos);
            }
        }

        if let Some(pattern_idx) = state.pending_pattern_index {
            if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape) {
                state.pending_pattern_index = None;
            } else if is_mouse_button_pressed(MouseButton::Left)
                && !ui::is_over_panel(mouse_pos, state.show_settings)
            {
                state.place_pattern(&patterns[pattern_idx], cursor);
                state.pending_pattern_index = None;
            }
        } else {
            input::handle_mouse_click(&mut state, tile_size, mouse_pos);
        }

        state = input::process_keyboard_input(state);
        state = state.tick();

        clear_background(BLACK);
        rendering::draw_cells(&state.engine, tile_size, rendering::cell_color(state.cell_color));
        rendering::draw_grid_lines(&state.engine, tile_size);

        if let Some(idx) = state.pending_pattern_index {
            rendering::draw_pattern_preview(&patterns[idx], cursor, tile_size);
        }

        let placing = state.pending_pattern_index.map(|idx| &patterns[idx]);
        rendering::draw_status(&state, placing);
        if state.show_settings {
            rendering::draw_settings_panel(
                &state,
                &patterns[pattern_dropdown.selected()],
                &buttons,
                &[&speed_dropdown, &color_dropdown, &pattern_dropdown],
                mouse_pos,
            );
        }

        pace_frame(frame_start, settings.fps);
        next_frame().await;
    }
}
