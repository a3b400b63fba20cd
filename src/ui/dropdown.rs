use macroquad::prelude::*;

use super::button::{BUTTON_COLOR, BUTTON_HOVER_COLOR};

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Shorten `text` with an ellipsis until it fits in `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_owned();
    }

    let mut truncated = text.to_owned();
    while !truncated.is_empty() && width(format!("{truncated}...").as_str()) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// Dropdown selector for the settings panel
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn header_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ITEM_HEIGHT)
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(self.x, self.y + ITEM_HEIGHT * (index + 1) as f32, self.width, ITEM_HEIGHT)
    }

    fn hovered_item(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        let pos = Vec2::from(mouse_pos);
        (0..self.items.len()).find(|&i| self.item_rect(i).contains(pos))
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.header_rect();
        let header_color = if header.contains(Vec2::from(mouse_pos)) {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        draw_rectangle(header.x, header.y, header.w, header.h, header_color);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);

        let text = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&text, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.hovered_item(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let rect = self.item_rect(i);
            let color = if hovered == Some(i) {
                BUTTON_HOVER_COLOR
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(item, self.width - 10.0), rect.x + 5.0, rect.y + 21.0, FONT_SIZE, WHITE);
        }
    }

    /// Handle interaction and return true if an item was picked this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.header_rect().contains(Vec2::from(mouse_pos)) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        // Any click while open closes the menu; only an item click selects
        self.is_open = false;
        match self.hovered_item(mouse_pos) {
            Some(i) => {
                self.selected = i;
                true
            }
            None => false,
        }
    }
}
