use macroquad::prelude::*;

pub const BUTTON_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
pub const BUTTON_HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Clickable panel button
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    text: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: text.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(Vec2::from(mouse_pos))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.text, None, 20, 1.0);
        draw_text(&self.text, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, WHITE);
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
