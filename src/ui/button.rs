use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    text_color: Color,
    font_size: u16,
    outlined: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            text_color: WHITE,
            font_size: 22,
            outlined: false,
        }
    }

    /// Fill color (builder pattern)
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    /// Draw only a thin border instead of a filled background
    pub fn outlined(mut self) -> Self {
        self.outlined = true;
        self
    }

    /// Check if a point is over the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button, lightened on hover
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.is_hovered(mouse_pos);

        if self.outlined {
            if hovered {
                draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, LIGHTGRAY);
            }
        } else {
            let color = if hovered { lighten(self.color) } else { self.color };
            draw_rectangle(self.x, self.y, self.width, self.height, color);
        }

        let text_size = measure_text(&self.text, None, self.font_size, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            self.font_size as f32,
            self.text_color,
        );
    }

    /// Check if button was clicked (or tapped) this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

fn lighten(color: Color) -> Color {
    Color::new(
        (color.r + 0.15).min(1.0),
        (color.g + 0.15).min(1.0),
        (color.b + 0.15).min(1.0),
        color.a,
    )
}
