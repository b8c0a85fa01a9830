mod button;
mod layout;

pub use button::Button;
pub use layout::GridLayout;

use macroquad::prelude::{BLACK, BLUE, Color, GRAY, GREEN, RED, WHITE};

use crate::config::LifeConfig;

pub const TITLE: &str = "Game of Life";
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 48.0;
pub const BUTTON_GAP: f32 = 20.0;
pub const BACK_SIZE: f32 = 44.0;
/// Space reserved above the grid for the back control and title
pub const HEADER_HEIGHT: f32 = 140.0;

pub const START_COLOR: Color = GREEN;
pub const STOP_COLOR: Color = RED;
pub const CLEAR_COLOR: Color = BLUE;
pub const ALIVE_COLOR: Color = BLACK;
pub const DEAD_COLOR: Color = WHITE;
pub const BORDER_COLOR: Color = GRAY;
pub const MARKER_COLOR: Color = BLACK;

/// Grid placement on the game screen
pub fn game_layout(config: &LifeConfig, view_width: f32) -> GridLayout {
    GridLayout::centered(
        view_width,
        HEADER_HEIGHT,
        config.rows,
        config.cols,
        config.cell_size,
    )
}

/// Controls on the game screen
pub struct GameButtons {
    pub back: Button,
    pub run: Button,
    pub clear: Button,
}

impl GameButtons {
    pub fn all(&self) -> [&Button; 3] {
        [&self.back, &self.run, &self.clear]
    }
}

/// Label for the Start/Stop toggle
pub const fn run_label(is_running: bool) -> &'static str {
    if is_running { "Stop" } else { "Start" }
}

/// Back chevron top-left; Start/Stop and Clear centered below the grid
pub fn create_game_buttons(layout: &GridLayout, view_width: f32, is_running: bool) -> GameButtons {
    let row_width = 2.0 * BUTTON_WIDTH + BUTTON_GAP;
    let left = (view_width - row_width) / 2.0;
    let top = layout.bottom() + 30.0;

    GameButtons {
        back: Button::new(16.0, 20.0, BACK_SIZE, BACK_SIZE, "<")
            .with_text_color(GRAY)
            .with_font_size(32)
            .outlined(),
        run: Button::new(left, top, BUTTON_WIDTH, BUTTON_HEIGHT, run_label(is_running))
            .with_color(if is_running { STOP_COLOR } else { START_COLOR }),
        clear: Button::new(
            left + BUTTON_WIDTH + BUTTON_GAP,
            top,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            "Clear",
        )
        .with_color(CLEAR_COLOR),
    }
}

/// "New Game" centered a little below the middle of the view
pub fn create_start_button(view_width: f32, view_height: f32) -> Button {
    let width = BUTTON_WIDTH + 30.0;
    Button::new(
        (view_width - width) / 2.0,
        view_height * 0.55,
        width,
        BUTTON_HEIGHT,
        "New Game",
    )
    .with_color(START_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_label_reflects_state() {
        assert_eq!(run_label(false), "Start");
        assert_eq!(run_label(true), "Stop");
    }

    #[test]
    fn test_game_buttons_sit_below_grid() {
        let config = LifeConfig::default();
        let layout = game_layout(&config, 420.0);
        let buttons = create_game_buttons(&layout, 420.0, true);
        assert!(!buttons.run.is_hovered((layout.origin_x + 1.0, layout.bottom() - 1.0)));
        assert!(buttons.run.is_hovered((100.0, layout.bottom() + 40.0)));
        assert!(buttons.clear.is_hovered((300.0, layout.bottom() + 40.0)));
    }
}
