use macroquad::prelude::*;

use crate::application::{MarkerField, Simulation};
use crate::domain::Grid;
use crate::ui::{
    ALIVE_COLOR, BORDER_COLOR, Button, DEAD_COLOR, GameButtons, GridLayout, MARKER_COLOR, TITLE,
};

/// Draw text horizontally centered on the screen
fn draw_centered_text(text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - dims.width) / 2.0, y, size as f32, color);
}

/// Draw every cell: filled when alive, white when dead, all bordered
pub fn draw_grid(grid: &Grid, layout: &GridLayout) {
    let size = layout.cell_size;

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let fill = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, fill);
        draw_rectangle_lines(x, y, size, size, 1.0, BORDER_COLOR);
    }
}

/// Title, "New Game" and the drifting markers
pub fn draw_start_screen(
    markers: &MarkerField,
    new_game: &Button,
    marker_size: f32,
    mouse_pos: (f32, f32),
) {
    clear_background(WHITE);

    draw_centered_text(TITLE, screen_height() * 0.38, 48, BLACK);
    new_game.draw(mouse_pos);

    // Markers are drawn on top of everything else, centered on their position
    let half = marker_size / 2.0;
    for (x, y) in markers.positions() {
        draw_rectangle(x - half, y - half, marker_size, marker_size, MARKER_COLOR);
    }
}

/// Back control, title, board, Start/Stop and Clear
pub fn draw_game_screen(
    simulation: &Simulation,
    layout: &GridLayout,
    buttons: &GameButtons,
    mouse_pos: (f32, f32),
) {
    clear_background(WHITE);

    draw_centered_text(TITLE, 100.0, 36, BLACK);
    draw_grid(&simulation.grid, layout);
    buttons.all().iter().for_each(|btn| btn.draw(mouse_pos));

    let status = format!(
        "Generation {}  |  {} alive",
        simulation.generation,
        simulation.grid.count_alive()
    );
    draw_centered_text(&status, layout.bottom() + 110.0, 18, GRAY);
}
