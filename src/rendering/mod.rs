use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::LifeEngine;
use crate::ui::{Button, Layout, PANEL_WIDTH};

const BACKGROUND: Color = Color::from_rgba(240, 240, 240, 255);
const GRID_LINE: Color = Color::from_rgba(200, 200, 200, 255);
const LIVE_CELL: Color = Color::from_rgba(50, 150, 50, 255);
const PANEL: Color = Color::from_rgba(220, 220, 220, 255);

/// Draw grid lines and live cells. Only live cells are visited.
pub fn draw_grid(engine: &LifeEngine, layout: &Layout) {
    let cell_size = layout.cell_size;
    let area_width = layout.grid_area_width();
    let area_height = layout.grid_area_height();

    clear_background(BACKGROUND);

    for x in 0..=layout.grid_width {
        let sx = x as f32 * cell_size;
        draw_line(sx, 0.0, sx, area_height, 1.0, GRID_LINE);
    }
    for y in 0..=layout.grid_height {
        let sy = y as f32 * cell_size;
        draw_line(0.0, sy, area_width, sy, 1.0, GRID_LINE);
    }

    for &(x, y) in engine.live_cells() {
        let (sx, sy) = layout.cell_to_screen(x, y);
        draw_rectangle(sx + 1.0, sy + 1.0, cell_size - 1.0, cell_size - 1.0, LIVE_CELL);
    }
}

/// Status lines shown in the panel
pub fn status_lines(state: &GameState) -> Vec<String> {
    let status = if state.is_running { "Running" } else { "Paused" };
    vec![
        format!("Generation: {}", state.engine.generation()),
        format!("Status: {}", status),
        format!("Live cells: {}", state.engine.population()),
        format!("Speed: {:.0} gen/s", state.updates_per_second),
        format!("Step: {} ({:.1}ms)", state.algorithm.name(), state.last_evolution_time_ms),
    ]
}

const CONTROLS: &[&str] = &[
    "Controls:",
    "Space: Play/Pause",
    "N: Next generation",
    "C: Clear",
    "R: Random fill",
    "S: Save pattern",
    "L: Load pattern",
    "P: Serial/parallel",
    "Up/Down: Speed",
    "Click/drag: Toggle cells",
    "1-8: Stamp preset at cursor",
];

/// Draw the control panel with status text, help and buttons
pub fn draw_controls(
    state: &GameState,
    layout: &Layout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = layout.panel_x();
    draw_rectangle(px - 10.0, 0.0, PANEL_WIDTH + 10.0, screen_height(), PANEL);

    let lines = status_lines(state);
    let texts = lines
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(""))
        .chain(CONTROLS.iter().copied());
    for (i, text) in texts.enumerate() {
        draw_text(text, px, 20.0 + i as f32 * 18.0, 18.0, BLACK);
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    if let Some(message) = &state.status_message {
        draw_text(message, px, screen_height() - 12.0, 16.0, DARKGRAY);
    }
}
