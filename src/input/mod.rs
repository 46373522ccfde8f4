use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::Pattern;
use crate::ui::{Button, Layout};

/// Handle click-and-drag painting on the grid.
/// The first cell of a drag decides whether the drag paints live or dead cells.
pub fn handle_mouse_paint(state: &mut GameState, layout: &Layout, mouse_pos: (f32, f32)) {
    let cell = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);

    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some((x, y)) = cell {
            state.begin_paint(x, y);
        }
    } else if is_mouse_button_down(MouseButton::Left) {
        if let Some((x, y)) = cell {
            state.continue_paint(x, y);
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        state.end_paint();
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);
    
    let actions: [KeyAction; 9] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::S, GameState::save),
        (KeyCode::L, GameState::load),
        (KeyCode::P, GameState::toggle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];
    
    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally; order matches `ui::BUTTON_LABELS`
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.step_once(),
                2 => s.clear(),
                3 => s.randomize(),
                4 => s.save(),
                5 => s.load(),
                _ => s,
            }
        })
}

#[rustfmt::skip]
const PATTERN_KEYS: [KeyCode; 8] = [
    KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4,
    KeyCode::Key5, KeyCode::Key6, KeyCode::Key7, KeyCode::Key8,
];

/// Number keys stamp the matching preset centered under the cursor
pub fn handle_pattern_keys(
    state: &mut GameState,
    layout: &Layout,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) {
    let Some((x, y)) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };
    for (key, pattern) in PATTERN_KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            state.place_pattern(pattern, x, y);
        }
    }
}
