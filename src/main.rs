use clap::Parser;
use log::error;
use macroquad::prelude::*;
use sparse_life::{
    Config, GameState, presets,
    ui::Layout,
    rendering, input,
};

fn window_conf() -> Conf {
    // Runs before the window opens: bad arguments print usage and exit here
    let config = Config::parse();
    let (window_width, window_height) =
        Layout::new(config.cell_size, config.width, config.height).window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::parse();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("{}", err);
            std::process::exit(2);
        }
    };

    let layout = Layout::new(config.cell_size, config.width, config.height);
    let buttons = layout.create_buttons();
    let patterns = presets::all_patterns();

    loop {
        let mouse_pos = mouse_position();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse_paint(&mut state, &layout, mouse_pos);
        input::handle_pattern_keys(&mut state, &layout, &patterns, mouse_pos);
        state = input::process_keyboard_input(state);

        // Step if running and the interval has elapsed
        state = state.tick(get_frame_time());

        rendering::draw_grid(&state.engine, &layout);
        rendering::draw_controls(&state, &layout, &buttons, mouse_pos);

        next_frame().await;
    }
}
