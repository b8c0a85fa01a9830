use life_board::{
    App, LifeConfig, Screen,
    input, rendering,
    ui::{self, GridLayout},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 420,
        window_height: 760,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn load_config() -> LifeConfig {
    LifeConfig::from_env().unwrap_or_else(|e| {
        log::warn!("ignoring configuration overrides: {e}");
        LifeConfig::default()
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    // info for this crate unless RUST_LOG says otherwise
    let env = env_logger::Env::default().default_filter_or("warn,life_board=info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();

    let mut rng = ::rand::rng();
    let config = load_config();
    let mut app = App::new(config, (screen_width(), screen_height()), &mut rng);

    loop {
        let mouse_pos = mouse_position();
        let bounds = (screen_width(), screen_height());
        let layout: GridLayout = ui::game_layout(&app.config, bounds.0);

        // Input first, then the timer, then draw: a frame never shows half a generation
        if app.is_start() {
            let new_game = ui::create_start_button(bounds.0, bounds.1);
            input::process_start_input(&mut app, &new_game, mouse_pos);
        } else {
            let running = app.simulation().is_some_and(|sim| sim.is_running());
            let buttons = ui::create_game_buttons(&layout, bounds.0, running);
            input::process_game_input(&mut app, &buttons, &layout, mouse_pos, bounds, &mut rng);
        }

        app.tick(get_frame_time());

        match &app.screen {
            Screen::Start { markers } => {
                let new_game = ui::create_start_button(bounds.0, bounds.1);
                rendering::draw_start_screen(markers, &new_game, app.config.marker_size, mouse_pos);
            }
            Screen::Game { simulation } => {
                // Rebuilt so the Start/Stop label matches this frame's state
                let buttons = ui::create_game_buttons(&layout, bounds.0, simulation.is_running());
                rendering::draw_game_screen(simulation, &layout, &buttons, mouse_pos);
            }
        }

        next_frame().await;
    }
}
