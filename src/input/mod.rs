use macroquad::prelude::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed};
use rand::Rng;

use crate::application::{App, Simulation};
use crate::ui::{Button, GameButtons, GridLayout};

/// Something the user asked for on the game screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    Back,
    ToggleRunning,
    Clear,
    StepOnce,
    ToggleCell { row: usize, col: usize },
}

/// Apply one game-screen action. Returns false once the game screen is gone.
pub fn apply_game_action(
    app: &mut App,
    action: GameAction,
    bounds: (f32, f32),
    rng: &mut impl Rng,
) -> bool {
    match action {
        GameAction::Back => {
            app.back(bounds, rng);
            return false;
        }
        GameAction::ToggleRunning => app.update_simulation(Simulation::toggle_running),
        GameAction::Clear => app.update_simulation(Simulation::clear),
        GameAction::StepOnce => app.update_simulation(Simulation::step_if_stopped),
        GameAction::ToggleCell { row, col } => {
            if let Some(sim) = app.simulation_mut() {
                sim.toggle_cell(row, col);
            }
        }
    }
    !app.is_start()
}

/// Grid tap under the pointer, if the pointer is on a cell
pub fn grid_tap(layout: &GridLayout, mouse_pos: (f32, f32)) -> Option<GameAction> {
    layout
        .cell_at(mouse_pos.0, mouse_pos.1)
        .map(|(row, col)| GameAction::ToggleCell { row, col })
}

/// Keep the first occurrence of each action. A button click and its key
/// shortcut in the same frame count once, so toggles don't cancel out.
pub fn unique_actions(actions: impl IntoIterator<Item = GameAction>) -> Vec<GameAction> {
    actions.into_iter().fold(Vec::new(), |mut unique, action| {
        if !unique.contains(&action) {
            unique.push(action);
        }
        unique
    })
}

/// Collect this frame's game-screen actions from buttons, keys and taps
pub fn collect_game_actions(
    buttons: &GameButtons,
    layout: &GridLayout,
    mouse_pos: (f32, f32),
) -> Vec<GameAction> {
    let clicks = [
        (&buttons.back, GameAction::Back),
        (&buttons.run, GameAction::ToggleRunning),
        (&buttons.clear, GameAction::Clear),
    ];
    let keys = [
        (KeyCode::Escape, GameAction::Back),
        (KeyCode::Backspace, GameAction::Back),
        (KeyCode::Space, GameAction::ToggleRunning),
        (KeyCode::C, GameAction::Clear),
        (KeyCode::N, GameAction::StepOnce),
    ];

    let tap = is_mouse_button_pressed(MouseButton::Left)
        .then(|| grid_tap(layout, mouse_pos))
        .flatten();

    unique_actions(
        clicks
            .iter()
            .filter(|(btn, _)| btn.is_clicked(mouse_pos))
            .map(|(_, action)| *action)
            .chain(
                keys.iter()
                    .filter(|(key, _)| is_key_pressed(*key))
                    .map(|(_, action)| *action),
            )
            .chain(tap),
    )
}

/// Run every game-screen action for this frame, stopping after navigation
pub fn process_game_input(
    app: &mut App,
    buttons: &GameButtons,
    layout: &GridLayout,
    mouse_pos: (f32, f32),
    bounds: (f32, f32),
    rng: &mut impl Rng,
) {
    for action in collect_game_actions(buttons, layout, mouse_pos) {
        if !apply_game_action(app, action, bounds, rng) {
            break;
        }
    }
}

/// "New Game" button or Enter
pub fn process_start_input(app: &mut App, new_game: &Button, mouse_pos: (f32, f32)) {
    if new_game.is_clicked(mouse_pos) || is_key_pressed(KeyCode::Enter) {
        app.new_game();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifeConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: (f32, f32) = (420.0, 720.0);

    fn game() -> (App, StdRng) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut app = App::new(LifeConfig::default(), BOUNDS, &mut rng);
        app.new_game();
        (app, rng)
    }

    #[test]
    fn test_grid_tap_maps_to_cell() {
        let layout = GridLayout::centered(420.0, 140.0, 20, 18, 20.0);
        assert_eq!(
            grid_tap(&layout, (30.0 + 25.0, 140.0 + 5.0)),
            Some(GameAction::ToggleCell { row: 0, col: 1 })
        );
        assert_eq!(grid_tap(&layout, (5.0, 5.0)), None);
    }

    #[test]
    fn test_toggle_then_clear() {
        let (mut app, mut rng) = game();
        let cell = GameAction::ToggleCell { row: 3, col: 4 };
        assert!(apply_game_action(&mut app, cell, BOUNDS, &mut rng));
        assert!(app.simulation().unwrap().grid.is_alive(3, 4));

        apply_game_action(&mut app, GameAction::ToggleRunning, BOUNDS, &mut rng);
        assert!(app.simulation().unwrap().is_running());

        apply_game_action(&mut app, GameAction::Clear, BOUNDS, &mut rng);
        let sim = app.simulation().unwrap();
        assert!(sim.grid.is_empty());
        assert!(!sim.is_running());
    }

    #[test]
    fn test_back_leaves_game_screen() {
        let (mut app, mut rng) = game();
        assert!(!apply_game_action(&mut app, GameAction::Back, BOUNDS, &mut rng));
        assert!(app.is_start());

        // Later actions in the same frame have nothing to act on
        let cell = GameAction::ToggleCell { row: 0, col: 0 };
        assert!(!apply_game_action(&mut app, cell, BOUNDS, &mut rng));
        assert!(app.simulation().is_none());
    }

    #[test]
    fn test_click_and_shortcut_in_same_frame_toggle_once() {
        let (mut app, mut rng) = game();
        let frame = unique_actions([
            GameAction::ToggleRunning,
            GameAction::ToggleRunning,
            GameAction::ToggleCell { row: 1, col: 1 },
            GameAction::ToggleCell { row: 1, col: 2 },
        ]);
        assert_eq!(
            frame,
            vec![
                GameAction::ToggleRunning,
                GameAction::ToggleCell { row: 1, col: 1 },
                GameAction::ToggleCell { row: 1, col: 2 },
            ]
        );

        for action in frame {
            apply_game_action(&mut app, action, BOUNDS, &mut rng);
        }
        let sim = app.simulation().unwrap();
        assert!(sim.is_running());
        assert!(sim.grid.is_alive(1, 1));
        assert!(sim.grid.is_alive(1, 2));
    }

    #[test]
    fn test_step_once_only_while_stopped() {
        let (mut app, mut rng) = game();
        apply_game_action(&mut app, GameAction::StepOnce, BOUNDS, &mut rng);
        assert_eq!(app.simulation().unwrap().generation, 1);

        apply_game_action(&mut app, GameAction::ToggleRunning, BOUNDS, &mut rng);
        apply_game_action(&mut app, GameAction::StepOnce, BOUNDS, &mut rng);
        assert_eq!(app.simulation().unwrap().generation, 1);
    }
}
