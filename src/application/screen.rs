use rand::Rng;

use super::{MarkerField, Simulation};
use crate::config::LifeConfig;

/// Which screen is showing. The game screen owns its simulation, so
/// leaving it drops the board.
pub enum Screen {
    Start { markers: MarkerField },
    Game { simulation: Simulation },
}

/// Top-level navigation state
pub struct App {
    pub config: LifeConfig,
    pub screen: Screen,
}

impl App {
    /// Open on the start screen
    pub fn new(config: LifeConfig, bounds: (f32, f32), rng: &mut impl Rng) -> Self {
        let markers = MarkerField::spawn(&config, bounds, rng);
        Self {
            config,
            screen: Screen::Start { markers },
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self.screen, Screen::Start { .. })
    }

    /// "New Game": switch to a fresh, empty, stopped board
    pub fn new_game(&mut self) {
        let simulation = Simulation::new(
            self.config.rows,
            self.config.cols,
            self.config.step_interval,
        )
        .with_edit_policy(self.config.edit_policy);
        log::info!(
            "new game: {}x{} board, step every {}s",
            self.config.rows,
            self.config.cols,
            self.config.step_interval
        );
        self.screen = Screen::Game { simulation };
    }

    /// Back to the start screen, discarding the board
    pub fn back(&mut self, bounds: (f32, f32), rng: &mut impl Rng) {
        if self.is_start() {
            return;
        }
        log::info!("back to start screen");
        self.screen = Screen::Start {
            markers: MarkerField::spawn(&self.config, bounds, rng),
        };
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        match &self.screen {
            Screen::Game { simulation } => Some(simulation),
            Screen::Start { .. } => None,
        }
    }

    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        match &mut self.screen {
            Screen::Game { simulation } => Some(simulation),
            Screen::Start { .. } => None,
        }
    }

    /// Apply a by-value simulation action if the game screen is showing
    pub fn update_simulation(&mut self, action: impl FnOnce(Simulation) -> Simulation) {
        let screen = std::mem::replace(
            &mut self.screen,
            Screen::Start {
                markers: MarkerField::default(),
            },
        );
        self.screen = match screen {
            Screen::Game { simulation } => Screen::Game {
                simulation: action(simulation),
            },
            start => start,
        };
    }

    /// Advance whichever screen is showing by one frame
    pub fn tick(&mut self, delta_time: f32) {
        if let Screen::Start { markers } = &mut self.screen {
            markers.update(delta_time);
            return;
        }
        self.update_simulation(|sim| sim.tick(delta_time));
    }
}
