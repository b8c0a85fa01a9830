use std::str::FromStr;

use super::StepTimer;
use crate::domain::{Cell, Grid};
use crate::error::ConfigError;

/// Whether taps may edit the board while it is running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditPolicy {
    /// Edits are applied at any time, including mid-run
    #[default]
    Live,
    /// Edits are ignored while running
    WhileStopped,
}

impl FromStr for EditPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(EditPolicy::Live),
            "stopped" | "while_stopped" => Ok(EditPolicy::WhileStopped),
            _ => Err(ConfigError::invalid("edit_policy", s)),
        }
    }
}

/// Simulation owns the board and drives it.
/// The step timer is the only record of running vs stopped: an armed
/// timer means running.
pub struct Simulation {
    pub grid: Grid,
    timer: StepTimer,
    pub generation: u64,
    pub edit_policy: EditPolicy,
}

impl Simulation {
    /// Empty board, stopped
    pub fn new(rows: usize, cols: usize, step_interval: f32) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            timer: StepTimer::new(step_interval),
            generation: 0,
            edit_policy: EditPolicy::default(),
        }
    }

    /// Set edit policy (builder pattern)
    pub fn with_edit_policy(mut self, edit_policy: EditPolicy) -> Self {
        self.edit_policy = edit_policy;
        self
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    /// Begin stepping at the fixed interval
    pub fn start(mut self) -> Self {
        if !self.is_running() {
            self.timer.arm();
            log::info!("simulation started at generation {}", self.generation);
        }
        self
    }

    /// Cancel further steps, leaving the board as is
    pub fn stop(mut self) -> Self {
        if self.is_running() {
            self.timer.disarm();
            log::info!("simulation stopped at generation {}", self.generation);
        }
        self
    }

    /// Start/Stop button
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.stop() } else { self.start() }
    }

    /// Stop and reset the board to all dead
    pub fn clear(mut self) -> Self {
        self.timer.disarm();
        self.grid.clear();
        self.generation = 0;
        log::info!("board cleared");
        self
    }

    /// Apply one generation. The new grid replaces the old one in a single
    /// assignment, so nothing ever observes a half-computed board.
    pub fn step_once(mut self) -> Self {
        self.grid = self.grid.step();
        self.generation += 1;
        log::debug!(
            "generation {} ({} alive)",
            self.generation,
            self.grid.count_alive()
        );
        self
    }

    /// Single step, only honoured while stopped
    pub fn step_if_stopped(self) -> Self {
        if self.is_running() { self } else { self.step_once() }
    }

    /// Advance the step timer by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        if self.timer.advance(delta_time) {
            self = self.step_once();
        }
        self
    }

    /// Whether a tap may edit the board right now
    pub fn can_edit(&self) -> bool {
        match self.edit_policy {
            EditPolicy::Live => true,
            EditPolicy::WhileStopped => !self.is_running(),
        }
    }

    /// Flip one cell. Returns true if the board changed.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if !self.can_edit() {
            log::debug!("ignored edit at ({row}, {col}) while running");
            return false;
        }

        match self.grid.toggle(row, col) {
            Some(cell) => {
                log::debug!(
                    "cell ({row}, {col}) -> {}",
                    if cell == Cell::Alive { "alive" } else { "dead" }
                );
                true
            }
            None => false,
        }
    }
}
