// Domain layer - the automaton
pub mod domain;

// Application layer - simulation driver and navigation
pub mod application;

// Configuration and errors
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::{App, EditPolicy, Screen, Simulation};
pub use config::LifeConfig;
pub use error::{ConfigError, ConfigResult};
pub use ui::Button;
