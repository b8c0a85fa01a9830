mod markers;
mod screen;
mod simulation;
mod timer;

pub use markers::{DriftMarker, MarkerField};
pub use screen::{App, Screen};
pub use simulation::{EditPolicy, Simulation};
pub use timer::StepTimer;
