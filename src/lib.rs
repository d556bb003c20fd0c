pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::parameters::SimulationParameters;
pub use control::scenario::{Body, ScenarioFactory};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::simulator::{simulate, FallSimulator};
pub use trajectory_system::trajectory::{Sample, StopReason, Trajectory};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
