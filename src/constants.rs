// Body Constants
pub const EARTH_GRAVITY: f64 = 9.81; // m/s²
pub const EARTH_AIR_DENSITY: f64 = 1.225; // kg/m³
pub const MARS_GRAVITY: f64 = 3.73; // m/s²
pub const MARS_AIR_DENSITY: f64 = 0.020; // kg/m³

// Aerodynamic Constants
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47; // dimensionless, smooth sphere

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_TIME: f64 = 2000.0; // s

// Input Ranges
pub const MIN_MASS: f64 = 1.0; // kg
pub const MAX_MASS: f64 = 1000.0; // kg
pub const MIN_AREA: f64 = 0.25; // m²
pub const MAX_AREA: f64 = 10.0; // m²
pub const MIN_DROP_HEIGHT: f64 = 1.0; // m
pub const MAX_DROP_HEIGHT: f64 = 100_000.0; // m
