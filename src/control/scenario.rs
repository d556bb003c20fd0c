use crate::constants::{
    EARTH_AIR_DENSITY, EARTH_GRAVITY, MARS_AIR_DENSITY, MARS_GRAVITY, MAX_SIMULATION_TIME,
    SPHERE_DRAG_COEFFICIENT, TIME_STEP,
};
use crate::control::parameters::SimulationParameters;

#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub surface_gravity: f64,
    pub atmosphere_density: f64,
}

impl Body {
    pub fn new(name: String, surface_gravity: f64, atmosphere_density: f64) -> Self {
        Body {
            name,
            surface_gravity,
            atmosphere_density,
        }
    }

    pub fn earth() -> Self {
        Body::new("Earth".to_string(), EARTH_GRAVITY, EARTH_AIR_DENSITY)
    }

    pub fn mars() -> Self {
        Body::new("Mars".to_string(), MARS_GRAVITY, MARS_AIR_DENSITY)
    }
}

pub struct ScenarioFactory;

impl ScenarioFactory {
    pub fn create_drop(body: &Body, mass: f64, area: f64, drop_height: f64) -> SimulationParameters {
        SimulationParameters::new(
            mass,
            area,
            SPHERE_DRAG_COEFFICIENT,
            body.surface_gravity,
            body.atmosphere_density,
            drop_height,
            TIME_STEP,
            MAX_SIMULATION_TIME,
        )
    }
}
