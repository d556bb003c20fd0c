use crate::errors::SimulationError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub mass: f64,
    pub area: f64,
    pub drag_coefficient: f64,
    pub gravity: f64,
    pub air_density: f64,
    pub initial_height: f64,
    pub time_step: f64,
    pub max_time: f64,
}

impl SimulationParameters {
    pub fn new(
        mass: f64,
        area: f64,
        drag_coefficient: f64,
        gravity: f64,
        air_density: f64,
        initial_height: f64,
        time_step: f64,
        max_time: f64,
    ) -> Self {
        SimulationParameters {
            mass,
            area,
            drag_coefficient,
            gravity,
            air_density,
            initial_height,
            time_step,
            max_time,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.mass <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "mass must be positive, got {} kg",
                self.mass
            )));
        }
        if self.area <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "cross-sectional area must be positive, got {} m²",
                self.area
            )));
        }
        if self.drag_coefficient <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "drag coefficient must be positive, got {}",
                self.drag_coefficient
            )));
        }
        if self.gravity <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "gravitational acceleration must be positive, got {} m/s²",
                self.gravity
            )));
        }
        if self.air_density < 0.0 {
            return Err(SimulationError::DomainError(format!(
                "fluid density must not be negative, got {} kg/m³",
                self.air_density
            )));
        }
        if self.initial_height < 0.0 {
            return Err(SimulationError::DomainError(format!(
                "initial height must not be negative, got {} m",
                self.initial_height
            )));
        }
        if self.time_step <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "time step must be positive, got {} s",
                self.time_step
            )));
        }
        if self.max_time <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "maximum simulated time must be positive, got {} s",
                self.max_time
            )));
        }
        // ρ·Cd·A = 0 leaves the terminal velocity undefined
        if self.air_density * self.drag_coefficient * self.area == 0.0 {
            return Err(SimulationError::DomainError(
                "drag product ρ·Cd·A is zero, terminal velocity is undefined".to_string(),
            ));
        }

        Ok(())
    }
}
