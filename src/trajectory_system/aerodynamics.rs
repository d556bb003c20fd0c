use crate::errors::SimulationError;

#[derive(Debug)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            cross_sectional_area,
        }
    }

    pub fn drag_area(&self) -> f64 {
        self.drag_coefficient * self.cross_sectional_area
    }

    pub fn calculate_drag(&self, air_density: f64, speed: f64) -> f64 {
        let dynamic_pressure = 0.5 * air_density * speed.powi(2);

        dynamic_pressure * self.drag_area()
    }

    pub fn terminal_velocity(
        &self,
        mass: f64,
        gravity: f64,
        air_density: f64,
    ) -> Result<f64, SimulationError> {
        let drag_product = air_density * self.drag_area();
        if drag_product <= 0.0 {
            return Err(SimulationError::DomainError(
                "drag product ρ·Cd·A is zero, terminal velocity is undefined".to_string(),
            ));
        }

        Ok((2.0 * mass * gravity / drag_product).sqrt())
    }
}
