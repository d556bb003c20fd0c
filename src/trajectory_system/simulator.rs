use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::trajectory::{Sample, StopReason, Trajectory};

#[derive(Debug)]
pub struct FallSimulator {
    parameters: SimulationParameters,
    aerodynamics: Aerodynamics,
    terminal_velocity: f64,
}

impl FallSimulator {
    pub fn new(parameters: SimulationParameters) -> Result<Self, SimulationError> {
        parameters.validate()?;

        let aerodynamics = Aerodynamics::new(parameters.drag_coefficient, parameters.area);
        let terminal_velocity = aerodynamics.terminal_velocity(
            parameters.mass,
            parameters.gravity,
            parameters.air_density,
        )?;

        Ok(FallSimulator {
            parameters,
            aerodynamics,
            terminal_velocity,
        })
    }

    pub fn terminal_velocity(&self) -> f64 {
        self.terminal_velocity
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn run(&self) -> Trajectory {
        let params = &self.parameters;
        let delta_time = params.time_step;

        let mut time = 0.0;
        let mut velocity: f64 = 0.0;
        let mut height = params.initial_height;

        let mut samples = vec![Sample::new(time, velocity, height)];

        let stop_reason = loop {
            if height <= 0.0 {
                break StopReason::GroundReached;
            }
            if time + delta_time >= params.max_time {
                break StopReason::TimeExhausted;
            }

            let drag = self.aerodynamics.calculate_drag(params.air_density, velocity);
            let net_force = params.mass * params.gravity - drag;
            let acceleration = net_force / params.mass;

            let previous_velocity = velocity;
            // Explicit Euler can overshoot the drag asymptote, so the ceiling
            // is applied before the height update.
            velocity = (velocity + acceleration * delta_time).clamp(0.0, self.terminal_velocity);
            // First-order forward Euler: the position advances on the
            // velocity of the previous step.
            height -= previous_velocity * delta_time;
            time += delta_time;

            samples.push(Sample::new(time, velocity, height));
        };

        Trajectory::new(samples, self.terminal_velocity, stop_reason)
    }
}

pub fn simulate(parameters: &SimulationParameters) -> Result<Trajectory, SimulationError> {
    Ok(FallSimulator::new(*parameters)?.run())
}
