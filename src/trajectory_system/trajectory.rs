#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub velocity: f64,
    pub height: f64,
}

impl Sample {
    pub fn new(time: f64, velocity: f64, height: f64) -> Self {
        Sample {
            time,
            velocity,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GroundReached,
    TimeExhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub samples: Vec<Sample>,
    pub terminal_velocity: f64,
    pub stop_reason: StopReason,
}

impl Trajectory {
    pub fn new(samples: Vec<Sample>, terminal_velocity: f64, stop_reason: StopReason) -> Self {
        Trajectory {
            samples,
            terminal_velocity,
            stop_reason,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |sample| sample.time)
    }

    pub fn impact(&self) -> Option<&Sample> {
        match self.stop_reason {
            StopReason::GroundReached => self.last(),
            StopReason::TimeExhausted => None,
        }
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.time).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.velocity).collect()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.height).collect()
    }
}
