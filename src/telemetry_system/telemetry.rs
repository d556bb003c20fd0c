use crate::trajectory_system::trajectory::{StopReason, Trajectory};

pub struct Telemetry {
    pub log: Vec<String>,
    log_interval: f64,
    summaries: Vec<RunSummary>,
}

struct RunSummary {
    body_name: String,
    terminal_velocity: f64,
    max_velocity: f64,
    stop_reason: StopReason,
    elapsed_time: f64,
    final_velocity: f64,
    final_height: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::with_log_interval(10.0)
    }

    pub fn with_log_interval(log_interval: f64) -> Self {
        assert!(log_interval > 0.0, "Log interval must be positive");

        Telemetry {
            log: Vec::new(),
            log_interval,
            summaries: Vec::new(),
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_height(height: f64) -> String {
        if height >= 1000.0 {
            format!("{:.2} km", height / 1000.0)
        } else {
            format!("{:.2} m", height)
        }
    }

    pub fn collect_data(&mut self, body_name: &str, trajectory: &Trajectory) {
        let last = match trajectory.last() {
            Some(sample) => sample,
            None => return,
        };

        let mut max_velocity: f64 = 0.0;
        let mut next_log_time = 0.0;
        let last_index = trajectory.len() - 1;

        for (index, sample) in trajectory.samples.iter().enumerate() {
            if sample.velocity > max_velocity {
                max_velocity = sample.velocity;
            }

            if sample.time >= next_log_time || index == last_index {
                self.log.push(format!(
                    "{} | t = {} | velocity = {:.2} m/s | height = {}",
                    body_name,
                    Self::format_time(sample.time),
                    sample.velocity,
                    Self::format_height(sample.height)
                ));
                while next_log_time <= sample.time {
                    next_log_time += self.log_interval;
                }
            }
        }

        self.summaries.push(RunSummary {
            body_name: body_name.to_string(),
            terminal_velocity: trajectory.terminal_velocity,
            max_velocity,
            stop_reason: trajectory.stop_reason,
            elapsed_time: last.time,
            final_velocity: last.velocity,
            final_height: last.height,
        });
    }

    fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for summary in &self.summaries {
            lines.push(format!("[{}]", summary.body_name));
            lines.push(format!(
                "The terminal velocity is: {:.2} m/s",
                summary.terminal_velocity
            ));
            lines.push(format!("Max Velocity: {:.2} m/s", summary.max_velocity));
            lines.push(match summary.stop_reason {
                StopReason::GroundReached => format!(
                    "The object hit the ground after {} at {:.2} m/s",
                    Self::format_time(summary.elapsed_time),
                    summary.final_velocity
                ),
                StopReason::TimeExhausted => format!(
                    "Simulated time ran out after {} with the object still {} above the ground",
                    Self::format_time(summary.elapsed_time),
                    Self::format_height(summary.final_height)
                ),
            });
        }

        lines
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        for line in self.summary_lines() {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::trajectory::Sample;

    fn create_trajectory(stop_reason: StopReason) -> Trajectory {
        Trajectory::new(
            vec![
                Sample::new(0.0, 0.0, 10.0),
                Sample::new(0.1, 0.981, 10.0),
                Sample::new(0.2, 1.962, 9.9019),
            ],
            45.22,
            stop_reason,
        )
    }

    #[test]
    fn test_collect_data_logs_release_and_final_samples() {
        let mut telemetry = Telemetry::new();

        telemetry.collect_data("Earth", &create_trajectory(StopReason::GroundReached));

        assert!(telemetry.log.first().unwrap().contains("t = 0.00s"));
        assert!(telemetry.log.last().unwrap().contains("t = 0.20s"));
    }

    #[test]
    fn test_log_respects_the_sampling_interval() {
        let mut telemetry = Telemetry::with_log_interval(0.2);

        telemetry.collect_data("Earth", &create_trajectory(StopReason::GroundReached));

        // Release at t=0, then nothing until t=0.2 (also the final sample).
        assert_eq!(telemetry.log.len(), 2);
    }

    #[test]
    fn test_summary_reports_the_terminal_velocity_format() {
        let mut telemetry = Telemetry::new();

        telemetry.collect_data("Earth", &create_trajectory(StopReason::GroundReached));

        let lines = telemetry.summary_lines();
        assert!(lines.contains(&"The terminal velocity is: 45.22 m/s".to_string()));
    }

    #[test]
    fn test_ground_reached_and_time_exhausted_are_messaged_distinctly() {
        let mut telemetry = Telemetry::new();

        telemetry.collect_data("Earth", &create_trajectory(StopReason::GroundReached));
        telemetry.collect_data("Earth", &create_trajectory(StopReason::TimeExhausted));

        let lines = telemetry.summary_lines();
        let ground = lines
            .iter()
            .find(|line| line.contains("hit the ground"))
            .unwrap();
        let exhausted = lines
            .iter()
            .find(|line| line.contains("Simulated time ran out"))
            .unwrap();

        assert!(ground.contains("at 1.96 m/s"));
        assert!(exhausted.contains("still 9.90 m above the ground"));
    }

    #[test]
    fn test_empty_trajectory_is_ignored() {
        let mut telemetry = Telemetry::new();

        telemetry.collect_data(
            "Earth",
            &Trajectory::new(Vec::new(), 45.22, StopReason::TimeExhausted),
        );

        assert!(telemetry.log.is_empty());
        assert!(telemetry.summary_lines().is_empty());
    }
}
