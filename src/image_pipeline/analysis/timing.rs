use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    /// Runs `f` and records how long it took under `name`.
    pub fn record<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let value = f();
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
        value
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Accumulated duration of every step recorded under `name`
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }
}

impl fmt::Display for PipelineTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_duration().as_secs_f64();
        writeln!(f, "Pipeline Timing Summary:")?;
        writeln!(f, "{:-<60}", "")?;
        for step in &self.steps {
            let seconds = step.duration.as_secs_f64();
            let percentage = if total > 0.0 { seconds / total * 100.0 } else { 0.0 };
            writeln!(f, "{:<30} {:>12.3}ms ({:>5.1}%)", step.name, seconds * 1000.0, percentage)?;
        }
        writeln!(f, "{:-<60}", "")?;
        write!(f, "{:<30} {:>12.3}ms", "Total", total * 1000.0)
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("decode", Duration::from_millis(5));
        timings.add_step("stats", Duration::from_millis(2));
        timings.add_step("decode", Duration::from_millis(3));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("decode"), Some(Duration::from_millis(8)));
        assert_eq!(timings.total_duration(), Duration::from_millis(10));
        assert!(timings.get_step("missing").is_none());
    }

    #[test]
    fn test_record_returns_value() {
        let mut timings = PipelineTimings::new();
        let value = timings.record("answer", || 42);
        assert_eq!(value, 42);
        assert!(timings.get_step("answer").is_some());
    }

    #[test]
    fn test_summary_lists_steps() {
        let mut timings = PipelineTimings::new();
        timings.add_step("decode_image", Duration::from_millis(30));
        timings.add_step("global_stats", Duration::from_millis(10));

        let summary = timings.to_string();
        assert!(summary.contains("decode_image"));
        assert!(summary.contains("75.0%"));
        assert!(summary.contains("Total"));
    }
}
