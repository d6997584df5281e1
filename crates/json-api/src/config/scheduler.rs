//! Scheduler Config

use std::time::Duration;

use clap::Args;

/// Background scheduler settings.
#[derive(Debug, Args)]
pub struct SchedulerConfig {
    /// Seconds between scheduler ticks
    #[arg(long, env = "SCHEDULER_INTERVAL_SECS", default_value_t = 1_u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub scheduler_interval_secs: u64,
}

impl SchedulerConfig {
    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.scheduler_interval_secs)
    }
}
