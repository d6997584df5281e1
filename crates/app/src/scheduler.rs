//! Fixed-interval background ticker.

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Runs `on_tick` every `period` until `shutdown` is cancelled.
///
/// The first tick fires one full period after start. Ticks missed while the
/// runtime was busy are skipped rather than bunched. Returns the number of
/// ticks fired.
pub async fn run<F>(period: Duration, shutdown: CancellationToken, mut on_tick: F) -> u64
where
    F: FnMut(u64) + Send,
{
    let mut interval = time::interval_at(time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut ticks = 0;

    loop {
        tokio::select! {
            () = shutdown.cancelled() => {
                debug!(ticks, "scheduler stopped");

                return ticks;
            }
            _ = interval.tick() => {
                ticks += 1;
                on_tick(ticks);
            }
        }
    }
}

/// Spawn the heartbeat: a counter logged once per tick.
pub fn spawn_heartbeat(period: Duration, shutdown: CancellationToken) -> JoinHandle<u64> {
    info!(period_ms = period.as_millis(), "starting scheduler");

    tokio::spawn(run(period, shutdown, |tick| {
        info!(tick, "scheduler tick");
    }))
}
