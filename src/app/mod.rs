pub mod seed;
pub mod shutdown;
pub mod state;
pub mod store;

pub use shutdown::ShutdownManager;
pub use state::App;
pub use store::EntityStore;

use anyhow::Result;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

impl App {
    /// Drives ticks at the configured period until `max_ticks` or shutdown.
    ///
    /// Periods missed while a tick runs are skipped rather than replayed.
    pub async fn run(&mut self, max_ticks: Option<u64>) -> Result<()> {
        let period = Duration::from_millis(self.config.simulation.tick_interval_ms);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            period_ms = self.config.simulation.tick_interval_ms,
            max_ticks = ?max_ticks,
            "Cadence driver started"
        );

        while !self.shutdown.is_shutdown_requested() {
            if max_ticks.is_some_and(|max| self.ticks_run >= max) {
                break;
            }
            interval.tick().await;
            if self.step().is_none() {
                tracing::debug!("Tick dropped by the council");
            }
        }

        self.shutdown.cleanup(self);
        Ok(())
    }
}
