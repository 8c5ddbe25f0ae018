//! Graceful shutdown handling for the cadence driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared shutdown flag. Clones observe the same request.
#[derive(Debug, Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    report_on_exit: bool,
    exit_code: i32,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            report_on_exit: true,
            exit_code: 0,
        }
    }

    /// Sets whether a council summary is logged on exit.
    pub fn set_report_on_exit(&mut self, report: bool) {
        self.report_on_exit = report;
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    pub fn should_report_on_exit(&self) -> bool {
        self.report_on_exit
    }

    pub fn set_exit_code(&mut self, code: i32) {
        self.exit_code = code;
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Requests shutdown on Ctrl-C. Requires a tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }

    /// Logs the final council state before exit.
    pub fn cleanup(&self, app: &crate::app::App) {
        tracing::info!("Performing shutdown cleanup...");

        if self.report_on_exit {
            let memory = app.orchestrator.shared_memory();
            let metrics = app.orchestrator.metrics();
            tracing::info!(
                ticks = metrics.tick_count(),
                dropped = metrics.dropped_ticks(),
                population = app.orchestrator.population(),
                replications = metrics.replications(),
                offensive_actions = metrics.offensive_actions(),
                tracked_entities = app.store.len(),
                verified_threats = memory.verified_threats,
                active_blocks = memory.active_blocks,
                coherence = memory.global_coherence,
                "Council summary"
            );
        }

        tracing::info!("Cleanup complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.is_shutdown_requested());
        assert!(manager.should_report_on_exit());
        assert_eq!(manager.exit_code(), 0);
    }

    #[test]
    fn test_clones_share_request() {
        let manager = ShutdownManager::new();
        let signal = manager.clone();
        signal.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }

    #[test]
    fn test_report_on_exit() {
        let mut manager = ShutdownManager::new();
        manager.set_report_on_exit(false);
        assert!(!manager.should_report_on_exit());
    }

    #[test]
    fn test_exit_code() {
        let mut manager = ShutdownManager::new();
        manager.set_exit_code(1);
        assert_eq!(manager.exit_code(), 1);
    }
}
