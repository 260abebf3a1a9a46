//! Sink for failures that are hidden from the caller

use std::sync::Mutex;

use tracing::error;

/// Receives the full detail of an internal failure before it is replaced by
/// the generic caller-facing message.
pub trait ErrorRecorder: Send + Sync {
    fn record(&self, error: &anyhow::Error);
}

/// Default recorder, emits the error chain through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl ErrorRecorder for TracingRecorder {
    fn record(&self, error: &anyhow::Error) {
        error!("{error:#}");
    }
}

/// Keeps recorded errors in memory, rendered with their cause chain
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    entries: Mutex<Vec<String>>,
}

impl MemoryRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ErrorRecorder for MemoryRecorder {
    fn record(&self, error: &anyhow::Error) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(format!("{error:#}"));
        }
    }
}
