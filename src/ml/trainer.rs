use std::time::Duration;
use tracing::info;

/// Simulated training phase run once before the listener starts
#[derive(Debug, Clone, Copy)]
pub struct ModelTrainer {
    duration: Duration,
}

impl ModelTrainer {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Block the calling thread for the training duration.
    ///
    /// Performs no computation; call it from `spawn_blocking` inside a runtime.
    pub fn train(&self) {
        info!("Model is being trained...");
        if !self.duration.is_zero() {
            std::thread::sleep(self.duration);
        }
        info!("Model trained and ready!");
    }
}

impl Default for ModelTrainer {
    fn default() -> Self {
        Self::from_secs(2)
    }
}
