//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcasts a single "stop" notification to every subscriber.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe before triggering; late subscribers miss the signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify all current subscribers. Returns how many were reached.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Trigger once `signal` completes.
    pub async fn trigger_on<F>(self, signal: F)
    where
        F: std::future::Future<Output = ()>,
    {
        signal.await;
        let reached = self.trigger();
        tracing::info!(subscribers = reached, "Shutdown triggered");
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
