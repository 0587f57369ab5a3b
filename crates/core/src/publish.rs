//! Event publishing port
//!
//! The wizard hands finalized events to an `EventPublisher`. The simulated
//! publisher stands in for the hosted backend until one is wired up.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tracing::{info, instrument, warn};

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::models::{EventId, FinalizedEvent};

/// Destination for finalized events
pub trait EventPublisher {
    fn submit_draft(
        &self,
        event: &FinalizedEvent,
    ) -> impl Future<Output = Result<EventId, PublishError>> + Send;
}

/// Waits a fixed delay, then succeeds or fails at a configured rate
#[derive(Debug, Clone)]
pub struct SimulatedPublisher {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedPublisher {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn from_config(config: &PublishConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.failure_rate)
    }

    /// No delay, never fails
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }

    /// No delay, always fails
    pub fn failing() -> Self {
        Self::new(Duration::ZERO, 1.0)
    }

    fn should_fail(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }
}

impl Default for SimulatedPublisher {
    fn default() -> Self {
        Self::from_config(&PublishConfig::default())
    }
}

impl EventPublisher for SimulatedPublisher {
    #[instrument(skip(self, event), fields(name = %event.draft.name, tier = %event.publishing_type))]
    async fn submit_draft(&self, event: &FinalizedEvent) -> Result<EventId, PublishError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.should_fail() {
            warn!("Simulated publish failure");
            return Err(PublishError::Unavailable(
                "simulated backend failure".to_string(),
            ));
        }

        let id = EventId::new();
        info!(event_id = %id, "Event published");
        Ok(id)
    }
}

/// Keeps every accepted event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<(EventId, FinalizedEvent)>>>,
    fail_next: Arc<Mutex<u32>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` submissions
    pub fn fail_next(&self, count: u32) {
        if let Ok(mut pending) = self.fail_next.lock() {
            *pending = count;
        }
    }

    pub fn published(&self) -> Vec<(EventId, FinalizedEvent)> {
        self.published
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventPublisher for RecordingPublisher {
    async fn submit_draft(&self, event: &FinalizedEvent) -> Result<EventId, PublishError> {
        {
            let mut pending = self
                .fail_next
                .lock()
                .map_err(|_| PublishError::Unavailable("publisher lock poisoned".into()))?;
            if *pending > 0 {
                *pending -= 1;
                return Err(PublishError::Rejected("scripted failure".to_string()));
            }
        }

        let id = EventId::new();
        self.published
            .lock()
            .map_err(|_| PublishError::Unavailable("publisher lock poisoned".into()))?
            .push((id, event.clone()));
        Ok(id)
    }
}
