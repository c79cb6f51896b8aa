//! Scripted behaviour shared by the capability mocks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{Capability, CapabilityError};

/// A fixed response, optional latency and a shared call counter.
#[derive(Debug, Clone)]
pub(super) struct Scripted<O> {
    response: Result<O, CapabilityError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl<O: Clone> Scripted<O> {
    /// Until told otherwise a mock behaves like an unbound capability.
    pub(super) fn unconfigured(capability: Capability) -> Self {
        Self {
            response: Err(CapabilityError::not_configured(capability)),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(super) fn set_response(&mut self, response: Result<O, CapabilityError>) {
        self.response = response;
    }

    pub(super) fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) async fn respond(&self) -> Result<O, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.response.clone()
    }
}
