//! Shared application state.
//!
//! Everything here is read-only after startup, so concurrent requests
//! share it through an `Arc` with zero coordination.

use std::sync::Arc;

use envios_core::{Clock, RateCatalog, SystemClock};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    catalog: RateCatalog,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Production state: validated catalog + system clock.
    pub fn new(catalog: RateCatalog) -> Self {
        Self::with_clock(catalog, SystemClock)
    }

    /// State with an explicit clock. Tests pin the clock to make the
    /// time-window and blackout behavior deterministic.
    pub fn with_clock(catalog: RateCatalog, clock: impl Clock + 'static) -> Self {
        AppState {
            inner: Arc::new(StateInner {
                catalog,
                clock: Box::new(clock),
            }),
        }
    }

    pub fn catalog(&self) -> &RateCatalog {
        &self.inner.catalog
    }

    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }
}
