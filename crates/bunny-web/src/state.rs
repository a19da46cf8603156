use std::sync::Arc;

use bunny_core::{Bunny, Clock, SystemClock};
use tokio::sync::Mutex;

/// The one bunny every request cares for
///
/// Reads mutate too (decay catches up on each status), so access goes
/// through a mutex rather than a read/write lock.
pub type SharedBunny = Arc<Mutex<Bunny<Arc<dyn Clock>>>>;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    pub bunny: SharedBunny,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            bunny: Arc::new(Mutex::new(Bunny::with_clock(clock))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
