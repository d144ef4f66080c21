use crate::models::StreamRecord;
use std::sync::Arc;

/// Shared application state: the schedule is loaded once at startup and is
/// read-only afterwards, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<Vec<StreamRecord>>,
}

impl AppState {
    pub fn new(streams: Vec<StreamRecord>) -> Self {
        Self {
            schedule: Arc::new(streams),
        }
    }
}
