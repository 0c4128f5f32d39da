use crate::models::common::{Duration, Location, TimeWindow};
use std::sync::Arc;

/// Represents a job: a single stop which has to be served at some location within time window.
#[derive(Clone, Debug)]
pub struct Job {
    /// Job id.
    pub id: String,

    /// Location where job is served.
    pub location: Location,

    /// Service duration.
    pub duration: Duration,

    /// A time window when service is allowed to be started.
    pub time: TimeWindow,
}

impl Job {
    /// Creates a new shared instance of `Job`.
    pub fn new_shared(id: &str, location: Location, duration: Duration, time: TimeWindow) -> Arc<Self> {
        Arc::new(Self { id: id.to_string(), location, duration, time })
    }
}
