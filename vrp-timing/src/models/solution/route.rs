use crate::models::common::{Duration, Location, Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Actor, Job};
use crate::models::solution::Tour;
use std::sync::Arc;

/// Specifies activity place.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where activity is performed.
    pub location: Location,

    /// Specifies activity's duration.
    pub duration: Duration,

    /// Specifies activity's time window: an interval when activity is allowed to be started.
    pub time: TimeWindow,
}

/// Represents activity which is needed to be performed.
#[derive(Clone, Debug)]
pub struct Activity {
    /// Specifies activity details.
    pub place: Place,

    /// Specifies activity's schedule.
    pub schedule: Schedule,

    /// Specifies associated job. Empty if it has no association with a job (tour start or end).
    pub job: Option<Arc<Job>>,
}

impl Activity {
    /// Creates an activity with a job.
    pub fn new_with_job(job: Arc<Job>) -> Self {
        Activity {
            place: Place { location: job.location, duration: job.duration, time: job.time.clone() },
            schedule: Schedule::new(0., 0.),
            job: Some(job),
        }
    }

    /// Returns true if activity is a tour start or end.
    pub fn is_terminal(&self) -> bool {
        self.job.is_none()
    }
}

/// Represents a tour performing jobs.
#[derive(Clone, Debug)]
pub struct Route {
    /// An actor associated within route.
    pub actor: Arc<Actor>,

    /// Specifies job tour assigned to this route.
    pub tour: Tour,
}

impl Route {
    /// Creates a new empty route for given actor.
    pub fn new(actor: Arc<Actor>) -> Self {
        let tour = Tour::new(&actor);
        Self { actor, tour }
    }

    /// Returns route's departure time, which is a departure from tour start.
    pub fn departure(&self) -> Timestamp {
        self.tour.start().map_or(self.actor.vehicle.earliest_departure(), |start| start.schedule.departure)
    }

    /// Replaces actor and departure time at once. Tour start and end places are rebuilt from
    /// the new actor's vehicle while job activities are kept as is.
    pub fn set_actor_and_departure(&mut self, actor: Arc<Actor>, departure: Timestamp) {
        if actor != self.actor {
            self.tour.set_terminals(&actor);
            self.actor = actor;
        }

        self.tour.set_departure(departure);
    }
}
