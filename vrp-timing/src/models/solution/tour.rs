#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::{Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Actor, Job};
use crate::models::solution::{Activity, Place};
use std::slice::Iter;
use std::sync::Arc;

/// A tour leg: a pair of consecutive activities and the index of the first one.
pub type Leg<'a> = (&'a [Activity], usize);

/// Represents a tour, a smart container for activities. A tour always starts with start and ends with
/// end activities which are derived from vehicle properties.
#[derive(Clone, Debug)]
pub struct Tour {
    /// Stores activities in the order the performed.
    activities: Vec<Activity>,
}

impl Tour {
    /// Creates a new tour with start and end using actor properties.
    pub fn new(actor: &Actor) -> Self {
        Self { activities: vec![create_start_activity(actor), create_end_activity(actor)] }
    }

    /// Replaces tour start and end activities using properties of given actor.
    pub(crate) fn set_terminals(&mut self, actor: &Actor) {
        let last_idx = self.activities.len() - 1;

        self.activities[0] = create_start_activity(actor);
        self.activities[last_idx] = create_end_activity(actor);
    }

    /// Sets departure time from tour start.
    pub(crate) fn set_departure(&mut self, departure: Timestamp) {
        self.activities[0].schedule = Schedule::new(departure, departure);
    }

    /// Inserts activity within its job to the end of tour (right before tour end).
    pub fn insert_last(&mut self, activity: Activity) -> &mut Tour {
        self.insert_at(activity, self.job_activity_count() + 1);
        self
    }

    /// Inserts activity within its job at specified index. Index zero is reserved by tour start and
    /// the last index is reserved by tour end.
    pub fn insert_at(&mut self, activity: Activity, index: usize) -> &mut Tour {
        assert!(activity.job.is_some());
        assert!(index > 0 && index < self.activities.len());

        self.activities.insert(index, activity);

        self
    }

    /// Removes job activity at given index and returns its job.
    pub fn remove_activity_at(&mut self, index: usize) -> Option<Arc<Job>> {
        let is_job_activity = self.activities.get(index).is_some_and(|activity| activity.job.is_some());

        if is_job_activity { self.activities.remove(index).job } else { None }
    }

    /// Returns all activities in tour.
    pub fn all_activities(&self) -> Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Returns job activities in tour.
    pub fn job_activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.activities.iter().filter(|activity| activity.job.is_some())
    }

    /// Returns tour legs.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> + '_ {
        self.activities.windows(2).zip(0_usize..)
    }

    /// Returns activity by its index in tour.
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Returns mutable activity by its index in tour.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Activity> {
        self.activities.get_mut(index)
    }

    /// Returns start activity in tour.
    pub fn start(&self) -> Option<&Activity> {
        self.activities.first()
    }

    /// Returns end activity in tour.
    pub fn end(&self) -> Option<&Activity> {
        self.activities.last()
    }

    /// Checks whether tour has jobs.
    pub fn has_jobs(&self) -> bool {
        self.job_activity_count() > 0
    }

    /// Returns total amount of job activities.
    pub fn job_activity_count(&self) -> usize {
        self.activities.len().saturating_sub(2)
    }

    /// Returns amount of all activities in tour.
    pub fn total(&self) -> usize {
        self.activities.len()
    }
}

fn create_start_activity(actor: &Actor) -> Activity {
    let vehicle = actor.vehicle.as_ref();
    let departure = vehicle.earliest_departure();

    Activity {
        place: Place {
            location: vehicle.start.location,
            duration: 0.,
            time: TimeWindow::new(departure, vehicle.latest_departure()),
        },
        schedule: Schedule::new(departure, departure),
        job: None,
    }
}

fn create_end_activity(actor: &Actor) -> Activity {
    let vehicle = actor.vehicle.as_ref();
    let earliest = vehicle.end.as_ref().and_then(|end| end.time.earliest).unwrap_or(vehicle.earliest_departure());

    Activity {
        place: Place {
            location: vehicle.end_location(),
            duration: 0.,
            time: TimeWindow::new(earliest, vehicle.latest_arrival()),
        },
        schedule: Schedule::new(earliest, earliest),
        job: None,
    }
}
