#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Represents a time duration.
pub type Duration = f64;

/// Specifies a timestamp. All times share one consistent unit.
pub type Timestamp = f64;

/// Specifies distance value.
pub type Distance = f64;

/// Specifies location type.
pub type Location = usize;

/// Represents a time window: an interval when an activity is allowed to be started.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    /// Earliest start.
    pub start: Timestamp,
    /// Latest start.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: Timestamp::MAX }
    }

    /// Checks whether time window has intersection with another one (inclusive).
    pub fn intersects(&self, other: &Self) -> bool {
        compare_floats(self.start, other.end) != Ordering::Greater
            && compare_floats(other.start, self.end) != Ordering::Greater
    }

    /// Checks whether given timestamp is inside of the time window (inclusive).
    pub fn contains(&self, time: Timestamp) -> bool {
        compare_floats(time, self.start) != Ordering::Less && compare_floats(time, self.end) != Ordering::Greater
    }

    /// Returns duration of time window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

/// Represents a time interval with optional bounds.
#[derive(Clone, Debug, Default)]
pub struct TimeInterval {
    /// Earliest time.
    pub earliest: Option<Timestamp>,
    /// Latest time.
    pub latest: Option<Timestamp>,
}

impl TimeInterval {
    /// Converts time interval to time window using zero and max as missing bounds.
    pub fn to_time_window(&self) -> TimeWindow {
        TimeWindow::new(self.earliest.unwrap_or(0.), self.latest.unwrap_or(Timestamp::MAX))
    }
}

/// Represents a schedule.
#[derive(Clone, Debug)]
pub struct Schedule {
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

impl Schedule {
    /// Creates a new instance of `Schedule`.
    pub fn new(arrival: Timestamp, departure: Timestamp) -> Self {
        Self { arrival, departure }
    }
}

impl PartialEq<Schedule> for Schedule {
    fn eq(&self, other: &Schedule) -> bool {
        compare_floats(self.arrival, other.arrival) == Ordering::Equal
            && compare_floats(self.departure, other.departure) == Ordering::Equal
    }
}

impl Eq for Schedule {}
