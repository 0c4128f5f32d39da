#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::*;
use crate::models::problem::Actor;
use crate::models::solution::Activity;
use crate::utils::{GenericError, GenericResult, compare_floats};
use std::sync::Arc;

/// Specifies travel time type.
#[derive(Copy, Clone, Debug)]
pub enum TravelTime {
    /// Arrival time type: travel ends at given time (backward direction).
    Arrival(Timestamp),
    /// Departure time type: travel starts at given time (forward direction).
    Departure(Timestamp),
}

impl TravelTime {
    /// Returns the timestamp regardless of direction.
    pub fn timestamp(&self) -> Timestamp {
        match *self {
            TravelTime::Arrival(arrival) => arrival,
            TravelTime::Departure(departure) => departure,
        }
    }
}

/// Provides the way to get schedule information for specific activities done by specific actor.
pub trait ActivityCost {
    /// Estimates departure time for activity and actor at given arrival time.
    fn estimate_departure(&self, _actor: &Actor, activity: &Activity, arrival: Timestamp) -> Timestamp {
        arrival.max(activity.place.time.start) + activity.place.duration
    }

    /// Estimates the latest arrival time for activity and actor at given departure time.
    fn estimate_arrival(&self, _actor: &Actor, activity: &Activity, departure: Timestamp) -> Timestamp {
        activity.place.time.end.min(departure - activity.place.duration)
    }
}

/// An actor independent activity costs.
#[derive(Default)]
pub struct SimpleActivityCost {}

impl ActivityCost for SimpleActivityCost {}

/// Provides the way to get routing information for specific locations and actor.
/// Implementations are allowed to be asymmetric and time dependent.
pub trait TransportCost {
    /// Returns time-dependent travel duration between locations specific for given actor.
    fn duration(&self, actor: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Duration;

    /// Returns time-dependent travel distance between locations specific for given actor.
    fn distance(&self, actor: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Distance;
}

/// Contains matrix routing data, optionally, for specific time.
pub struct MatrixData {
    /// A timestamp for which routing info is applicable.
    pub timestamp: Option<Timestamp>,
    /// Travel durations.
    pub durations: Vec<Duration>,
    /// Travel distances.
    pub distances: Vec<Distance>,
}

impl MatrixData {
    /// Creates `MatrixData` instance.
    pub fn new(timestamp: Option<Timestamp>, durations: Vec<Duration>, distances: Vec<Distance>) -> Self {
        Self { timestamp, durations, distances }
    }
}

/// Creates time agnostic or time aware routing costs based on matrix data passed.
pub fn create_matrix_transport_cost(costs: Vec<MatrixData>) -> GenericResult<Arc<dyn TransportCost + Send + Sync>> {
    let first = costs.first().ok_or_else(|| GenericError::from("no matrix data found"))?;

    let size = (first.durations.len() as f64).sqrt().round() as usize;

    if costs.iter().any(|matrix| matrix.distances.len() != matrix.durations.len()) {
        return Err("distance and duration collections have different length".into());
    }

    if costs.iter().any(|matrix| matrix.durations.len() != size * size) {
        return Err("matrix is not square or lengths don't match".into());
    }

    Ok(if costs.iter().any(|costs| costs.timestamp.is_some()) {
        Arc::new(TimeAwareMatrixTransportCost::new(costs, size)?)
    } else {
        Arc::new(TimeAgnosticMatrixTransportCost::new(costs, size)?)
    })
}

/// A time agnostic matrix routing costs.
struct TimeAgnosticMatrixTransportCost {
    durations: Vec<Duration>,
    distances: Vec<Distance>,
    size: usize,
}

impl TimeAgnosticMatrixTransportCost {
    fn new(costs: Vec<MatrixData>, size: usize) -> GenericResult<Self> {
        let mut costs = costs;

        if costs.len() != 1 {
            return Err("time agnostic routing expects exactly one matrix".into());
        }

        let data = costs.swap_remove(0);

        Ok(Self { durations: data.durations, distances: data.distances, size })
    }
}

impl TransportCost for TimeAgnosticMatrixTransportCost {
    fn duration(&self, _: &Actor, from: Location, to: Location, _: TravelTime) -> Duration {
        self.durations[from * self.size + to]
    }

    fn distance(&self, _: &Actor, from: Location, to: Location, _: TravelTime) -> Distance {
        self.distances[from * self.size + to]
    }
}

/// A time aware matrix costs: values between two timestamped matrices are linearly interpolated,
/// values outside of the covered time range are taken from the closest matrix.
struct TimeAwareMatrixTransportCost {
    timestamps: Vec<Timestamp>,
    matrices: Vec<MatrixData>,
    size: usize,
}

impl TimeAwareMatrixTransportCost {
    fn new(costs: Vec<MatrixData>, size: usize) -> GenericResult<Self> {
        if costs.iter().any(|matrix| matrix.timestamp.is_none()) {
            return Err("time-aware routing requires all matrices to have timestamp".into());
        }

        if costs.len() == 1 {
            return Err("should not use time aware matrix routing with single matrix".into());
        }

        let mut matrices = costs;
        matrices.sort_by(|a, b| compare_floats(a.timestamp.unwrap_or_default(), b.timestamp.unwrap_or_default()));

        let timestamps: Vec<_> = matrices.iter().map(|matrix| matrix.timestamp.unwrap_or_default()).collect();

        if timestamps.windows(2).any(|pair| compare_floats(pair[0], pair[1]).is_eq()) {
            return Err("duplicate timestamps in time-aware matrices".into());
        }

        Ok(Self { timestamps, matrices, size })
    }

    fn interpolate<F>(&self, from: Location, to: Location, travel_time: TravelTime, values_fn: F) -> f64
    where
        F: Fn(&MatrixData) -> &[f64],
    {
        let timestamp = travel_time.timestamp();
        let data_idx = from * self.size + to;
        let last_idx = self.matrices.len() - 1;

        match self.timestamps.binary_search_by(|time| compare_floats(*time, timestamp)) {
            Ok(matrix_idx) => values_fn(&self.matrices[matrix_idx])[data_idx],
            Err(0) => values_fn(&self.matrices[0])[data_idx],
            Err(matrix_idx) if matrix_idx > last_idx => values_fn(&self.matrices[last_idx])[data_idx],
            Err(matrix_idx) => {
                let (left_time, right_time) = (self.timestamps[matrix_idx - 1], self.timestamps[matrix_idx]);
                let left_value = values_fn(&self.matrices[matrix_idx - 1])[data_idx];
                let right_value = values_fn(&self.matrices[matrix_idx])[data_idx];

                // perform linear interpolation
                let ratio = (timestamp - left_time) / (right_time - left_time);

                left_value + ratio * (right_value - left_value)
            }
        }
    }
}

impl TransportCost for TimeAwareMatrixTransportCost {
    fn duration(&self, _: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Duration {
        self.interpolate(from, to, travel_time, |matrix| matrix.durations.as_slice())
    }

    fn distance(&self, _: &Actor, from: Location, to: Location, travel_time: TravelTime) -> Distance {
        self.interpolate(from, to, travel_time, |matrix| matrix.distances.as_slice())
    }
}
