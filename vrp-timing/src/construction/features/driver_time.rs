//! Provides the way to respect activity time windows and a limit on driver operating time.

#[cfg(test)]
#[path = "../../../tests/unit/construction/features/driver_time_test.rs"]
mod driver_time_test;

use super::*;
use crate::construction::enablers::*;
use crate::models::common::{Duration, Timestamp};
use crate::models::problem::{ActivityCost, TransportCost, TravelTime};
use crate::models::solution::Activity;
use crate::utils::{Environment, GenericError, GenericResult, parallel_foreach_mut};
use std::sync::Arc;

/// Provides a way to build driver time feature.
pub struct DriverTimeFeatureBuilder {
    name: String,
    transport: Option<Arc<dyn TransportCost + Send + Sync>>,
    activity: Option<Arc<dyn ActivityCost + Send + Sync>>,
    max_driver_time: Option<Duration>,
    is_parallel: bool,
}

impl DriverTimeFeatureBuilder {
    /// Creates a new instance of `DriverTimeFeatureBuilder`.
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), transport: None, activity: None, max_driver_time: None, is_parallel: false }
    }

    /// Sets transport costs to estimate travel durations.
    pub fn set_transport(mut self, transport: Arc<dyn TransportCost + Send + Sync>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets activity costs to estimate job start/end time.
    pub fn set_activity(mut self, activity: Arc<dyn ActivityCost + Send + Sync>) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Sets max driver operating time. If not set, driver time is not limited.
    pub fn set_max_driver_time(mut self, max_driver_time: Duration) -> Self {
        self.max_driver_time = Some(max_driver_time);
        self
    }

    /// Sets environment which specifies whether route states can be refreshed in parallel.
    pub fn set_environment(mut self, environment: &Environment) -> Self {
        self.is_parallel = environment.is_parallel;
        self
    }

    /// Builds driver time feature.
    pub fn build(mut self) -> GenericResult<DriverTimeFeature> {
        let transport = self.transport.take().ok_or_else(|| GenericError::from("transport must be set"))?;
        let activity = self.activity.take().ok_or_else(|| GenericError::from("activity must be set"))?;
        let max_driver_time = self.max_driver_time.unwrap_or(Duration::MAX);

        if max_driver_time.is_nan() || max_driver_time <= 0. {
            return Err(format!("max driver time should be positive, got: {max_driver_time}").into());
        }

        Ok(DriverTimeFeature {
            name: self.name,
            state: DriverTimeState {
                transport: transport.clone(),
                activity: activity.clone(),
                max_driver_time,
                is_parallel: self.is_parallel,
            },
            constraint: TimeWindowConstraint { transport, activity, max_driver_time },
        })
    }
}

/// A feature which keeps schedule and latest feasible start times of routes up to date and checks
/// insertions against activity time windows, vehicle's latest arrival and driver operating time.
pub struct DriverTimeFeature {
    name: String,
    state: DriverTimeState,
    constraint: TimeWindowConstraint,
}

impl DriverTimeFeature {
    /// Returns feature name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns max driver operating time.
    pub fn max_driver_time(&self) -> Duration {
        self.state.max_driver_time
    }

    /// Returns transport costs used by the feature.
    pub fn transport(&self) -> &(dyn TransportCost + Send + Sync) {
        self.state.transport.as_ref()
    }

    /// Returns activity costs used by the feature.
    pub fn activity(&self) -> &(dyn ActivityCost + Send + Sync) {
        self.state.activity.as_ref()
    }
}

impl FeatureConstraint for DriverTimeFeature {
    fn evaluate(
        &self,
        insertion_ctx: &InsertionContext<'_>,
        activity_ctx: &ActivityContext<'_>,
        prev_departure: Timestamp,
    ) -> ConstraintStatus {
        self.constraint.evaluate(insertion_ctx, activity_ctx, prev_departure)
    }
}

impl FeatureState for DriverTimeFeature {
    fn accept_insertion(&self, solution_ctx: &mut SolutionContext, route_index: usize, job: &Job) {
        self.state.accept_insertion(solution_ctx, route_index, job)
    }

    fn accept_route_state(&self, route_ctx: &mut RouteContext) {
        self.state.accept_route_state(route_ctx)
    }

    fn accept_solution_state(&self, solution_ctx: &mut SolutionContext) {
        self.state.accept_solution_state(solution_ctx)
    }
}

struct TimeWindowConstraint {
    transport: Arc<dyn TransportCost + Send + Sync>,
    activity: Arc<dyn ActivityCost + Send + Sync>,
    max_driver_time: Duration,
}

impl TimeWindowConstraint {
    /// Returns departure from vehicle's start which avoids waiting at the target activity.
    fn get_vehicle_departure(&self, insertion_ctx: &InsertionContext<'_>, target: &Activity) -> Timestamp {
        let actor = insertion_ctx.actor.as_ref();
        let departure = insertion_ctx.departure;
        let start_to_target = self.transport.duration(
            actor,
            actor.vehicle.start.location,
            target.place.location,
            TravelTime::Departure(departure),
        );

        departure.max(target.place.time.start - start_to_target)
    }

    /// Returns true if propagated states can be used for this insertion.
    fn has_valid_states(&self, insertion_ctx: &InsertionContext<'_>) -> bool {
        let route_ctx = insertion_ctx.route_ctx;
        let route = route_ctx.route();

        !route_ctx.is_stale()
            && route.actor == *insertion_ctx.actor
            && route_ctx
                .state()
                .get_latest_activity_start_states()
                .is_some_and(|states| states.len() == route.tour.total())
    }

    fn evaluate_activity(
        &self,
        insertion_ctx: &InsertionContext<'_>,
        activity_ctx: &ActivityContext<'_>,
        prev_departure: Timestamp,
    ) -> ConstraintStatus {
        let route_ctx = insertion_ctx.route_ctx;
        let route = route_ctx.route();
        let actor = insertion_ctx.actor.as_ref();
        let vehicle = actor.vehicle.as_ref();

        let prev = activity_ctx.prev;
        let target = activity_ctx.target;
        let next = activity_ctx.next;

        let vehicle_departure = self.get_vehicle_departure(insertion_ctx, target);

        if prev.job.is_none() {
            let end_arrival = route.tour.end().map_or(vehicle_departure, |end| end.schedule.arrival);
            if end_arrival - vehicle_departure > self.max_driver_time {
                return ConstraintStatus::NotFulfilled;
            }
        }

        let has_valid_states = self.has_valid_states(insertion_ctx);
        let state = route_ctx.state();

        let latest_arrival_at_depot = state
            .get_latest_arrival_at_depot()
            .copied()
            .filter(|_| has_valid_states)
            .unwrap_or_else(|| vehicle.latest_arrival().min(vehicle_departure + self.max_driver_time));
        let latest_vehicle_arrival = vehicle.latest_arrival().min(latest_arrival_at_depot);

        if latest_vehicle_arrival < prev.place.time.start
            || latest_vehicle_arrival < target.place.time.start
            || latest_vehicle_arrival < next.place.time.start
        {
            return ConstraintStatus::NotFulfilledBreak;
        }

        if target.place.time.end < prev.place.time.start {
            return ConstraintStatus::NotFulfilledBreak;
        }

        let arr_time_at_next_directly = prev_departure
            + self.transport.duration(
                actor,
                prev.place.location,
                next.place.location,
                TravelTime::Departure(prev_departure),
            );

        if arr_time_at_next_directly > next.place.time.end {
            return ConstraintStatus::NotFulfilledBreak;
        }

        if target.place.time.start > next.place.time.end {
            return ConstraintStatus::NotFulfilled;
        }

        let arr_time_at_target = prev_departure
            + self.transport.duration(
                actor,
                prev.place.location,
                target.place.location,
                TravelTime::Departure(prev_departure),
            );
        let end_time_at_target = self.activity.estimate_departure(actor, target, arr_time_at_target);

        let latest_arr_time_at_next = state
            .get_latest_activity_start_at(activity_ctx.index + 1)
            .copied()
            .filter(|_| has_valid_states)
            .unwrap_or(if next.job.is_none() { latest_vehicle_arrival } else { next.place.time.end });

        let target_to_next = self.transport.duration(
            actor,
            target.place.location,
            next.place.location,
            TravelTime::Departure(end_time_at_target),
        );
        let latest_arr_time_at_target = target.place.time.end.min(latest_arr_time_at_next - target_to_next);

        let arr_time_at_next = end_time_at_target + target_to_next;

        if arr_time_at_next > latest_vehicle_arrival {
            return ConstraintStatus::NotFulfilledBreak;
        }
        if arr_time_at_next > latest_arr_time_at_next {
            return ConstraintStatus::NotFulfilled;
        }

        if arr_time_at_target > latest_vehicle_arrival {
            return ConstraintStatus::NotFulfilledBreak;
        }
        if arr_time_at_target > latest_arr_time_at_target {
            return ConstraintStatus::NotFulfilled;
        }

        if arr_time_at_next_directly > latest_arr_time_at_next {
            return ConstraintStatus::NotFulfilledBreak;
        }

        ConstraintStatus::Fulfilled
    }
}

impl FeatureConstraint for TimeWindowConstraint {
    fn evaluate(
        &self,
        insertion_ctx: &InsertionContext<'_>,
        activity_ctx: &ActivityContext<'_>,
        prev_departure: Timestamp,
    ) -> ConstraintStatus {
        self.evaluate_activity(insertion_ctx, activity_ctx, prev_departure)
    }
}

struct DriverTimeState {
    transport: Arc<dyn TransportCost + Send + Sync>,
    activity: Arc<dyn ActivityCost + Send + Sync>,
    max_driver_time: Duration,
    is_parallel: bool,
}

impl FeatureState for DriverTimeState {
    fn accept_insertion(&self, solution_ctx: &mut SolutionContext, route_index: usize, _: &Job) {
        if let Some(route_ctx) = solution_ctx.routes.get_mut(route_index) {
            self.accept_route_state(route_ctx);
        }
    }

    fn accept_route_state(&self, route_ctx: &mut RouteContext) {
        update_route_schedule(route_ctx, self.activity.as_ref(), self.transport.as_ref());
        update_latest_starts(route_ctx, self.activity.as_ref(), self.transport.as_ref(), self.max_driver_time);

        route_ctx.mark_stale(false);
    }

    fn accept_solution_state(&self, solution_ctx: &mut SolutionContext) {
        let mut stale_routes =
            solution_ctx.routes.iter_mut().filter(|route_ctx| route_ctx.is_stale()).collect::<Vec<_>>();

        if self.is_parallel {
            parallel_foreach_mut(stale_routes.as_mut_slice(), |route_ctx| self.accept_route_state(route_ctx));
        } else {
            stale_routes.into_iter().for_each(|route_ctx| self.accept_route_state(route_ctx));
        }
    }
}
