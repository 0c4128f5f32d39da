#[cfg(test)]
#[path = "../../../tests/unit/construction/enablers/latest_start_test.rs"]
mod latest_start_test;

use super::get_waiting_free_departure;
use crate::construction::heuristics::{RouteContext, RouteState};
use crate::models::common::{Duration, Timestamp};
use crate::models::problem::{ActivityCost, TransportCost, TravelTime};
use crate::models::solution::Route;

custom_activity_state!(pub LatestActivityStart typeof Timestamp);
custom_tour_state!(pub LatestArrivalAtDepot typeof Timestamp);

/// Keeps result of backward propagation of the latest feasible times for a single route.
#[derive(Clone, Debug, PartialEq)]
pub struct LatestStartSchedule {
    /// The latest feasible arrival at the end depot, bounded by the driver operating time.
    pub latest_arrival_at_depot: Timestamp,

    /// The latest feasible start time of every activity indexed by its position in the tour.
    /// The first value is the latest departure from the start, the last one equals the latest
    /// arrival at the end depot.
    pub latest_starts: Vec<Timestamp>,
}

/// Computes the latest times when each activity of the route can be started without violating
/// time windows of the following activities, vehicle's latest arrival or driver operating time.
/// Returns `None` for a route without jobs.
pub fn propagate_latest_starts(
    route: &Route,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
    max_driver_time: Duration,
) -> Option<LatestStartSchedule> {
    if !route.tour.has_jobs() {
        return None;
    }

    let departure = get_waiting_free_departure(route, transport)?;
    let end = route.tour.end()?;
    let actor = route.actor.as_ref();

    let latest_arrival_at_depot = end.place.time.end.min(departure + max_driver_time);

    let mut latest_starts = route
        .tour
        .all_activities()
        .rev()
        .skip(1)
        .scan((latest_arrival_at_depot, end.place.location), |(latest_next, next_loc), a| {
            let travel = transport.duration(actor, a.place.location, *next_loc, TravelTime::Arrival(*latest_next));
            let latest = activity.estimate_arrival(actor, a, *latest_next - travel);

            *latest_next = latest;
            *next_loc = a.place.location;

            Some(latest)
        })
        .collect::<Vec<_>>();

    latest_starts.reverse();
    latest_starts.push(latest_arrival_at_depot);

    Some(LatestStartSchedule { latest_arrival_at_depot, latest_starts })
}

/// Updates propagated latest start states of the route. States of a route without jobs are removed,
/// so readers fall back to static time windows.
pub fn update_latest_starts(
    route_ctx: &mut RouteContext,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
    max_driver_time: Duration,
) {
    let schedule = propagate_latest_starts(route_ctx.route(), activity, transport, max_driver_time);
    let state = route_ctx.state_mut();

    match schedule {
        Some(LatestStartSchedule { latest_arrival_at_depot, latest_starts }) => {
            state.set_latest_arrival_at_depot(latest_arrival_at_depot);
            state.set_latest_activity_start_states(latest_starts);
        }
        None => {
            state.remove_latest_arrival_at_depot();
            state.remove_latest_activity_start_states();
        }
    }
}
