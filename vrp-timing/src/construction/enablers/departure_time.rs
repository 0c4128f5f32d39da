#[cfg(test)]
#[path = "../../../tests/unit/construction/enablers/departure_time_test.rs"]
mod departure_time_test;

use crate::construction::enablers::update_route_departure;
use crate::construction::heuristics::RouteContext;
use crate::models::common::{Duration, Timestamp};
use crate::models::problem::{ActivityCost, TransportCost, TravelTime};
use crate::models::solution::Route;

/// Returns departure time which lets vehicle arrive at the first job activity not earlier than
/// its time window start. Never earlier than the current departure.
pub fn get_waiting_free_departure(route: &Route, transport: &(dyn TransportCost + Send + Sync)) -> Option<Timestamp> {
    let start = route.tour.start()?;
    let first = route.tour.get(1).filter(|first| first.job.is_some())?;

    let departure = start.schedule.departure;
    let start_to_first =
        transport.duration(&route.actor, start.place.location, first.place.location, TravelTime::Departure(departure));

    Some(departure.max(first.place.time.start - start_to_first))
}

/// Tries to move forward route's departure time to eliminate waiting at the first activity.
/// Returns the departure shift if departure was changed.
pub fn advance_departure_time(
    route_ctx: &mut RouteContext,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
) -> Option<Duration> {
    let last_departure_time = route_ctx.route().departure();
    let new_departure_time = get_waiting_free_departure(route_ctx.route(), transport)?;

    if new_departure_time > last_departure_time {
        let actor = route_ctx.route().actor.clone();
        update_route_departure(route_ctx, activity, transport, actor, new_departure_time);

        Some(new_departure_time - last_departure_time)
    } else {
        None
    }
}
