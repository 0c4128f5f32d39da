#[cfg(test)]
#[path = "../../../tests/unit/construction/enablers/schedule_update_test.rs"]
mod schedule_update_test;

use crate::construction::heuristics::{RouteContext, RouteState};
use crate::models::common::{Duration, Schedule, Timestamp};
use crate::models::problem::{ActivityCost, Actor, TransportCost, TravelTime};
use std::sync::Arc;

custom_tour_state!(pub TotalDuration typeof Duration);

/// Updates route schedule data: arrival and departure times of every activity starting from
/// route's departure and the total duration of the route.
pub fn update_route_schedule(
    route_ctx: &mut RouteContext,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
) {
    update_schedules(route_ctx, activity, transport);
    update_statistics(route_ctx);
}

/// Replaces route's actor and departure time at once and refreshes the schedule.
pub fn update_route_departure(
    route_ctx: &mut RouteContext,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
    actor: Arc<Actor>,
    new_departure_time: Timestamp,
) {
    route_ctx.route_mut().set_actor_and_departure(actor, new_departure_time);

    update_route_schedule(route_ctx, activity, transport);
}

fn update_schedules(
    route_ctx: &mut RouteContext,
    activity: &(dyn ActivityCost + Send + Sync),
    transport: &(dyn TransportCost + Send + Sync),
) {
    let route = route_ctx.route_mut();
    let actor = route.actor.clone();

    let Some(init) = route.tour.start().map(|start| (start.place.location, start.schedule.departure)) else {
        return;
    };

    (1..route.tour.total()).fold(init, |(loc, dep), activity_idx| {
        let Some(a) = route.tour.get_mut(activity_idx) else { return (loc, dep) };

        let arrival = dep + transport.duration(&actor, loc, a.place.location, TravelTime::Departure(dep));
        let departure = activity.estimate_departure(&actor, a, arrival);

        a.schedule = Schedule::new(arrival, departure);

        (a.place.location, departure)
    });
}

fn update_statistics(route_ctx: &mut RouteContext) {
    let (route, state) = route_ctx.as_mut();

    let total_duration = match (route.tour.start(), route.tour.end()) {
        (Some(start), Some(end)) => end.schedule.arrival - start.schedule.departure,
        _ => Duration::default(),
    };

    state.set_total_duration(total_duration);
}
