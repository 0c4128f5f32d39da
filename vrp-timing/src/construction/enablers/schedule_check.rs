#[cfg(test)]
#[path = "../../../tests/unit/construction/enablers/schedule_check_test.rs"]
mod schedule_check_test;

use crate::models::common::Duration;
use crate::models::solution::Route;
use crate::utils::{GenericError, GenericResult};

/// Checks scheduled route against activity time windows, vehicle's latest arrival and driver
/// operating time. All found violations are reported in a single error.
pub fn check_route_schedule(route: &Route, max_driver_time: Duration) -> GenericResult<()> {
    let vehicle = &route.actor.vehicle;

    let mut errors = route
        .tour
        .all_activities()
        .enumerate()
        .filter(|(_, activity)| activity.job.is_some())
        .filter(|(_, activity)| activity.schedule.arrival > activity.place.time.end)
        .map(|(idx, activity)| {
            let job_id = activity.job.as_ref().map_or("", |job| job.id.as_str());
            GenericError::from(format!(
                "job '{job_id}' at {idx} is reached at {} after its time window end {}",
                activity.schedule.arrival, activity.place.time.end
            ))
        })
        .collect::<Vec<_>>();

    if let (Some(start), Some(end)) = (route.tour.start(), route.tour.end()) {
        if end.schedule.arrival > vehicle.latest_arrival() {
            errors.push(
                format!(
                    "vehicle '{}' arrives at {} after its latest arrival {}",
                    vehicle.id,
                    end.schedule.arrival,
                    vehicle.latest_arrival()
                )
                .into(),
            );
        }

        let operating_time = end.schedule.arrival - start.schedule.departure;
        if operating_time > max_driver_time {
            errors.push(
                format!(
                    "driver '{}' operates {operating_time} which exceeds max driver time {max_driver_time}",
                    route.actor.driver.id
                )
                .into(),
            );
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ").into()) }
}
