#[cfg(test)]
#[path = "../../../tests/unit/solver/processing/reschedule_departure_test.rs"]
mod reschedule_departure_test;

use super::*;
use crate::construction::enablers::advance_departure_time;
use crate::construction::features::{DriverTimeFeature, FeatureState};
use crate::models::common::Duration;
use crate::utils::Environment;

/// Provides way to eliminate waiting time at the first activity by delaying departure time.
/// Departure is only moved forward, so the rest of the schedule is not changed.
pub struct RescheduleDeparture {
    feature: Arc<DriverTimeFeature>,
    environment: Arc<Environment>,
}

impl RescheduleDeparture {
    /// Creates a new instance of `RescheduleDeparture`.
    pub fn new(feature: Arc<DriverTimeFeature>, environment: Arc<Environment>) -> Self {
        Self { feature, environment }
    }
}

impl SolutionProcessing for RescheduleDeparture {
    fn post_process(&self, solution_ctx: SolutionContext) -> SolutionContext {
        let mut solution_ctx = solution_ctx;

        let activity = self.feature.activity();
        let transport = self.feature.transport();

        let (rescheduled, total_shift) = solution_ctx
            .routes
            .iter_mut()
            .filter_map(|route_ctx| advance_departure_time(route_ctx, activity, transport))
            .fold((0_usize, Duration::default()), |(count, total), shift| (count + 1, total + shift));

        self.feature.accept_solution_state(&mut solution_ctx);

        (self.environment.logger)(&format!(
            "rescheduled departure of {rescheduled} route(s), waiting time reduced by {total_shift}"
        ));

        solution_ctx
    }
}
