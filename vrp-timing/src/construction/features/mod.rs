//! Provides features which keep route states and check hard constraints during insertion.

use crate::construction::heuristics::*;
use crate::models::common::Timestamp;
use crate::models::problem::Job;

mod driver_time;
pub use self::driver_time::*;

/// Specifies result of hard activity constraint check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstraintStatus {
    /// Constraint is fulfilled.
    Fulfilled,
    /// Constraint is not fulfilled for this insertion point, other points should be tried.
    NotFulfilled,
    /// Constraint is not fulfilled and no later insertion point in the same route can fulfill it.
    NotFulfilledBreak,
}

impl ConstraintStatus {
    /// Returns true if constraint is fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, ConstraintStatus::Fulfilled)
    }

    /// Returns true if evaluation of the remaining insertion points should be stopped.
    pub fn is_stopped(&self) -> bool {
        matches!(self, ConstraintStatus::NotFulfilledBreak)
    }
}

/// Defines feature constraint behavior.
pub trait FeatureConstraint {
    /// Evaluates insertion of target activity between prev and next ones, given departure
    /// time at the previous activity.
    fn evaluate(
        &self,
        insertion_ctx: &InsertionContext<'_>,
        activity_ctx: &ActivityContext<'_>,
        prev_departure: Timestamp,
    ) -> ConstraintStatus;
}

/// Provides the way to modify solution state when the search is performed.
pub trait FeatureState {
    /// Accept insertion of specific job into the route.
    /// Called once job has been inserted into solution represented via `solution_ctx`.
    /// Target route is defined by `route_index` which refers to `routes` collection in solution context.
    fn accept_insertion(&self, solution_ctx: &mut SolutionContext, route_index: usize, job: &Job);

    /// Accept route and updates its state to allow more efficient constraint checks.
    /// This method should NOT modify amount of job activities in the tour.
    fn accept_route_state(&self, route_ctx: &mut RouteContext);

    /// Accepts solution state. Only stale routes are expected to be updated.
    fn accept_solution_state(&self, solution_ctx: &mut SolutionContext);
}
