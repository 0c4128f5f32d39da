#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/evaluators_test.rs"]
mod evaluators_test;

use crate::construction::features::{ConstraintStatus, FeatureConstraint};
use crate::construction::heuristics::*;
use crate::models::solution::{Activity, Leg};
use std::ops::ControlFlow;

/// Specifies allowed insertion position in route for the job.
#[derive(Copy, Clone, Debug)]
pub enum InsertionPosition {
    /// Job can be inserted anywhere in the route.
    Any,
    /// Job can be inserted only at the leg with the concrete index.
    Concrete(usize),
    /// Job can be inserted only to the end of the route.
    Last,
}

/// Keeps result of job insertion evaluation in a single route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsertionResult {
    /// Tour indices where job's activity can be inserted.
    pub positions: Vec<usize>,

    /// True if evaluation was stopped before all requested legs were analyzed.
    pub stopped: bool,
}

impl InsertionResult {
    /// Returns true if there is at least one feasible position.
    pub fn is_success(&self) -> bool {
        !self.positions.is_empty()
    }
}

/// Evaluates possibility to insert job from given insertion context at given position constraint.
/// Legs are analyzed in tour order; a `NotFulfilledBreak` status stops analysis of the rest.
pub fn eval_job_insertion_in_route(
    constraint: &dyn FeatureConstraint,
    insertion_ctx: &InsertionContext,
    position: InsertionPosition,
) -> InsertionResult {
    let route_ctx = insertion_ctx.route_ctx;
    debug_assert!(!route_ctx.is_stale(), "route state should be accepted before evaluation");

    let target = Activity::new_with_job(insertion_ctx.job.clone());
    let tour = &route_ctx.route().tour;

    let analyze_leg = |result: InsertionResult, leg: Leg<'_>| {
        analyze_insertion_in_route_leg(constraint, insertion_ctx, leg, &target, result)
    };

    let result = match position {
        InsertionPosition::Any => tour.legs().try_fold(InsertionResult::default(), analyze_leg),
        InsertionPosition::Concrete(idx) => {
            tour.legs().nth(idx).map_or(ControlFlow::Continue(InsertionResult::default()), |leg| {
                analyze_leg(InsertionResult::default(), leg)
            })
        }
        InsertionPosition::Last => {
            tour.legs().last().map_or(ControlFlow::Continue(InsertionResult::default()), |leg| {
                analyze_leg(InsertionResult::default(), leg)
            })
        }
    };

    match result {
        ControlFlow::Continue(result) => result,
        ControlFlow::Break(result) => InsertionResult { stopped: true, ..result },
    }
}

fn analyze_insertion_in_route_leg(
    constraint: &dyn FeatureConstraint,
    insertion_ctx: &InsertionContext,
    leg: Leg<'_>,
    target: &Activity,
    mut result: InsertionResult,
) -> ControlFlow<InsertionResult, InsertionResult> {
    let (items, index) = leg;
    let (prev, next) = match items {
        [prev, next] => (prev, next),
        _ => return ControlFlow::Break(result),
    };

    // tour start departs at candidate time, the rest keeps scheduled departures
    let prev_departure = if index == 0 { insertion_ctx.departure } else { prev.schedule.departure };

    let activity_ctx = ActivityContext { index, prev, target, next };

    match constraint.evaluate(insertion_ctx, &activity_ctx, prev_departure) {
        ConstraintStatus::Fulfilled => {
            result.positions.push(index + 1);
            ControlFlow::Continue(result)
        }
        ConstraintStatus::NotFulfilled => ControlFlow::Continue(result),
        ConstraintStatus::NotFulfilledBreak => ControlFlow::Break(result),
    }
}
