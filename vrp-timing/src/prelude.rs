//! This module reimports commonly used types.

pub use crate::construction::enablers::{
    LatestActivityStartActivityState, LatestArrivalAtDepotTourState, TotalDurationTourState,
};
pub use crate::construction::features::{
    ConstraintStatus, DriverTimeFeature, DriverTimeFeatureBuilder, FeatureConstraint, FeatureState,
};
pub use crate::construction::heuristics::{
    ActivityContext, InsertionContext, InsertionPosition, InsertionResult, RouteContext, RouteState, SolutionContext,
    eval_job_insertion_in_route,
};
pub use crate::models::common::{Distance, Duration, Location, Schedule, TimeInterval, TimeWindow, Timestamp};
pub use crate::models::problem::{
    ActivityCost, Actor, Driver, Job, MatrixData, SimpleActivityCost, TransportCost, TravelTime, Vehicle,
    VehiclePlace, create_matrix_transport_cost,
};
pub use crate::models::solution::{Activity, Place, Route, Tour};
pub use crate::solver::processing::{CompositeProcessing, RescheduleDeparture, SolutionProcessing};
pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
