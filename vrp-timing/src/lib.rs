//! This crate contains the time window feasibility building blocks used by insertion based heuristics
//! to solve variations of ***Vehicle Routing Problem*** where a driver has a limited operating time.
//!
//! The main parts are:
//! - a backward propagation of latest feasible activity start times, see
//!   [`construction::enablers::propagate_latest_starts`];
//! - a hard activity constraint which classifies insertion of a new activity, see
//!   [`construction::features::DriverTimeFeature`];
//! - a post processing step which removes unnecessary waiting at the first activity, see
//!   [`solver::processing::RescheduleDeparture`].

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
#[allow(missing_docs)]
pub mod helpers;

#[macro_use]
mod macros;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
