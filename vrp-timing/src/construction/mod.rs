//! The construction module contains logic which is used to evaluate and maintain routes during
//! insertion based search.

pub mod enablers;
pub mod features;
pub mod heuristics;
