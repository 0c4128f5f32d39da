//! Contains functionality which is applied around the search: configuration and post processing
//! of the best known solution.

pub mod config;
pub mod processing;
