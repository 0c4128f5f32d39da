//! A collection of models to represent vehicle routing problem and its solution.

pub mod common;
pub mod problem;
pub mod solution;
