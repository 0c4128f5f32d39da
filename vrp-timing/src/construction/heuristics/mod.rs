//! Contains contexts and evaluators used by insertion heuristics.

mod context;
pub use self::context::*;

mod evaluators;
pub use self::evaluators::*;
