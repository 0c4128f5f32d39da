//! Contains post processing logic.

use crate::construction::heuristics::SolutionContext;
use std::sync::Arc;

mod reschedule_departure;
pub use self::reschedule_departure::RescheduleDeparture;

/// A trait which specifies the logic to apply post processing to a solution.
pub trait SolutionProcessing {
    /// Applies post processing to given solution.
    fn post_process(&self, solution_ctx: SolutionContext) -> SolutionContext;
}

/// Provides the way to run multiple processors one by one on solution.
pub struct CompositeProcessing {
    processors: Vec<Arc<dyn SolutionProcessing + Send + Sync>>,
}

impl CompositeProcessing {
    /// Creates an instance of `CompositeProcessing`.
    pub fn new(processors: Vec<Arc<dyn SolutionProcessing + Send + Sync>>) -> Self {
        Self { processors }
    }

    /// Returns true if there is no processor to run.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl SolutionProcessing for CompositeProcessing {
    fn post_process(&self, solution_ctx: SolutionContext) -> SolutionContext {
        self.processors.iter().fold(solution_ctx, |solution_ctx, processor| processor.post_process(solution_ctx))
    }
}
