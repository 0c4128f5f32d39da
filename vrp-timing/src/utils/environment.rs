use std::sync::Arc;

/// Specifies a function to log information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether route states can be refreshed in parallel.
    pub is_parallel: bool,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, is_parallel: bool) -> Self {
        Self { logger, is_parallel }
    }

    /// Creates a new instance of `Environment` which does not log anything.
    pub fn new_silent(is_parallel: bool) -> Self {
        Self::new(Arc::new(|_: &str| {}), is_parallel)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(|msg: &str| println!("{msg}")), true)
    }
}
