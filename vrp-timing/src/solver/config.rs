//! Feature and post processing configuration.

#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::construction::features::{DriverTimeFeature, DriverTimeFeatureBuilder};
use crate::models::problem::{ActivityCost, TransportCost};
use crate::solver::processing::{CompositeProcessing, RescheduleDeparture, SolutionProcessing};
use crate::utils::{Environment, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A name of the feature created from configuration.
const DRIVER_TIME_FEATURE_NAME: &str = "driver_time";

/// A timing configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies driver time limits.
    pub driver_time: Option<DriverTimeConfig>,
    /// Specifies post processing of the best known solution.
    pub processing: Option<ProcessingConfig>,
    /// Specifies environment settings.
    pub environment: Option<EnvironmentConfig>,
}

/// A driver time configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverTimeConfig {
    /// Max driver operating time. Default is no limit.
    pub max_driver_time: Option<f64>,
}

/// A post processing configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingConfig {
    /// Specifies whether waiting at the first activity is removed by delaying departure. Default is true.
    pub reschedule_departure: Option<bool>,
}

/// An environment configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Specifies logging settings. No logging if not set.
    pub logging: Option<LoggingConfig>,
    /// Specifies whether route states are refreshed in parallel. Default is true.
    pub is_parallel: Option<bool>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies a prefix added to every message.
    pub prefix: Option<String>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an environment from config.
pub fn create_environment(config: &Config) -> Environment {
    let is_parallel = config.environment.as_ref().and_then(|env| env.is_parallel).unwrap_or(true);

    match config.environment.as_ref().and_then(|env| env.logging.as_ref()) {
        Some(LoggingConfig { enabled, prefix }) if *enabled => {
            let prefix = prefix.clone().unwrap_or_default();
            Environment::new(Arc::new(move |msg: &str| println!("{prefix}{msg}")), is_parallel)
        }
        _ => Environment::new_silent(is_parallel),
    }
}

/// Creates a driver time feature from config.
pub fn create_feature_from_config(
    config: &Config,
    transport: Arc<dyn TransportCost + Send + Sync>,
    activity: Arc<dyn ActivityCost + Send + Sync>,
) -> GenericResult<DriverTimeFeature> {
    let environment = create_environment(config);

    let builder = DriverTimeFeatureBuilder::new(DRIVER_TIME_FEATURE_NAME)
        .set_transport(transport)
        .set_activity(activity)
        .set_environment(&environment);

    let builder = match config.driver_time.as_ref().and_then(|driver_time| driver_time.max_driver_time) {
        Some(max_driver_time) => builder.set_max_driver_time(max_driver_time),
        None => builder,
    };

    builder.build()
}

/// Creates post processing steps from config.
pub fn create_post_processing_from_config(
    config: &Config,
    feature: Arc<DriverTimeFeature>,
    environment: Arc<Environment>,
) -> CompositeProcessing {
    let reschedule_departure =
        config.processing.as_ref().and_then(|processing| processing.reschedule_departure).unwrap_or(true);

    let processors: Vec<Arc<dyn SolutionProcessing + Send + Sync>> = if reschedule_departure {
        vec![Arc::new(RescheduleDeparture::new(feature, environment))]
    } else {
        vec![]
    };

    CompositeProcessing::new(processors)
}
