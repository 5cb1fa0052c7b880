use freeti::core::models::sample::{EndStatePair, EndStateSample};
use freeti::engine::config as core_config;

pub struct AppConfig {
    pub lambda0: EndStateSample,
    pub lambda1: EndStateSample,
    pub precision: usize,
    pub core_config: core_config::IntegrationConfig,
}

pub struct BatchAppConfig {
    pub pairs: Vec<EndStatePair>,
    pub precision: usize,
    pub core_config: core_config::IntegrationConfig,
}
