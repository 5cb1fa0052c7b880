use freeti::engine::config::DEFAULT_PROFILE_POINTS;

pub struct DefaultsConfig {
    pub uncertainty_model: String,
    pub profile_points: usize,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            uncertainty_model: "delta-method".to_string(),
            profile_points: DEFAULT_PROFILE_POINTS,
            precision: 4,
        }
    }
}
