use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub operator: OperatorConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OperatorConfig {
    /// Brand name shown in the presentation layer.
    pub name: String,
    /// Prefix of every booking code, e.g. `ET` in `ET-ABC12-...`.
    pub code_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Hours before departure up to which a cancellation is refundable.
    pub refund_window_hours: i64,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("operator.name", "Estrella Tour")?
            .set_default("operator.code_prefix", "ET")?
            .set_default("business_rules.refund_window_hours", 24)?
            // Optional configuration files; the defaults above make them
            // unnecessary for the demo deployment
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ESTRELLA__BUSINESS_RULES__REFUND_WINDOW_HOURS=48`
            .add_source(config::Environment::with_prefix("ESTRELLA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
