use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{EngineSettings, DEFAULT_HISTORY_WINDOW_DAYS, DEFAULT_TRENDING_LIMIT};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_history_window_days")]
    pub history_window_days: u32,
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            history_window_days: default_history_window_days(),
            trending_limit: default_trending_limit(),
        }
    }
}

impl ScoringSettings {
    /// Engine configuration derived from these settings
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            weights: ScoringWeights::from(&self.weights),
            history_window: chrono::Duration::days(i64::from(self.history_window_days)),
            trending_limit: self.trending_limit,
        }
    }
}

fn default_history_window_days() -> u32 { DEFAULT_HISTORY_WINDOW_DAYS }
fn default_trending_limit() -> usize { DEFAULT_TRENDING_LIMIT }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_course_weight")]
    pub course: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_placement_weight")]
    pub placement: f64,
    #[serde(default = "default_browsing_history_weight")]
    pub browsing_history: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            course: default_course_weight(),
            location: default_location_weight(),
            budget: default_budget_weight(),
            rating: default_rating_weight(),
            placement: default_placement_weight(),
            browsing_history: default_browsing_history_weight(),
        }
    }
}

fn default_course_weight() -> f64 { 0.25 }
fn default_location_weight() -> f64 { 0.20 }
fn default_budget_weight() -> f64 { 0.20 }
fn default_rating_weight() -> f64 { 0.15 }
fn default_placement_weight() -> f64 { 0.10 }
fn default_browsing_history_weight() -> f64 { 0.10 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            course: config.course,
            location: config.location,
            budget: config.budget,
            rating: config.rating,
            placement: config.placement,
            browsing_history: config.browsing_history,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPUS_RANK)
    /// 5. Plain `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAMPUS_RANK__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CAMPUS_RANK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed `PORT` variable on top of the loaded config
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT must be a valid port number, got '{}'", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
