//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Amount formatter configuration.
    pub formatter: FormatterConfig,
    /// Budget usage thresholds.
    pub budget: BudgetConfig,
    /// Goal deadline thresholds.
    pub goal: GoalConfig,
}

/// Locale used for thousands grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum LocaleSetting {
    /// Indonesian grouping: `1.000.000`.
    #[default]
    #[serde(rename = "id-ID", alias = "id_id", alias = "id")]
    IdId,
    /// US grouping: `1,000,000`.
    #[serde(rename = "en-US", alias = "en_us", alias = "en")]
    EnUs,
    /// No grouping: `1000000`.
    #[serde(rename = "none")]
    Ungrouped,
}

/// How a focused amount field renders what the user types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingStyle {
    /// Digits only: `1000000`.
    #[default]
    Bare,
    /// Grouped digits without the prefix: `1.000.000`.
    Grouped,
}

/// Amount formatter configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Literal placed before the grouped digits.
    pub prefix: String,
    /// Thousands grouping locale.
    pub locale: LocaleSetting,
    /// Rendering while the field is focused.
    pub typing_style: TypingStyle,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            locale: LocaleSetting::default(),
            typing_style: TypingStyle::default(),
        }
    }
}

fn default_prefix() -> String {
    "Rp. ".to_string()
}

/// Budget usage thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Usage percentage at which a budget is flagged as a warning.
    pub warning_percent: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            warning_percent: default_warning_percent(),
        }
    }
}

fn default_warning_percent() -> u32 {
    80
}

/// Goal deadline thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    /// Days before the deadline at which a goal is flagged as near.
    pub near_deadline_days: i64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            near_deadline_days: default_near_deadline_days(),
        }
    }
}

fn default_near_deadline_days() -> i64 {
    7
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RUPIAH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
