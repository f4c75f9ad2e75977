//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Record snapshot configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Dashboard and list view defaults.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Where the host reads its record snapshot from.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the JSON snapshot of centres, responsables, expenses and budgets.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of centres in the concentrated (pie) view.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Number of expenses in the "recent" table.
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
    /// Rows per page in the expense list.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Default trend window: `month`, `quarter` or `year`.
    #[serde(default = "default_trend_range")]
    pub trend_range: String,
}

fn default_top_n() -> usize {
    6
}

fn default_recent_count() -> usize {
    5
}

fn default_page_size() -> u32 {
    9
}

fn default_trend_range() -> String {
    "year".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            recent_count: default_recent_count(),
            page_size: default_page_size(),
            trend_range: default_trend_range(),
        }
    }
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
            .add_source(config::Environment::with_prefix("BUDGETSCOPE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "BUDGETSCOPE__SNAPSHOT__PATH",
                "BUDGETSCOPE__DASHBOARD__TOP_N",
                "RUN_MODE",
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.snapshot.path, "data/snapshot.json");
        assert_eq!(config.dashboard.top_n, 6);
        assert_eq!(config.dashboard.recent_count, 5);
        assert_eq!(config.dashboard.page_size, 9);
        assert_eq!(config.dashboard.trend_range, "year");
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("BUDGETSCOPE__SNAPSHOT__PATH", Some("/tmp/records.json")),
                ("BUDGETSCOPE__DASHBOARD__TOP_N", Some("3")),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.snapshot.path, "/tmp/records.json");
        assert_eq!(config.dashboard.top_n, 3);
        assert_eq!(config.dashboard.page_size, 9);
    }
}
