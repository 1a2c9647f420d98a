//! User settings for findash
//!
//! Manages reporting preferences: which accounts count as revenue and cost
//! in the margin analysis, which fiscal years are excluded at load, and the
//! display currency symbol.

use serde::{Deserialize, Serialize};

use super::paths::FindashPaths;
use crate::error::DashError;

/// User settings for findash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Accounts treated as revenue in the margin analysis
    #[serde(default = "default_revenue_accounts")]
    pub revenue_accounts: Vec<String>,

    /// Accounts treated as cost in the margin analysis
    #[serde(default = "default_cost_accounts")]
    pub cost_accounts: Vec<String>,

    /// Fiscal years dropped at load time
    #[serde(default = "default_excluded_years")]
    pub excluded_years: Vec<i32>,

    /// Display currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_revenue_accounts() -> Vec<String> {
    vec!["Sales".to_string()]
}

fn default_cost_accounts() -> Vec<String> {
    vec!["Cost of Goods Sold".to_string()]
}

fn default_excluded_years() -> Vec<i32> {
    vec![2023]
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            revenue_accounts: default_revenue_accounts(),
            cost_accounts: default_cost_accounts(),
            excluded_years: default_excluded_years(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &FindashPaths) -> Result<Self, DashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DashError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DashError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FindashPaths) -> Result<(), DashError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| DashError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.revenue_accounts, vec!["Sales"]);
        assert_eq!(settings.cost_accounts, vec!["Cost of Goods Sold"]);
        assert_eq!(settings.excluded_years, vec![2023]);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindashPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.revenue_accounts.push("Service Revenue".to_string());
        settings.excluded_years = vec![2023, 2024];

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.revenue_accounts, vec!["Sales", "Service Revenue"]);
        assert_eq!(loaded.excluded_years, vec![2023, 2024]);
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindashPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.revenue_accounts, vec!["Sales"]);
        // nothing was persisted
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FindashPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.revenue_accounts, vec!["Sales"]);
        assert_eq!(settings.excluded_years, vec![2023]);
    }
}
