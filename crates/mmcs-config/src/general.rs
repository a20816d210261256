//! General application configuration.

use mmcs_core::enums::WeekTypeOption;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// View selected until the user picks one (`current`, `full`, `upper`, `lower`).
    #[serde(default)]
    pub default_week_type_option: WeekTypeOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_week() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_week_type_option, WeekTypeOption::Current);
    }
}
