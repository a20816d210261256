//! Bug-report defaults.

use serde::{Deserialize, Serialize};

fn default_subject() -> String {
    "Ошибка в расписании".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Subject line of a schedule error report.
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
        }
    }
}
