// Display-ready metrics derived from one status snapshot

use serde::{Deserialize, Serialize};

use crate::formatter::ArgumentOrder;

/// Every string is pre-formatted; clients render them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    /// Two decimals; absent when the platform reports a negative load.
    pub load_average: Option<String>,
    pub memory_percentage: String,
    pub memory_max: String,
    pub memory_total_display: String,
    pub swap_percentage: String,
    pub swap_max: String,
    pub swap_total_display: String,
    pub file_descriptor_percentage: String,
    pub java_memory_total_percentage: String,
    pub java_memory_used_percentage: String,
    pub java_memory_percentage: String,
    pub java_memory_total_display: String,
    pub java_memory_used_display: String,
    pub java_memory_max: String,
    pub version: Option<String>,
    /// Fractional days since the release date; `None` when the version
    /// string carries no recognizable date.
    pub release_days_old: Option<f64>,
    pub is_security_enabled: bool,
    pub show_info_bar: bool,
    pub command_line_order_by: ArgumentOrder,
    pub command_line_args: Vec<String>,
}

/// The command-line panel after a toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLineView {
    pub order_by: ArgumentOrder,
    pub args: Vec<String>,
}
