// Inbound status snapshot (shape owned by the remote status endpoint)

use serde::{Deserialize, Serialize};

/// A size or count as reported by the status endpoint: either a plain JSON
/// number or a memory-value string such as `"512.5 MB"` or `"2G"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoryValue {
    Number(f64),
    Text(String),
}

impl MemoryValue {
    /// Zero, NaN and empty strings count as "not reported".
    pub fn is_blank(&self) -> bool {
        match self {
            MemoryValue::Number(n) => *n == 0.0 || n.is_nan(),
            MemoryValue::Text(s) => s.is_empty(),
        }
    }
}

impl From<f64> for MemoryValue {
    fn from(n: f64) -> Self {
        MemoryValue::Number(n)
    }
}

impl From<u64> for MemoryValue {
    fn from(n: u64) -> Self {
        MemoryValue::Number(n as f64)
    }
}

impl From<&str> for MemoryValue {
    fn from(s: &str) -> Self {
        MemoryValue::Text(s.to_string())
    }
}

impl From<String> for MemoryValue {
    fn from(s: String) -> Self {
        MemoryValue::Text(s)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    #[serde(default)]
    pub system: SystemSection,
    #[serde(default)]
    pub jvm: JvmSection,
    #[serde(default)]
    pub lucene: LuceneSection,
    #[serde(default)]
    pub security: SecuritySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSection {
    /// Negative means the platform cannot report it.
    #[serde(default)]
    pub system_load_average: Option<f64>,
    #[serde(default)]
    pub total_physical_memory_size: Option<MemoryValue>,
    #[serde(default)]
    pub free_physical_memory_size: Option<MemoryValue>,
    #[serde(default)]
    pub total_swap_space_size: Option<MemoryValue>,
    #[serde(default)]
    pub free_swap_space_size: Option<MemoryValue>,
    #[serde(default)]
    pub open_file_descriptor_count: Option<MemoryValue>,
    #[serde(default)]
    pub max_file_descriptor_count: Option<MemoryValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JvmSection {
    #[serde(default)]
    pub memory: JvmMemory,
    #[serde(default)]
    pub jmx: JmxSection,
}

/// Heap figures. `raw` carries exact byte counts; the top-level fields are
/// usually pre-rendered strings like `"1.5 GB"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JvmMemory {
    #[serde(default)]
    pub max: Option<MemoryValue>,
    #[serde(default)]
    pub total: Option<MemoryValue>,
    #[serde(default)]
    pub used: Option<MemoryValue>,
    #[serde(default)]
    pub raw: Option<JvmMemoryRaw>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JvmMemoryRaw {
    #[serde(default)]
    pub max: Option<MemoryValue>,
    #[serde(default)]
    pub total: Option<MemoryValue>,
    #[serde(default)]
    pub used: Option<MemoryValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmxSection {
    #[serde(default)]
    pub command_line_args: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LuceneSection {
    #[serde(rename = "solr-impl-version", default)]
    pub impl_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySection {
    /// Any value here means an authentication plugin is configured.
    #[serde(default)]
    pub authentication_plugin: Option<serde_json::Value>,
}

impl JvmMemory {
    pub fn max(&self) -> Option<&MemoryValue> {
        prefer_raw(self.raw.as_ref().and_then(|r| r.max.as_ref()), self.max.as_ref())
    }

    pub fn total(&self) -> Option<&MemoryValue> {
        prefer_raw(
            self.raw.as_ref().and_then(|r| r.total.as_ref()),
            self.total.as_ref(),
        )
    }

    pub fn used(&self) -> Option<&MemoryValue> {
        prefer_raw(
            self.raw.as_ref().and_then(|r| r.used.as_ref()),
            self.used.as_ref(),
        )
    }
}

fn prefer_raw<'a>(
    raw: Option<&'a MemoryValue>,
    fallback: Option<&'a MemoryValue>,
) -> Option<&'a MemoryValue> {
    raw.filter(|v| !v.is_blank()).or(fallback)
}
