// Command-line argument ordering and its session preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormatError;
use crate::session::SessionStore;

/// Session key holding the preferred argument order.
pub const ORDER_BY_KEY: &str = "commandline.orderby";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentOrder {
    Sorted,
    #[default]
    Unsorted,
}

impl ArgumentOrder {
    pub fn toggled(self) -> Self {
        match self {
            ArgumentOrder::Sorted => ArgumentOrder::Unsorted,
            ArgumentOrder::Unsorted => ArgumentOrder::Sorted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentOrder::Sorted => "Sorted",
            ArgumentOrder::Unsorted => "Unsorted",
        }
    }

    /// Stored preference, or `default` when nothing (or garbage) is stored.
    pub fn load(store: &dyn SessionStore, default: ArgumentOrder) -> Self {
        store
            .get(ORDER_BY_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn save(self, store: &dyn SessionStore) {
        store.set(ORDER_BY_KEY, self.as_str());
    }
}

impl fmt::Display for ArgumentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentOrder {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sorted" => Ok(ArgumentOrder::Sorted),
            "Unsorted" => Ok(ArgumentOrder::Unsorted),
            other => Err(FormatError::UnknownOrder(other.to_string())),
        }
    }
}

/// A fresh list: a lexicographically sorted copy for `Sorted`, the original
/// order for `Unsorted`. `args` is never touched.
pub fn order_command_line_args(args: &[String], order: ArgumentOrder) -> Vec<String> {
    let mut ordered = args.to_vec();
    if order == ArgumentOrder::Sorted {
        ordered.sort();
    }
    ordered
}
