// Metrics formatter: raw snapshot fields to display-ready values

mod args;
mod memory;
mod release;

pub use args::{ArgumentOrder, ORDER_BY_KEY, order_command_line_args};
pub use memory::{compute_percentage, parse_memory_value, pretty_print_bytes};
pub use release::{days_since, find_release_date, parse_release_date};

use chrono::{DateTime, NaiveTime, Utc};
use tracing::warn;

use crate::models::{DisplayMetrics, MemoryValue, StatusSnapshot};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("unparseable memory value: {0:?}")]
    UnparseableMemoryValue(String),
    #[error("unknown argument order: {0:?}")]
    UnknownOrder(String),
}

/// Bytes for an optional field. Missing or unparseable values become NaN,
/// which renders as the "NaN" sentinel downstream.
fn bytes_or_nan(field: &str, value: Option<&MemoryValue>) -> f64 {
    let Some(value) = value else {
        return f64::NAN;
    };
    match parse_memory_value(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(field, "{}", e);
            f64::NAN
        }
    }
}

/// Present, parseable and non-zero. An unparseable string counts as missing.
fn is_reported(value: Option<&MemoryValue>) -> bool {
    value
        .and_then(|v| parse_memory_value(v).ok())
        .is_some_and(|n| n != 0.0 && !n.is_nan())
}

/// Builds the full display state from one snapshot. Nothing is carried over
/// between calls.
pub fn format_snapshot(
    snapshot: &StatusSnapshot,
    order: ArgumentOrder,
    now: DateTime<Utc>,
) -> DisplayMetrics {
    let system = &snapshot.system;
    let heap = &snapshot.jvm.memory;

    let load_average = system
        .system_load_average
        .filter(|load| *load >= 0.0)
        .map(|load| format!("{:.2}", load));

    let memory_max = bytes_or_nan(
        "totalPhysicalMemorySize",
        system.total_physical_memory_size.as_ref(),
    );
    let memory_free = bytes_or_nan(
        "freePhysicalMemorySize",
        system.free_physical_memory_size.as_ref(),
    );
    let memory_used = memory_max - memory_free;

    let swap_max = bytes_or_nan("totalSwapSpaceSize", system.total_swap_space_size.as_ref());
    let swap_free = bytes_or_nan("freeSwapSpaceSize", system.free_swap_space_size.as_ref());
    let swap_used = swap_max - swap_free;

    let fd_open = bytes_or_nan(
        "openFileDescriptorCount",
        system.open_file_descriptor_count.as_ref(),
    );
    let fd_max = bytes_or_nan(
        "maxFileDescriptorCount",
        system.max_file_descriptor_count.as_ref(),
    );

    let java_max = bytes_or_nan("jvm.memory.max", heap.max());
    let java_total = bytes_or_nan("jvm.memory.total", heap.total());
    let java_used = bytes_or_nan("jvm.memory.used", heap.used());

    let show_info_bar = [
        &system.total_physical_memory_size,
        &system.free_physical_memory_size,
        &system.total_swap_space_size,
        &system.free_swap_space_size,
        &system.open_file_descriptor_count,
        &system.max_file_descriptor_count,
    ]
    .into_iter()
    .all(|field| is_reported(field.as_ref()));

    let version = snapshot.lucene.impl_version.clone();
    let release_days_old = version
        .as_deref()
        .and_then(find_release_date)
        .map(|d| days_since(d.and_time(NaiveTime::MIN).and_utc(), now));

    DisplayMetrics {
        load_average,
        memory_percentage: compute_percentage(memory_used, memory_max),
        memory_max: pretty_print_bytes(memory_max),
        memory_total_display: pretty_print_bytes(memory_used),
        swap_percentage: compute_percentage(swap_used, swap_max),
        swap_max: pretty_print_bytes(swap_max),
        swap_total_display: pretty_print_bytes(swap_used),
        file_descriptor_percentage: compute_percentage(fd_open, fd_max),
        java_memory_total_percentage: compute_percentage(java_total, java_max),
        java_memory_used_percentage: compute_percentage(java_used, java_total),
        java_memory_percentage: compute_percentage(java_used, java_max),
        java_memory_total_display: pretty_print_bytes(java_total),
        java_memory_used_display: pretty_print_bytes(java_used),
        java_memory_max: pretty_print_bytes(java_max),
        version,
        release_days_old,
        is_security_enabled: snapshot.security.authentication_plugin.is_some(),
        show_info_bar,
        command_line_order_by: order,
        command_line_args: order_command_line_args(&snapshot.jvm.jmx.command_line_args, order),
    }
}
