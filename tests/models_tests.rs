// Model serialization tests (inbound snapshot shape, camelCase display output)

mod common;

use statusboard::formatter::{ArgumentOrder, format_snapshot};
use statusboard::models::*;

#[test]
fn test_snapshot_parses_system_info_payload() {
    let snapshot = common::system_info_snapshot();
    assert_eq!(snapshot.system.system_load_average, Some(1.234));
    assert_eq!(
        snapshot.system.total_physical_memory_size,
        Some(MemoryValue::Number(17179869184.0))
    );
    assert_eq!(
        snapshot.jvm.memory.max,
        Some(MemoryValue::Text("2 GB".into()))
    );
    assert_eq!(
        snapshot.jvm.memory.raw.as_ref().and_then(|r| r.used.clone()),
        Some(MemoryValue::Number(115867648.0))
    );
    assert!(
        snapshot
            .lucene
            .impl_version
            .as_deref()
            .is_some_and(|v| v.starts_with("9.4.0 "))
    );
    assert!(snapshot.security.authentication_plugin.is_some());
    assert_eq!(snapshot.jvm.jmx.command_line_args.len(), 3);
}

#[test]
fn test_snapshot_missing_sections_default() {
    let snapshot: StatusSnapshot = serde_json::from_str("{}").unwrap();
    assert!(snapshot.system.total_physical_memory_size.is_none());
    assert!(snapshot.jvm.memory.raw.is_none());
    assert!(snapshot.jvm.jmx.command_line_args.is_empty());
    assert!(snapshot.lucene.impl_version.is_none());
    assert!(snapshot.security.authentication_plugin.is_none());
}

#[test]
fn test_heap_accessors_prefer_raw_unless_blank() {
    let memory: JvmMemory = serde_json::from_str(
        r#"{"max": "2 GB", "total": "512 MB", "used": "1 MB", "raw": {"max": 0, "total": 1024}}"#,
    )
    .unwrap();
    assert_eq!(memory.max(), Some(&MemoryValue::Text("2 GB".into())));
    assert_eq!(memory.total(), Some(&MemoryValue::Number(1024.0)));
    assert_eq!(memory.used(), Some(&MemoryValue::Text("1 MB".into())));
}

#[test]
fn test_memory_value_blank() {
    assert!(MemoryValue::from(0u64).is_blank());
    assert!(MemoryValue::from("").is_blank());
    assert!(!MemoryValue::from("0 MB").is_blank());
    assert!(!MemoryValue::from(1.0).is_blank());
}

#[test]
fn test_display_metrics_serialization_camel_case() {
    let snapshot = common::system_info_snapshot();
    let metrics = format_snapshot(&snapshot, ArgumentOrder::Sorted, chrono::Utc::now());
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["memoryPercentage"], "75.0%");
    assert_eq!(json["javaMemoryUsedDisplay"], "110.50 MB");
    assert_eq!(json["commandLineOrderBy"], "Sorted");
    assert_eq!(json["showInfoBar"], true);
    assert_eq!(json["isSecurityEnabled"], true);
    let back: DisplayMetrics = serde_json::from_value(json).unwrap();
    assert_eq!(back, metrics);
}
