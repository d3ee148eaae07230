// Shared test helpers

#![allow(dead_code)]

use async_trait::async_trait;
use statusboard::models::StatusSnapshot;
use statusboard::source::{SourceError, StatusSource};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Trimmed `/admin/info/system` payload from a 9.4 node.
pub const SYSTEM_INFO_JSON: &str = r#"{
  "responseHeader": { "status": 0, "QTime": 12 },
  "mode": "std",
  "lucene": {
    "solr-spec-version": "9.4.0",
    "solr-impl-version": "9.4.0 71e101a2e4a5a7de8b0ab6d7d27b4e6bd0bd1deb - stillalex - 2023-11-15 10:00:00",
    "lucene-spec-version": "9.8.0"
  },
  "jvm": {
    "version": "17.0.9 17.0.9+9",
    "memory": {
      "free": "401.5 MB",
      "total": "512 MB",
      "max": "2 GB",
      "used": "110.5 MB (%5.4)",
      "raw": {
        "free": 420993024,
        "total": 536870912,
        "max": 2147483648,
        "used": 115867648,
        "used%": 5.395507812
      }
    },
    "jmx": {
      "startTime": "2023-11-20T08:00:00.000Z",
      "upTimeMS": 86400000,
      "commandLineArgs": ["-Xmx2g", "-Dfoo=1", "-Dbar=2"]
    }
  },
  "security": { "authenticationPlugin": "org.apache.solr.security.BasicAuthPlugin" },
  "system": {
    "name": "Linux",
    "arch": "amd64",
    "availableProcessors": 8,
    "systemLoadAverage": 1.234,
    "totalPhysicalMemorySize": 17179869184,
    "freePhysicalMemorySize": 4294967296,
    "totalSwapSpaceSize": 2147483648,
    "freeSwapSpaceSize": 1073741824,
    "openFileDescriptorCount": 256,
    "maxFileDescriptorCount": 1024
  }
}"#;

pub fn system_info_snapshot() -> StatusSnapshot {
    serde_json::from_str(SYSTEM_INFO_JSON).expect("fixture parses")
}

pub fn snapshot_with_args(args: &[&str]) -> StatusSnapshot {
    let mut snapshot = system_info_snapshot();
    snapshot.jvm.jmx.command_line_args = args.iter().map(|a| a.to_string()).collect();
    snapshot
}

pub enum Step {
    Snapshot(StatusSnapshot, Duration),
    Fail(&'static str),
}

/// Replays scripted fetch results in order; once drained, keeps returning
/// the fixture snapshot.
#[derive(Default)]
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self) -> Result<StatusSnapshot, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Snapshot(snapshot, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(snapshot)
            }
            Some(Step::Fail(msg)) => Err(SourceError::Local(msg.to_string())),
            None => Ok(system_info_snapshot()),
        }
    }
}
