// Status snapshot of this host and process via sysinfo

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use sysinfo::{ProcessesToUpdate, System};
use tracing::instrument;

use super::{SourceError, StatusSource, linux};
use crate::models::*;
use crate::version;

/// Reports the machine the dashboard runs on. The process's resident and
/// virtual memory stand in for the runtime heap.
pub struct LocalStatusSource {
    sys: Arc<Mutex<System>>,
}

impl Default for LocalStatusSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStatusSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self {
            sys: Arc::new(Mutex::new(sys)),
        }
    }
}

#[async_trait]
impl StatusSource for LocalStatusSource {
    #[instrument(skip(self), fields(source = "local"))]
    async fn fetch(&self) -> Result<StatusSnapshot, SourceError> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| SourceError::Local(format!("sysinfo lock poisoned: {}", e)))?;
            sys.refresh_memory();

            let pid = sysinfo::get_current_pid().map_err(|e| SourceError::Local(e.to_string()))?;
            sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            let (heap_used, heap_total) = sys
                .process(pid)
                .map(|p| (p.memory(), p.virtual_memory()))
                .unwrap_or((0, 0));

            // Windows has no load average; negative marks it unavailable.
            let load_average = if cfg!(unix) {
                System::load_average().one
            } else {
                -1.0
            };

            Ok(StatusSnapshot {
                system: SystemSection {
                    system_load_average: Some(load_average),
                    total_physical_memory_size: Some(sys.total_memory().into()),
                    free_physical_memory_size: Some(sys.free_memory().into()),
                    total_swap_space_size: Some(sys.total_swap().into()),
                    free_swap_space_size: Some(sys.free_swap().into()),
                    open_file_descriptor_count: linux::open_fd_count().map(MemoryValue::from),
                    max_file_descriptor_count: linux::max_fd_count().map(MemoryValue::from),
                },
                jvm: JvmSection {
                    memory: JvmMemory {
                        raw: Some(JvmMemoryRaw {
                            max: Some(sys.total_memory().into()),
                            total: Some(heap_total.into()),
                            used: Some(heap_used.into()),
                        }),
                        ..Default::default()
                    },
                    jmx: JmxSection {
                        command_line_args: std::env::args().collect(),
                    },
                },
                lucene: LuceneSection {
                    impl_version: Some(version::describe()),
                },
                security: SecuritySection::default(),
            })
        })
        .await
        .map_err(|e| SourceError::Local(format!("sysinfo task join: {}", e)))?
    }
}
