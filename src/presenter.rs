// Reload cycle: fetch a snapshot, format it, keep only the newest result.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, instrument};

use crate::formatter::{ArgumentOrder, format_snapshot, order_command_line_args};
use crate::models::{CommandLineView, DisplayMetrics, StatusSnapshot};
use crate::session::SessionStore;
use crate::source::{SourceError, StatusSource};

/// Snapshot applied by the reload with this generation.
struct Applied {
    generation: u64,
    snapshot: Arc<StatusSnapshot>,
}

pub struct StatusPresenter {
    source: Arc<dyn StatusSource>,
    default_order: ArgumentOrder,
    generation: AtomicU64,
    latest: Mutex<Option<Applied>>,
}

impl StatusPresenter {
    pub fn new(source: Arc<dyn StatusSource>, default_order: ArgumentOrder) -> Self {
        Self {
            source,
            default_order,
            generation: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Fetches a fresh snapshot and formats it with the session's argument
    /// order. A reload that finishes after a newer one has already been
    /// applied still returns its metrics but does not replace the newer
    /// snapshot.
    #[instrument(skip_all)]
    pub async fn reload(&self, session: &dyn SessionStore) -> Result<DisplayMetrics, SourceError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = Arc::new(self.source.fetch().await?);
        let order = ArgumentOrder::load(session, self.default_order);
        let metrics = format_snapshot(&snapshot, order, Utc::now());
        self.apply(generation, snapshot);
        Ok(metrics)
    }

    fn apply(&self, generation: u64, snapshot: Arc<StatusSnapshot>) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = latest.as_ref()
            && current.generation > generation
        {
            debug!(
                generation,
                current = current.generation,
                "dropping stale snapshot"
            );
            return false;
        }
        *latest = Some(Applied {
            generation,
            snapshot,
        });
        true
    }

    /// Snapshot of the newest reload applied so far.
    pub fn latest_snapshot(&self) -> Option<Arc<StatusSnapshot>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|a| a.snapshot.clone())
    }

    /// Command-line arguments of the latest snapshot in the session's order.
    pub fn command_line(&self, session: &dyn SessionStore) -> CommandLineView {
        let order = ArgumentOrder::load(session, self.default_order);
        self.view(order)
    }

    /// Flips and persists the session's order, then re-renders the argument
    /// list. Nothing is fetched.
    #[instrument(skip_all)]
    pub fn toggle_command_line_order(&self, session: &dyn SessionStore) -> CommandLineView {
        let order = ArgumentOrder::load(session, self.default_order).toggled();
        order.save(session);
        debug!(%order, "command line order toggled");
        self.view(order)
    }

    fn view(&self, order: ArgumentOrder) -> CommandLineView {
        let args = self
            .latest_snapshot()
            .map(|s| order_command_line_args(&s.jvm.jmx.command_line_args, order))
            .unwrap_or_default();
        CommandLineView {
            order_by: order,
            args,
        }
    }
}
