//! Audit journal for cart changes
//!
//! Appends one JSON line per mutation to `<data dir>/audit.log`.

use crate::cart::CartChange;
use chrono::Utc;
use serde_json::json;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// File-based audit journal that appends JSON lines
#[derive(Debug)]
pub struct AuditLog {
    enabled: bool,
    path: PathBuf,
}

impl AuditLog {
    /// Create a journal writing to `path`
    pub fn new(enabled: bool, path: PathBuf) -> Self {
        Self { enabled, path }
    }

    /// Record a cart change under `event`
    ///
    /// `Unchanged` results are not recorded.
    pub async fn record(&self, event: &str, change: &CartChange) {
        let data = match change {
            CartChange::Added(item) | CartChange::Updated(item) | CartChange::Removed(item) => {
                json!({ "id": item.id, "quantity": item.quantity, "outcome": outcome(change) })
            }
            CartChange::Unchanged => return,
        };

        self.log(event, &data).await;
    }

    /// Log an event as a JSON line
    ///
    /// IO failures are logged and dropped.
    pub async fn log(&self, event: &str, data: &serde_json::Value) {
        if !self.enabled {
            return;
        }

        let entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event": event,
            "data": data,
        });

        let mut line = match serde_json::to_string(&entry) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize audit event: {}", e);
                return;
            }
        };
        line.push('\n');

        if let Err(e) = self.append(&line).await {
            warn!("Failed to write audit log {}: {}", self.path.display(), e);
        }
    }

    async fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

fn outcome(change: &CartChange) -> &'static str {
    match change {
        CartChange::Added(_) => "added",
        CartChange::Updated(_) => "updated",
        CartChange::Removed(_) => "removed",
        CartChange::Unchanged => "unchanged",
    }
}
