//! Trip state ownership and persistence.
//!
//! [`TripStore`] owns the [`TripState`], applies actions through the pure
//! reducer, and snapshots the result after every transition. Persistence is
//! best-effort: a failed write is logged and swallowed, a failed or
//! malformed read at startup falls back to defaults.

use crate::action::{reduce, TripAction};
use crate::types::TripState;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

// ─── Snapshot backends ────────────────────────────────────────

/// Persistence trait for the trip snapshot — a single named blob.
///
/// The store operates exclusively through this trait, enabling pluggable
/// backends (memory for tests, a JSON file for local sessions).
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, state: &TripState) -> Result<()>;
    async fn load(&self) -> Result<Option<TripState>>;
}

/// In-memory SnapshotStore for testing and POC.
#[derive(Default)]
pub struct MemorySnapshotStore {
    inner: RwLock<Option<TripState>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn save(&self, state: &TripState) -> Result<()> {
        let mut inner = self.inner.write().map_err(|e| anyhow!("Lock: {}", e))?;
        *inner = Some(state.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<TripState>> {
        let inner = self.inner.read().map_err(|e| anyhow!("Lock: {}", e))?;
        Ok(inner.clone())
    }
}

/// SnapshotStore backed by one JSON file on disk.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn save(&self, state: &TripState) -> Result<()> {
        let json = serde_json::to_vec(state).context("serialize trip snapshot")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("write trip snapshot to {}", self.path.display()))?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<TripState>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read trip snapshot from {}", self.path.display()))
            }
        };
        let state = serde_json::from_slice(&bytes).context("parse trip snapshot")?;
        Ok(Some(state))
    }
}

// ─── TripStore ────────────────────────────────────────────────

/// Owns the canonical [`TripState`] and is the sole mutation path.
///
/// Explicitly constructed and passed by reference wherever it is needed —
/// there is no ambient singleton. Lifecycle: created at session start,
/// dropped at session end.
pub struct TripStore {
    state: TripState,
    snapshots: Arc<dyn SnapshotStore>,
}

impl TripStore {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self {
            state: TripState::default(),
            snapshots,
        }
    }

    /// Load the persisted snapshot, if any. Read or parse failures are
    /// swallowed; the store keeps its defaults.
    pub async fn restore(&mut self) {
        match self.snapshots.load().await {
            Ok(Some(saved)) => {
                debug!(step = saved.current_step, "restored trip snapshot");
                self.state = saved;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "discarding unreadable trip snapshot"),
        }
    }

    pub fn state(&self) -> &TripState {
        &self.state
    }

    /// Apply an action and persist the result. The write is fire-and-forget:
    /// failures are logged, never surfaced to the caller.
    pub async fn dispatch(&mut self, action: TripAction) {
        self.state = reduce(&self.state, &action);
        if let Err(e) = self.snapshots.save(&self.state).await {
            warn!(error = %e, "trip snapshot write failed");
        }
    }
}
