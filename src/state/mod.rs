//! Shared application state: the scoreboard behind its lock, the runtime
//! configuration, and the SSE broadcast hubs.

pub mod scoreboard;
mod sse;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::AppConfig;

pub use self::scoreboard::{Game, Scoreboard, ScoreboardError, SnapshotEntry, Team};
pub use self::sse::SseHub;
use self::sse::SseState;

/// Cheaply clonable handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state owning the scoreboard and the SSE hubs.
///
/// The scoreboard itself is synchronous; the single [`RwLock`] is the only
/// concurrency discipline the service needs.
pub struct AppState {
    config: Arc<AppConfig>,
    scoreboard: RwLock<Scoreboard>,
    sse: SseState,
}

impl AppState {
    /// Construct a fresh state wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config: Arc::new(config),
            scoreboard: RwLock::new(Scoreboard::new()),
            sse: SseState::new(16, 16),
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }

    /// Run `work` against the scoreboard under the write lock.
    ///
    /// Mutations compute everything they need (updated value, fresh ranking)
    /// inside the closure so a single critical section covers the whole
    /// operation.
    pub async fn with_scoreboard_mut<F, T>(&self, work: F) -> T
    where
        F: FnOnce(&mut Scoreboard) -> T,
    {
        let mut guard = self.scoreboard.write().await;
        work(&mut guard)
    }

    /// Run `read` against the scoreboard under the read lock.
    pub async fn read_scoreboard<F, T>(&self, read: F) -> T
    where
        F: FnOnce(&Scoreboard) -> T,
    {
        let guard = self.scoreboard.read().await;
        read(&guard)
    }

    /// Broadcast hub feeding the public SSE stream.
    pub fn public_sse(&self) -> &SseHub {
        self.sse.public()
    }

    /// Broadcast hub feeding the operator SSE stream.
    pub fn admin_sse(&self) -> &SseHub {
        self.sse.admin()
    }

    /// Token guard that ensures a single operator SSE subscriber at a time.
    pub fn admin_token(&self) -> &Mutex<Option<String>> {
        self.sse.admin_token()
    }
}
