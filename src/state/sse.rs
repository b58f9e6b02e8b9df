//! Broadcast hubs backing the SSE streams.

use tokio::sync::{Mutex, broadcast};

use crate::dto::sse::ServerEvent;

/// SSE sub-state carved out from [`AppState`](super::AppState).
///
/// The public hub fans out to any number of scoreboard displays; the admin
/// hub serves the single operator console, coordinated by the token slot.
pub struct SseState {
    public: SseHub,
    admin: SseHub,
    admin_token: Mutex<Option<String>>,
}

impl SseState {
    /// Build both hubs with their per-stream channel capacities.
    pub fn new(public_capacity: usize, admin_capacity: usize) -> Self {
        Self {
            public: SseHub::new(public_capacity),
            admin: SseHub::new(admin_capacity),
            admin_token: Mutex::new(None),
        }
    }

    /// Hub used to fan out events to every connected display.
    pub fn public(&self) -> &SseHub {
        &self.public
    }

    /// Hub used for operator-only events.
    pub fn admin(&self) -> &SseHub {
        &self.admin
    }

    /// Token slot that coordinates the single operator connection.
    pub fn admin_token(&self) -> &Mutex<Option<String>> {
        &self.admin_token
    }
}

/// Thin wrapper around a Tokio broadcast channel.
pub struct SseHub {
    sender: broadcast::Sender<ServerEvent>,
}

impl SseHub {
    /// Construct a hub with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a new subscriber that will receive subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Send an event to all current subscribers, ignoring delivery errors.
    pub fn broadcast(&self, event: ServerEvent) {
        let _ = self.sender.send(event);
    }
}
