//! # Application State
//!
//! Core business state. No TUI types here; presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn QueryClient>   // remote query service
//! ├── route: Route                   // visible screen
//! ├── session: ChatSession           // current chat
//! │   ├── id: u64                    // generation, bumps on each new session
//! │   ├── transcript: Transcript     // greeting + exchanged messages
//! │   └── status: Status             // Idle | AwaitingResponse
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::transcript::Transcript;
use crate::query::QueryClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    AwaitingResponse,
}

/// One visit to the chat view. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub id: u64,
    pub transcript: Transcript,
    pub status: Status,
}

impl ChatSession {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            transcript: Transcript::new(),
            status: Status::Idle,
        }
    }

    pub fn is_awaiting(&self) -> bool {
        self.status == Status::AwaitingResponse
    }
}

pub struct App {
    pub client: Arc<dyn QueryClient>,
    pub route: Route,
    pub session: ChatSession,
    pub status_message: String,
}

impl App {
    pub fn new(client: Arc<dyn QueryClient>, route: Route) -> Self {
        Self {
            client,
            route,
            session: ChatSession::new(0),
            status_message: String::new(),
        }
    }

    pub fn from_config(client: Arc<dyn QueryClient>, config: &ResolvedConfig) -> Self {
        Self::new(client, config.start_route)
    }

    /// Drops the current chat and starts a fresh one with a new id.
    pub fn reset_session(&mut self) {
        self.session = ChatSession::new(self.session.id.wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.route, Route::Landing);
        assert_eq!(app.session.status, Status::Idle);
        assert_eq!(app.session.transcript.messages().len(), 1);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn reset_session_bumps_id_and_reseeds() {
        let mut app = test_app();
        app.session.transcript.push_user("hello");
        app.session.status = Status::AwaitingResponse;
        let old_id = app.session.id;

        app.reset_session();

        assert_ne!(app.session.id, old_id);
        assert_eq!(app.session.transcript, Transcript::new());
        assert!(!app.session.is_awaiting());
    }
}
