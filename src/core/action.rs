//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Query service answers? That's `Action::QuerySettled { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::route::Route;
use crate::core::state::{App, Status};
use crate::query::{QueryError, QueryResponse};

/// Bot text when the service answered but gave no usable `response`.
pub const NOT_UNDERSTOOD: &str = "I couldn't understand that query.";
/// Bot text when the request itself failed.
pub const REQUEST_FAILED: &str = "Sorry, there was an error processing your request.";

#[derive(Debug)]
pub enum Action {
    Navigate(Route),
    Submit(String),
    QuerySettled {
        session_id: u64,
        outcome: Result<QueryResponse, QueryError>,
    },
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue exactly one request carrying `query` for session `session_id`.
    SpawnQuery { session_id: u64, query: String },
    Quit,
}

/// Text of the single bot message a settlement produces.
pub fn settlement_text(outcome: &Result<QueryResponse, QueryError>) -> String {
    match outcome {
        Ok(response) => response
            .reply_text()
            .unwrap_or_else(|| NOT_UNDERSTOOD.to_string()),
        Err(_) => REQUEST_FAILED.to_string(),
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => {
            info!("Navigate {} -> {}", app.route, route);
            if route == Route::Chatbot {
                app.reset_session();
            }
            app.route = route;
            app.status_message.clear();
            Effect::None
        }
        Action::Submit(text) => {
            if text.trim().is_empty() {
                return Effect::None;
            }
            if app.session.is_awaiting() {
                warn!("Submit ignored: a query is already in flight");
                return Effect::None;
            }

            app.session.transcript.push_user(text.as_str());
            app.session.status = Status::AwaitingResponse;
            app.status_message = String::from("Thinking...");
            debug!(
                "Submitted query (session={}, transcript_len={})",
                app.session.id,
                app.session.transcript.messages().len()
            );
            Effect::SpawnQuery {
                session_id: app.session.id,
                query: text,
            }
        }
        Action::QuerySettled { session_id, outcome } => {
            if session_id != app.session.id {
                debug!(
                    "Discarding settlement for stale session {} (current {})",
                    session_id, app.session.id
                );
                return Effect::None;
            }
            if !app.session.is_awaiting() {
                warn!("Discarding settlement: no query in flight");
                return Effect::None;
            }

            // Failure details go to the file log only; the transcript gets the apology
            if let Err(e) = &outcome {
                warn!("Query failed: {}", e);
            }
            app.session.transcript.push_bot(settlement_text(&outcome));
            app.session.status = Status::Idle;
            app.status_message.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
