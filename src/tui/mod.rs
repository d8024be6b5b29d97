//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! route, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! terminal events ──▶ dispatch_event() ──▶ update() ──▶ Effect
//!                                                        │
//!             ┌──────────────────────────────────────────┘
//!             ▼
//!      spawn_query() ── tokio task ── POST /query
//!             │
//!             └──▶ mpsc ──▶ Action::QuerySettled ──▶ update()
//! ```
//!
//! Redraws happen every ~80ms while a query is in flight (spinner) and
//! otherwise only after an event, with a 500ms idle poll.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::query::{HttpQueryClient, QueryClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, LandingEvent, LandingPage, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub landing: LandingPage,
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            landing: LandingPage::new(),
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }

    /// Presentation state that belongs to one chat session.
    fn reset_chat(&mut self) {
        self.message_list = MessageListState::new();
        self.input_box = InputBox::new();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn build_client(config: &ResolvedConfig) -> Arc<dyn QueryClient> {
    Arc::new(HttpQueryClient::new(&config.base_url))
}

/// Routes one terminal event to the component owning the current screen
/// and applies the resulting action.
pub fn dispatch_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    match app.route {
        Route::Landing => match tui.landing.handle_event(event) {
            Some(LandingEvent::EnterChat) => {
                tui.reset_chat();
                update(app, Action::Navigate(Route::Chatbot))
            }
            Some(LandingEvent::Quit) => update(app, Action::Quit),
            None => Effect::None,
        },
        Route::Chatbot => match event {
            TuiEvent::Escape => update(app, Action::Navigate(Route::Landing)),
            TuiEvent::ScrollUp
            | TuiEvent::ScrollDown
            | TuiEvent::ScrollPageUp
            | TuiEvent::ScrollPageDown => {
                tui.message_list.handle_event(event);
                Effect::None
            }
            _ => {
                tui.input_box.disabled = app.session.is_awaiting();
                match tui.input_box.handle_event(event) {
                    Some(InputEvent::Submit(text)) => update(app, Action::Submit(text)),
                    Some(InputEvent::ContentChanged) | None => Effect::None,
                }
            }
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    info!("Query endpoint: {}", client.endpoint());
    let mut app = App::from_config(client, &config);
    let mut tui = TuiState::new();

    // Starting straight on the chat view still gets a fresh session
    if app.route == Route::Chatbot {
        update(&mut app, Action::Navigate(Route::Chatbot));
    }

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        // Guard restores mouse/paste modes when the arm ends
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => Err(e),
    };
    ratatui::restore();
    info!("Shut down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = app.session.is_awaiting() && app.route == Route::Chatbot;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            match dispatch_event(app, tui, &event) {
                Effect::Quit => return Ok(()),
                Effect::SpawnQuery { session_id, query } => {
                    spawn_query(app.client.clone(), session_id, query, tx.clone());
                }
                Effect::None => {}
            }
        }

        // Settlements from background queries
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Issues exactly one query on a tokio task and reports the settlement.
fn spawn_query(
    client: Arc<dyn QueryClient>,
    session_id: u64,
    query: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning query (session={}, len={})", session_id, query.len());
    tokio::spawn(async move {
        let outcome = client.query(&query).await;
        match &outcome {
            Ok(_) => debug!("Query settled (session={})", session_id),
            Err(e) => debug!("Query failed (session={}): {}", session_id, e),
        }
        if tx
            .send(Action::QuerySettled {
                session_id,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to send settlement for session {}: receiver dropped", session_id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{NOT_UNDERSTOOD, REQUEST_FAILED};
    use crate::core::state::Status;
    use crate::query::QueryError;
    use crate::test_support::{StubClient, test_app};
    use serde_json::json;

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch_event(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_landing_enter_opens_chat() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let effect = dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.route, Route::Chatbot);
    }

    #[test]
    fn test_force_quit_from_any_route() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch_event(&mut app, &mut tui, &TuiEvent::ForceQuit), Effect::Quit);

        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(dispatch_event(&mut app, &mut tui, &TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_q_types_in_chat_but_quits_on_landing() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);

        assert_eq!(
            dispatch_event(&mut app, &mut tui, &TuiEvent::InputChar('q')),
            Effect::None
        );
        assert_eq!(tui.input_box.buffer, "q");

        dispatch_event(&mut app, &mut tui, &TuiEvent::Escape);
        assert_eq!(app.route, Route::Landing);
        assert_eq!(
            dispatch_event(&mut app, &mut tui, &TuiEvent::InputChar('q')),
            Effect::Quit
        );
    }

    #[test]
    fn test_typing_and_enter_spawns_one_query() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        type_text(&mut app, &mut tui, "hello");

        let effect = dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(
            effect,
            Effect::SpawnQuery {
                session_id: app.session.id,
                query: "hello".to_string()
            }
        );
        assert!(tui.input_box.buffer.is_empty());
        assert_eq!(app.session.status, Status::AwaitingResponse);

        // Enter again while awaiting: input refuses, nothing spawns
        type_text(&mut app, &mut tui, "again");
        assert_eq!(dispatch_event(&mut app, &mut tui, &TuiEvent::Submit), Effect::None);
        assert_eq!(tui.input_box.buffer, "again");
        assert_eq!(app.session.transcript.messages().len(), 2);
    }

    #[test]
    fn test_whitespace_submit_is_noop() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        type_text(&mut app, &mut tui, "   ");

        assert_eq!(dispatch_event(&mut app, &mut tui, &TuiEvent::Submit), Effect::None);
        assert_eq!(app.session.transcript.messages().len(), 1);
        assert_eq!(app.session.status, Status::Idle);
    }

    #[test]
    fn test_reentering_chat_clears_input() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        type_text(&mut app, &mut tui, "draft");
        dispatch_event(&mut app, &mut tui, &TuiEvent::Escape);
        dispatch_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert!(tui.input_box.buffer.is_empty());
    }

    async fn settle_via_spawn(client: StubClient) -> App {
        let mut app = App::new(Arc::new(client), Route::Landing);
        update(&mut app, Action::Navigate(Route::Chatbot));
        let Effect::SpawnQuery { session_id, query } =
            update(&mut app, Action::Submit("hello".to_string()))
        else {
            panic!("expected SpawnQuery");
        };

        let (tx, rx) = mpsc::channel();
        spawn_query(app.client.clone(), session_id, query, tx)
            .await
            .unwrap();
        let action = rx.try_recv().unwrap();
        update(&mut app, action);
        app
    }

    #[tokio::test]
    async fn test_spawn_query_reports_answer() {
        let app = settle_via_spawn(StubClient::answering(json!({"response": "Roll No: 21A"}))).await;
        assert_eq!(app.session.transcript.last().unwrap().text(), "Roll No: 21A");
        assert_eq!(app.session.status, Status::Idle);
    }

    #[tokio::test]
    async fn test_spawn_query_reports_missing_field() {
        let app = settle_via_spawn(StubClient::answering(json!({}))).await;
        assert_eq!(app.session.transcript.last().unwrap().text(), NOT_UNDERSTOOD);
    }

    #[tokio::test]
    async fn test_spawn_query_reports_failure() {
        let app = settle_via_spawn(StubClient::failing(QueryError::Network(
            "connection refused".to_string(),
        )))
        .await;
        assert_eq!(app.session.transcript.last().unwrap().text(), REQUEST_FAILED);
        assert_eq!(app.session.transcript.messages().len(), 3);
    }
}
