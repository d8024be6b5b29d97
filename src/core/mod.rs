//! # Core Application Logic
//!
//! Business logic for the chat client. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effect::SpawnQuery
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │───────────▶│   query    │
//!             │  Adapter   │  POST      │  (reqwest) │
//!             │ (ratatui)  │  /query    │            │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `ChatSession`
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`transcript`]: append-only message list
//! - [`route`]: the two screens
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod route;
pub mod state;
pub mod transcript;
