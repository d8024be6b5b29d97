//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: chat header with endpoint and status
//! - `Message`: a single chat bubble
//! - `LandingPage`: the `/` route
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: single-line input, refuses submission while disabled
//! - `MessageList`: scrollable transcript with layout caching
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`:
//!
//! ```rust,ignore
//! MessageList::new(&mut tui.message_list, &app.session.transcript, awaiting, frame)
//!     .render(frame, area);
//! ```

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::{LandingEvent, LandingPage};
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
