//! # TitleBar Component
//!
//! Chat view header: product name, the endpoint queries go to, and a
//! transient status ("Thinking...").
//!
//! Purely presentational; all fields are props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const CHAT_TITLE: &str = "Student Information Chatbot";

pub struct TitleBar {
    pub endpoint: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("ⓘ {CHAT_TITLE} ({})", self.endpoint)
        } else {
            format!("ⓘ {CHAT_TITLE} ({}) | {}", self.endpoint, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(61))
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
