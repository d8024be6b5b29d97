//! # Landing Page Component
//!
//! The `/` route: product identity, the team, and a call-to-action into the
//! chat view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PRODUCT_TITLE: &str = "3/4 CSM Chatbot";
pub const TEAM_MEMBERS: &[&str] = &["S Sai Prasad", "M Pranitham", "Vishnu Vardhan", "Revanth"];
pub const CALL_TO_ACTION: &str = "Enter Chatbot →";

const CARD_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingEvent {
    EnterChat,
    Quit,
}

#[derive(Default)]
pub struct LandingPage;

impl LandingPage {
    pub fn new() -> Self {
        Self
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                PRODUCT_TITLE,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Team Members",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(
            TEAM_MEMBERS
                .iter()
                .map(|name| Line::from(Span::styled(*name, Style::default().fg(Color::Gray)))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {CALL_TO_ACTION} "),
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(61))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Enter to continue · q to quit",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = Self::lines();
        // Content + borders + vertical padding
        let card_height = lines.len() as u16 + 4;

        let [card_row] = Layout::vertical([Constraint::Length(card_height)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(card_row);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Indexed(61)))
            .padding(Padding::vertical(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, card);
    }
}

impl EventHandler for LandingPage {
    type Event = LandingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(LandingEvent::EnterChat),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(LandingEvent::Quit),
            _ => None,
        }
    }
}
