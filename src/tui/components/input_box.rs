//! # InputBox Component
//!
//! Single-line text input for the chat view.
//!
//! ## Responsibilities
//!
//! - Capture text input, editing and paste
//! - Emit `Submit` on Enter with the buffer contents, clearing the buffer
//! - Refuse submission while `disabled` (a query is in flight)
//! - Scroll horizontally so the cursor stays visible
//!
//! The buffer is internal state; `disabled` is a prop from the app state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Ask about a student or introduce yourself.";

/// Border (2) + padding (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to first content column (border + padding)
const CONTENT_OFFSET: u16 = 2;
/// Borders + one line of text
pub const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed with non-blank text; carries the raw text.
    Submit(String),
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// True while a query is in flight (Prop)
    pub disabled: bool,
    /// Cursor position as byte offset in buffer
    cursor: usize,
    /// First visible display column
    scroll: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: 0,
            scroll: 0,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Display column of the cursor within the whole buffer.
    ///
    /// Kept as `usize`: a pasted line can be wider than `u16::MAX` columns.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Adjust horizontal scroll so the cursor column is inside `inner_width`.
    fn update_scroll(&mut self, inner_width: u16) {
        let inner_width = usize::from(inner_width);
        if inner_width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col + 1 - inner_width;
        }
    }

    /// The part of the buffer visible in `inner_width` columns after scrolling.
    fn visible_text(&self, inner_width: u16) -> String {
        let inner_width = usize::from(inner_width);
        let mut col = 0usize;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col >= self.scroll {
                if col + w - self.scroll > inner_width {
                    break;
                }
                out.push(c);
            }
            col += w;
        }
        out
    }

    /// Cursor offset from the first content column, in screen cells.
    fn cursor_offset(&self) -> u16 {
        u16::try_from(self.cursor_column().saturating_sub(self.scroll)).unwrap_or(u16::MAX)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let (title, border_style) = if self.disabled {
            (
                "Send (waiting for reply)",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else {
            ("Send ⏎", Style::default().fg(Color::Indexed(61)))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(inner_width))
        };

        frame.render_widget(paragraph.block(block), area);

        let cursor_x = area
            .x
            .saturating_add(CONTENT_OFFSET)
            .saturating_add(self.cursor_offset());
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: fold line breaks into spaces
                let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = self.prev_boundary();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.cursor = self.next_boundary();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorHome if self.cursor > 0 => {
                self.cursor = 0;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorEnd if self.cursor < self.buffer.len() => {
                self.cursor = self.buffer.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                if self.disabled || self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.scroll = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
