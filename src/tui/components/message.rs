use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{Message as ChatMessage, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles take at most this share of the list width.
const MAX_WIDTH_PERCENT: u16 = 80;

/// A single chat bubble. Created fresh each frame by `MessageList`.
///
/// User bubbles are right-aligned in indigo, bot bubbles left-aligned in
/// gray. Both are capped at 80% of the available width.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    /// Width of the bubble for a list of the given width.
    pub fn bubble_width(width: u16) -> u16 {
        (width as u32 * MAX_WIDTH_PERCENT as u32 / 100) as u16
    }

    /// Height the bubble will occupy when the list is `width` columns wide.
    ///
    /// Uses `textwrap` with options matching `Paragraph`'s wrapping so the
    /// list can lay out the scroll view without rendering first.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = Self::bubble_width(width).saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let content = message.text().trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

pub(crate) fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    }
}

pub(crate) fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Indexed(61)),
        Sender::Bot => Style::default().fg(Color::Gray),
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let sender = self.message.sender();
        let style = sender_style(sender);

        let bubble_width = Self::bubble_width(area.width).min(area.width);
        let bubble_x = match sender {
            Sender::User => area.x + area.width.saturating_sub(bubble_width),
            Sender::Bot => area.x,
        };
        let bubble = Rect::new(bubble_x, area.y, bubble_width, area.height);

        let block = Block::bordered()
            .title(sender_label(sender))
            .border_type(BorderType::Rounded)
            .border_style(style.add_modifier(Modifier::DIM))
            .title_style(style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(bubble);
        block.render(bubble, buf);

        Paragraph::new(self.message.text().trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
