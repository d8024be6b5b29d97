//! # Transcript
//!
//! The ordered list of chat messages shown to the user. Append-only: there
//! is no way to remove, edit or reorder a message once it is in.

/// Bot greeting every new session starts with.
pub const GREETING: &str = "Hello! I'm your Student Information Chatbot. Ask me about student details like roll number, CGPA, projects, and more.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Fields are private so a message cannot change
/// after it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates a transcript seeded with the bot greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(GREETING, Sender::Bot)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::new(text, Sender::User))
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::new(text, Sender::Bot))
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_is_seeded_with_greeting() {
        let t = Transcript::new();
        assert_eq!(t.messages().len(), 1);
        assert_eq!(t.messages()[0].sender(), Sender::Bot);
        assert_eq!(t.messages()[0].text(), GREETING);
    }

    #[test]
    fn push_preserves_append_order() {
        let mut t = Transcript::new();
        t.push_user("hello");
        t.push_bot("hi there");
        t.push_user("hello");

        let texts: Vec<_> = t.messages().iter().map(|m| (m.sender(), m.text())).collect();
        assert_eq!(
            texts,
            vec![
                (Sender::Bot, GREETING),
                (Sender::User, "hello"),
                (Sender::Bot, "hi there"),
                (Sender::User, "hello"), // no dedup
            ]
        );
    }

    #[test]
    fn push_returns_appended_message() {
        let mut t = Transcript::new();
        let m = t.push_user("  spaced  ");
        assert_eq!(m.text(), "  spaced  ");
        assert_eq!(m.sender(), Sender::User);
    }
}
