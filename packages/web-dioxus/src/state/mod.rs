//! Global state management

use chrono::{DateTime, Local};
use dioxus::prelude::*;

/// First message in every chat.
pub const ADVISOR_GREETING: &str =
    "Hello! I'm your AI financial advisor. Ask me anything about investing, stocks, or market analysis!";

/// Posted in place of a reply when the advisor cannot be reached.
pub const ADVISOR_UNAVAILABLE: &str = "I apologize, but I'm having trouble connecting to the financial advisory service. Please try again later.";

/// Chat panel state
#[derive(Clone, Copy)]
pub struct ChatState {
    pub is_open: Signal<bool>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
        }
    }

    pub fn toggle(&self) {
        let mut is_open = self.is_open;
        let current = *is_open.peek();
        is_open.set(!current);
    }

    pub fn close(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Advisor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

/// Messages shown in the advisor chat, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// A log seeded with the advisor greeting
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push(Sender::Advisor, ADVISOR_GREETING.to_string());
        log
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Sender::User, text.into());
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.push(Sender::Advisor, text.into());
    }

    pub fn push_unavailable(&mut self) {
        self.push(Sender::Advisor, ADVISOR_UNAVAILABLE.to_string());
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            sent_at: Local::now(),
        });
        self.next_id += 1;
    }
}

/// The message to send, or `None` if the input is blank or a send is in flight.
pub fn prepare_outgoing(input: &str, in_flight: bool) -> Option<String> {
    let text = input.trim();
    if text.is_empty() || in_flight {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_starts_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Advisor);
        assert_eq!(log.messages()[0].text, ADVISOR_GREETING);
    }

    #[test]
    fn test_messages_keep_order_and_unique_ids() {
        let mut log = ChatLog::new();
        log.push_user("What is a good debt-to-equity ratio?");
        log.push_unavailable();

        let messages = log.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].text, ADVISOR_UNAVAILABLE);
        assert!(messages[0].id < messages[1].id && messages[1].id < messages[2].id);
    }

    #[test]
    fn test_prepare_outgoing() {
        assert_eq!(prepare_outgoing("   ", false), None);
        assert_eq!(prepare_outgoing("hello", true), None);
        assert_eq!(prepare_outgoing("  hello ", false).as_deref(), Some("hello"));
    }
}
