//! The conversation pane: an append-only list of chat messages plus the
//! bookkeeping for requests still waiting on the chat service.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::utils::{id, time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    User,
    Assistant,
    /// Error or status line shown inline in the conversation
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp_ms: u64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChatTicket(pub u64);

/// What the chat service is asked to answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    #[serde(skip)]
    pub ticket: ChatTicket,
    pub message: String,
    /// Display name of the selected source, if any
    pub source: Option<String>,
}

/// Canned prompts offered by the studio pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickAction {
    StudyGuide,
    Timeline,
    Summary,
}

impl QuickAction {
    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::StudyGuide => {
                "Create a study guide with key concepts and review questions for my sources."
            }
            QuickAction::Timeline => "Build a timeline of the events described in my sources.",
            QuickAction::Summary => "Summarize the main points of my sources.",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    awaiting: BTreeSet<ChatTicket>,
    next_ticket: u64,
}

impl Transcript {
    pub fn new(welcome: Option<&str>) -> Self {
        let mut transcript = Self::default();
        if let Some(welcome) = welcome {
            transcript.push(Role::Assistant, welcome);
        }
        transcript
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage {
            id: id::generate_id(),
            role,
            text: text.into(),
            timestamp_ms: time::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Append the user's message right away and hand out a ticket for the
    /// pending answer
    pub fn ask(&mut self, message: &str) -> ChatTicket {
        self.push(Role::User, message);
        self.next_ticket += 1;
        let ticket = ChatTicket(self.next_ticket);
        self.awaiting.insert(ticket);
        ticket
    }

    /// Close out a pending request. Returns `false` for unknown tickets.
    pub fn resolve(&mut self, ticket: ChatTicket) -> bool {
        self.awaiting.remove(&ticket)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn awaiting_response(&self) -> bool {
        !self.awaiting.is_empty()
    }
}
