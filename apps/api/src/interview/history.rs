use chrono::{DateTime, Utc};
use serde::Serialize;

/// One exchange in a mock interview. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    user_input: String,
    reply: String,
    created_at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    fn transcript_line(&self) -> String {
        format!("Candidate: {}\nCoach: {}", self.user_input, self.reply)
    }
}

/// Append-only, chronologically ordered interview transcript for one session.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Records a completed turn exactly as given.
    pub fn push(&mut self, user_input: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(ConversationTurn {
            user_input: user_input.into(),
            reply: reply.into(),
            created_at: Utc::now(),
        });
    }

    /// Prior dialogue as `Candidate:`/`Coach:` line pairs, oldest first.
    ///
    /// `window` limits the transcript to the most recent turns; `None` replays
    /// everything. The stored history is never truncated.
    pub fn transcript(&self, window: Option<usize>) -> String {
        let skip = window.map_or(0, |w| self.turns.len().saturating_sub(w));
        self.turns[skip..]
            .iter()
            .map(ConversationTurn::transcript_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
