// Mock Interview Chatbot: the one stateful panel.
// Sessions hold an append-only transcript that is replayed into every prompt.

pub mod coach;
pub mod handlers;
pub mod history;
pub mod prompts;
pub mod session;
