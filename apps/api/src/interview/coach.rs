//! One mock interview turn: replay the transcript, ask the model, record the reply.

use tracing::info;

use crate::chain::{ChainRunner, PromptTemplate, RenderContext};
use crate::errors::AppError;
use crate::forms::ensure_filled;
use crate::interview::history::ConversationHistory;
use crate::interview::prompts::INTERVIEW_PROMPT;

/// Runs a turn against `history` and returns the coach's reply.
///
/// `window` caps how many prior turns are replayed (`None` = all of them).
/// History only grows when the model call succeeds.
pub async fn take_turn(
    chain: &ChainRunner,
    history: &mut ConversationHistory,
    user_input: &str,
    window: Option<usize>,
) -> Result<String, AppError> {
    ensure_filled("user_input", user_input)?;

    let context = RenderContext::new()
        .with("conversation", history.transcript(window))
        .with("user_input", user_input);

    let reply = chain
        .run(&PromptTemplate::new(INTERVIEW_PROMPT), &context)
        .await?;

    history.push(user_input, reply.as_str());
    info!(
        "Interview turn {} completed: {} chars in, {} chars out",
        history.len(),
        user_input.len(),
        reply.len()
    );
    Ok(reply)
}
