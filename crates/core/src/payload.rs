//! Shapes the transcript into a conversational request.

use career_mentor_model::ConversationalRequest;

use crate::transcript::{ChatTurn, Role};

/// Builds the request for a new prompt.
///
/// `history` must not contain the turn for `text` itself. User and
/// assistant contents are collected independently, so two consecutive
/// turns of the same role leave the lists out of step. Callers get
/// exactly what the history holds.
pub fn build_request<S: Into<String>>(
    history: &[ChatTurn],
    text: S,
) -> ConversationalRequest {
    ConversationalRequest {
        past_user_inputs: contents_of(history, Role::User),
        generated_responses: contents_of(history, Role::Assistant),
        text: text.into(),
    }
}

fn contents_of(history: &[ChatTurn], role: Role) -> Vec<String> {
    history
        .iter()
        .filter(|turn| turn.role() == role)
        .map(|turn| turn.content().to_owned())
        .collect()
}
