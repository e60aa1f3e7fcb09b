mod builder;

use career_mentor_model::ConversationalRequest;

use crate::model_client::ModelClient;
use crate::payload;
use crate::quick_questions::QuickQuestion;
use crate::transcript::{ChatTurn, Transcript};
pub use builder::MentorBuilder;

/// A mentor session, which owns the transcript and the model client.
///
/// Every operation takes `&mut self`, so one user action is processed
/// completely before the next one can start. The session lives as long as
/// the hosting UI keeps it, and nothing is persisted.
pub struct Mentor {
    model_client: ModelClient,
    quick_questions: Vec<QuickQuestion>,
    transcript: Transcript,
}

impl Mentor {
    /// Asks the model a free-form question and returns the assistant turn
    /// that was appended for it.
    ///
    /// Failures don't abort the session. They are appended as an assistant
    /// turn carrying [`WARNING_PREFIX`](crate::WARNING_PREFIX).
    pub async fn ask<S: Into<String>>(&mut self, text: S) -> &ChatTurn {
        let text = text.into();
        debug!("asking the model, {} turns so far", self.transcript.len());

        self.transcript.append(ChatTurn::user(text.clone()));
        let request = self.build_model_request(text);
        let outcome = self.model_client.send_request(request).await;
        self.transcript.append(outcome.into_turn())
    }

    /// Appends the canned question at `index` and its answer, without
    /// calling the model.
    ///
    /// Returns the two appended turns, or `None` if there is no question
    /// at `index`.
    pub fn ask_quick_question(&mut self, index: usize) -> Option<&[ChatTurn]> {
        let QuickQuestion { question, answer } =
            *self.quick_questions.get(index)?;
        debug!("answering quick question #{index}");

        let start = self.transcript.len();
        self.transcript.append(ChatTurn::user(question));
        self.transcript.append(ChatTurn::assistant(answer));
        Some(&self.transcript.all()[start..])
    }

    /// Clears the conversation.
    #[inline]
    pub fn reset(&mut self) {
        debug!("resetting transcript");
        self.transcript.reset();
    }

    /// Returns the conversation so far.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the canned questions offered by this session.
    #[inline]
    pub fn quick_questions(&self) -> &[QuickQuestion] {
        &self.quick_questions
    }

    /// Builds the request for `text`, whose user turn is already the last
    /// one in the transcript.
    fn build_model_request(&self, text: String) -> ConversationalRequest {
        let history = self
            .transcript
            .all()
            .split_last()
            .map(|(_, history)| history)
            .unwrap_or_default();
        payload::build_request(history, text)
    }
}

impl Mentor {
    fn from_builder(builder: MentorBuilder) -> Self {
        let MentorBuilder {
            model_client,
            quick_questions,
        } = builder;

        Self {
            model_client,
            quick_questions,
            transcript: Default::default(),
        }
    }
}
