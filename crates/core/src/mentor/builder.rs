use career_mentor_model::ModelProvider;

use super::Mentor;
use crate::model_client::ModelClient;
use crate::quick_questions::{QUICK_QUESTIONS, QuickQuestion};

/// [`Mentor`] builder.
pub struct MentorBuilder {
    pub(crate) model_client: ModelClient,
    pub(crate) quick_questions: Vec<QuickQuestion>,
}

impl MentorBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            quick_questions: QUICK_QUESTIONS.to_vec(),
        }
    }

    /// Replaces the default canned questions.
    #[inline]
    pub fn with_quick_questions(
        mut self,
        quick_questions: impl Into<Vec<QuickQuestion>>,
    ) -> Self {
        self.quick_questions = quick_questions.into();
        self
    }

    /// Builds the mentor with an empty transcript.
    #[inline]
    pub fn build(self) -> Mentor {
        Mentor::from_builder(self)
    }
}
