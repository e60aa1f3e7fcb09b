//! Core logic including the conversation transcript, request shaping and
//! the mentor session.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod mentor;
mod model_client;
pub mod payload;
pub mod quick_questions;
pub mod transcript;

pub use mentor::{Mentor, MentorBuilder};
pub use model_client::{InferenceOutcome, WARNING_PREFIX};
