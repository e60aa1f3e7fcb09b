//! A terminal career mentor backed by a Hugging Face conversational model.
//!
//! The crate includes a CLI tool for chatting in the terminal. The pieces
//! it is built from (input commands, rendering, configuration) are exposed
//! here so other front-ends can reuse them.

#![deny(missing_docs)]

pub mod command;
pub mod config;
pub mod render;

/// Re-exports of [`career_mentor_core`] crate.
pub mod core {
    pub use career_mentor_core::*;
}
