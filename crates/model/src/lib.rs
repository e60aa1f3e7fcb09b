//! An abstraction layer for conversational text-generation services.
//!
//! This crate establishes the protocol the mentor uses to talk to a
//! remote model, so that the inference backend can be swapped (or faked
//! in tests) without touching the conversation logic.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
