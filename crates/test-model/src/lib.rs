//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use career_mentor_model::{
    ConversationalRequest, ErrorKind, ModelProvider, ModelProviderError,
    ModelResponse,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct ScriptState {
    replies: VecDeque<PresetResponse>,
    requests: Vec<ConversationalRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should reply to each request, in order. Every request is recorded
/// so tests can inspect the payloads afterwards. If the script runs out of
/// replies, an error will be returned.
///
/// Clones share the same script and request log.
///
/// # Note
///
/// This type is not optimized for production use. You should only use it
/// for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    state: Arc<Mutex<ScriptState>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_response(&mut self, preset: PresetResponse) {
        self.lock().replies.push_back(preset);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ConversationalRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        // A test that panicked while holding the lock has already failed.
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ConversationalRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let reply = {
            let mut state = self.lock();
            state.requests.push(req.clone());
            state.replies.pop_front()
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            match reply {
                Some(PresetResponse::Answer(text)) => {
                    Ok(ModelResponse::new(text))
                }
                Some(PresetResponse::Failure(failure)) => Err(Error {
                    message: failure.message,
                    kind: failure.kind,
                }),
                None => Err(Error {
                    message: "no enough replies".to_owned(),
                    kind: ErrorKind::Other,
                }),
            }
        }
    }
}
