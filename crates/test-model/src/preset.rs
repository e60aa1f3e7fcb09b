use career_mentor_model::ErrorKind;
use serde::{Deserialize, Serialize};

/// A scripted reply of the test model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetResponse {
    /// The model answers with the given text.
    #[serde(rename = "answer")]
    Answer(String),
    /// The request fails.
    #[serde(rename = "failure")]
    Failure(PresetFailure),
}

/// A scripted failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetFailure {
    /// The message that the error displays.
    pub message: String,
    /// The kind of the error, stored by name.
    #[serde(with = "error_kind")]
    pub kind: ErrorKind,
}

impl PresetResponse {
    /// Creates a successful reply.
    #[inline]
    pub fn answer<S: Into<String>>(text: S) -> Self {
        Self::Answer(text.into())
    }

    /// Creates a failing reply.
    #[inline]
    pub fn failure<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self::Failure(PresetFailure {
            message: message.into(),
            kind,
        })
    }
}

mod error_kind {
    use career_mentor_model::ErrorKind;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const NAMES: [(ErrorKind, &str); 5] = [
        (ErrorKind::HttpStatus, "http_status"),
        (ErrorKind::Connection, "connection"),
        (ErrorKind::Api, "api"),
        (ErrorKind::UnrecognizedResponse, "unrecognized_response"),
        (ErrorKind::Other, "other"),
    ];

    const VARIANTS: &[&str] = &[
        "http_status",
        "connection",
        "api",
        "unrecognized_response",
        "other",
    ];

    pub fn serialize<S: Serializer>(
        kind: &ErrorKind,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let name = NAMES
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, name)| *name)
            .unwrap_or("other");
        serializer.serialize_str(name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ErrorKind, D::Error> {
        let name = String::deserialize(deserializer)?;
        NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(kind, _)| *kind)
            .ok_or_else(|| de::Error::unknown_variant(&name, VARIANTS))
    }
}
