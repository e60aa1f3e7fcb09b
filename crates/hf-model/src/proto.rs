use career_mentor_model::ConversationalRequest;
use serde::Serialize;
use serde_json::Value;

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Inputs<'a> {
    past_user_inputs: &'a [String],
    generated_responses: &'a [String],
    text: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ConversationalPayload<'a> {
    inputs: Inputs<'a>,
}

pub fn create_request(req: &ConversationalRequest) -> ConversationalPayload<'_> {
    ConversationalPayload {
        inputs: Inputs {
            past_user_inputs: &req.past_user_inputs,
            generated_responses: &req.generated_responses,
            text: &req.text,
        },
    }
}

// ------------------------------
// Types received from the server
// ------------------------------

/// The shapes a response body may take.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    Generated(String),
    ApiError(String),
    Unrecognized,
}

type ShapeRule = fn(&Value) -> Option<ResponseShape>;

// Order matters: a body matching several rules takes the first one.
const SHAPE_RULES: [ShapeRule; 3] =
    [first_generated_text, generated_text, error_field];

impl ResponseShape {
    /// Decodes a raw response body. Bodies that are not JSON at all are
    /// unrecognized.
    pub fn decode(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(err) => {
                debug!("response body is not JSON: {err}");
                Self::Unrecognized
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        SHAPE_RULES
            .iter()
            .find_map(|rule| rule(value))
            .unwrap_or(Self::Unrecognized)
    }
}

fn first_generated_text(value: &Value) -> Option<ResponseShape> {
    let text = value.as_array()?.first()?.get("generated_text")?.as_str()?;
    Some(ResponseShape::Generated(text.to_owned()))
}

fn generated_text(value: &Value) -> Option<ResponseShape> {
    let text = value.as_object()?.get("generated_text")?.as_str()?;
    Some(ResponseShape::Generated(text.to_owned()))
}

fn error_field(value: &Value) -> Option<ResponseShape> {
    let error = value.as_object()?.get("error")?;
    if !is_set(error) {
        return None;
    }
    let message = match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    };
    Some(ResponseShape::ApiError(message))
}

/// Empty and zero-like values don't count as a reported error.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
