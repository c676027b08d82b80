//! Request body decoding.
//!
//! Turns the buffered payload plus the declared `Content-Type` into the
//! key/value fields handlers read. Only JSON objects and URL-encoded forms are
//! understood, any other payload is left unparsed.

use serde_json::{Map, Value};
use thiserror::Error;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("JSON body must be an object")]
    NotAnObject,

    #[error("Form body is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    pub fn from_fields(fields: Map<String, Value>) -> RequestBody {
        RequestBody { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field as text, only when its value is truthy: a non-empty string,
    /// a non-zero number or `true`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }

    /// The field as an integer, accepting JSON numbers and decimal strings
    /// (form values are always strings).
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Strips parameters such as `; charset=utf-8` from a content type.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Returns `Ok(None)` for an empty payload and for payloads whose content type
/// is not understood.
pub fn decode_body(
    content_type: Option<&str>,
    payload: &[u8],
) -> Result<Option<RequestBody>, DecodeError> {
    if payload.is_empty() {
        return Ok(None);
    }

    match content_type.map(media_type).as_deref() {
        Some(JSON_CONTENT_TYPE) => decode_json(payload).map(Some),
        Some(FORM_CONTENT_TYPE) => decode_form(payload).map(Some),
        _ => Ok(None),
    }
}

fn decode_json(payload: &[u8]) -> Result<RequestBody, DecodeError> {
    match serde_json::from_slice::<Value>(payload)? {
        Value::Object(fields) => Ok(RequestBody::from_fields(fields)),
        _ => Err(DecodeError::NotAnObject),
    }
}

fn decode_form_component(raw: &str) -> Result<String, DecodeError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

fn decode_form(payload: &[u8]) -> Result<RequestBody, DecodeError> {
    let text = std::str::from_utf8(payload).map_err(|_| DecodeError::InvalidUtf8)?;
    let mut fields = Map::new();
    for pair in text.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        // Later duplicates overwrite earlier ones.
        fields.insert(
            decode_form_component(key)?,
            Value::String(decode_form_component(value)?),
        );
    }
    Ok(RequestBody::from_fields(fields))
}
