//! Canonical view of a request, as consumed by provider translators.

use log::debug;
use serde::Serialize;

use crate::config::Mode;
use crate::content::ContentPart;
use crate::error::NormalizeError;
use crate::types::{GeneralOpenAiRequest, Message};

/// A message with its content decoded every way a translator may need it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NormalizedMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the wire content was a plain string
    pub is_plain_text: bool,
    /// Content flattened to text
    pub text: String,
    /// Content as typed parts; empty when the content had no usable shape
    pub parts: Vec<ContentPart>,
}

impl From<&Message> for NormalizedMessage {
    fn from(message: &Message) -> Self {
        let parts = message.parse_content().unwrap_or_else(|| {
            debug!(
                "Message with role '{}' has no usable content shape",
                message.role
            );
            Vec::new()
        });

        Self {
            role: message.role.clone(),
            name: message.name.clone(),
            is_plain_text: message.is_string_content(),
            text: message.string_content(),
            parts,
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct NormalizedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<NormalizedMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<String>,
}

impl NormalizedRequest {
    /// Builds the views selected by `mode` from a decoded request.
    pub fn from_request(request: &GeneralOpenAiRequest, mode: Mode) -> Self {
        let messages = if mode.includes_messages() {
            request.messages.iter().map(NormalizedMessage::from).collect()
        } else {
            Vec::new()
        };
        let input = if mode.includes_input() {
            request.parse_input()
        } else {
            Vec::new()
        };

        debug!(
            "Normalized request: {} message(s), {} input string(s)",
            messages.len(),
            input.len()
        );

        Self {
            model: request.model.clone(),
            messages,
            input,
        }
    }
}

/// Decodes a request document and normalizes it.
///
/// Only a malformed request envelope is an error; unusable `content` or
/// `input` fields produce empty views.
///
/// # Arguments
/// * `document` - The JSON request body
/// * `mode` - Which views to build
pub fn normalize_document(document: &[u8], mode: Mode) -> Result<NormalizedRequest, NormalizeError> {
    let request: GeneralOpenAiRequest = serde_json::from_slice(document)?;
    Ok(NormalizedRequest::from_request(&request, mode))
}
