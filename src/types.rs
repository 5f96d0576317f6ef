use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{self, ContentPart};
use crate::input;
use crate::payload::RawPayload;

/// Represents a chat message in OpenAI format.
///
/// `role` is kept untyped; validating it belongs to the translator that
/// consumes the message. `content` is held opaque until one of the
/// extractors is called, and each of them can be called any number of times.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Message {
    /// The role of the message sender (system, user, assistant, tool)
    pub role: String,
    /// The message content, string or array of parts
    #[serde(default)]
    pub content: RawPayload,
    /// Optional participant name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    /// Creates a message whose content is a plain string.
    pub fn text<R: Into<String>, S: Into<String>>(role: R, text: S) -> Self {
        Self {
            role: role.into(),
            content: Value::String(text.into()).into(),
            name: None,
        }
    }

    /// Whether `content` is a plain string.
    pub fn is_string_content(&self) -> bool {
        content::is_string_content(&self.content)
    }

    /// `content` flattened to text.
    pub fn string_content(&self) -> String {
        content::string_content(&self.content)
    }

    /// `content` as typed parts, `None` when it has no usable shape.
    pub fn parse_content(&self) -> Option<Vec<ContentPart>> {
        content::parse_content(&self.content)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResponseFormat {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub format_type: Option<String>,
}

/// Superset of the chat, completion and embeddings request bodies.
///
/// Fields the relay does not interpret are kept as dynamic JSON values.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct GeneralOpenAiRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    /// Embeddings input, string or array of strings
    #[serde(default, skip_serializing_if = "RawPayload::is_nil")]
    pub input: RawPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl GeneralOpenAiRequest {
    /// The embeddings `input` as a list of strings.
    pub fn parse_input(&self) -> Vec<String> {
        input::parse_input(&self.input)
    }
}

/// Token usage reported by a provider.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error object in the OpenAI error envelope.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct OpenAiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct EmbeddingResponseItem {
    pub object: String,
    pub index: usize,
    pub embedding: Vec<f64>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<EmbeddingResponseItem>,
    pub model: String,
    pub usage: Usage,
}
