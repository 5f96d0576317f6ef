//! Content part model and the extractors that read a message `content` field.
//!
//! Both extractors are total: payloads shaped for another dialect, unknown
//! part types and malformed elements are dropped instead of failing the
//! whole message.

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::payload::{PayloadShape, RawPayload};

/// Discriminator of a text part.
pub const CONTENT_TYPE_TEXT: &str = "text";
/// Discriminator of an image reference part.
pub const CONTENT_TYPE_IMAGE_URL: &str = "image_url";
/// Detail level applied when an image part does not specify one.
pub const DEFAULT_IMAGE_DETAIL: &str = "auto";

/// Image reference carried by an `image_url` part.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ImageUrl {
    /// Location of the image (http(s) or data URL)
    pub url: String,
    /// Requested detail level ("auto", "low", "high", ...)
    pub detail: String,
}

impl ImageUrl {
    pub fn new<U: Into<String>, D: Into<String>>(url: U, detail: D) -> Self {
        Self {
            url: url.into(),
            detail: detail.into(),
        }
    }

    /// Builds an image reference from the nested `image_url` wire object.
    ///
    /// This is the single place where `detail` is defaulted: a missing,
    /// `null` or non-string detail becomes [`DEFAULT_IMAGE_DETAIL`].
    ///
    /// # Returns
    /// `None` when `url` is missing or not a string
    pub fn from_wire_object(object: &Map<String, Value>) -> Option<Self> {
        let url = object.get("url").and_then(Value::as_str)?;
        let detail = object
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_IMAGE_DETAIL);
        Some(Self::new(url, detail))
    }
}

/// One typed unit of a multi-part message body.
///
/// Serializes to the OpenAI wire shape, so translators can re-emit it as is.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A text segment
    Text { text: String },
    /// An image reference
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    /// Creates a text part.
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Creates an image part.
    pub fn image_url<U: Into<String>, D: Into<String>>(url: U, detail: D) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl::new(url, detail),
        }
    }

    /// The wire discriminator of this part.
    pub fn content_type(&self) -> &'static str {
        match self {
            ContentPart::Text { .. } => CONTENT_TYPE_TEXT,
            ContentPart::ImageUrl { .. } => CONTENT_TYPE_IMAGE_URL,
        }
    }

    /// The text of a text part, `None` for other parts.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text { text } => Some(text),
            ContentPart::ImageUrl { .. } => None,
        }
    }
}

/// Reports whether the content payload is a plain string.
pub fn is_string_content(payload: &RawPayload) -> bool {
    payload.is_string_content()
}

/// Flattens a content payload into a single string.
///
/// A string payload is returned verbatim. For an array, the `text` of every
/// `"text"` part is concatenated in order; other elements are ignored.
/// Any other payload yields an empty string.
pub fn string_content(payload: &RawPayload) -> String {
    match payload.decode_value() {
        Some(Value::String(text)) => text,
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .filter(|object| type_tag(object) == Some(CONTENT_TYPE_TEXT))
            .filter_map(|object| object.get("text").and_then(Value::as_str))
            .collect(),
        _ => String::new(),
    }
}

/// Parses a content payload into typed parts, preserving order.
///
/// # Returns
/// * `Some(vec![Text])` for a string payload
/// * `Some(parts)` for an array, with unusable elements dropped (may be empty)
/// * `None` when the payload is neither a string nor an array
pub fn parse_content(payload: &RawPayload) -> Option<Vec<ContentPart>> {
    match payload.shape() {
        PayloadShape::Scalar(text) => Some(vec![ContentPart::text(text)]),
        PayloadShape::Sequence(items) => Some(
            items
                .into_iter()
                .filter_map(|item| {
                    let part = parse_part(item);
                    if part.is_none() {
                        trace!("Skipping unusable content part: {}", item.get());
                    }
                    part
                })
                .collect(),
        ),
        PayloadShape::Unrecognized => None,
    }
}

fn parse_part(item: &RawValue) -> Option<ContentPart> {
    let object: Map<String, Value> = serde_json::from_str(item.get()).ok()?;
    match type_tag(&object)? {
        CONTENT_TYPE_TEXT => object
            .get("text")
            .and_then(Value::as_str)
            .map(ContentPart::text),
        CONTENT_TYPE_IMAGE_URL => object
            .get("image_url")
            .and_then(Value::as_object)
            .and_then(ImageUrl::from_wire_object)
            .map(|image_url| ContentPart::ImageUrl { image_url }),
        _ => None,
    }
}

fn type_tag(object: &Map<String, Value>) -> Option<&str> {
    object.get("type").and_then(Value::as_str)
}
