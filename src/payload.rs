//! Opaque holder for wire fields whose shape is only known at runtime.
//!
//! OpenAI-style dialects send `content` either as a string or as an array of
//! typed parts, and embeddings `input` as a string or an array of strings.
//! [`RawPayload`] keeps the field as encoded JSON and decodes it on demand, so
//! every extractor can look at the same field independently.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_json::value::RawValue;

/// The encoded bytes of a `content` or `input` field.
///
/// Bytes given to [`RawPayload::from_bytes`] are kept as is, malformed or not.
/// When deserialized as part of a wire record the field is re-encoded as
/// compact JSON, which works behind `flatten`, `untagged` and internally
/// tagged containers. An empty holder stands for an absent field. Decoding never mutates the
/// holder, so it can be shared freely between request-handling contexts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawPayload {
    bytes: Vec<u8>,
}

/// Shape of a payload once decoded.
///
/// Sequence elements are left as raw JSON so that one malformed element does
/// not prevent the others from being interpreted.
#[derive(Debug, Clone)]
pub enum PayloadShape<'a> {
    /// A plain JSON string
    Scalar(String),
    /// A JSON array, elements not yet typed
    Sequence(Vec<&'a RawValue>),
    /// Anything else, including bytes that are not valid JSON
    Unrecognized,
}

impl PartialEq for PayloadShape<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PayloadShape::Scalar(a), PayloadShape::Scalar(b)) => a == b,
            (PayloadShape::Sequence(a), PayloadShape::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.get() == y.get())
            }
            (PayloadShape::Unrecognized, PayloadShape::Unrecognized) => true,
            _ => false,
        }
    }
}

impl RawPayload {
    /// Creates an empty (absent) payload.
    pub fn nil() -> Self {
        Self::default()
    }

    /// Wraps arbitrary bytes without validating them.
    ///
    /// # Arguments
    /// * `bytes` - The encoded field, possibly malformed
    ///
    /// # Returns
    /// A payload that will be decoded lazily
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Wraps a JSON document given as text.
    pub fn from_json<S: AsRef<str>>(json: S) -> Self {
        Self::from_bytes(json.as_ref().as_bytes())
    }

    /// The held bytes, exactly as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when the field was absent or explicitly `null`.
    pub fn is_nil(&self) -> bool {
        let trimmed = self.bytes.trim_ascii();
        trimmed.is_empty() || trimmed == b"null"
    }

    /// Attempts to decode the payload as a JSON string.
    pub fn decode_scalar(&self) -> Option<String> {
        serde_json::from_slice(&self.bytes).ok()
    }

    /// Attempts to decode the payload as a JSON array of raw elements.
    pub fn decode_sequence(&self) -> Option<Vec<&RawValue>> {
        serde_json::from_slice(&self.bytes).ok()
    }

    /// Generic decode into a dynamic value.
    pub fn decode_value(&self) -> Option<Value> {
        serde_json::from_slice(&self.bytes).ok()
    }

    /// Resolves the payload into one of its possible shapes.
    ///
    /// A string is tried first, then an array; anything else is
    /// [`PayloadShape::Unrecognized`]. Decode failures are not errors here,
    /// they only mean the payload has no usable shape.
    pub fn shape(&self) -> PayloadShape<'_> {
        if let Some(text) = self.decode_scalar() {
            return PayloadShape::Scalar(text);
        }
        match self.decode_sequence() {
            Some(items) => PayloadShape::Sequence(items),
            None => PayloadShape::Unrecognized,
        }
    }

    /// Reports whether the payload decodes to a JSON string.
    ///
    /// Malformed or absent payloads simply return `false`.
    pub fn is_string_content(&self) -> bool {
        matches!(self.decode_value(), Some(Value::String(_)))
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::from_bytes(serde_json::to_vec(&value).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A raw-value capture only works against serde_json's own text
        // deserializer; buffered content (flatten, untagged) needs a Value.
        let value = Value::deserialize(deserializer)?;
        Ok(value.into())
    }
}

impl Serialize for RawPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match serde_json::from_slice::<&RawValue>(&self.bytes) {
            Ok(raw) => raw.serialize(serializer),
            Err(_) => serializer.serialize_none(),
        }
    }
}
