pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod normalize;
pub mod payload;
pub mod types;

pub use config::{Mode, NormalizeConfig};
pub use content::{
    CONTENT_TYPE_IMAGE_URL, CONTENT_TYPE_TEXT, ContentPart, DEFAULT_IMAGE_DETAIL, ImageUrl,
    is_string_content, parse_content, string_content,
};
pub use error::NormalizeError;
pub use input::parse_input;
pub use normalize::{NormalizedMessage, NormalizedRequest, normalize_document};
pub use payload::{PayloadShape, RawPayload};
pub use types::{GeneralOpenAiRequest, Message};
