//! Custom extractors.

mod upload;
mod validated_json;

pub use upload::{parse_json_or_upload, parse_upload, read_upload};
pub use validated_json::ValidatedJson;
