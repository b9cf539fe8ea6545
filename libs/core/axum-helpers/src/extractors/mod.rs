//! Extractors whose rejections render as the standard error body.

pub mod params;
pub mod validated_json;

pub use params::{PathParam, QueryParams};
pub use validated_json::ValidatedJson;
