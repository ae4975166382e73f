// src/application/ports/images.rs
use crate::application::error::ApplicationResult;
use crate::domain::article::ImageAttachment;

/// Boundary to the image decoding service. Takes the transport payload
/// (base64, possibly a data URI) and yields storable bytes.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, payload: &str) -> ApplicationResult<ImageAttachment>;
}
