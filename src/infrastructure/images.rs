// src/infrastructure/images.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::images::ImageDecoder,
};
use crate::domain::article::ImageAttachment;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Decodes image payloads submitted as base64, either raw or as a
/// `data:<content-type>;base64,<payload>` URI.
#[derive(Default, Clone)]
pub struct Base64ImageDecoder;

impl ImageDecoder for Base64ImageDecoder {
    fn decode(&self, payload: &str) -> ApplicationResult<ImageAttachment> {
        let (content_type, encoded) = split_data_uri(payload)?;
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| ApplicationError::validation("image payload is not valid base64"))?;
        if bytes.is_empty() {
            return Err(ApplicationError::validation("Image can't be blank"));
        }
        Ok(ImageAttachment {
            content_type,
            bytes: Bytes::from(bytes),
        })
    }
}

fn split_data_uri(payload: &str) -> ApplicationResult<(String, &str)> {
    let Some(rest) = payload.strip_prefix("data:") else {
        return Ok((DEFAULT_CONTENT_TYPE.to_owned(), payload));
    };

    let (meta, encoded) = rest
        .split_once(',')
        .ok_or_else(|| ApplicationError::validation("malformed data URI"))?;
    let content_type = match meta.strip_suffix(";base64") {
        Some(content_type) if !content_type.is_empty() => content_type.to_owned(),
        Some(_) => DEFAULT_CONTENT_TYPE.to_owned(),
        None => return Err(ApplicationError::validation("image data URI must be base64")),
    };
    Ok((content_type, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_raw_base64() {
        let image = Base64ImageDecoder.decode("aGVsbG8=").unwrap();
        assert_eq!(&image.bytes[..], b"hello");
        assert_eq!(image.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn decodes_data_uri_with_content_type() {
        let image = Base64ImageDecoder
            .decode("data:image/png;base64,aGVsbG8=")
            .unwrap();
        assert_eq!(&image.bytes[..], b"hello");
        assert_eq!(image.content_type, "image/png");
    }

    #[test]
    fn rejects_non_base64_data_uri() {
        let err = Base64ImageDecoder.decode("data:image/png,hello").unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(Base64ImageDecoder.decode("not base64 at all!").is_err());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(Base64ImageDecoder.decode("").is_err());
    }
}
