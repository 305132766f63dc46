//! Image loading and data URI encoding.
//!
//! Images are read whole and sent as-is; no format detection or decoding
//! happens locally.

use crate::error::DrsError;
use base64::Engine;
use std::path::Path;

/// MIME type declared in every data URI.
pub const MEDIA_TYPE: &str = "image/png";

/// Read the complete contents of an image file.
pub async fn load_image(path: &Path) -> Result<Vec<u8>, DrsError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DrsError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(bytes)
}

/// Base64-encoded image ready to embed in a chat message.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type declared in the data URI
    pub media_type: &'static str,
}

impl ImageInput {
    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: MEDIA_TYPE,
        }
    }

    /// Return the `data:` URI for this image.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn decode_payload(uri: &str) -> Vec<u8> {
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap()
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = ImageInput::from_bytes(&PNG_HEADER).data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_decodes_to_input() {
        let bytes: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
        let uri = ImageInput::from_bytes(&bytes).data_uri();
        assert_eq!(decode_payload(&uri), bytes);
    }

    #[test]
    fn test_empty_input_encodes() {
        let uri = ImageInput::from_bytes(&[]).data_uri();
        assert_eq!(uri, "data:image/png;base64,");
    }

    #[test]
    fn test_non_png_bytes_still_declared_png() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        let input = ImageInput::from_bytes(&jpeg);
        assert_eq!(input.media_type, "image/png");
        assert_eq!(decode_payload(&input.data_uri()), jpeg);
    }

    #[tokio::test]
    async fn test_load_image_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delivery.png");
        let mut bytes = PNG_HEADER.to_vec();
        bytes.extend(std::iter::repeat(7u8).take(4096));
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(load_image(&path).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = load_image(&path).await.unwrap_err();
        match err {
            DrsError::ImageRead { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
