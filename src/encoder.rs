//! Conversion of uploaded files into base64 payloads.

use base64::{engine::general_purpose, Engine as _};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::EnhanceError;

/// Raw bytes of an uploaded photo together with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    bytes: Vec<u8>,
    media_type: String,
}

impl SourceImage {
    pub fn new(bytes: impl Into<Vec<u8>>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    /// Reads the whole of `reader` into a new image.
    ///
    /// A failed read is logged and reported as [`EnhanceError::EncodingFailure`].
    pub async fn read_from<R>(reader: R, media_type: impl Into<String>) -> Result<Self, EnhanceError>
    where
        R: AsyncRead,
    {
        tokio::pin!(reader);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await.map_err(|e| {
            tracing::error!(error = %e, "failed to read uploaded file");
            EnhanceError::EncodingFailure
        })?;
        Ok(Self::new(bytes, media_type))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the image as `data:<media type>;base64,<payload>`.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Base64 text of a [`SourceImage`], without any data-URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    data: String,
    media_type: String,
}

impl EncodedPayload {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// Returns everything after the first comma of a data URL.
///
/// A string with no comma, or with nothing after it, is an encoding failure.
pub fn strip_data_url_prefix(data_url: &str) -> Result<&str, EnhanceError> {
    match data_url.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => Ok(payload),
        _ => Err(EnhanceError::EncodingFailure),
    }
}

/// Encodes `image` into the payload sent to the image service.
pub fn encode(image: &SourceImage) -> Result<EncodedPayload, EnhanceError> {
    let data_url = image.to_data_url();
    let data = strip_data_url_prefix(&data_url)?.to_string();
    Ok(EncodedPayload {
        data,
        media_type: image.media_type.clone(),
    })
}
