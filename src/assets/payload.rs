use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::foundation::error::{StudioError, StudioResult};

/// Self-contained image payload: a `data:<mime>;base64,<bytes>` URL.
///
/// This is what uploads turn into and what image slots of the content model hold. The payload is
/// only sniffed for its format when created; full pixel decoding happens when a scene is prepared
/// for rasterization.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload {
    data_url: String,
    mime_len: usize,
}

impl ImagePayload {
    /// Wrap raw file bytes, sniffing the image format for the MIME type.
    pub fn from_image_bytes(bytes: &[u8]) -> StudioResult<Self> {
        let format = image::guess_format(bytes)
            .map_err(|e| StudioError::decode(format!("unrecognized image data: {e}")))?;
        let mime = format.to_mime_type();
        let data_url = format!("data:{mime};base64,{}", BASE64.encode(bytes));
        Ok(Self {
            data_url,
            mime_len: mime.len(),
        })
    }

    /// Parse an existing base64 data URL.
    pub fn from_data_url(url: impl Into<String>) -> StudioResult<Self> {
        let data_url = url.into();
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::decode("image payload must be a data: URL"))?;
        let (mime, body) = rest
            .split_once(";base64,")
            .ok_or_else(|| StudioError::decode("image payload must be base64 encoded"))?;
        if mime.is_empty() || body.is_empty() {
            return Err(StudioError::decode("image payload has no mime type or body"));
        }
        let mime_len = mime.len();
        Ok(Self { data_url, mime_len })
    }

    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    pub fn mime(&self) -> &str {
        &self.data_url["data:".len().."data:".len() + self.mime_len]
    }

    /// Decode the base64 body back to the original file bytes.
    pub fn decode_bytes(&self) -> StudioResult<Vec<u8>> {
        let body_start = "data:".len() + self.mime_len + ";base64,".len();
        BASE64
            .decode(&self.data_url[body_start..])
            .map_err(|e| StudioError::decode(format!("invalid base64 image payload: {e}")))
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime", &self.mime())
            .field("data_url_len", &self.data_url.len())
            .finish()
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = StudioError;

    fn try_from(value: String) -> StudioResult<Self> {
        Self::from_data_url(value)
    }
}

impl From<ImagePayload> for String {
    fn from(value: ImagePayload) -> Self {
        value.data_url
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/payload.rs"]
mod tests;
