use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type().as_mime().to_string(),
            ));
        }

        Ok(decode_text(document.data()))
    }
}

/// Decodes UTF-8 the way a browser text reader does: a leading byte order
/// mark is dropped and invalid sequences become U+FFFD.
pub(super) fn decode_text(data: &[u8]) -> String {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match String::from_utf8_lossy(data) {
        std::borrow::Cow::Borrowed(text) => text.to_string(),
        std::borrow::Cow::Owned(text) => {
            tracing::warn!("Text contained invalid UTF-8 sequences, replaced them");
            text
        }
    }
}
