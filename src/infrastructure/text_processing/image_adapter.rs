use std::io::Cursor;

use async_trait::async_trait;
use image::ImageReader;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

/// Describes an image by its metadata. Pixel content is not analysed; the
/// description is what gets summarized.
pub struct ImageAdapter;

impl ImageAdapter {
    fn dimensions(data: &[u8]) -> Option<(u32, u32)> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

#[async_trait]
impl FileLoader for ImageAdapter {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != ContentType::Image {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type().as_mime().to_string(),
            ));
        }

        let mime = match document.mime_type().trim() {
            "" => "unknown",
            mime => mime,
        };

        let mut description = format!(
            "Image analysis for file: {}\nType: {}\nSize: {} bytes\n",
            document.filename(),
            mime,
            document.size_bytes(),
        );

        match Self::dimensions(document.data()) {
            Some((width, height)) => {
                description.push_str(&format!("Dimensions: {width}x{height} pixels\n"));
            }
            None => tracing::debug!(filename = %document.filename(), "Could not decode image header"),
        }

        description.push_str(
            "\nThe visual content of this image has not been analysed; only the file metadata above is available.",
        );

        Ok(description)
    }
}
