use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_parser;
use super::text_sanitizer::sanitize_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the body text of an OOXML (`.docx`) document.
///
/// Legacy binary `.doc` files are not zip archives and are rejected with an
/// extraction failure.
pub struct WordAdapter;

impl WordAdapter {
    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!(
                "not an OOXML Word document (legacy .doc files are not supported): {e}"
            ))
        })?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
            })?;

        let paragraphs = paragraphs_from_xml(&xml)?;
        Ok(sanitize_extracted_text(&paragraphs.join("\n")))
    }
}

/// Walks `document.xml`, collecting the text runs (`w:t`) of each paragraph
/// (`w:p`). Run tabs become a word separator and run breaks start a new
/// line; tab stops declared in paragraph properties (`w:pPr`) are ignored.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut in_paragraph_properties = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"pPr" => in_paragraph_properties = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"pPr" => in_paragraph_properties = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(_)) if in_paragraph_properties => {}
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("bad text run in document.xml: {e}"))
                })?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "malformed document.xml at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}

#[async_trait]
impl FileLoader for WordAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != ContentType::Word {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type().as_mime().to_string(),
            ));
        }

        let data = document.data().to_vec();
        let text = run_parser("Word", move || Self::extract(&data)).await?;

        tracing::info!(chars = text.len(), "Word text extraction complete");
        Ok(text)
    }
}
