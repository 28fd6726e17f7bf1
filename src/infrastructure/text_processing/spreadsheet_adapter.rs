use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_parser;
use super::plain_text_adapter::decode_text;

/// Converts workbooks to CSV text, one `Sheet: <name>` section per non-empty
/// sheet. CSV uploads are already text and are decoded as-is.
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    fn workbook_to_csv(data: Vec<u8>) -> Result<String, FileLoaderError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("could not open spreadsheet: {e}"))
        })?;

        let mut sections = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("could not read sheet {sheet_name}: {e}"))
            })?;

            let rows: Vec<String> = range
                .rows()
                .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
                .map(|row| {
                    row.iter()
                        .map(|cell| escape_csv_field(&cell.to_string()))
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect();

            if rows.is_empty() {
                tracing::debug!(sheet = %sheet_name, "Skipping empty sheet");
                continue;
            }

            sections.push(format!("Sheet: {sheet_name}\n{}", rows.join("\n")));
        }

        Ok(sections.join("\n\n"))
    }
}

fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        match document.content_type() {
            ContentType::Csv => Ok(decode_text(document.data())),
            ContentType::Spreadsheet => {
                let data = document.data().to_vec();
                let text = run_parser("spreadsheet", move || Self::workbook_to_csv(data)).await?;
                tracing::info!(chars = text.len(), "Spreadsheet converted to CSV");
                Ok(text)
            }
            other => Err(FileLoaderError::UnsupportedContentType(
                other.as_mime().to_string(),
            )),
        }
    }
}
