use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use precis::application::ports::{FileLoader, FileLoaderError};
use precis::domain::UploadedDocument;
use precis::infrastructure::text_processing::WordAdapter;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn docx_with_body(body: &str) -> Vec<u8> {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn given_docx_with_paragraphs_when_loading_then_runs_are_joined_per_paragraph() {
    let data = docx_with_body(
        "<w:p><w:r><w:t>Quarterly </w:t></w:r><w:r><w:t>report</w:t></w:r></w:p>\
         <w:p><w:r><w:t>Revenue &amp; costs</w:t></w:r></w:p>",
    );
    let document = UploadedDocument::new("report.docx", DOCX_MIME, data);

    let text = WordAdapter.extract_text(&document).await.unwrap();

    assert_eq!(text, "Quarterly report\nRevenue & costs");
}

#[tokio::test]
async fn given_paragraph_tab_stops_and_run_tabs_when_loading_then_only_run_tabs_separate_text() {
    let data = docx_with_body(
        "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/>\
         <w:tab w:val=\"right\" w:pos=\"9000\"/></w:tabs></w:pPr>\
         <w:r><w:t>Name</w:t></w:r><w:r><w:tab/><w:t>Value</w:t></w:r></w:p>\
         <w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr></w:p>\
         <w:p><w:r><w:t>Total</w:t><w:br/><w:t>42</w:t></w:r></w:p>",
    );
    let document = UploadedDocument::new("table.docx", DOCX_MIME, data);

    let text = WordAdapter.extract_text(&document).await.unwrap();

    assert_eq!(text, "Name Value\n\nTotal\n42");
}

#[tokio::test]
async fn given_docx_with_empty_body_when_loading_then_empty_text() {
    let document = UploadedDocument::new("blank.docx", DOCX_MIME, docx_with_body(""));

    let text = WordAdapter.extract_text(&document).await.unwrap();

    assert!(text.is_empty());
}

#[tokio::test]
async fn given_zip_without_document_part_when_loading_then_extraction_failed() {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("other.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<x/>").unwrap();
    let data = writer.finish().unwrap().into_inner();
    let document = UploadedDocument::new("odd.docx", DOCX_MIME, data);

    let result = WordAdapter.extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_legacy_binary_doc_when_loading_then_extraction_failed() {
    let document = UploadedDocument::new(
        "legacy.doc",
        "application/msword",
        b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1".to_vec(),
    );

    let result = WordAdapter.extract_text(&document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
