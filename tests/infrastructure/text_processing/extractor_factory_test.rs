use precis::application::ports::{FileLoader, FileLoaderError};
use precis::domain::{ContentType, UploadedDocument};
use precis::infrastructure::text_processing::ExtractorFactory;
use precis::presentation::config::ExtractionSettings;

#[test]
fn given_default_settings_when_creating_then_every_known_format_is_supported() {
    let loader = ExtractorFactory::create(&ExtractionSettings::default());

    for content_type in [
        ContentType::Text,
        ContentType::Pdf,
        ContentType::Word,
        ContentType::Spreadsheet,
        ContentType::Csv,
        ContentType::Image,
    ] {
        assert!(loader.supports(content_type), "{content_type:?} missing");
    }
    assert!(!loader.supports(ContentType::Unsupported));
}

#[test]
fn given_disabled_pdf_when_creating_then_pdf_is_not_registered() {
    let mut settings = ExtractionSettings::default();
    settings.pdf.enabled = false;

    let loader = ExtractorFactory::create(&settings);

    assert!(!loader.supports(ContentType::Pdf));
    assert!(loader.supports(ContentType::Text));
}

#[test]
fn given_disabled_spreadsheets_when_creating_then_csv_is_disabled_too() {
    let mut settings = ExtractionSettings::default();
    settings.spreadsheet.enabled = false;

    let loader = ExtractorFactory::create(&settings);

    assert!(!loader.supports(ContentType::Spreadsheet));
    assert!(!loader.supports(ContentType::Csv));
}

#[tokio::test]
async fn given_text_limit_in_megabytes_when_loading_larger_file_then_file_too_large() {
    let mut settings = ExtractionSettings::default();
    settings.text.max_file_size_mb = 1;
    let loader = ExtractorFactory::create(&settings);
    let document = UploadedDocument::new("huge.txt", "text/plain", vec![b'a'; 1024 * 1024 + 1]);

    let result = loader.extract_text(&document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::FileTooLarge {
            limit_bytes: 1_048_576,
            ..
        })
    ));
}
