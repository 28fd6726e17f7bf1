use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::ContentType;
use crate::presentation::config::{ExtractionSettings, FormatSettings};

use super::composite_file_loader::CompositeFileLoader;
use super::image_adapter::ImageAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::spreadsheet_adapter::SpreadsheetAdapter;
use super::word_adapter::WordAdapter;

const BYTES_PER_MB: u64 = 1024 * 1024;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds the loader for every enabled format. Disabled formats fall
    /// through to the unsupported-type placeholder.
    pub fn create(settings: &ExtractionSettings) -> CompositeFileLoader {
        let spreadsheet: Arc<dyn FileLoader> = Arc::new(SpreadsheetAdapter);
        let candidates: [(ContentType, &FormatSettings, Arc<dyn FileLoader>); 6] = [
            (ContentType::Text, &settings.text, Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>),
            (ContentType::Pdf, &settings.pdf, Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>),
            (ContentType::Word, &settings.word, Arc::new(WordAdapter) as Arc<dyn FileLoader>),
            (ContentType::Spreadsheet, &settings.spreadsheet, Arc::clone(&spreadsheet)),
            (ContentType::Csv, &settings.spreadsheet, spreadsheet),
            (ContentType::Image, &settings.image, Arc::new(ImageAdapter) as Arc<dyn FileLoader>),
        ];

        let mut adapters = Vec::with_capacity(candidates.len());
        let mut limits = Vec::with_capacity(candidates.len());
        for (content_type, format, adapter) in candidates {
            if !format.enabled {
                tracing::info!(?content_type, "Extraction disabled for format");
                continue;
            }
            adapters.push((content_type, adapter));
            limits.push((content_type, format.max_file_size_mb as u64 * BYTES_PER_MB));
        }

        let mut loader = CompositeFileLoader::new(adapters);
        for (content_type, limit) in limits {
            loader = loader.with_size_limit(content_type, limit);
        }
        loader
    }
}
