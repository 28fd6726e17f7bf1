mod blocking;
mod composite_file_loader;
mod extractor_factory;
mod image_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod text_sanitizer;
mod word_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::ExtractorFactory;
pub use image_adapter::ImageAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use text_sanitizer::sanitize_extracted_text;
pub use word_adapter::WordAdapter;
