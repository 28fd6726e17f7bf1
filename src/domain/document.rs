use std::fmt;
use std::path::Path;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A file selected for summarization, held fully in memory.
///
/// The content type is decided once at construction from the declared MIME
/// type and the filename; nothing about the document changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    id: DocumentId,
    filename: String,
    mime_type: String,
    content_type: ContentType,
    data: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime_type = mime_type.into();
        let content_type = ContentType::classify(&mime_type, &filename);
        Self {
            id: DocumentId::new(),
            filename,
            mime_type,
            content_type,
            data,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Pdf,
    Word,
    Spreadsheet,
    Csv,
    Image,
    Unsupported,
}

const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "log"];
const WORD_EXTENSIONS: &[&str] = &["docx", "doc"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

impl ContentType {
    /// Routes a file to an extraction strategy.
    ///
    /// A recognised MIME type wins; the extension is only consulted when the
    /// declared type is missing or generic. Within either source the order is
    /// plain text, PDF, Word, spreadsheet/CSV, image.
    ///
    /// A `.csv` file declared with a spreadsheet MIME type (browsers send
    /// `application/vnd.ms-excel` for CSV when Excel is installed) is CSV.
    pub fn classify(mime: &str, filename: &str) -> Self {
        match (Self::from_mime(mime), Self::from_extension(filename)) {
            (Some(Self::Spreadsheet), Some(Self::Csv)) => Self::Csv,
            (Some(content_type), _) | (None, Some(content_type)) => content_type,
            (None, None) => Self::Unsupported,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Some(Self::Text),
            "application/pdf" => Some(Self::Pdf),
            m if m.contains("word") || m.contains("docx") => Some(Self::Word),
            "text/csv" | "application/csv" => Some(Self::Csv),
            m if m.contains("spreadsheet") || m.contains("ms-excel") => Some(Self::Spreadsheet),
            m if m.starts_with("image/") => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_extension(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        let extension = extension.as_str();

        if TEXT_EXTENSIONS.contains(&extension) {
            Some(Self::Text)
        } else if extension == "pdf" {
            Some(Self::Pdf)
        } else if WORD_EXTENSIONS.contains(&extension) {
            Some(Self::Word)
        } else if extension == "csv" {
            Some(Self::Csv)
        } else if SPREADSHEET_EXTENSIONS.contains(&extension) {
            Some(Self::Spreadsheet)
        } else if IMAGE_EXTENSIONS.contains(&extension) {
            Some(Self::Image)
        } else {
            None
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Pdf => "application/pdf",
            Self::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Spreadsheet => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv",
            Self::Image => "image/*",
            Self::Unsupported => "application/octet-stream",
        }
    }

    /// Formats whose text comes out of a document parser. An empty result
    /// from one of these is replaced by a placeholder rather than sent as-is.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Pdf | Self::Word | Self::Spreadsheet)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text file",
            Self::Pdf => "PDF",
            Self::Word => "Word document",
            Self::Spreadsheet => "spreadsheet",
            Self::Csv => "CSV file",
            Self::Image => "image",
            Self::Unsupported => "unsupported file",
        };
        f.write_str(label)
    }
}
