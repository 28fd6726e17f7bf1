use serde::Serialize;

/// Whether the text handed to the summarizer came out of the document itself
/// or is a descriptive stand-in built from its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Extracted,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    filename: String,
    text: String,
    outcome: ExtractionOutcome,
}

impl ExtractionResult {
    pub fn extracted(filename: impl Into<String>, text: String) -> Self {
        Self {
            filename: filename.into(),
            text,
            outcome: ExtractionOutcome::Extracted,
        }
    }

    pub fn placeholder(filename: impl Into<String>, text: String) -> Self {
        Self {
            filename: filename.into(),
            text,
            outcome: ExtractionOutcome::Placeholder,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn outcome(&self) -> ExtractionOutcome {
        self.outcome
    }

    pub fn is_degraded(&self) -> bool {
        self.outcome == ExtractionOutcome::Placeholder
    }
}
