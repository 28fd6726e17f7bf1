use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

struct Registration {
    adapter: Arc<dyn FileLoader>,
    max_size_bytes: Option<u64>,
}

/// Dispatches a document to the adapter registered for its content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Registration>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters
                .into_iter()
                .map(|(content_type, adapter)| {
                    (
                        content_type,
                        Registration {
                            adapter,
                            max_size_bytes: None,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Caps the upload size accepted for `content_type`. Has no effect when
    /// no adapter is registered for it.
    pub fn with_size_limit(mut self, content_type: ContentType, max_size_bytes: u64) -> Self {
        if let Some(registration) = self.adapters.get_mut(&content_type) {
            registration.max_size_bytes = Some(max_size_bytes);
        }
        self
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.adapters.contains_key(&content_type)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        let registration = self.adapters.get(&document.content_type()).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.mime_type().to_string())
        })?;

        if let Some(limit_bytes) = registration.max_size_bytes {
            if document.size_bytes() > limit_bytes {
                return Err(FileLoaderError::FileTooLarge {
                    size_bytes: document.size_bytes(),
                    limit_bytes,
                });
            }
        }

        registration.adapter.extract_text(document).await
    }
}
