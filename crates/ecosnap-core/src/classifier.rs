use ecosnap_domain::ClassifiedItem;

use crate::CoreError;

/// A captured image handed to the vision classifier, as raw bytes plus the
/// MIME type reported by the capture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Abstraction over the external vision classifier.
///
/// Failures surface as [`CoreError::AnalysisFailed`]; the caller performs
/// no currency computation on failure.
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &CapturedImage) -> Result<Vec<ClassifiedItem>, CoreError>;
}
