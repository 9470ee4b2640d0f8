//! PDF text reading module.

mod reader;

pub use reader::PdfTextDecoder;

use tracing::warn;

use crate::error::PdfError;
use crate::models::creditnote::RawDocument;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for page-level PDF text decoders.
pub trait PageDecoder {
    /// Decode per-page text from a PDF byte stream.
    fn decode(&self, data: &[u8]) -> Result<Vec<String>>;
}

/// Read a named document through `decoder`, swallowing decode failures.
///
/// A document that cannot be decoded gets an empty page list, so it
/// assembles to empty text and contributes zero records downstream. The
/// failure is logged and never propagated.
pub fn read_document<D: PageDecoder>(decoder: &D, name: &str, data: &[u8]) -> RawDocument {
    match decoder.decode(data) {
        Ok(pages) => RawDocument::new(name, pages),
        Err(e) => {
            warn!("Failed to decode {}: {}", name, e);
            RawDocument::new(name, Vec::new())
        }
    }
}
