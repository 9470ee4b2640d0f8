//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PageDecoder, Result};
use crate::error::PdfError;

/// Page-level text decoder backed by the PDF text layer.
///
/// lopdf handles the structural checks (parse, encryption, page count);
/// pdf-extract pulls the text layer page by page. Scanned documents
/// without a text layer come back as empty pages, not as an error.
pub struct PdfTextDecoder;

impl PdfTextDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfTextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDecoder for PdfTextDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<String>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("Loaded PDF with {} pages", page_count);

        let pages = pdf_extract::extract_text_from_mem_by_pages(&raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        Ok(pages)
    }
}
