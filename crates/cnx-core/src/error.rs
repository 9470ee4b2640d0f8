//! Error types for the cnx-core library.

use thiserror::Error;

/// Errors from the PDF decode layer.
///
/// The extraction layer itself never fails: a missed field is an empty
/// string, not an error. Only turning bytes into page text can go wrong,
/// and the reader swallows even that into an empty document.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}
