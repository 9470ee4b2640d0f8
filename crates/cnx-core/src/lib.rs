//! Core library for ASUS credit note extraction.
//!
//! This crate provides:
//! - PDF page text decoding, including empty-password decryption
//! - Credit note field and line item extraction
//! - Rebate document correlation across a batch
//! - Flat record models ready for tabular output

pub mod error;
pub mod models;
pub mod pdf;
pub mod creditnote;

pub use error::PdfError;
pub use models::creditnote::{DocumentRecord, LineItem, RawDocument, RebateEntry, COLUMNS, TOTAL_MARKER};
pub use pdf::{read_document, PageDecoder, PdfTextDecoder};
pub use creditnote::{
    extract_cn_no, extract_grand_total, extract_items, extract_remark, is_rebate, process_corpus,
    process_document, BatchResult, BatchStats, RebateIndex,
};
