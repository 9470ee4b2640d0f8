//! Data models for credit note extraction.

pub mod creditnote;

pub use creditnote::{DocumentRecord, LineItem, RawDocument, RebateEntry, COLUMNS, TOTAL_MARKER};
