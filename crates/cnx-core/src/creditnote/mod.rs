//! Credit note extraction rules and batch orchestration.
//!
//! Field and item extraction work line by line over decoded page text.
//! Rebate documents are folded into a [`RebateIndex`] first, then every
//! ordinary document is turned into flat records against that index.

pub mod fields;
pub mod items;
pub mod patterns;
pub mod processor;
pub mod rebate;

pub use fields::{extract_cn_no, extract_grand_total, extract_remark};
pub use items::extract_items;
pub use processor::{process_corpus, process_document, BatchResult, BatchStats};
pub use rebate::{is_rebate, RebateIndex};
