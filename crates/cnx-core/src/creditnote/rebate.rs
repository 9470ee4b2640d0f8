//! REBATE document classification and the invoice correlation index.

use std::collections::HashMap;

use tracing::debug;

use super::fields::extract_cn_no;
use super::patterns::{REBATE_LINE, REBATE_TAG};
use crate::models::creditnote::RebateEntry;

/// Whether a document's text marks it as a REBATE mapping document.
///
/// Rebate documents carry invoice adjustments for other credit notes and
/// never contribute rows of their own.
pub fn is_rebate(text: &str) -> bool {
    text.contains(REBATE_TAG)
}

/// Invoice number to rebate adjustment index, built once per batch and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RebateIndex {
    entries: HashMap<String, RebateEntry>,
}

impl RebateIndex {
    /// Fold the rebate mappings out of `texts`, in input order.
    ///
    /// Non-rebate texts contribute nothing. One rebate document can map
    /// many invoices, all to its own credit note number; when the same
    /// invoice appears again in a later document, the later entry
    /// overwrites the earlier one.
    pub fn build<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = HashMap::new();

        for text in texts {
            if !is_rebate(text) {
                continue;
            }

            let credit_note = extract_cn_no(text);
            for caps in REBATE_LINE.captures_iter(text) {
                entries.insert(
                    caps[1].to_string(),
                    RebateEntry {
                        credit_note: credit_note.clone(),
                        landing_cost: caps[2].to_string(),
                    },
                );
            }
        }

        debug!("Rebate index holds {} invoice mappings", entries.len());
        Self { entries }
    }

    /// Look up the rebate entry for an invoice number.
    pub fn get(&self, invoice: &str) -> Option<&RebateEntry> {
        self.entries.get(invoice)
    }

    /// Number of mapped invoices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
