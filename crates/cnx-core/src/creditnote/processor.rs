//! Document and corpus processing on top of the extraction rules.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::fields::{extract_cn_no, extract_grand_total, extract_remark};
use super::items::extract_items;
use super::rebate::{is_rebate, RebateIndex};
use crate::models::creditnote::{DocumentRecord, RawDocument, TOTAL_MARKER};

/// Records and statistics for one processed batch.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// All output rows, in document arrival order.
    pub records: Vec<DocumentRecord>,
    /// Batch counters.
    pub stats: BatchStats,
}

/// Counters reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Documents in the batch.
    pub files: usize,
    /// Documents that produced at least one record.
    pub processed: usize,
    /// Documents classified as REBATE mapping documents.
    pub rebate_files: usize,
    /// Total records emitted, totals rows included.
    pub records: usize,
}

/// Extract the output records for one document's text.
///
/// REBATE documents and documents without a single item anchor produce
/// nothing. Anything else yields one record per item plus a trailing
/// totals row carrying the printed grand total and the summed landing
/// costs of every rebate-matched item.
pub fn process_document(name: &str, text: &str, rebates: &RebateIndex) -> Vec<DocumentRecord> {
    if is_rebate(text) {
        debug!("{} is a rebate document, no rows emitted", name);
        return Vec::new();
    }

    let items = extract_items(text);
    if items.is_empty() {
        return Vec::new();
    }

    let cn_no = extract_cn_no(text);
    let product_line = extract_remark(text);
    let grand_total = extract_grand_total(text);

    // Correlate before building rows: the rebate credit note is
    // document-wide, and when items resolve to different rebate documents
    // the last item wins. Each matched item contributes its amount even
    // when several share one invoice.
    let mut landing_costs = Vec::new();
    let mut cn_landing = String::new();
    for item in &items {
        if item.invoice.is_empty() {
            continue;
        }
        if let Some(entry) = rebates.get(&item.invoice) {
            landing_costs.push(entry.landing_cost.clone());
            if !entry.credit_note.is_empty() {
                cn_landing = entry.credit_note.clone();
            }
        }
    }

    let mut records: Vec<DocumentRecord> = items
        .into_iter()
        .map(|item| DocumentRecord {
            file: name.to_string(),
            product: item.product,
            product_line: product_line.clone(),
            serial: item.serial,
            part_no: item.part_no,
            fob: item.fob,
            cn_fob: cn_no.clone(),
            cn_landing: cn_landing.clone(),
            landing_cost: String::new(),
        })
        .collect();

    records.push(DocumentRecord {
        file: name.to_string(),
        product: String::new(),
        product_line: String::new(),
        serial: String::new(),
        part_no: TOTAL_MARKER.to_string(),
        fob: grand_total,
        cn_fob: cn_no,
        cn_landing,
        landing_cost: sum_landing_costs(&landing_costs),
    });

    records
}

/// Sum raw landing cost amounts to two decimal places.
///
/// Commas are grouping and stripped before parsing. One amount that
/// fails to parse, or a running total that leaves the decimal range,
/// switches the whole result to the comma-joined raw strings so nothing
/// is silently dropped. No amounts at all yields an empty string.
fn sum_landing_costs(costs: &[String]) -> String {
    if costs.is_empty() {
        return String::new();
    }

    let mut total = Decimal::ZERO;
    for cost in costs {
        let amount = match Decimal::from_str(&cost.replace(',', "")) {
            Ok(amount) => amount,
            Err(_) => return costs.join(", "),
        };
        total = match total.checked_add(amount) {
            Some(sum) => sum,
            None => return costs.join(", "),
        };
    }
    format!("{:.2}", total)
}

/// Run the whole pipeline over a batch of documents.
///
/// The rebate index is folded over every document before any document is
/// processed, so a rebate document late in the batch still applies to an
/// ordinary document early in it. Records keep document input order.
pub fn process_corpus(documents: &[RawDocument]) -> BatchResult {
    let texts: Vec<String> = documents.iter().map(|doc| doc.text()).collect();
    let index = RebateIndex::build(texts.iter().map(String::as_str));

    let mut records = Vec::new();
    let mut stats = BatchStats {
        files: documents.len(),
        ..BatchStats::default()
    };

    for (doc, text) in documents.iter().zip(&texts) {
        if is_rebate(text) {
            stats.rebate_files += 1;
            continue;
        }

        let rows = process_document(&doc.name, text, &index);
        if !rows.is_empty() {
            stats.processed += 1;
        }
        records.extend(rows);
    }

    stats.records = records.len();
    info!(
        "Processed {} of {} documents ({} rebate) into {} records",
        stats.processed, stats.files, stats.rebate_files, stats.records
    );

    BatchResult { records, stats }
}
