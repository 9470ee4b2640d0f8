//! Credit note data models and the flat output record.

use serde::{Deserialize, Serialize};

/// Part number sentinel marking a per-file totals row.
pub const TOTAL_MARKER: &str = "TOTAL";

/// Output column titles, in contract order. Renderers group rows per file
/// using the `TOTAL` sentinel in the part number column as the terminator.
pub const COLUMNS: [&str; 9] = [
    "PDF file",
    "Product",
    "Product line",
    "Serial",
    "Part No",
    "FOB",
    "CN FOB",
    "CN Landing",
    "Landing cost",
];

/// A named source document with its per-page extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Source filename, unique within a batch.
    pub name: String,

    /// Extracted text per page, in page order. Empty when decoding failed.
    pub pages: Vec<String>,
}

impl RawDocument {
    /// Create a document from a filename and its page texts.
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Assemble the page-marked text blob the extractors scan.
    ///
    /// Each page with text contributes a `=== PAGE <n> ===` marker line,
    /// the raw page text, and a blank separator line. Pages without text
    /// keep their number but emit nothing, so markers can skip numbers.
    /// A document that failed to decode assembles to an empty string.
    pub fn text(&self) -> String {
        let mut parts = Vec::new();
        for (idx, page) in self.pages.iter().enumerate() {
            if page.is_empty() {
                continue;
            }
            parts.push(format!("=== PAGE {} ===", idx + 1));
            parts.push(page.clone());
            parts.push(String::new());
        }
        parts.join("\n")
    }
}

/// One itemized product line anchored in a credit note body.
///
/// The anchor guarantees the sequence and part numbers; every other field
/// defaults to empty when its lookahead scan found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item sequence number as printed (dotted decimal, e.g. "1.1").
    pub no: String,

    /// Part number token from the anchor line.
    pub part_no: String,

    /// Product description.
    pub product: String,

    /// Serial (`SN:`) or memo (`MEMO:`) number.
    pub serial: String,

    /// FOB amount, the rightmost number on the anchor line.
    pub fob: String,

    /// Invoice number this item was billed under.
    pub invoice: String,
}

/// Landing cost adjustment for one invoice, taken from a REBATE document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateEntry {
    /// Credit note number of the REBATE document that contributed this entry.
    pub credit_note: String,

    /// Landing cost amount as printed, commas and all.
    pub landing_cost: String,
}

/// One flat output row.
///
/// Item rows and the synthesized per-file totals row share this shape;
/// `part_no == TOTAL_MARKER` distinguishes the totals row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Source PDF filename.
    pub file: String,

    /// Product description, empty on the totals row.
    pub product: String,

    /// Document-level product line remark, repeated on every item row.
    pub product_line: String,

    /// Serial or memo number.
    pub serial: String,

    /// Part number, or the totals sentinel.
    pub part_no: String,

    /// FOB amount; the totals row carries the printed grand total here.
    pub fob: String,

    /// The document's own credit note number.
    pub cn_fob: String,

    /// Credit note number of the correlated REBATE document, if any.
    pub cn_landing: String,

    /// Landing cost; empty on item rows, summed (or joined raw) on the
    /// totals row.
    pub landing_cost: String,
}

impl DocumentRecord {
    /// Whether this is a synthesized per-file totals row.
    pub fn is_total(&self) -> bool {
        self.part_no == TOTAL_MARKER
    }

    /// Cells in output column order, matching [`COLUMNS`].
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.file,
            &self.product,
            &self.product_line,
            &self.serial,
            &self.part_no,
            &self.fob,
            &self.cn_fob,
            &self.cn_landing,
            &self.landing_cost,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_marks_each_page() {
        let doc = RawDocument::new("a.pdf", vec!["first".to_string(), "second".to_string()]);
        assert_eq!(doc.text(), "=== PAGE 1 ===\nfirst\n\n=== PAGE 2 ===\nsecond\n");
    }

    #[test]
    fn test_text_skips_empty_pages_but_keeps_numbering() {
        let doc = RawDocument::new(
            "a.pdf",
            vec!["first".to_string(), String::new(), "third".to_string()],
        );
        assert_eq!(doc.text(), "=== PAGE 1 ===\nfirst\n\n=== PAGE 3 ===\nthird\n");
    }

    #[test]
    fn test_text_of_failed_document_is_empty() {
        let doc = RawDocument::new("bad.pdf", Vec::new());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_totals_row_detection() {
        let mut record = DocumentRecord::default();
        assert!(!record.is_total());

        record.part_no = TOTAL_MARKER.to_string();
        assert!(record.is_total());
    }

    #[test]
    fn test_cells_follow_column_order() {
        let record = DocumentRecord {
            file: "cn.pdf".to_string(),
            product: "AS X515".to_string(),
            product_line: "NB".to_string(),
            serial: "S1".to_string(),
            part_no: "P1".to_string(),
            fob: "10.00".to_string(),
            cn_fob: "7001".to_string(),
            cn_landing: "8002".to_string(),
            landing_cost: "99.99".to_string(),
        };

        assert_eq!(
            record.cells(),
            ["cn.pdf", "AS X515", "NB", "S1", "P1", "10.00", "7001", "8002", "99.99"]
        );
        assert_eq!(record.cells().len(), COLUMNS.len());
    }

    #[test]
    fn test_record_serializes_with_stable_field_names() {
        let record = DocumentRecord {
            file: "cn.pdf".to_string(),
            ..DocumentRecord::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["file"], "cn.pdf");
        assert!(json.get("product_line").is_some());
        assert!(json.get("cn_landing").is_some());
        assert!(json.get("landing_cost").is_some());
    }
}
