//! Regex patterns and line filters for the ASUS credit note layout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document-level fields
    pub static ref CN_NO: Regex = Regex::new(
        r"CN NO\s*:\s*(\d+)"
    ).unwrap();

    pub static ref REMARK: Regex = Regex::new(
        r"Credit Note Remark:\s*(.+?)(?:\r?\n|$)"
    ).unwrap();

    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"Total:\s*([\d,]+\.?\d*)"
    ).unwrap();

    // Item table: sequence number, part number, quantity, free remainder
    pub static ref ITEM_ANCHOR: Regex = Regex::new(
        r"^(\d+\.\d+)\s+([A-Z0-9\-]+)\s+(\d+)\s+(.+)$"
    ).unwrap();

    // Prefix form of the anchor, used as an early stop in lookahead scans
    pub static ref ITEM_STOP: Regex = Regex::new(
        r"^\d+\.\d+\s+[A-Z0-9\-]+\s+\d+\s+"
    ).unwrap();

    // Comma-grouped number with optional decimals
    pub static ref NUMBER: Regex = Regex::new(
        r"[\d,]+\.?\d*"
    ).unwrap();

    // Item lookahead fields
    pub static ref SERIAL_NO: Regex = Regex::new(
        r"SN:([A-Z0-9]+)"
    ).unwrap();

    pub static ref MEMO_NO: Regex = Regex::new(
        r"MEMO:([A-Z0-9]+)"
    ).unwrap();

    pub static ref INVOICE_NO: Regex = Regex::new(
        r"(?i)INVOICE[:\s]+(\d+)"
    ).unwrap();

    // Rebate documents
    pub static ref REBATE_LINE: Regex = Regex::new(
        r"REBATE FOR INVOICE:\s*(\d+)\s+([\d,.]+)"
    ).unwrap();
}

/// Literal marking a document as a REBATE mapping document.
pub const REBATE_TAG: &str = "REBATE FOR INVOICE:";

/// Line prefixes passed over while scanning for a product description.
pub const DESCRIPTION_SKIP: &[&str] = &["Model:", "===", "No ", "Page", "SO:", "Note:"];

/// Line prefixes passed over while scanning for a serial number. Mostly
/// letterhead and address boilerplate that sits between the item table
/// and the serial note lines.
pub const SERIAL_SKIP: &[&str] = &[
    "===",
    "Page:",
    "CN#",
    "No Description",
    "ASUS GLOBAL",
    "10 Changi",
    "Reg. No",
    "Credit Note",
    "To :",
    "Address",
    "Attn",
    "Fax",
    "Date",
    "CN Reason",
    "Credit Note Remark",
];
