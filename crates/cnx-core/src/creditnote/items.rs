//! Item table scanning with bounded lookahead windows.

use tracing::debug;

use super::patterns::{
    DESCRIPTION_SKIP, INVOICE_NO, ITEM_ANCHOR, ITEM_STOP, MEMO_NO, NUMBER, SERIAL_NO, SERIAL_SKIP,
};
use crate::models::creditnote::LineItem;

/// Bounded forward scan policy for one auxiliary item field.
///
/// The three fields trailing an item anchor (description, serial,
/// invoice) differ only in window size, which boilerplate lines they pass
/// over, and whether the next item anchor cuts the scan short. The
/// per-line extraction itself is supplied by the caller.
struct Lookahead {
    /// Lines inspected past the anchor, at most.
    window: usize,
    /// Lines starting with any of these prefixes are passed over.
    skip_prefixes: &'static [&'static str],
    /// Whether a new item anchor terminates the scan empty-handed.
    stop_at_anchor: bool,
}

const DESCRIPTION: Lookahead = Lookahead {
    window: 2,
    skip_prefixes: DESCRIPTION_SKIP,
    stop_at_anchor: false,
};

const SERIAL: Lookahead = Lookahead {
    window: 14,
    skip_prefixes: SERIAL_SKIP,
    stop_at_anchor: true,
};

const INVOICE: Lookahead = Lookahead {
    window: 10,
    skip_prefixes: &[],
    stop_at_anchor: true,
};

impl Lookahead {
    /// Scan forward from `start`, returning the first extracted value.
    ///
    /// `extract` decides per line: `Some(value)` ends the scan with that
    /// value (possibly empty, for lines that are terminal but carry no
    /// usable payload), `None` moves on. An exhausted window yields an
    /// empty string.
    fn find<F>(&self, lines: &[&str], start: usize, extract: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        for &line in lines.iter().skip(start).take(self.window) {
            if self.skip_prefixes.iter().any(|prefix| line.starts_with(prefix)) {
                continue;
            }
            if self.stop_at_anchor && ITEM_STOP.is_match(line) {
                break;
            }
            if let Some(value) = extract(line) {
                return value;
            }
        }
        String::new()
    }
}

/// Accept a description line. `AS `-prefixed model names win, otherwise
/// any slash-bearing line that is not an EAN or MODEL column. The `AS `
/// check runs first on each line.
fn description_on_line(line: &str) -> Option<String> {
    if line.starts_with("AS ") {
        return Some(line.to_string());
    }
    if line.contains('/') && !line.starts_with("EAN") && !line.starts_with("MODEL") {
        return Some(line.to_string());
    }
    None
}

/// A line mentioning `SN:` always terminates the serial scan. The value
/// is the alphanumeric run after `SN:`, falling back to the run after
/// `MEMO:` on the same line, or empty when neither yields one.
fn serial_on_line(line: &str) -> Option<String> {
    if !line.contains("SN:") {
        return None;
    }
    if let Some(caps) = SERIAL_NO.captures(line) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = MEMO_NO.captures(line) {
        return Some(caps[1].to_string());
    }
    Some(String::new())
}

fn invoice_on_line(line: &str) -> Option<String> {
    INVOICE_NO.captures(line).map(|caps| caps[1].to_string())
}

/// Scan credit note text for item anchor lines and their trailing fields.
///
/// The cursor advances one line at a time with no backtracking, so a
/// later anchor inside an earlier anchor's lookahead window is still
/// picked up as its own item. Each anchor's three scans start fresh from
/// the line after it.
pub fn extract_items(text: &str) -> Vec<LineItem> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut items = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = ITEM_ANCHOR.captures(line) else {
            continue;
        };

        // Rightmost number in the remainder is the value column; the
        // columns before it are quantity and unit price.
        let rest = caps[4].trim();
        let fob = NUMBER
            .find_iter(rest)
            .last()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let product = DESCRIPTION.find(&lines, i + 1, description_on_line);
        let serial = SERIAL.find(&lines, i + 1, serial_on_line);
        let invoice = INVOICE.find(&lines, i + 1, invoice_on_line);

        items.push(LineItem {
            no: caps[1].to_string(),
            part_no: caps[2].to_string(),
            product,
            serial,
            fob,
            invoice,
        });
    }

    debug!("Extracted {} items from {} lines", items.len(), lines.len());
    items
}
