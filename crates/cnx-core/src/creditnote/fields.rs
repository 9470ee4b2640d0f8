//! Document-level field extraction from credit note text.

use super::patterns::{CN_NO, GRAND_TOTAL, REMARK};

/// Extract the credit note number, e.g. `CN NO : 4900123` yields "4900123".
///
/// First match over the whole document wins; empty when absent.
pub fn extract_cn_no(text: &str) -> String {
    CN_NO
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Extract the product line remark following `Credit Note Remark:`,
/// trimmed to the end of the line.
pub fn extract_remark(text: &str) -> String {
    REMARK
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Extract the printed grand total following `Total:` as a raw numeric
/// string, comma grouping preserved.
pub fn extract_grand_total(text: &str) -> String {
    GRAND_TOTAL
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_cn_no() {
        assert_eq!(extract_cn_no("CN NO : 4900123"), "4900123");
        assert_eq!(extract_cn_no("CN NO: 4900123"), "4900123");
        assert_eq!(extract_cn_no("CN NO  :  77"), "77");
    }

    #[test]
    fn test_extract_cn_no_first_match_wins() {
        let text = "CN NO : 111\nCN NO : 222";
        assert_eq!(extract_cn_no(text), "111");
    }

    #[test]
    fn test_extract_cn_no_missing() {
        assert_eq!(extract_cn_no("no credit note number here"), "");
    }

    #[test]
    fn test_extract_remark_stops_at_line_end() {
        let text = "Credit Note Remark: NB Price Protection\nTo : Dealer";
        assert_eq!(extract_remark(text), "NB Price Protection");
    }

    #[test]
    fn test_extract_remark_trims_whitespace() {
        assert_eq!(extract_remark("Credit Note Remark:   NB  "), "NB");
    }

    #[test]
    fn test_extract_remark_missing() {
        assert_eq!(extract_remark("nothing relevant"), "");
    }

    #[test]
    fn test_extract_grand_total_keeps_comma_grouping() {
        assert_eq!(extract_grand_total("Total: 1,234.56"), "1,234.56");
        assert_eq!(extract_grand_total("Total: 20.00"), "20.00");
        assert_eq!(extract_grand_total("Total: 500"), "500");
    }

    #[test]
    fn test_extract_grand_total_missing() {
        assert_eq!(extract_grand_total("Subtotal: 10.00"), "");
    }
}
