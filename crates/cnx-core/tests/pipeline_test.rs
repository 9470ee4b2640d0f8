//! End-to-end tests over the document and corpus pipeline.

use cnx_core::{
    extract_items, process_corpus, process_document, read_document, DocumentRecord, LineItem,
    PageDecoder, PdfError, RawDocument, RebateIndex, TOTAL_MARKER,
};
use pretty_assertions::assert_eq;

/// Decoder stub that always fails, standing in for an unreadable PDF.
struct FailingDecoder;

impl PageDecoder for FailingDecoder {
    fn decode(&self, _data: &[u8]) -> Result<Vec<String>, PdfError> {
        Err(PdfError::Parse("not a PDF".to_string()))
    }
}

const CREDIT_NOTE_7001: &str = "\
CN NO : 7001
1.1 ABC-123 2 10.00 20.00
AS Some Product
SN:XYZ789
INVOICE: 555
Total: 20.00";

const REBATE_8002: &str = "\
CN NO : 8002
REBATE FOR INVOICE: 555 99.99
REBATE FOR INVOICE: 556 10.00";

#[test]
fn test_single_item_document_end_to_end() {
    let items = extract_items(CREDIT_NOTE_7001);
    assert_eq!(
        items,
        vec![LineItem {
            no: "1.1".to_string(),
            part_no: "ABC-123".to_string(),
            product: "AS Some Product".to_string(),
            serial: "XYZ789".to_string(),
            fob: "20.00".to_string(),
            invoice: "555".to_string(),
        }]
    );

    let records = process_document("cn_7001.pdf", CREDIT_NOTE_7001, &RebateIndex::default());
    assert_eq!(
        records,
        vec![
            DocumentRecord {
                file: "cn_7001.pdf".to_string(),
                product: "AS Some Product".to_string(),
                product_line: String::new(),
                serial: "XYZ789".to_string(),
                part_no: "ABC-123".to_string(),
                fob: "20.00".to_string(),
                cn_fob: "7001".to_string(),
                cn_landing: String::new(),
                landing_cost: String::new(),
            },
            DocumentRecord {
                file: "cn_7001.pdf".to_string(),
                product: String::new(),
                product_line: String::new(),
                serial: String::new(),
                part_no: TOTAL_MARKER.to_string(),
                fob: "20.00".to_string(),
                cn_fob: "7001".to_string(),
                cn_landing: String::new(),
                landing_cost: String::new(),
            },
        ]
    );
}

#[test]
fn test_rebate_index_maps_both_invoices_to_one_credit_note() {
    let index = RebateIndex::build([REBATE_8002]);

    assert_eq!(index.len(), 2);
    let first = index.get("555").unwrap();
    assert_eq!(first.credit_note, "8002");
    assert_eq!(first.landing_cost, "99.99");
    let second = index.get("556").unwrap();
    assert_eq!(second.credit_note, "8002");
    assert_eq!(second.landing_cost, "10.00");
}

#[test]
fn test_document_without_anchors_has_no_totals_row() {
    let text = "CN NO : 7002\nCredit Note Remark: NB\nTotal: 99.00";
    assert!(process_document("no_items.pdf", text, &RebateIndex::default()).is_empty());
}

#[test]
fn test_three_items_produce_four_records_ending_in_totals() {
    let text = "\
CN NO : 7020
1.1 AA-1 1 10.00
1.2 BB-2 1 20.00
1.3 CC-3 1 30.00
Total: 60.00";
    let records = process_document("triple.pdf", text, &RebateIndex::default());

    assert_eq!(records.len(), 4);
    assert!(records[..3].iter().all(|r| !r.is_total()));
    assert!(records[3].is_total());
    assert_eq!(records[3].part_no, TOTAL_MARKER);
    assert_eq!(records[3].fob, "60.00");
}

#[test]
fn test_rebate_correlation_applies_to_every_record() {
    let text = "\
CN NO : 7030
1.1 AA-1 1 10.00
INVOICE: 12345
Total: 10.00";
    let index = RebateIndex::build(["CN NO : 99\nREBATE FOR INVOICE: 12345 100.50"]);
    let records = process_document("matched.pdf", text, &index);

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.cn_landing, "99");
    }
    assert_eq!(records[1].landing_cost, "100.50");
}

#[test]
fn test_landing_cost_sum_ignores_item_order() {
    let forward = "\
CN NO : 7010
1.1 AA-1 1 10.00
INVOICE: 111
1.2 BB-2 1 20.00
INVOICE: 222
Total: 30.00";
    let reversed = "\
CN NO : 7010
1.1 BB-2 1 20.00
INVOICE: 222
1.2 AA-1 1 10.00
INVOICE: 111
Total: 30.00";
    let index = RebateIndex::build([
        "CN NO : 8900\nREBATE FOR INVOICE: 111 33.34\nREBATE FOR INVOICE: 222 66.67",
    ]);

    let a = process_document("forward.pdf", forward, &index);
    let b = process_document("reversed.pdf", reversed, &index);

    assert_eq!(a.last().unwrap().landing_cost, "100.01");
    assert_eq!(b.last().unwrap().landing_cost, "100.01");
}

#[test]
fn test_rebate_document_never_yields_records() {
    let text = "\
CN NO : 8002
1.1 ABC-123 2 10.00 20.00
AS Some Product
Total: 20.00
REBATE FOR INVOICE: 555 99.99";
    assert!(process_document("rebate.pdf", text, &RebateIndex::default()).is_empty());

    let result = process_corpus(&[RawDocument::new("rebate.pdf", vec![text.to_string()])]);
    assert_eq!(result.stats.rebate_files, 1);
    assert_eq!(result.stats.records, 0);
}

#[test]
fn test_corpus_correlates_across_documents() {
    let docs = vec![
        RawDocument::new("cn_7001.pdf", vec![CREDIT_NOTE_7001.to_string()]),
        RawDocument::new("rebate_8002.pdf", vec![REBATE_8002.to_string()]),
    ];
    let result = process_corpus(&docs);

    assert_eq!(result.stats.files, 2);
    assert_eq!(result.stats.processed, 1);
    assert_eq!(result.stats.rebate_files, 1);
    assert_eq!(result.stats.records, 2);
    assert_eq!(result.records[0].cn_landing, "8002");
    assert_eq!(result.records[1].landing_cost, "99.99");
}

#[test]
fn test_reprocessing_is_byte_identical() {
    let docs = vec![
        RawDocument::new("rebate_8002.pdf", vec![REBATE_8002.to_string()]),
        RawDocument::new("cn_7001.pdf", vec![CREDIT_NOTE_7001.to_string()]),
    ];

    let first = serde_json::to_vec(&process_corpus(&docs).records).unwrap();
    let second = serde_json::to_vec(&process_corpus(&docs).records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_lookahead_crosses_page_markers() {
    let doc = RawDocument::new(
        "two_pages.pdf",
        vec![
            "CN NO : 7005\n1.1 KB-100 1 5.00".to_string(),
            "SN:AA11\nINVOICE: 601\nTotal: 5.00".to_string(),
        ],
    );
    let text = doc.text();
    assert!(text.contains("=== PAGE 1 ==="));
    assert!(text.contains("=== PAGE 2 ==="));

    let items = extract_items(&text);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].serial, "AA11");
    assert_eq!(items[0].invoice, "601");
    assert_eq!(items[0].fob, "5.00");
}

#[test]
fn test_undecodable_input_flows_through_as_empty() {
    let doc = read_document(&FailingDecoder, "garbage.pdf", b"junk");
    assert_eq!(doc.name, "garbage.pdf");
    assert_eq!(doc.text(), "");

    let result = process_corpus(&[doc]);
    assert_eq!(result.stats.files, 1);
    assert_eq!(result.stats.processed, 0);
    assert_eq!(result.stats.records, 0);
}
