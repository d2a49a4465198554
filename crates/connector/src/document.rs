//! Simulated document intelligence: turns an uploaded customer document into
//! fields ready for posting. No OCR happens; the result is a fixed template.

use sapsim_core::{DocumentExtraction, ExtractedFields, PostingHeader, PostingItem, SapReadyData};

/// Characters of the source document kept in the snippet.
pub const SNIPPET_CHARS: usize = 50;

const EXTRACTION_CONFIDENCE: f64 = 0.98;

/// Extract posting data from a document.
pub fn extract(document_type: &str, document_content: &str, customer_id: &str) -> DocumentExtraction {
    tracing::debug!(
        document_type,
        customer_id,
        content_chars = document_content.chars().count(),
        "extracting document fields"
    );

    DocumentExtraction {
        extracted_fields: ExtractedFields {
            customer_number: customer_id.to_string(),
            document_type: document_type.to_string(),
            amount: "15000.00".to_string(),
            date: "2024-02-06".to_string(),
            content_snippet: snippet(document_content),
        },
        confidence: EXTRACTION_CONFIDENCE,
        sap_ready_data: SapReadyData {
            header: PostingHeader {
                doc_type: "DR".to_string(),
                comp_code: "1000".to_string(),
            },
            items: vec![PostingItem {
                item: 10,
                amount: 15000.00,
            }],
        },
    }
}

/// First `SNIPPET_CHARS` characters followed by an ellipsis, always.
fn snippet(content: &str) -> String {
    let mut out: String = content.chars().take(SNIPPET_CHARS).collect();
    out.push_str("...");
    out
}
