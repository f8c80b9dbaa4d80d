//! Post-processing for retrieval results: score-threshold filtering and
//! deterministic display rendering.
//!
//! The rendered text is returned verbatim to the hosting agent runtime and
//! may be shown to end users unchanged, so the exact line layout is a
//! compatibility contract, not a presentation choice.

use crate::retrieval::types::RetrievalRecord;

/// Rendered when no record survives the score threshold.
pub const NO_RESULTS_MESSAGE: &str = "No results found above score threshold.";

/// Keep records whose score is at or above `min_score`, preserving the
/// collaborator's order (assumed relevance-descending, never re-sorted).
///
/// Records with no score count as 0.0 and drop out unless the threshold
/// is itself non-positive.
pub fn filter_by_score(records: Vec<RetrievalRecord>, min_score: f64) -> Vec<RetrievalRecord> {
    records
        .into_iter()
        .filter(|record| record.effective_score() >= min_score)
        .collect()
}

/// Render filtered records into a human-readable block.
///
/// Per record, in order: a `Score:` line (4 decimal places), a
/// `Document ID:` line, and a `Content:` line only when the record carries
/// a textual payload.
pub fn format_for_display(records: &[RetrievalRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(records.len() * 3);
    for record in records {
        lines.push(format!("\nScore: {:.4}", record.effective_score()));
        lines.push(format!("Document ID: {}", record.display_document_id()));

        if let Some(text) = record.content_text() {
            lines.push(format!("Content: {}\n", text));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(score: Option<f64>, document_id: Option<&str>, content: Option<&str>) -> RetrievalRecord {
        RetrievalRecord {
            score,
            document_id: document_id.map(str::to_string),
            content: content.map(|text| json!(text)),
        }
    }

    #[test]
    fn test_filter_keeps_only_records_at_or_above_threshold() {
        let records = vec![
            record(Some(0.9), Some("a"), None),
            record(Some(0.25), Some("b"), None),
            record(Some(0.1), Some("c"), None),
        ];

        let kept = filter_by_score(records, 0.25);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].document_id.as_deref(), Some("a"));
        assert_eq!(kept[1].document_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let records = vec![
            record(Some(0.3), Some("first"), None),
            record(Some(0.8), Some("second"), None),
            record(Some(0.5), Some("third"), None),
        ];

        let kept = filter_by_score(records, 0.0);

        let ids: Vec<_> = kept.iter().map(|r| r.display_document_id()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_treats_missing_score_as_zero() {
        let records = vec![
            record(None, Some("unscored"), None),
            record(Some(0.5), Some("scored"), None),
        ];

        let kept = filter_by_score(records.clone(), 0.25);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].document_id.as_deref(), Some("scored"));

        // A non-positive threshold admits unscored records.
        let kept = filter_by_score(records, 0.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_filter_zero_threshold_is_identity_for_scored_records() {
        let records = vec![
            record(Some(0.0), Some("a"), None),
            record(Some(0.7), Some("b"), None),
        ];

        let kept = filter_by_score(records.clone(), 0.0);
        assert_eq!(kept.len(), records.len());
    }

    #[test]
    fn test_filter_never_grows_the_set() {
        let records = vec![
            record(Some(0.2), Some("a"), None),
            record(Some(0.4), Some("b"), None),
        ];

        for threshold in [0.0, 0.25, 0.5, 1.0] {
            let kept = filter_by_score(records.clone(), threshold);
            assert!(kept.len() <= records.len());
        }
    }

    #[test]
    fn test_format_empty_returns_exact_message() {
        assert_eq!(format_for_display(&[]), "No results found above score threshold.");
    }

    #[test]
    fn test_format_single_record_line_layout() {
        let records = vec![record(Some(0.8765), Some("doc-1"), Some("Feed twice daily"))];

        let block = format_for_display(&records);

        assert_eq!(
            block,
            "\nScore: 0.8765\nDocument ID: doc-1\nContent: Feed twice daily\n"
        );
    }

    #[test]
    fn test_format_orders_score_then_id_then_content() {
        let records = vec![record(Some(0.5), Some("doc-9"), Some("Brush weekly"))];

        let block = format_for_display(&records);

        let score_pos = block.find("Score: 0.5000").unwrap();
        let id_pos = block.find("Document ID: doc-9").unwrap();
        let content_pos = block.find("Content: Brush weekly").unwrap();
        assert!(score_pos < id_pos);
        assert!(id_pos < content_pos);
    }

    #[test]
    fn test_format_missing_content_omits_content_line() {
        let records = vec![record(Some(0.42), Some("doc-2"), None)];

        let block = format_for_display(&records);

        assert!(block.contains("Score: 0.4200"));
        assert!(block.contains("Document ID: doc-2"));
        assert!(!block.contains("Content:"));
    }

    #[test]
    fn test_format_non_string_content_omitted() {
        let records = vec![RetrievalRecord {
            score: Some(0.6),
            document_id: Some("doc-3".to_string()),
            content: Some(json!({ "nested": "object" })),
        }];

        let block = format_for_display(&records);

        assert!(!block.contains("Content:"));
    }

    #[test]
    fn test_format_missing_document_id_uses_sentinel() {
        let records = vec![record(Some(0.3), None, None)];

        let block = format_for_display(&records);

        assert!(block.contains("Document ID: Unknown"));
    }

    #[test]
    fn test_format_missing_score_renders_zero() {
        let records = vec![record(None, Some("doc-4"), None)];

        let block = format_for_display(&records);

        assert!(block.contains("Score: 0.0000"));
    }

    #[test]
    fn test_format_multiple_records_blank_line_separated() {
        let records = vec![
            record(Some(0.9), Some("doc-a"), Some("First")),
            record(Some(0.8), Some("doc-b"), Some("Second")),
        ];

        let block = format_for_display(&records);

        // The trailing newline of one content line plus the join and the
        // leading newline of the next score line yield a blank line.
        assert!(block.contains("Content: First\n\n\nScore: 0.8000"));
    }
}
