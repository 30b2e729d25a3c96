pub mod lines;
pub mod numbers;
pub mod sector;
pub mod validate;

use crate::model::ProductRecord;
use lines::extract_candidates;
use validate::validate;

/// Parse report text into validated product records, one per matching line.
///
/// Records are not yet deduplicated; the same product may appear on several
/// lines (e.g. once per page or per tax situation).
pub fn parse_records(text: &str) -> Vec<ProductRecord> {
    let candidates = extract_candidates(text);
    let matched = candidates.len();

    let records: Vec<ProductRecord> = candidates.iter().filter_map(validate).collect();

    tracing::debug!(
        lines = lines::split_lines(text).count(),
        matched,
        accepted = records.len(),
        "parsed product lines"
    );

    records
}
