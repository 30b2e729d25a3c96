use crate::model::Candidate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Substrings marking report boilerplate (titles, column headers, totals,
/// footer). Any line containing one of them is never a product row.
pub const BOILERPLATE: &[&str] = &[
    "Curva ABC",
    "Período",
    "CST",
    "ECF",
    "Situação Tributária",
    "Classif.",
    "Codigo",
    "Barras",
    "Total do Departamento",
    "Total Geral",
    "www.grupotecnoweb.com.br",
];

/// Every line boundary a report can carry, including the lone `\r`, form
/// feed and Unicode separators some PDF text dumps use between rows.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x85\u{2028}\u{2029}]")
        .expect("valid line break regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// EAN barcode at the very end of a row.
static TRAILING_BARCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{8,13}\b$").expect("valid barcode regex"));

/// Internal product code, left at the end once the barcode is gone.
static TRAILING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4,8}\b\s*$").expect("valid code regex"));

/// `<name> <unit price> <quantity> <value> [anything]`, with the name as
/// short as possible so the first numeric triplet wins.
static PRODUCT_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>.+?)\s+(?P<price>[0-9.,]+)\s+(?P<qty>[0-9.,]+)\s+(?P<value>[0-9.,]+)(\s+.+)?$",
    )
    .expect("valid product row regex")
});

/// Split report text into lines and keep those shaped like product rows.
pub fn extract_candidates(text: &str) -> Vec<Candidate> {
    split_lines(text).filter_map(classify_line).collect()
}

/// Split text into physical lines on any line boundary.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// Try to read a single physical line as a product row.
///
/// Returns None for blank lines, boilerplate and anything without a
/// name followed by three numeric columns.
pub fn classify_line(line: &str) -> Option<Candidate> {
    let collapsed = collapse_whitespace(line);
    let line = collapsed.trim();
    if line.is_empty() {
        return None;
    }

    if is_boilerplate(line) {
        tracing::trace!(line = %line, "skipping boilerplate line");
        return None;
    }

    let cleaned = strip_trailing_codes(line);
    let Some(caps) = PRODUCT_ROW.captures(&cleaned) else {
        tracing::trace!(line = %line, "line does not look like a product row");
        return None;
    };

    Some(Candidate {
        name: caps["name"].trim().to_string(),
        price: caps["price"].to_string(),
        quantity: caps["qty"].to_string(),
        value: caps["value"].to_string(),
    })
}

/// Collapse runs of two or more whitespace characters into one space.
pub fn collapse_whitespace(line: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(line, " ")
}

pub fn is_boilerplate(line: &str) -> bool {
    BOILERPLATE.iter().any(|marker| line.contains(marker))
}

/// Remove the trailing barcode, then the internal code that precedes it.
///
/// Either may be missing; a row with only an internal code loses just that.
fn strip_trailing_codes(line: &str) -> String {
    let without_barcode = TRAILING_BARCODE.replace(line, "");
    let without_code = TRAILING_CODE.replace(without_barcode.trim(), "");
    without_code.trim().to_string()
}
