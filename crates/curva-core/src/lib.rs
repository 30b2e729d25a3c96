pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::CurvaError;
use extraction::{pages_to_text, PdfExtractor};
use model::{ExtractedDocument, Extraction, ProductRecord};

/// How much raw text is shown to the user when nothing was detected.
pub const DIAGNOSTIC_CHARS: usize = 2000;

/// Extract deduplicated product records from report text, highest value first.
///
/// Lines that are not product rows are skipped; an empty result means no
/// product was detected.
pub fn extract_products(text: &str) -> Vec<ProductRecord> {
    aggregate::aggregate(parsing::parse_records(text))
}

/// Main API entry point: extract products and the sector from report text.
///
/// `filename` is only used to guess the sector when the text has no
/// "Departamento:" section.
pub fn extract_text(text: &str, filename: Option<&str>) -> Extraction {
    let sector = parsing::sector::guess_sector(text, filename);
    let products = extract_products(text);

    tracing::info!(
        sector = %sector,
        products = products.len(),
        "extracted report"
    );

    Extraction { sector, products }
}

/// Extract text from a PDF report and run [`extract_text`] on it.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    filename: Option<&str>,
    extractor: &dyn PdfExtractor,
) -> Result<ExtractedDocument, CurvaError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = pages_to_text(&pages);
    let extraction = extract_text(&text, filename);
    Ok(ExtractedDocument { text, extraction })
}

/// The start of the raw text, for showing when no products were detected.
pub fn diagnostic_excerpt(text: &str) -> &str {
    match text.char_indices().nth(DIAGNOSTIC_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
