pub mod export;
pub mod parse;

use curva_core::error::CurvaError;
use curva_core::extraction::pdftotext::PdftotextExtractor;
use curva_core::model::ExtractedDocument;
use std::path::Path;

/// Read a report and run extraction on it.
///
/// `.txt` inputs are treated as already-extracted text; anything else goes
/// through pdftotext.
pub fn load_document(
    input_file: &Path,
    filename: Option<&str>,
) -> Result<ExtractedDocument, CurvaError> {
    let default_name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    let filename = filename.or(default_name.as_deref());

    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        let text = std::fs::read_to_string(input_file)?;
        let extraction = curva_core::extract_text(&text, filename);
        Ok(ExtractedDocument { text, extraction })
    } else {
        if !PdftotextExtractor::is_available() {
            return Err(CurvaError::PdftotextNotFound);
        }
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        curva_core::extract_pdf(&pdf_bytes, filename, &extractor)
    }
}

/// Fail with the raw text on stderr when nothing looked like a product.
pub fn require_products(doc: &ExtractedDocument) -> Result<(), CurvaError> {
    if doc.extraction.products_found() {
        return Ok(());
    }
    eprintln!("Extracted text (start):\n");
    eprintln!("{}", curva_core::diagnostic_excerpt(&doc.text));
    eprintln!();
    Err(CurvaError::NoProducts)
}
