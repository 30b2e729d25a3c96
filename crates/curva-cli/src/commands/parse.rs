use std::path::PathBuf;

use crate::commands::{load_document, require_products};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    filename: Option<String>,
) -> Result<(), curva_core::error::CurvaError> {
    let doc = load_document(&input_file, filename.as_deref())?;
    require_products(&doc)?;

    match output_format {
        "json" => output::json::print(&doc.extraction)?,
        _ => output::table::print_extraction(&doc.extraction),
    }

    Ok(())
}
