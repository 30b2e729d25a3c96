use curva_core::config::{load_config, validate_config, SheetConfig};
use curva_core::error::CurvaError;
use curva_core::export::{build_rows, default_selection, output_stem, select};
use std::path::PathBuf;

use crate::commands::{load_document, require_products};
use crate::output;

pub struct ExportArgs {
    pub input_file: PathBuf,
    pub config: Option<PathBuf>,
    pub sector: Option<String>,
    pub month: Option<String>,
    pub week: Option<String>,
    pub select: Vec<String>,
    pub top: Option<usize>,
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<(), CurvaError> {
    // Flags override the config file, which overrides the defaults
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SheetConfig::default(),
    };
    if args.sector.is_some() {
        config.sector = args.sector;
    }
    if let Some(month) = args.month {
        config.month = month;
    }
    if let Some(week) = args.week {
        config.week = week;
    }
    if let Some(top) = args.top {
        config.default_selection = top;
    }
    validate_config(&config)?;

    let doc = load_document(&args.input_file, None)?;
    require_products(&doc)?;
    let extraction = &doc.extraction;

    let names = if args.select.is_empty() {
        default_selection(&extraction.products, config.default_selection)
    } else {
        args.select
    };
    let selected = select(&extraction.products, &names)?;

    let sector = config.sector.as_deref().unwrap_or(&extraction.sector);
    let rows = build_rows(&selected, sector, &config.month, &config.week);
    tracing::info!(rows = rows.len(), sector = %sector, month = %config.month, "built sheet rows");

    match args.out {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(format!("{}.json", output_stem(&config.month)))
            } else {
                path
            };
            let json = serde_json::to_string_pretty(&rows)?;
            std::fs::write(&path, json)?;
            eprintln!("Wrote {} row(s) to {}", rows.len(), path.display());
        }
        None => output::json::print(&rows)?,
    }

    Ok(())
}
