//! Product selection and the rows handed to the spreadsheet writer.

use crate::error::CurvaError;
use crate::model::ProductRecord;
use serde::{Deserialize, Serialize};

/// One output row. Field names match the sheet's column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(rename = "nome do produto")]
    pub name: String,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "mês")]
    pub month: String,
    #[serde(rename = "semana")]
    pub week: String,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    #[serde(rename = "valor")]
    pub value: f64,
}

/// Names of the first `n` products, i.e. the top `n` by value.
pub fn default_selection(products: &[ProductRecord], n: usize) -> Vec<String> {
    products.iter().take(n).map(|p| p.name.clone()).collect()
}

/// Keep the products whose names were selected, in ranking order.
pub fn select<'a>(
    products: &'a [ProductRecord],
    names: &[String],
) -> Result<Vec<&'a ProductRecord>, CurvaError> {
    if names.is_empty() {
        return Err(CurvaError::EmptySelection);
    }

    if let Some(missing) = names
        .iter()
        .find(|name| !products.iter().any(|p| &p.name == *name))
    {
        return Err(CurvaError::UnknownProduct(missing.clone()));
    }

    Ok(products
        .iter()
        .filter(|p| names.contains(&p.name))
        .collect())
}

/// Build sheet rows for the selected products.
///
/// Quantities are rounded to 3 decimals and values to 2; rows are ordered by
/// value, highest first.
pub fn build_rows(
    selected: &[&ProductRecord],
    sector: &str,
    month: &str,
    week: &str,
) -> Vec<SheetRow> {
    let mut rows: Vec<SheetRow> = selected
        .iter()
        .map(|p| SheetRow {
            name: p.name.clone(),
            sector: sector.to_string(),
            month: month.to_string(),
            week: week.to_string(),
            quantity: round_to(p.quantity, 3),
            value: round_to(p.value, 2),
        })
        .collect();

    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

/// File stem for an export of the given month: "08/2025" -> "produtos_08-2025".
pub fn output_stem(month: &str) -> String {
    format!("produtos_{}", month.replace('/', "-"))
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}
