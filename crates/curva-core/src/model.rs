use serde::{Deserialize, Serialize};

/// Sector label returned when neither the report text nor the filename
/// identifies a department.
pub const UNKNOWN_SECTOR: &str = "N/D";

/// Raw tokens matched from one report line, before numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub value: String,
}

/// One product row of a Curva ABC report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name as printed in the report.
    pub name: String,
    /// Only used for validation and averaging; never serialized.
    #[serde(skip)]
    pub(crate) unit_price: f64,
    pub quantity: f64,
    pub value: f64,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: f64, value: f64) -> Self {
        ProductRecord {
            name: name.into(),
            unit_price,
            quantity,
            value,
        }
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

/// Everything the core extracts from one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Best-effort department label, or [`UNKNOWN_SECTOR`].
    pub sector: String,
    /// Deduplicated products, highest value first.
    pub products: Vec<ProductRecord>,
}

impl Extraction {
    /// False when no line of the report was recognized as a product.
    ///
    /// This is a normal outcome for non-Curva ABC documents; callers should
    /// surface the raw text so the user can see what was extracted.
    pub fn products_found(&self) -> bool {
        !self.products.is_empty()
    }

    pub fn sector_known(&self) -> bool {
        self.sector != UNKNOWN_SECTOR
    }
}

/// A PDF's extracted text together with what was found in it.
///
/// The text is kept so callers can show it when no products were detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub extraction: Extraction,
}
