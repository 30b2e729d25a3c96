/// A token that could not be read as a number in either locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number '{0}'")]
pub struct NotANumber(pub String);

/// Parse a numeric token that may use Brazilian or US separators.
///
/// Handles formats like:
/// - "1.234,56" -> 1234.56 (BR: dot thousands, comma decimal)
/// - "12,50" -> 12.5
/// - "1,234.56" -> 1234.56 (US: comma thousands)
/// - "1234.56" -> 1234.56
///
/// The BR reading is tried first whenever the token has a comma; the US
/// reading is the fallback when that fails. A dot after the last comma can
/// only be a US decimal point, so the BR reading is refused for it.
pub fn parse_number(token: &str) -> Result<f64, NotANumber> {
    let t = token.trim();
    parse_br(t)
        .or_else(|| parse_en(t))
        .ok_or_else(|| NotANumber(t.to_string()))
}

fn parse_br(t: &str) -> Option<f64> {
    let last_comma = t.rfind(',')?;
    if t[last_comma..].contains('.') {
        return None;
    }
    t.replace('.', "").replace(',', ".").parse().ok()
}

fn parse_en(t: &str) -> Option<f64> {
    t.replace(',', "").parse().ok()
}
