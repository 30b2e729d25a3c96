use crate::model::{Candidate, ProductRecord};
use crate::parsing::numbers::parse_number;
use regex::Regex;
use std::sync::LazyLock;

/// Three consecutive letters, accented Latin included.
static NAME_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ]{3,}").expect("valid name regex"));

/// Turn a candidate into a product record if it passes the sanity filters.
///
/// Rejections are expected for noise lines and are only traced.
pub fn validate(candidate: &Candidate) -> Option<ProductRecord> {
    let Some((price, quantity, value)) = parse_fields(candidate) else {
        tracing::trace!(name = %candidate.name, "rejected candidate with invalid numbers");
        return None;
    };

    if !has_letter_run(&candidate.name) {
        tracing::trace!(name = %candidate.name, "rejected candidate without a real name");
        return None;
    }

    Some(ProductRecord::new(candidate.name.clone(), price, quantity, value))
}

/// Price must be positive; quantity and value may be zero.
fn parse_fields(candidate: &Candidate) -> Option<(f64, f64, f64)> {
    let price = parse_number(&candidate.price).ok().filter(|p| *p > 0.0)?;
    let value = parse_number(&candidate.value).ok().filter(|v| *v >= 0.0)?;
    let quantity = parse_number(&candidate.quantity)
        .ok()
        .filter(|q| *q >= 0.0)?;
    Some((price, quantity, value))
}

pub fn has_letter_run(name: &str) -> bool {
    NAME_LETTERS.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, price: &str, quantity: &str, value: &str) -> Candidate {
        Candidate {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_valid_candidate() {
        let r = validate(&candidate("ARROZ BRANCO 5KG", "12,50", "3,000", "37,50")).unwrap();
        assert_eq!(r.name, "ARROZ BRANCO 5KG");
        assert_eq!(r.unit_price(), 12.5);
        assert_eq!(r.quantity, 3.0);
        assert_eq!(r.value, 37.5);
    }

    #[test]
    fn test_zero_price_rejected() {
        assert!(validate(&candidate("ARROZ", "0", "3,000", "37,50")).is_none());
        assert!(validate(&candidate("ARROZ", "0,00", "3,000", "37,50")).is_none());
    }

    #[test]
    fn test_zero_quantity_and_value_accepted() {
        let r = validate(&candidate("BRINDE LOJA", "1,00", "0,000", "0,00")).unwrap();
        assert_eq!(r.quantity, 0.0);
        assert_eq!(r.value, 0.0);
    }

    #[test]
    fn test_unparseable_token_rejected() {
        assert!(validate(&candidate("ARROZ", "1.2.3", "1", "1")).is_none());
        assert!(validate(&candidate("ARROZ", "1", "1", ",")).is_none());
        assert!(validate(&candidate("ARROZ", "1", "..", "1")).is_none());
    }

    #[test]
    fn test_name_needs_three_letters() {
        assert!(validate(&candidate("12 AB 34", "1,00", "1,000", "1,00")).is_none());
        assert!(validate(&candidate("A1B2C3", "1,00", "1,000", "1,00")).is_none());
    }

    #[test]
    fn test_accented_letters_count() {
        assert!(has_letter_run("PÃO"));
        assert!(has_letter_run("maçã"));
        assert!(!has_letter_run("Ç1Ã"));
    }
}
