use crate::model::UNKNOWN_SECTOR;
use crate::parsing::lines::split_lines;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Department keywords recognized in filenames, in priority order.
pub const SECTOR_KEYWORDS: &[&str] = &[
    "FRIOS",
    "AÇOUGUE",
    "PADARIA",
    "HORTIFRUTI",
    "BEBIDAS",
    "MERCEARIA",
];

/// How many lines after the "Departamento:" marker are searched.
const MARKER_LOOKAHEAD_LINES: usize = 5;

static DEPARTMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Departamento:\s*").expect("valid marker regex"));

/// Guess the report's department from its text, falling back to the filename.
///
/// Returns [`UNKNOWN_SECTOR`] when neither source gives a label.
pub fn guess_sector(text: &str, filename: Option<&str>) -> String {
    sector_from_text(text)
        .or_else(|| filename.and_then(sector_from_filename))
        .unwrap_or_else(|| UNKNOWN_SECTOR.to_string())
}

/// Look for a short upper-case line right after a "Departamento:" marker.
pub fn sector_from_text(text: &str) -> Option<String> {
    let marker = DEPARTMENT_MARKER.find(text)?;
    split_lines(&text[marker.end()..])
        .take(MARKER_LOOKAHEAD_LINES)
        .map(str::trim)
        .find(|line| (2..=20).contains(&line.chars().count()) && is_upper(line))
        .map(str::to_string)
}

/// Look for a known department keyword in the file's base name.
///
/// Up to two characters after the keyword are kept so numbered sections
/// ("FRIOS3") survive; anything that is not an ASCII upper-case letter or
/// digit is dropped, accented letters included.
pub fn sector_from_filename(filename: &str) -> Option<String> {
    let base = Path::new(filename)
        .file_name()
        .map(|n| n.to_string_lossy().to_uppercase())?;

    SECTOR_KEYWORDS.iter().find_map(|keyword| {
        let start = base.find(keyword)?;
        let label: String = base[start..]
            .chars()
            .take(keyword.chars().count() + 2)
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            .collect();
        Some(label)
    })
}

/// Upper-case in the sense of "has letters, none of them lower-case".
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_after_marker_blank_lines() {
        let text = "Relatorio\nDepartamento:\n\nACOUGUE\nPICANHA 59,90 1,000 59,90";
        assert_eq!(guess_sector(text, None), "ACOUGUE");
    }

    #[test]
    fn test_sector_on_marker_line() {
        let text = "Loja 1 departamento: FRIOS\nPRESUNTO 10,00 1,000 10,00";
        assert_eq!(guess_sector(text, None), "FRIOS");
    }

    #[test]
    fn test_marker_skips_lowercase_and_long_lines() {
        let text = "Departamento:\nsecao fria\nUMA LINHA MUITO LONGA DEMAIS PARA SER SETOR\nFRIOS 2\n";
        assert_eq!(guess_sector(text, None), "FRIOS 2");
    }

    #[test]
    fn test_marker_lookahead_is_bounded() {
        let text = "Departamento:\na\nb\nc\nd\ne\nPADARIA\n";
        assert_eq!(sector_from_text(text), None);
        assert_eq!(guess_sector(text, None), UNKNOWN_SECTOR);
    }

    #[test]
    fn test_digits_only_line_is_not_upper() {
        assert!(!is_upper("123"));
        assert!(is_upper("FRIOS3"));
        assert!(is_upper("AÇOUGUE"));
    }

    #[test]
    fn test_filename_with_trailing_digit() {
        assert_eq!(
            guess_sector("sem marcador", Some("relatorio_FRIOS3.pdf")),
            "FRIOS3"
        );
    }

    #[test]
    fn test_filename_strips_punctuation() {
        assert_eq!(
            sector_from_filename("/tmp/uploads/BEBIDAS - loja 2.pdf").as_deref(),
            Some("BEBIDAS")
        );
        assert_eq!(
            sector_from_filename("frios-2.pdf").as_deref(),
            Some("FRIOS2")
        );
    }

    #[test]
    fn test_filename_keyword_order_wins() {
        // PADARIA appears first in the name, but FRIOS is earlier in the list.
        assert_eq!(
            sector_from_filename("PADARIA_E_FRIOS_1.pdf").as_deref(),
            Some("FRIOS1")
        );
    }

    #[test]
    fn test_filename_window_keeps_extension_letter() {
        // Only two characters follow the keyword, so ".P" becomes "P".
        assert_eq!(
            sector_from_filename("curva_padaria.pdf").as_deref(),
            Some("PADARIAP")
        );
    }

    #[test]
    fn test_filename_accented_keyword() {
        // The keyword matches with its cedilla, but only ASCII survives the filter.
        assert_eq!(
            sector_from_filename("relatorio_açougue1.pdf").as_deref(),
            Some("AOUGUE1")
        );
    }

    #[test]
    fn test_marker_lookahead_splits_on_carriage_return() {
        let text = "Departamento:\rsecao\rPADARIA\rPAO 1,00 1,000 1,00";
        assert_eq!(sector_from_text(text).as_deref(), Some("PADARIA"));
    }

    #[test]
    fn test_text_takes_priority_over_filename() {
        let text = "Departamento:\nHORTIFRUTI\n";
        assert_eq!(guess_sector(text, Some("FRIOS.pdf")), "HORTIFRUTI");
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(guess_sector("", Some("relatorio.pdf")), UNKNOWN_SECTOR);
        assert_eq!(guess_sector("", None), UNKNOWN_SECTOR);
    }
}
