//! Case- and accent-insensitive text folding.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text for comparison.
///
/// Decomposes to NFD, drops combining marks, lowercases and trims surrounding
/// whitespace, so `"Makiê"` and `" makie "` fold to the same string.
///
/// ```
/// use remakeup_core::catalog::normalize;
///
/// assert_eq!(normalize("  Makiê "), "makie");
/// assert_eq!(normalize("PÓ Compacto"), "po compacto");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    folded.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("Makiê"), "makie");
        assert_eq!(normalize("Água Micelar"), "agua micelar");
        assert_eq!(normalize("ção"), "cao");
    }

    #[test]
    fn test_precomposed_and_decomposed_fold_equal() {
        let precomposed = "\u{00EA}";
        let decomposed = "e\u{0302}";
        assert_eq!(normalize(precomposed), normalize(decomposed));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Ruby Rose ÉCLAT ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_blank() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }
}
