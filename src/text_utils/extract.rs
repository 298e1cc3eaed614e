use anyhow::Result;
use fancy_regex::Regex;
use lazy_static::lazy_static;

// Purely numeric candidates at this length or above are identifiers
// (UPC/EAN runs), not sizes.
const IDENTIFIER_DIGITS: usize = 5;

pub struct SizeExtractor {
    pattern: Regex,
    identifier_digits: usize,
}

impl Default for SizeExtractor {
    fn default() -> Self {
        Self {
            pattern: SIZE_TOKEN_REGEX.clone(),
            identifier_digits: IDENTIFIER_DIGITS,
        }
    }
}

impl SizeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the token pattern. The pattern is configuration like the
    /// cleaner's phrase list; candidates it produces still pass through the
    /// identifier filter.
    pub fn token_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Regex::new(pattern)?;
        Ok(self)
    }

    pub fn identifier_digits(mut self, identifier_digits: usize) -> Self {
        self.identifier_digits = identifier_digits;
        self
    }

    /// Scans `raw` for size tokens, dropping identifier-length numeric runs
    /// and duplicates. First-occurrence order is preserved. Never fails;
    /// empty or non-matching input yields an empty sequence.
    pub fn run(&self, raw: &str) -> Vec<String> {
        let mut sizes: Vec<String> = Vec::new();
        for token in self.pattern.find_iter(raw).filter_map(|m| m.ok()) {
            let token = token.as_str();
            if self.is_identifier(token) {
                continue;
            }
            if !sizes.iter().any(|kept| kept == token) {
                sizes.push(token.to_string());
            }
        }
        sizes
    }

    fn is_identifier(&self, token: &str) -> bool {
        token.len() >= self.identifier_digits && token.chars().all(|c| c.is_ascii_digit())
    }
}

/// Extracts size tokens with the default pattern set.
pub fn extract_sizes(raw: &str) -> Vec<String> {
    SizeExtractor::new().run(raw)
}

/// Falls back to the title when the description yields no sizes.
pub fn extract_sizes_with_fallback(description: &str, title: &str) -> Vec<String> {
    let extractor = SizeExtractor::new();
    let sizes = extractor.run(description);
    if sizes.is_empty() {
        extractor.run(title)
    } else {
        sizes
    }
}

lazy_static! {
    // Slash fraction, numeric run with optional letter suffix, or a short
    // X/S/M/L code. The lookahead keeps back-to-back tokens ("2T-3T-4T")
    // from consuming each other's delimiter.
    static ref SIZE_TOKEN_REGEX: Regex =
        Regex::new(r"(?:\d+/\d+|\d+[A-Za-z]*|[XSML]{1,3})(?=[,\-\s/]|$)").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_utils::test_text::*;

    #[test]
    fn test_empty_and_no_match() {
        assert!(extract_sizes("").is_empty());
        assert!(extract_sizes("no sizes here").is_empty());
    }

    #[test]
    fn test_toddler_run_in_order() {
        assert_eq!(extract_sizes("Sizes: 2T-3T-4T"), ["2T", "3T", "4T"]);
    }

    #[test]
    fn test_identifier_runs_excluded() {
        assert_eq!(extract_sizes("UPC 012345678 Size M"), ["M"]);
    }

    #[test]
    fn test_fractions_deduped_in_order() {
        assert_eq!(extract_sizes("12/14, 16/18, 12/14"), ["12/14", "16/18"]);
    }

    #[test]
    fn test_letter_codes() {
        assert_eq!(extract_sizes("S, M, L, XL, XXL"), ["S", "M", "L", "XL", "XXL"]);
    }

    #[test]
    fn test_plain_numerics_kept_short_only() {
        assert_eq!(extract_sizes("10, 12, 14"), ["10", "12", "14"]);
        assert!(extract_sizes("1234567").is_empty());
    }

    #[test]
    fn test_title_fallback() {
        let sizes = extract_sizes_with_fallback("no tokens in this copy", "Big Kid Tee 10-12");
        assert_eq!(sizes, ["10", "12"]);
        // Description wins when it has tokens of its own.
        let sizes = extract_sizes_with_fallback("Runs in 2T only", "Big Kid Tee 10-12");
        assert_eq!(sizes, ["2T"]);
    }

    #[test]
    fn test_custom_identifier_threshold() {
        let extractor = SizeExtractor::new().identifier_digits(4);
        assert_eq!(extractor.run("sizes 100, 1000"), ["100"]);
    }

    #[test]
    fn test_custom_pattern() {
        let extractor = SizeExtractor::new()
            .token_pattern(r"\d+ ?cm(?=[,\s]|$)")
            .unwrap();
        assert_eq!(extractor.run("waist 60cm, 70 cm"), ["60cm", "70 cm"]);
    }

    #[test]
    fn test_fixture_page() {
        assert_eq!(
            extract_sizes(YOUTH_SHORTS_TEXT),
            ["12/14", "16/18", "S", "M", "L"]
        );
    }
}
