use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Storefront phrases that mark the start of content to discard. This is
/// configuration, not algorithm: override it with
/// [`DescriptionCleaner::boilerplate_phrases`] or a TOML file.
pub const DEFAULT_BOILERPLATE: &[&str] = &[
    "You may also like",
    "You might also like",
    "Related products",
    "Add to cart",
    "Add to Cart",
    "Buy it now",
    "Share this",
    "Share",
    "Shipping & Returns",
    "Customer Reviews",
    "Free shipping",
    "Sign up",
    "Subscribe",
    "Facebook",
    "Instagram",
    "Twitter",
    "TikTok",
    "Pinterest",
    "FAQ",
    "Contact Us",
    "Contact us",
    "Blog",
    "©",
];

pub struct DescriptionCleaner {
    pub max_chars: usize,
    pub boilerplate: Vec<String>,
    pub ellipsis: char,
}

impl Default for DescriptionCleaner {
    fn default() -> Self {
        Self {
            max_chars: 500,
            boilerplate: DEFAULT_BOILERPLATE.iter().map(|p| p.to_string()).collect(),
            ellipsis: '…',
        }
    }
}

impl DescriptionCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn ellipsis(mut self, ellipsis: char) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    pub fn boilerplate_phrases<T: AsRef<str>>(mut self, phrases: &[T]) -> Self {
        self.boilerplate = phrases.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    /// Loads the phrase list from a TOML file with a top-level `boilerplate`
    /// string array.
    pub fn boilerplate_from_toml(mut self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: toml::Value = toml::from_str(&content)?;
        let phrases = data
            .get("boilerplate")
            .and_then(|value| value.as_array())
            .ok_or_else(|| anyhow!("no `boilerplate` array in {}", path.display()))?;
        self.boilerplate = phrases
            .iter()
            .filter_map(|p| p.as_str())
            .map(|p| p.to_string())
            .collect();
        Ok(self)
    }

    /// Cleans raw pasted product text: markup stripped, whitespace collapsed,
    /// cut at the earliest boilerplate phrase, SKU/UPC/Product Code clauses
    /// removed, and the result bounded to `max_chars` chars with a trailing
    /// ellipsis when truncated. Never fails; empty in, empty out.
    pub fn run(&self, raw: &str) -> String {
        if self.max_chars == 0 || raw.is_empty() {
            return String::new();
        }

        let text = super::clean_html::strip_markup(raw);
        let text = SINGLE_SPACE_REGEX.replace_all(&text, " ");
        let mut text = text.trim().to_string();

        // Earliest start index across the whole phrase set decides the cut,
        // case-sensitive, single pass.
        if let Some(cut) = self
            .boilerplate
            .iter()
            .filter_map(|phrase| text.find(phrase.as_str()))
            .min()
        {
            text.truncate(cut);
        }

        let text = IDENTIFIER_REGEX.replace_all(&text, "");
        let text = SINGLE_SPACE_REGEX.replace_all(&text, " ");
        bound_chars(text.trim(), self.max_chars, self.ellipsis)
    }
}

/// Cleans with the default configuration and the given character budget.
pub fn clean_description(raw: &str, max_chars: usize) -> String {
    DescriptionCleaner::new().max_chars(max_chars).run(raw)
}

fn bound_chars(text: &str, max_chars: usize, ellipsis: char) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut bounded = text[..cut].trim_end().to_string();
            bounded.push(ellipsis);
            bounded
        }
    }
}

lazy_static! {
    static ref SINGLE_SPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    // "UPC"/"Product Code"/"SKU" and everything after them up to the next
    // period or end of string.
    static ref IDENTIFIER_REGEX: Regex =
        Regex::new(r"(?i)\b(?:UPC|Product Code|SKU)\b[^.]*").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_utils::test_text::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_description("", 500), "");
    }

    #[test]
    fn test_zero_max_chars() {
        assert_eq!(clean_description("anything at all", 0), "");
    }

    #[test]
    fn test_markup_stripped_and_whitespace_collapsed() {
        assert_eq!(clean_description("<p>Hello   world</p>", 500), "Hello world");
        assert_eq!(clean_description("Hello\n\t  world ", 500), "Hello world");
    }

    #[test]
    fn test_boilerplate_cut_at_earliest_match() {
        assert_eq!(
            clean_description("Great shirt. Add to cart now!", 500),
            "Great shirt."
        );
        // "Share" occurs before "Add to cart"; only the earliest cut applies.
        assert_eq!(
            clean_description("Nice dress. Share Add to cart", 500),
            "Nice dress."
        );
    }

    #[test]
    fn test_identifier_clause_removed() {
        let cleaned = clean_description("SKU: 12345 is cool.", 500);
        assert!(!cleaned.contains("SKU"));
        assert!(!cleaned.contains("12345"));

        let cleaned = clean_description("Nice tee. Product Code ABC-99 here. Soft.", 500);
        assert!(!cleaned.contains("Product Code"));
        assert!(!cleaned.contains("ABC-99"));
        assert!(cleaned.contains("Nice tee."));
        assert!(cleaned.contains("Soft."));
    }

    #[test]
    fn test_length_bound_with_ellipsis() {
        let long = "word ".repeat(200);
        let cleaned = clean_description(&long, 100);
        assert!(cleaned.chars().count() <= 101);
        assert!(cleaned.ends_with('…'));
        // No trailing whitespace survives in front of the marker.
        assert!(!cleaned.trim_end_matches('…').ends_with(' '));

        let short = "fits just fine";
        assert_eq!(clean_description(short, 100), short);
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let long = "x".repeat(700);
        for text in ["A plain cotton tee with a relaxed fit.", long.as_str()] {
            let once = clean_description(text, 500);
            assert_eq!(clean_description(&once, 500), once);
        }
    }

    #[test]
    fn test_custom_phrases_and_marker() {
        let cleaner = DescriptionCleaner::new()
            .boilerplate_phrases(&["STOP HERE"])
            .ellipsis('~');
        assert_eq!(cleaner.run("short one STOP HERE ignored"), "short one");
        // The default set no longer applies.
        assert_eq!(cleaner.run("See it. Add to cart"), "See it. Add to cart");

        let cleaner = cleaner.max_chars(10);
        assert_eq!(cleaner.run("abcdefghijklmnop"), "abcdefghij~");
    }

    #[test]
    fn test_boilerplate_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.toml");
        std::fs::write(&path, "boilerplate = [\"End of copy\"]\n").unwrap();
        let cleaner = DescriptionCleaner::new()
            .boilerplate_from_toml(&path)
            .unwrap();
        assert_eq!(cleaner.run("Keep this. End of copy drop this"), "Keep this.");
    }

    #[test]
    fn test_full_product_page() {
        let cleaned = clean_description(DINO_TEE_PAGE, 500);
        assert!(cleaned.contains("Soft cotton tee with a dinosaur print."));
        assert!(!cleaned.contains("You may also like"));
        assert!(!cleaned.contains("Add to cart"));
        assert!(!cleaned.contains("889900112233"));
        assert!(!cleaned.contains('<'));
    }
}
