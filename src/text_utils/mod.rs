pub mod clean_html;
pub mod clean_text;
pub mod extract;
pub mod test_text;

pub use clean_text::{clean_description, DescriptionCleaner};
pub use extract::{extract_sizes, extract_sizes_with_fallback, SizeExtractor};
