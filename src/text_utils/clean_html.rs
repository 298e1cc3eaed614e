use html2text::{config, render::text_renderer::TrivialDecorator};

/// Renders markup to its text content only. Plain text degenerates to a
/// pass-through apart from the renderer's own line handling.
pub fn strip_markup(raw: &str) -> String {
    // Trivial decorator removes all tags and leaves only text
    let decorator = TrivialDecorator::new();
    config::with_decorator(decorator)
        .allow_width_overflow()
        .string_from_read(raw.as_bytes(), 10000)
        .unwrap_or_else(|_| raw.to_string())
}
