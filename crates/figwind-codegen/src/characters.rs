//! Text layer characters to markup content.

use std::sync::LazyLock;

use figwind_core::Content;
use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x{2028}\x{2029}\x{0085}]")
        .expect("unreachable error: failed to compile line break pattern")
});

/// Split characters into text segments separated by explicit line breaks.
///
/// Every segment is kept, including empty ones, so `"a\n\nb"` yields two
/// breaks around an empty text.
pub fn process_characters(characters: &str) -> Vec<Content> {
    let mut content = Vec::new();
    for (i, line) in LINE_BREAK.split(characters).enumerate() {
        if i != 0 {
            content.push(Content::LineBreak);
        }
        content.push(Content::text(line));
    }
    content
}
