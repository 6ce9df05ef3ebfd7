//! Paragraph wrapping.

/// Wrap every non-blank line in `<p>` and drop blank lines.
///
/// Lines are split on `\n` and rejoined with `\n`. A line is blank when it is
/// empty after trimming whitespace; non-blank lines keep their original
/// content, including surrounding whitespace.
#[must_use]
pub fn wrap_paragraphs(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("<p>{line}</p>"))
        .collect::<Vec<_>>()
        .join("\n")
}
