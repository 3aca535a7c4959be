//! Markdown-to-prose conversion.
//!
//! Analyzers work on plain prose. Markdown markup would otherwise be counted
//! as words (code), merged into sentences (headings), or skew syllable
//! counts (URLs), so `.md` input goes through [`strip_to_prose`] first.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose.
///
/// Dropped: YAML front matter, code blocks and inline code, headings, raw
/// HTML, image alt text, link destinations. Kept: paragraph, list item,
/// blockquote, and table cell text, plus link text and emphasized text
/// without markers.
///
/// Each block ends up on its own line, separated by a blank line, so a
/// paragraph without terminal punctuation does not run into the next one
/// any more than it would in a plain-text file.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_front_matter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut skip_depth: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => current.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => current.push(' '),
            Event::End(TagEnd::TableCell) if skip_depth == 0 => current.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableRow | TagEnd::TableHead) => {
                flush_block(&mut blocks, &mut current);
            }
            _ => {}
        }
    }
    flush_block(&mut blocks, &mut current);

    tracing::debug!(blocks = blocks.len(), "markdown stripped");
    blocks.join("\n\n")
}

fn flush_block(blocks: &mut Vec<String>, current: &mut String) {
    let block = current.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Drop a leading `---` delimited YAML block, if present.
fn strip_front_matter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return text;
    };
    if !after_open.starts_with(['\n', '\r']) {
        return text;
    }
    let Some(close) = after_open.find("\n---") else {
        return text;
    };

    let rest = &after_open[close + 4..];
    rest.find('\n').map_or("", |nl| &rest[nl + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn removes_front_matter() {
        let input = "---\nstatus: accepted\ndate: 2026-02-07\n---\n\nSome text.";
        assert_eq!(strip_to_prose(input), "Some text.");
    }

    #[test]
    fn thematic_break_is_not_front_matter() {
        let input = "---not yaml\n\nText.";
        assert!(strip_to_prose(input).contains("Text."));
    }

    #[test]
    fn removes_headings() {
        let input = "# Header\n\nSome text.\n\n## Subheader\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert!(result.contains("Some text."));
        assert!(result.contains("More text."));
    }

    #[test]
    fn keeps_link_text_only() {
        let result = strip_to_prose("Check [this link](https://example.com) for details.");
        assert_eq!(result, "Check this link for details.");
    }

    #[test]
    fn drops_image_alt_text() {
        let result = strip_to_prose("Look ![a diagram](img.png) here.");
        assert!(!result.contains("diagram"));
        assert!(result.contains("Look"));
    }

    #[test]
    fn removes_inline_code() {
        let result = strip_to_prose("Use `foo()` to do things.");
        assert!(!result.contains("foo()"));
        assert!(result.contains("to do things."));
    }

    #[test]
    fn removes_emphasis_markers() {
        let result = strip_to_prose("This is **bold** and *italic* text.");
        assert_eq!(result, "This is bold and italic text.");
    }

    #[test]
    fn list_items_become_blocks() {
        let result = strip_to_prose("- first item\n- second item\n");
        assert_eq!(result, "first item\n\nsecond item");
    }

    #[test]
    fn keeps_table_and_quote_text() {
        let input = "> A quote.\n\n| A | B |\n|---|---|\n| one | two |\n\nAfter.";
        let result = strip_to_prose(input);
        assert!(result.contains("A quote."));
        assert!(result.contains("one two"));
        assert!(result.contains("After."));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
