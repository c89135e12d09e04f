//! Minimal formatter for counsellor replies
//!
//! Only three things are recognised: `* ` list items, `**bold**` and
//! `*italic*`. Everything else is plain text.

use std::sync::OnceLock;

use colored::Colorize;
use regex::Regex;

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    ListItem(Vec<Span>),
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*|\*(.*?)\*").expect("emphasis regex is valid"))
}

/// Splits one line into plain, bold and italic spans.
///
/// Emphasis markers with nothing between them (`****`, `**`) are dropped.
/// A line with no spans at all comes back as a single text span.
pub fn parse_inline(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in emphasis_re().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(line[last..whole.start()].to_string()));
        }
        if let Some(bold) = caps.get(1).filter(|m| !m.as_str().is_empty()) {
            spans.push(Span::Bold(bold.as_str().to_string()));
        } else if let Some(italic) = caps.get(2).filter(|m| !m.as_str().is_empty()) {
            spans.push(Span::Italic(italic.as_str().to_string()));
        }
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::Text(line.to_string()));
    }
    spans
}

/// Breaks a reply into blocks, one per non-empty line.
///
/// # Examples
///
/// ```
/// use gradpath::views::markdown::{format_blocks, Block, Span};
///
/// let blocks = format_blocks("Try these:\n\n* **TU Munich**");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1], Block::ListItem(vec![Span::Bold("TU Munich".into())]));
/// ```
pub fn format_blocks(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix("* ") {
            Some(rest) => Block::ListItem(parse_inline(rest)),
            None => Block::Paragraph(parse_inline(line)),
        })
        .collect()
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(t) => t.normal().to_string(),
            Span::Bold(t) => t.bold().to_string(),
            Span::Italic(t) => t.italic().to_string(),
        })
        .collect()
}

/// Renders a reply for the terminal with ANSI emphasis
pub fn render_terminal(text: &str) -> String {
    format_blocks(text)
        .iter()
        .map(|block| match block {
            Block::Paragraph(spans) => render_spans(spans),
            Block::ListItem(spans) => format!("  • {}", render_spans(spans)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_mixed() {
        assert_eq!(
            parse_inline("Apply to **ETH** and *maybe* EPFL"),
            vec![
                Span::Text("Apply to ".into()),
                Span::Bold("ETH".into()),
                Span::Text(" and ".into()),
                Span::Italic("maybe".into()),
                Span::Text(" EPFL".into()),
            ]
        );
    }

    #[test]
    fn test_parse_inline_plain() {
        assert_eq!(parse_inline("no markup"), vec![Span::Text("no markup".into())]);
    }

    #[test]
    fn test_parse_inline_drops_empty_emphasis() {
        assert_eq!(
            parse_inline("a **** b"),
            vec![Span::Text("a ".into()), Span::Text(" b".into())]
        );
    }

    #[test]
    fn test_only_empty_emphasis_keeps_raw_text() {
        assert_eq!(parse_inline("**"), vec![Span::Text("**".into())]);
    }

    #[test]
    fn test_format_blocks_lists_and_blank_lines() {
        let blocks = format_blocks("Intro\n\n   \n  * first\n* *second*\n*not a list*");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![Span::Text("Intro".into())]),
                Block::ListItem(vec![Span::Text("first".into())]),
                Block::ListItem(vec![Span::Italic("second".into())]),
                Block::Paragraph(vec![Span::Italic("not a list".into())]),
            ]
        );
    }

    #[test]
    fn test_render_terminal_plain_when_colors_off() {
        colored::control::set_override(false);
        assert_eq!(render_terminal("Hi\n* **A**"), "Hi\n  • A");
        colored::control::unset_override();
    }
}
