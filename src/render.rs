//! Text rendering of the page for a terminal.
//!
//! Cards appear in page order: crawl form, error, crawled content, chat
//! form, answer. Hidden cards are skipped entirely.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io::{self, Write};

use wikichat_client::view::{Button, CRAWLING_LABEL, Input, PageView, THINKING_LABEL};

/// Lines of markdown shown in the content card unless the full text is requested.
pub const PREVIEW_LINES: usize = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the whole crawled markdown instead of a preview.
    pub full_markdown: bool,
}

/// Write one full frame of the page.
pub fn write_page<W: Write>(out: &mut W, view: &PageView, options: RenderOptions) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    writeln!(out)?;

    writeln!(out, "[1. Crawl a Web Page]")?;
    writeln!(out, "Enter the URL of the page you want to chat with.")?;
    write_input(out, "URL", &view.url_input)?;
    write_button(out, view.crawl_button)?;

    if let Some(error) = &view.error {
        write_card(out, "Error", error)?;
    }

    if let Some(content) = &view.content {
        let body = if options.full_markdown {
            content.clone()
        } else {
            markdown_preview(content, PREVIEW_LINES)
        };
        write_card(out, "Crawled Content (Markdown)", &body)?;
    }

    writeln!(out)?;
    writeln!(out, "[2. Chat with the Content]")?;
    writeln!(out, "Ask a question based on the crawled content above.")?;
    write_input(out, "Your Question", &view.query_input)?;
    write_button(out, view.ask_button)?;

    if let Some(answer) = &view.answer {
        write_card(out, "Answer", answer)?;
    }
    writeln!(out)?;
    out.flush()
}

/// One-line progress note shown while a request is in flight.
pub fn write_status<W: Write>(out: &mut W, view: &PageView) -> io::Result<()> {
    if !view.busy {
        return Ok(());
    }
    let labels: Vec<&str> = [view.crawl_button.label, view.ask_button.label]
        .into_iter()
        .filter(|label| *label == CRAWLING_LABEL || *label == THINKING_LABEL)
        .collect();
    writeln!(out, "... {}", labels.join(" "))?;
    out.flush()
}

/// First `max_lines` lines of `markdown`, with a note of how many were cut.
#[must_use]
pub fn markdown_preview(markdown: &str, max_lines: usize) -> String {
    let total = markdown.lines().count();
    if total <= max_lines {
        return markdown.to_owned();
    }
    let mut preview = markdown.lines().take(max_lines).collect::<Vec<_>>().join("\n");
    preview.push_str(&format!("\n... ({} more lines, use --show-markdown)", total - max_lines));
    preview
}

fn write_input<W: Write>(out: &mut W, label: &str, input: &Input) -> io::Result<()> {
    let value = if input.value.is_empty() {
        format!("({})", input.placeholder)
    } else {
        input.value.clone()
    };
    writeln!(out, "{label}: {value}{}", disabled_marker(input.enabled))
}

fn write_button<W: Write>(out: &mut W, button: Button) -> io::Result<()> {
    writeln!(out, "<{}>{}", button.label, disabled_marker(button.enabled))
}

fn write_card<W: Write>(out: &mut W, title: &str, body: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{title}]")?;
    for line in body.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn disabled_marker(enabled: bool) -> &'static str {
    if enabled { "" } else { " [disabled]" }
}
