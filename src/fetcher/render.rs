//! HTML to Markdown rendering
//!
//! Turns a fetched HTML page into Markdown with ATX headings:
//! - The page title becomes a leading `# Title` line
//! - `<head>`, `<script>`, `<style>`, `<noscript>` and `<template>` are dropped
//! - Body structure (headings, links, lists, emphasis, code) is kept by htmd

use htmd::options::{HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};

const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Builds the HTML to Markdown converter used for fetched pages
fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .skip_tags(SKIPPED_TAGS.to_vec())
        .options(Options {
            heading_style: HeadingStyle::Atx,
            ..Default::default()
        })
        .build()
}

/// Renders an HTML document to Markdown
///
/// Falls back to the document's plain text if conversion fails.
///
/// # Example
///
/// ```
/// use scrapion::fetcher::render_markdown;
///
/// let html = r#"<html><head><title>Test</title></head><body><h2>Sub</h2><p>Hello</p></body></html>"#;
/// let markdown = render_markdown(html);
/// assert!(markdown.starts_with("# Test"));
/// assert!(markdown.contains("## Sub"));
/// ```
pub fn render_markdown(html: &str) -> String {
    let document = Html::parse_document(html);

    let body = match create_converter().convert(html) {
        Ok(markdown) => markdown.trim().to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "Markdown conversion failed, using plain text");
            collapse_whitespace(&document.root_element().text().collect::<String>())
        }
    };

    match extract_title(&document) {
        Some(title) if body.is_empty() => format!("# {}", title),
        Some(title) => format!("# {}\n\n{}", title, body),
        None => body,
    }
}

/// Extracts the page title from the HTML document
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
