//! Markdown rendering for prose segments.
//!
//! Text segments are parsed with pulldown-cmark into a flat list of
//! styled lines, then rendered as wrapped egui labels. Parsing is split
//! from rendering so the event mapping is testable without a UI harness.

use eframe::egui::{self, FontId, RichText};
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;

use crate::ui::theme::NovaTheme;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://[^\s]+)").expect("URL regex pattern is valid"));

/// One rendered line of markdown.
#[derive(Debug, Clone, PartialEq)]
pub enum MdLine {
    Spans(Vec<MdSpan>),
    Rule,
    Blank,
}

/// A styled run of text within a line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MdSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
    /// Heading level 1-6 when inside a heading.
    pub heading: Option<u8>,
    pub quote: bool,
    /// Explicit link destination; bare URLs are detected at render time.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct SpanStyle {
    bold: bool,
    italic: bool,
    strike: bool,
    heading: Option<u8>,
    quote_depth: usize,
    link: Option<String>,
}

impl SpanStyle {
    fn span(&self, text: impl Into<String>, code: bool) -> MdSpan {
        MdSpan {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
            strike: self.strike,
            code,
            heading: self.heading,
            quote: self.quote_depth > 0,
            link: self.link.clone(),
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn push_line(lines: &mut Vec<MdLine>, spans: &mut Vec<MdSpan>) {
    if !spans.is_empty() {
        lines.push(MdLine::Spans(std::mem::take(spans)));
    }
}

/// Map a markdown string to renderable lines.
pub fn parse_markdown(md: &str) -> Vec<MdLine> {
    let mut lines: Vec<MdLine> = Vec::new();
    let mut spans: Vec<MdSpan> = Vec::new();
    let mut style = SpanStyle::default();
    // Per-list item counters; None for unordered lists.
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    for event in Parser::new_ext(md, options) {
        match event {
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                push_line(&mut lines, &mut spans);
                lines.push(MdLine::Blank);
            }

            Event::Start(Tag::Heading { level, .. }) => {
                push_line(&mut lines, &mut spans);
                style.heading = Some(heading_level(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                push_line(&mut lines, &mut spans);
                lines.push(MdLine::Blank);
                style.heading = None;
            }

            Event::Start(Tag::Strong) => style.bold = true,
            Event::End(TagEnd::Strong) => style.bold = false,
            Event::Start(Tag::Emphasis) => style.italic = true,
            Event::End(TagEnd::Emphasis) => style.italic = false,
            Event::Start(Tag::Strikethrough) => style.strike = true,
            Event::End(TagEnd::Strikethrough) => style.strike = false,

            Event::Start(Tag::Link { dest_url, .. }) => {
                style.link = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => style.link = None,

            Event::Start(Tag::BlockQuote(_)) => {
                push_line(&mut lines, &mut spans);
                style.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                push_line(&mut lines, &mut spans);
                lines.push(MdLine::Blank);
                style.quote_depth = style.quote_depth.saturating_sub(1);
            }

            // Text runs normally reach the markdown renderer with fenced
            // blocks already segmented out, but indented code can still
            // appear here.
            Event::Start(Tag::CodeBlock(_)) => {
                push_line(&mut lines, &mut spans);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                push_line(&mut lines, &mut spans);
                lines.push(MdLine::Blank);
                in_code_block = false;
            }

            Event::Start(Tag::List(start)) => {
                push_line(&mut lines, &mut spans);
                list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
                if list_stack.is_empty() {
                    lines.push(MdLine::Blank);
                }
            }
            Event::Start(Tag::Item) => {
                push_line(&mut lines, &mut spans);
                let indent = "  ".repeat(list_stack.len());
                let marker = match list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}{}. ", indent, n);
                        *n += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                spans.push(style.span(marker, false));
            }
            Event::End(TagEnd::Item) => {
                push_line(&mut lines, &mut spans);
            }

            Event::Text(t) => {
                if in_code_block {
                    // Emit each line of the block separately so rendering
                    // keeps the line structure.
                    for (i, line) in t.lines().enumerate() {
                        if i > 0 {
                            push_line(&mut lines, &mut spans);
                        }
                        spans.push(style.span(line, true));
                    }
                    if t.ends_with('\n') {
                        push_line(&mut lines, &mut spans);
                    }
                } else {
                    spans.push(style.span(t.as_ref(), false));
                }
            }
            Event::Code(t) => {
                spans.push(style.span(t.as_ref(), true));
            }

            Event::SoftBreak => spans.push(style.span(" ", false)),
            Event::HardBreak => push_line(&mut lines, &mut spans),
            Event::Rule => {
                push_line(&mut lines, &mut spans);
                lines.push(MdLine::Rule);
            }

            Event::TaskListMarker(done) => {
                spans.push(style.span(if done { "[x] " } else { "[ ] " }, false));
            }
            Event::Html(t) | Event::InlineHtml(t) => {
                spans.push(style.span(t.as_ref(), false));
            }

            _ => {}
        }
    }

    push_line(&mut lines, &mut spans);
    lines
}

/// Render a markdown string into the current egui layout.
pub fn render_markdown(ui: &mut egui::Ui, text: &str, theme: &NovaTheme) {
    for line in parse_markdown(text) {
        match line {
            MdLine::Blank => ui.add_space(4.0),
            MdLine::Rule => {
                ui.separator();
            }
            MdLine::Spans(spans) => {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for span in &spans {
                        render_span(ui, span, theme);
                    }
                });
            }
        }
    }
}

fn heading_size(level: Option<u8>) -> f32 {
    match level {
        Some(1) => 22.0,
        Some(2) => 19.0,
        Some(3) => 17.0,
        Some(_) => 15.0,
        None => 14.0,
    }
}

fn render_span(ui: &mut egui::Ui, span: &MdSpan, theme: &NovaTheme) {
    if let Some(url) = &span.link {
        ui.hyperlink_to(
            RichText::new(&span.text).size(14.0).color(theme.accent),
            url,
        );
        return;
    }

    if span.code {
        ui.label(
            RichText::new(&span.text)
                .font(FontId::monospace(13.0))
                .background_color(theme.inline_code_background)
                .color(theme.text_primary),
        );
        return;
    }

    let size = heading_size(span.heading);
    let color = if span.quote {
        theme.text_muted
    } else {
        theme.text_primary
    };

    // Split into words to detect bare URLs
    for word in span.text.split_inclusive(char::is_whitespace) {
        if URL_RE.is_match(word.trim()) {
            let url = word.trim();
            ui.hyperlink_to(RichText::new(url).size(size).color(theme.accent), url);
            if word.ends_with(char::is_whitespace) {
                ui.label(" ");
            }
        } else {
            let mut rich = RichText::new(word).size(size).color(color);
            if span.bold || span.heading.is_some() {
                rich = rich.strong();
            }
            if span.italic {
                rich = rich.italics();
            }
            if span.strike {
                rich = rich.strikethrough();
            }
            ui.label(rich);
        }
    }
}
