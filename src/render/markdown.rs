//! Markdown-to-HTML conversion for descriptions and section bodies.

use pulldown_cmark::{html, Event, Options, Parser};

/// Converts a markdown fragment into HTML. Must be pure.
pub trait Markdown {
    fn to_html(&self, text: &str) -> String;
}

impl<F> Markdown for F
where
    F: Fn(&str) -> String,
{
    fn to_html(&self, text: &str) -> String {
        self(text)
    }
}

/// pulldown-cmark backed renderer with tables, fenced code and
/// newline-to-`<br />` enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMark;

impl CommonMark {
    fn options() -> Options {
        // Fenced code blocks are part of CommonMark itself.
        Options::ENABLE_TABLES
    }
}

impl Markdown for CommonMark {
    fn to_html(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let parser = Parser::new_ext(text, Self::options()).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
