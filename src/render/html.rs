//! HTML renderer — standalone page, or a user template with `${title}`,
//! `${toc}` and `${content}` placeholders.

use crate::model::*;
use crate::render::PageRenderer;
use anyhow::Result;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Template placeholders, substituted in a single pass so that placeholder
/// text inside a title or docstring is never expanded.
static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(title|toc|content)\}").unwrap());

pub struct HtmlRenderer {
    template: Option<String>,
}

impl HtmlRenderer {
    pub fn new(template: Option<String>) -> Self {
        HtmlRenderer { template }
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let toc = render_toc(&page.toc);
        let content = render_content(&page.docs);

        if let Some(ref tpl) = self.template {
            let title = html_escape(&page.title);
            let filled = RE_PLACEHOLDER.replace_all(tpl, |caps: &Captures| match &caps[1] {
                "title" => title.clone(),
                "toc" => toc.clone(),
                _ => content.clone(),
            });
            return Ok(filled.into_owned());
        }

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if !page.title.is_empty() {
            out.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 52em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("nav .active > a { font-weight: bold; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(".routine { margin-left: 1em; border-left: 3px solid #eee; padding-left: 1em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&toc);
        out.push_str(&content);
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = String::from("<nav class=\"toc\">\n");
    out.push_str(&render_toc_list(entries, 0));
    out.push_str("</nav>\n");
    out
}

fn render_toc_list(entries: &[TocEntry], depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut out = format!("{}<ul>\n", indent);
    for entry in entries {
        let class = if entry.active { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "{}  <li{}><a href=\"{}\">{}</a>",
            indent,
            class,
            html_escape(&entry.anchor),
            html_escape(&entry.title)
        ));
        if entry.children.is_empty() {
            out.push_str("</li>\n");
        } else {
            out.push('\n');
            out.push_str(&render_toc_list(&entry.children, depth + 2));
            out.push_str(&format!("{}  </li>\n", indent));
        }
    }
    out.push_str(&format!("{}</ul>\n", indent));
    out
}

fn render_content(docs: &[SymbolDoc]) -> String {
    let mut out = String::new();
    for (index, doc) in docs.iter().enumerate() {
        out.push_str(&format!("<section id=\"{}\">\n", index));
        out.push_str(&format!("<h2><code>{}</code></h2>\n", html_escape(&doc.signature)));
        out.push_str(&render_body(doc));
        for member in &doc.members {
            out.push_str("<div class=\"routine\">\n");
            out.push_str(&format!("<h3><code>{}</code></h3>\n", html_escape(&member.signature)));
            out.push_str(&render_body(member));
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
    }
    out
}

/// Title, description and sections of one record.
fn render_body(doc: &SymbolDoc) -> String {
    let mut out = String::new();

    if !doc.title.is_empty() {
        out.push_str(&format!("<p class=\"title\">{}</p>\n", html_escape(&doc.title)));
    }

    // Already HTML
    out.push_str(&doc.description);

    if !doc.sections.is_empty() {
        out.push_str("<dl class=\"sections\">\n");
        for section in &doc.sections {
            out.push_str(&format!("  <dt>{}</dt>\n", html_escape(&section.label)));
            out.push_str(&format!("  <dd>{}</dd>\n", section.body.trim_end()));
        }
        out.push_str("</dl>\n");
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
