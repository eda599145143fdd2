//! Indentation normalization for docstrings and section bodies.

const TAB_WIDTH: usize = 8;

/// Clean a raw docstring the way documentation tools expect to see it.
///
/// - tabs expand to 8-column stops
/// - the first line loses its leading whitespace
/// - the common indentation of all following lines is removed
/// - leading and trailing blank lines are dropped
pub fn cleandoc(doc: &str) -> String {
    let expanded: Vec<String> = doc.lines().map(expand_tabs).collect();
    let Some((first, rest)) = expanded.split_first() else {
        return String::new();
    };

    let margin = common_indent(rest.iter().map(String::as_str));
    let mut lines: Vec<&str> = Vec::with_capacity(expanded.len());
    lines.push(first.trim_start());
    for line in rest {
        lines.push(strip_indent(line, margin));
    }

    trim_blank_lines(&lines).join("\n")
}

/// Remove the minimum leading whitespace shared by all non-blank lines.
///
/// Blank lines become empty; leading and trailing blank lines are dropped.
pub fn dedent(text: &str) -> String {
    let margin = common_indent(text.lines());
    let lines: Vec<&str> = text.lines().map(|line| strip_indent(line, margin)).collect();
    trim_blank_lines(&lines).join("\n")
}

fn common_indent<'a>(lines: impl Iterator<Item = &'a str>) -> usize {
    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0)
}

fn strip_indent(line: &str, margin: usize) -> &str {
    if line.trim().is_empty() {
        return "";
    }
    // Indentation is ASCII, so the byte offset is a char boundary.
    line.get(margin..).unwrap_or(line).trim_end_matches('\r')
}

fn trim_blank_lines<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
