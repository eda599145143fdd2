//! Table-of-contents construction for a documentation page.
//!
//! The first selected symbol becomes the single active root; every later
//! symbol hangs under it. Anchors are positional (`#0`, `#1`, ...) and match
//! the section ids emitted by the page renderer.

use crate::model::TocEntry;

/// Anchor for the record at `index` in selection order.
pub fn anchor(index: usize) -> String {
    format!("#{}", index)
}

/// Build the two-level TOC for `titles` in selection order.
pub fn create_toc(titles: &[String]) -> Vec<TocEntry> {
    let Some((first, rest)) = titles.split_first() else {
        return Vec::new();
    };

    let children = rest
        .iter()
        .enumerate()
        .map(|(index, title)| TocEntry {
            title: title.clone(),
            anchor: anchor(index + 1),
            active: false,
            children: Vec::new(),
        })
        .collect();

    vec![TocEntry {
        title: first.clone(),
        anchor: anchor(0),
        active: true,
        children,
    }]
}
