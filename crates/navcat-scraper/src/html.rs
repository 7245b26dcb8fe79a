//! Text helpers over parsed DOM elements.

use scraper::ElementRef;

/// Elements that end a visual line when flattening a subtree to text.
const BREAK_TAGS: [&str; 16] = [
    "br", "p", "div", "li", "tr", "td", "th", "dt", "dd", "table", "ul", "ol", "h1", "h2", "h3",
    "h4",
];

/// Whole text of an element with whitespace collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<String>())
}

/// Line-oriented text of an element's subtree: block-level descendants start
/// and end lines, inline elements become spaces, each line is trimmed with
/// its internal whitespace collapsed, and empty lines are dropped.
pub(crate) fn block_text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    append_subtree_text(el, &mut raw);

    let mut out = String::with_capacity(raw.len());
    for line in raw.lines() {
        let line = collapse_ws(line);
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&line);
    }
    out
}

fn append_subtree_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let sep = if BREAK_TAGS.contains(&child_el.value().name()) {
                '\n'
            } else {
                ' '
            };
            out.push(sep);
            append_subtree_text(child_el, out);
            out.push(sep);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

pub(crate) fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn body(html: &str) -> String {
        let doc = Html::parse_document(html);
        block_text(doc.root_element())
    }

    #[test]
    fn element_text_flattens_markup_and_entities() {
        let doc = Html::parse_document("<span>Plug &amp; Play</span>");
        assert_eq!(element_text(doc.root_element()), "Plug & Play");
    }

    #[test]
    fn block_text_splits_on_block_elements() {
        let html = "<div>SKU</div><div>PTN-123</div><span>in</span>line";
        assert_eq!(body(html), "SKU\nPTN-123\nin line");
    }

    #[test]
    fn block_text_drops_blank_lines_and_squeezes_whitespace() {
        let html = "<div>  Memorie   RAM  </div>\n\n<div>   </div><div>4GB</div>";
        assert_eq!(body(html), "Memorie RAM\n4GB");
    }
}
