//! Specification extraction cascade.
//!
//! Five strategies run in order against the parsed page; the first one to
//! yield any field wins and no cross-strategy merging happens:
//!
//! 1. the `product-details` block (plus `product-meta-fields`), scanned for
//!    known Romanian labels,
//! 2. two-cell table rows,
//! 3. `<dl>` definition pairs,
//! 4. `<li>`/`<p>`/`<div>` elements containing a colon and a whitelisted
//!    keyword,
//! 5. a full-page colon-line scan filtered by the keyword whitelist.

use navcat_core::SpecField;
use regex::Regex;
use scraper::{Html, Selector};

use crate::html::{block_text, collapse_ws, element_text};
use crate::labels::{
    BOUNDARY_ONLY_LABEL, ELEMENT_KEYWORDS, KEY_KEYWORDS, PACKAGE_CONTENTS_LABEL, SPEC_LABELS,
};

/// Keys rejected in table rows; they mark the section heading row itself.
const HEADING_KEY_MARKERS: [&str; 2] = ["specificatii", "detalii"];

pub(crate) const DEFAULT_MAX_LINE_KEY_LEN: usize = 50;

/// A label occurrence inside the details text.
struct LabelHit {
    /// Byte offset where the label's line match begins; the previous hit's
    /// value ends here.
    start: usize,
    /// Byte offset just past the label text; the value begins here.
    value_start: usize,
    label: &'static str,
}

/// Extracts raw specification fields from product page HTML.
pub struct SpecExtractor {
    label_line: Regex,
    details: Selector,
    meta_fields: Selector,
    rows: Selector,
    cells: Selector,
    terms: Selector,
    definitions: Selector,
    colon_elements: Vec<Selector>,
    key_trim: Regex,
    taguri_tail: Regex,
    taguri_sentence: Regex,
    trailing_period: Regex,
    max_line_key_len: usize,
}

impl SpecExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_line_key_len(DEFAULT_MAX_LINE_KEY_LEN)
    }

    #[must_use]
    pub fn with_max_line_key_len(max_line_key_len: usize) -> Self {
        let alternation = SPEC_LABELS
            .iter()
            .map(|label| regex::escape(label).replace("\\ ", r"\s+"))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            label_line: Regex::new(&format!(r"(?mi)^[ \t]*({alternation})"))
                .expect("valid label pattern"),
            details: Selector::parse(".product-details").expect("valid details selector"),
            meta_fields: Selector::parse(".product-meta-fields")
                .expect("valid meta fields selector"),
            rows: Selector::parse("tr").expect("valid row selector"),
            cells: Selector::parse("td").expect("valid cell selector"),
            terms: Selector::parse("dt").expect("valid term selector"),
            definitions: Selector::parse("dd").expect("valid definition selector"),
            colon_elements: ["li", "p", "div"]
                .iter()
                .map(|s| Selector::parse(s).expect("valid element selector"))
                .collect(),
            key_trim: Regex::new(r"[:\s]+$").expect("valid key trim pattern"),
            taguri_tail: Regex::new(r"(?i)\s*Taguri\s+.*$").expect("valid taguri tail pattern"),
            taguri_sentence: Regex::new(r"Taguri[^.]*\.").expect("valid taguri sentence pattern"),
            trailing_period: Regex::new(r"\.\s*$").expect("valid trailing period pattern"),
            max_line_key_len,
        }
    }

    /// Runs the strategy cascade and returns the first non-empty result.
    /// An empty vec means no strategy found anything.
    #[must_use]
    pub fn extract(&self, html: &str) -> Vec<SpecField> {
        let doc = Html::parse_document(html);

        let strategies: [(&str, fn(&Self, &Html) -> Vec<SpecField>); 5] = [
            ("details-block", Self::from_details_block),
            ("table-rows", Self::from_table_rows),
            ("definition-lists", Self::from_definition_lists),
            ("colon-elements", Self::from_colon_elements),
            ("line-scan", Self::from_line_scan),
        ];

        for (name, strategy) in strategies {
            let fields = strategy(self, &doc);
            if !fields.is_empty() {
                tracing::debug!(strategy = name, fields = fields.len(), "extracted specifications");
                return fields;
            }
        }
        Vec::new()
    }

    /// Strategy 1: the shop's own details section, label-scanned.
    fn from_details_block(&self, doc: &Html) -> Vec<SpecField> {
        let Some(details) = doc.select(&self.details).next() else {
            return Vec::new();
        };
        let mut text = block_text(details);
        // Meta fields often repeat package contents and carry extras.
        if let Some(meta) = doc.select(&self.meta_fields).next() {
            text.push('\n');
            text.push_str(&block_text(meta));
        }

        let hits = self.find_label_hits(&text);
        let mut fields = Vec::new();
        for label in SPEC_LABELS {
            if label == BOUNDARY_ONLY_LABEL {
                continue;
            }
            if label == PACKAGE_CONTENTS_LABEL {
                if let Some(value) = self.combine_package_contents(&text, &hits) {
                    push_field(&mut fields, label, value);
                }
                continue;
            }
            let Some(idx) = hits.iter().position(|h| h.label == label) else {
                continue;
            };
            let mut value = hit_value(&text, &hits, idx);
            if label == "Limitari" {
                value = self.clean_limitations(&value);
            }
            if !value.is_empty() {
                push_field(&mut fields, label, value);
            }
        }
        fields
    }

    fn find_label_hits(&self, text: &str) -> Vec<LabelHit> {
        let mut hits = Vec::new();
        for caps in self.label_line.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if let Some(label) = canonical_label(name.as_str()) {
                hits.push(LabelHit {
                    start: whole.start(),
                    value_start: name.end(),
                    label,
                });
            }
        }
        hits
    }

    /// `Continut Pachet` appears once in the details section and again in
    /// the meta fields; all distinct occurrences are joined into one value.
    fn combine_package_contents(&self, text: &str, hits: &[LabelHit]) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        for (idx, hit) in hits.iter().enumerate() {
            if hit.label != PACKAGE_CONTENTS_LABEL {
                continue;
            }
            let value = hit_value(text, hits, idx);
            if !value.is_empty() && !parts.contains(&value) {
                parts.push(value);
            }
        }
        if parts.is_empty() {
            return None;
        }
        let combined = parts.join(". ");
        let combined = self.taguri_sentence.replace_all(&combined, "");
        let combined = combined.trim().to_string();
        (!combined.is_empty()).then_some(combined)
    }

    /// The `Limitari` value tends to swallow the trailing tag list; cut it
    /// off and drop the leftover sentence period.
    fn clean_limitations(&self, value: &str) -> String {
        let value = self.taguri_tail.replace(value, "");
        self.trailing_period.replace(value.trim(), "").trim().to_string()
    }

    /// Strategy 2: two-cell table rows anywhere on the page.
    fn from_table_rows(&self, doc: &Html) -> Vec<SpecField> {
        let mut fields = Vec::new();
        for row in doc.select(&self.rows) {
            let cells: Vec<String> = row.select(&self.cells).map(element_text).collect();
            if cells.len() < 2 {
                continue;
            }
            let key = self.trim_key(&cells[0]);
            let value = cells[1].trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            let key_lower = key.to_lowercase();
            if HEADING_KEY_MARKERS.iter().any(|m| key_lower.contains(m)) {
                continue;
            }
            push_field(&mut fields, &key, value.to_string());
        }
        fields
    }

    /// Strategy 3: `<dt>`/`<dd>` pairs, zipped in document order.
    fn from_definition_lists(&self, doc: &Html) -> Vec<SpecField> {
        let mut fields = Vec::new();
        let terms: Vec<_> = doc.select(&self.terms).collect();
        let definitions: Vec<_> = doc.select(&self.definitions).collect();
        for (dt, dd) in terms.iter().zip(&definitions) {
            let key = self.trim_key(&element_text(*dt));
            let value = element_text(*dd);
            if !key.is_empty() && !value.is_empty() {
                push_field(&mut fields, &key, value);
            }
        }
        fields
    }

    /// Strategy 4: colon-separated pairs inside list items, paragraphs, and
    /// divs, filtered by a narrow keyword whitelist.
    fn from_colon_elements(&self, doc: &Html) -> Vec<SpecField> {
        let mut fields = Vec::new();
        for selector in &self.colon_elements {
            for el in doc.select(selector) {
                let text = element_text(el);
                let text_lower = text.to_lowercase();
                if !ELEMENT_KEYWORDS.iter().any(|k| text_lower.contains(k)) {
                    continue;
                }
                let Some(colon) = text.find(':') else { continue };
                let key = text[..colon].trim();
                let value = text[colon + 1..].trim();
                if !key.is_empty() && !value.is_empty() {
                    push_field(&mut fields, key, value.to_string());
                }
            }
        }
        fields
    }

    /// Strategy 5: last resort, a colon-line scan over the whole page text.
    fn from_line_scan(&self, doc: &Html) -> Vec<SpecField> {
        let text = block_text(doc.root_element());
        let mut fields = Vec::new();
        for line in text.lines() {
            let Some(colon) = line.find(':') else { continue };
            let key = line[..colon].trim();
            let value = line[colon + 1..].trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            if key.chars().count() >= self.max_line_key_len {
                continue;
            }
            let key_lower = key.to_lowercase();
            if KEY_KEYWORDS.iter().any(|kw| key_lower.contains(kw)) {
                push_field(&mut fields, key, value.to_string());
            }
        }
        fields
    }

    fn trim_key(&self, key: &str) -> String {
        self.key_trim.replace(key, "").trim().to_string()
    }
}

impl Default for SpecExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a matched label (any casing, squeezed whitespace) back to its
/// canonical table entry.
fn canonical_label(matched: &str) -> Option<&'static str> {
    let norm = collapse_ws(matched).to_lowercase();
    SPEC_LABELS
        .iter()
        .find(|l| l.to_lowercase() == norm)
        .copied()
}

fn hit_value(text: &str, hits: &[LabelHit], idx: usize) -> String {
    let end = hits.get(idx + 1).map_or(text.len(), |h| h.start);
    collapse_ws(&text[hits[idx].value_start..end])
}

/// Appends a field, overwriting the value if the key was already captured.
fn push_field(fields: &mut Vec<SpecField>, key: &str, value: String) {
    if let Some(existing) = fields.iter_mut().find(|f| f.key == key) {
        existing.value = value;
    } else {
        fields.push(SpecField::new(key, value));
    }
}

#[cfg(test)]
#[path = "cascade_test.rs"]
mod tests;
