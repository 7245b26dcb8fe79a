//! Heuristic segmentation of free-form feed descriptions into titled bullet
//! sections.
//!
//! The source feed concatenates marketing copy with little reliable
//! punctuation, so the pipeline is: clean markup and boilerplate, split at
//! known topic headers and sentence boundaries, classify each sentence by
//! keyword frequency, then emit sections in one canonical topic order.
//! Output is byte-identical for identical input.

mod topics;

use std::collections::HashMap;

use navcat_core::{DescriptionSection, Topic};
use regex::Regex;

use topics::{TopicSpec, DEFAULT_TOPIC, TOPIC_HEADERS, TOPIC_SPECS};

/// Default minimum sentence length; shorter fragments are treated as noise.
const DEFAULT_MIN_SENTENCE_LEN: usize = 15;
/// Default minimum bullet point length after formatting.
const DEFAULT_MIN_POINT_LEN: usize = 10;

struct CompiledTopic {
    spec: &'static TopicSpec,
    title_pattern: Option<Regex>,
}

/// Splits description text into classified, ordered bullet sections.
///
/// All regex tables are compiled once at construction; the segmenter itself
/// is stateless and can be shared across invocations.
pub struct DescriptionSegmenter {
    topics: Vec<CompiledTopic>,
    headers: Vec<Regex>,
    cdata: Regex,
    tags: Regex,
    thanks: Regex,
    unboxing_lead: Regex,
    unboxing_any: Regex,
    presentation_lead: Regex,
    sentence_seam: Regex,
    whitespace: Regex,
    connectors: Regex,
    subject_lead: Regex,
    package_header_lead: Regex,
    presentation_any: Regex,
    accessories_included: Regex,
    subject_words: Regex,
    accessories_any: Regex,
    min_sentence_len: usize,
    min_point_len: usize,
}

impl DescriptionSegmenter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MIN_SENTENCE_LEN, DEFAULT_MIN_POINT_LEN)
    }

    /// Builds a segmenter with explicit length thresholds (normally taken
    /// from `AppConfig`).
    #[must_use]
    pub fn with_limits(min_sentence_len: usize, min_point_len: usize) -> Self {
        let topics = TOPIC_SPECS
            .iter()
            .map(|spec| CompiledTopic {
                spec,
                title_pattern: spec.title_pattern.map(|p| {
                    Regex::new(&format!("(?i){p}")).expect("valid topic title pattern")
                }),
            })
            .collect();

        let headers = TOPIC_HEADERS
            .iter()
            .map(|h| {
                Regex::new(&format!(r"(?i)({}[^.]*\.)", regex::escape(h)))
                    .expect("valid header pattern")
            })
            .collect();

        Self {
            topics,
            headers,
            cdata: Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid cdata pattern"),
            tags: Regex::new(r"<[^>]*>").expect("valid tag pattern"),
            thanks: Regex::new(
                r"(?i)Va\s+mul[țt]umim\s+c[ăa]\s+a[țt]i\s+ales\s+produsele\s+NAVI-ABC[!.]?\s*",
            )
            .expect("valid thanks pattern"),
            unboxing_lead: Regex::new(r"(?i)^Unboxing\s+Tableta\s*[–-]?\s*")
                .expect("valid unboxing pattern"),
            unboxing_any: Regex::new(r"(?i)\bUnboxing\s+Tableta\b[^.]*\.")
                .expect("valid unboxing pattern"),
            presentation_lead: Regex::new(r"(?i)Mai\s+jos\s+găsești\s+prezentarea\s+tabletei[^.]*\.")
                .expect("valid presentation pattern"),
            sentence_seam: Regex::new(r"([a-z])([A-Z])").expect("valid seam pattern"),
            whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
            connectors: Regex::new(r"(?i)^(De asemenea,?\s*|În plus,?\s*|Totodată,?\s*)")
                .expect("valid connector pattern"),
            subject_lead: Regex::new(
                r"(?i)^\s*(Mai jos|Acest|Sistemul|Dispozitivul|Tableta|Produsul)\s+",
            )
            .expect("valid subject pattern"),
            package_header_lead: Regex::new(r"(?i)^Detalii\s+și\s+Ce\s+Conține\s+Pachetul\s*")
                .expect("valid package header pattern"),
            presentation_any: Regex::new(r"(?i)\bprezentarea\s+tabletei[^.]*\.")
                .expect("valid presentation pattern"),
            accessories_included: Regex::new(
                r"(?i)\bîmpreună\s+cu\s+toate\s+accesoriile\s+incluse\s+în\s+pachet[^.]*\.",
            )
            .expect("valid accessories pattern"),
            subject_words: Regex::new(r"(?i)^(Sistemul |Dispozitivul |Tableta |Produsul )")
                .expect("valid subject pattern"),
            accessories_any: Regex::new(r"(?i)\bîmpreună\s+cu\s+toate\s+accesoriile[^.]*\.")
                .expect("valid accessories pattern"),
            min_sentence_len,
            min_point_len,
        }
    }

    /// Segments raw description text into sections, in canonical topic order.
    ///
    /// Topics absent from the text are omitted; an empty or unusable input
    /// yields an empty `Vec`.
    #[must_use]
    pub fn segment(&self, raw: &str) -> Vec<DescriptionSection> {
        let cleaned = self.clean_text(raw);
        let sentences = self.split_into_sentences(&cleaned);
        let grouped = self.group_by_topic(&sentences);
        self.format_sections(&grouped)
    }

    fn clean_text(&self, text: &str) -> String {
        let text = self.cdata.replace_all(text, "${1}");
        let text = self.tags.replace_all(&text, "");
        let text = self.thanks.replace_all(&text, "");
        let text = self.unboxing_lead.replace(&text, "");
        let text = self.unboxing_any.replace_all(&text, "");
        let text = self.presentation_lead.replace_all(&text, "");
        // The feed regularly drops sentence punctuation; a lowercase letter
        // glued to an uppercase one marks a lost boundary.
        let text = self.sentence_seam.replace_all(&text, "${1}. ${2}");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }

    fn split_into_sentences(&self, text: &str) -> Vec<String> {
        let mut marked = text.to_string();
        for header in &self.headers {
            marked = header.replace_all(&marked, "|SPLIT|${1}|SPLIT|").into_owned();
        }

        let mut sentences = Vec::new();
        for part in marked.split("|SPLIT|") {
            if part.trim().is_empty() {
                continue;
            }
            for sub in split_on_sentence_boundary(part) {
                let trimmed = sub.trim();
                if trimmed.chars().count() <= self.min_sentence_len {
                    continue;
                }
                let cleaned = self.clean_sentence(trimmed);
                if cleaned.chars().count() > self.min_point_len {
                    let sentence = if cleaned.ends_with('.') {
                        cleaned
                    } else {
                        format!("{cleaned}.")
                    };
                    sentences.push(sentence);
                }
            }
        }

        sentences.retain(|s| s.chars().count() > self.min_sentence_len);
        sentences
    }

    fn clean_sentence(&self, sentence: &str) -> String {
        let s = self.connectors.replace(sentence, "");
        let s = self.subject_lead.replace(&s, "");
        let s = self.package_header_lead.replace(&s, "");
        let s = self.presentation_any.replace_all(&s, "");
        let s = self.accessories_included.replace_all(&s, "");
        s.trim().to_string()
    }

    /// Scores a sentence against every topic's keyword list; the highest
    /// count wins, ties go to the earlier topic in classification order.
    /// All-zero scores fall back to the default topic.
    fn classify(&self, sentence: &str) -> Topic {
        let lower = sentence.to_lowercase();
        let mut best = DEFAULT_TOPIC;
        let mut max_hits = 0usize;

        for topic in &self.topics {
            let hits = topic
                .spec
                .keywords
                .iter()
                .filter(|kw| lower.contains(&kw.to_lowercase()))
                .count();
            if hits > max_hits {
                max_hits = hits;
                best = topic.spec.topic;
            }
        }

        best
    }

    fn group_by_topic(&self, sentences: &[String]) -> HashMap<Topic, Vec<String>> {
        let mut grouped: HashMap<Topic, Vec<String>> = HashMap::new();
        for sentence in sentences {
            grouped
                .entry(self.classify(sentence))
                .or_default()
                .push(sentence.clone());
        }
        grouped
    }

    fn format_sections(&self, grouped: &HashMap<Topic, Vec<String>>) -> Vec<DescriptionSection> {
        let mut sections = Vec::new();

        // Emit order is the canonical topic order, not discovery order.
        for topic in Topic::ALL {
            let Some(sentences) = grouped.get(&topic) else {
                continue;
            };
            if sentences.is_empty() {
                continue;
            }
            let compiled = self
                .topics
                .iter()
                .find(|t| t.spec.topic == topic)
                .expect("every topic has a spec");
            let points = self.convert_to_points(sentences, compiled);
            if points.is_empty() {
                continue;
            }
            sections.push(DescriptionSection {
                topic,
                title: compiled.spec.title.to_string(),
                icon: compiled.spec.icon.to_string(),
                points,
            });
        }

        sections
    }

    fn convert_to_points(&self, sentences: &[String], topic: &CompiledTopic) -> Vec<String> {
        let mut points = Vec::new();
        if let Some(custom) = topic.spec.custom_first_point {
            points.push(custom.to_string());
        }

        let processed: Vec<String> = sentences
            .iter()
            .filter_map(|sentence| self.format_point(sentence, topic))
            .collect();

        // When a custom first point exists the first extracted sentence is
        // treated as consumed by the section title.
        if topic.spec.custom_first_point.is_some() {
            points.extend(processed.into_iter().skip(1));
        } else {
            points.extend(processed);
        }

        points.retain(|p| !p.is_empty());
        points
    }

    fn format_point(&self, sentence: &str, topic: &CompiledTopic) -> Option<String> {
        let p = self.connectors.replace(sentence, "");
        let p = self.subject_words.replace(&p, "");
        let p = self.package_header_lead.replace(&p, "");
        let p = self.unboxing_any.replace_all(&p, "");
        let p = self.presentation_any.replace_all(&p, "");
        let p = self.accessories_any.replace_all(&p, "");
        let mut point = p.trim().to_string();

        if let Some(title) = &topic.title_pattern {
            point = title.replace(&point, "").trim().to_string();
        }

        if point.chars().count() < self.min_point_len {
            return None;
        }

        point = capitalize_first(&point);
        if let Some(stripped) = point.strip_suffix('.') {
            point = stripped.to_string();
        }

        Some(point)
    }
}

impl Default for DescriptionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits at `". "` boundaries that are followed by an uppercase letter
/// (including Romanian diacritic capitals). The period and whitespace are
/// consumed; the capital starts the next piece.
fn split_on_sentence_boundary(text: &str) -> Vec<&str> {
    const CAPITALS: [char; 5] = ['Ă', 'Â', 'Î', 'Ș', 'Ț'];

    let mut pieces = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '.' {
            continue;
        }
        // Require at least one whitespace char, then an uppercase letter.
        let rest = &text[idx + 1..];
        let ws_len: usize = rest
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        if ws_len == 0 {
            continue;
        }
        let Some(next) = rest[ws_len..].chars().next() else {
            continue;
        };
        if next.is_ascii_uppercase() || CAPITALS.contains(&next) {
            pieces.push(&text[start..idx]);
            start = idx + 1 + ws_len;
            while chars.peek().is_some_and(|(i, _)| *i < start) {
                chars.next();
            }
        }
    }

    pieces.push(&text[start..]);
    pieces
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "description_test.rs"]
mod tests;
