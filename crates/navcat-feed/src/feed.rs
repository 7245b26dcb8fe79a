//! Google Shopping XML feed parsing and field-level helpers.

use quick_xml::events::Event;
use quick_xml::Reader;

/// One `<entry>` from the merchant feed, with `g:`-namespaced fields
/// flattened into plain values. Prices stay unparsed feed strings until
/// [`parse_price`] is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    pub brand: Option<String>,
    pub condition: Option<String>,
    pub availability: Option<String>,
    pub gtin: Option<String>,
    pub mpn: Option<String>,
    pub product_type: Option<String>,
    pub image_link: Option<String>,
    pub additional_image_links: Vec<String>,
}

/// Parses the feed document into entries. Entries without an id or title
/// are dropped with a log line; CDATA-wrapped values are tolerated.
///
/// # Errors
///
/// Returns [`quick_xml::Error`] if the XML is malformed.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current = FeedEntry::default();
    let mut in_entry = false;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                if name == "entry" {
                    in_entry = true;
                    current = FeedEntry::default();
                } else {
                    // Feed fields arrive as g:-prefixed elements.
                    current_tag = name
                        .strip_prefix("g:")
                        .unwrap_or(name.as_str())
                        .to_string();
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "entry" && in_entry {
                    in_entry = false;
                    if current.external_id.is_empty() || current.title.is_empty() {
                        tracing::debug!(
                            external_id = %current.external_id,
                            "dropping feed entry without id or title"
                        );
                    } else {
                        entries.push(std::mem::take(&mut current));
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_entry {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    assign_field(&mut current, &current_tag, text);
                }
            }
            Ok(Event::CData(e)) => {
                if in_entry {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    assign_field(&mut current, &current_tag, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e),
            _ => {}
        }
    }

    Ok(entries)
}

fn assign_field(entry: &mut FeedEntry, tag: &str, value: String) {
    match tag {
        "id" => entry.external_id = value,
        "title" => entry.title = value,
        "description" => entry.description = value,
        "link" => entry.link = value,
        "price" => entry.price = parse_price(&value),
        "sale_price" => entry.sale_price = parse_price(&value),
        "brand" => entry.brand = Some(value),
        "condition" => entry.condition = Some(value),
        "availability" => entry.availability = Some(value),
        "gtin" => entry.gtin = Some(value),
        "mpn" => entry.mpn = Some(value),
        "product_type" => entry.product_type = Some(value),
        "image_link" => entry.image_link = Some(value),
        "additional_image_link" => entry.additional_image_links.push(value),
        _ => {}
    }
}

/// Parses a feed price string such as `"1,299.00 RON"`.
///
/// The comma is ambiguous in the feed: with a dot present it is a thousands
/// separator; alone with at most two trailing digits it is a decimal mark;
/// alone otherwise it separates thousands.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = if run.contains(',') && run.contains('.') {
        run.replace(',', "")
    } else if run.contains(',') {
        let after = run.split(',').nth(1).unwrap_or("");
        if !after.is_empty() && after.len() <= 2 {
            run.replace(',', ".")
        } else {
            run.replace(',', "")
        }
    } else {
        run
    };

    parse_float_prefix(&normalized)
}

/// Parses the longest leading substring of `s` that forms a valid float,
/// so stray trailing separators do not discard the value.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Derives a URL slug from the product title: lowercase, ASCII
/// alphanumerics and underscores kept, whitespace runs collapsed to single
/// dashes. Diacritics and punctuation are dropped.
#[must_use]
pub fn generate_slug(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut prev_dash = false;
    for c in lower.chars() {
        if c.is_whitespace() || c == '-' {
            if !prev_dash && !slug.is_empty() {
                slug.push('-');
                prev_dash = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            prev_dash = false;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fallback SKU when the feed carries no MPN: brand prefix plus feed id.
#[must_use]
pub fn generate_sku(external_id: &str, brand: Option<&str>) -> String {
    let prefix: String = brand
        .unwrap_or("UNK")
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();
    format!("{prefix}-{external_id}")
}

/// Shop category derived from title keywords; `accesorii` is the default.
#[must_use]
pub fn determine_category(title: &str) -> &'static str {
    let t = title.to_lowercase();
    if t.contains("navigatie") || t.contains("gps") {
        return "navigatii-gps";
    }
    if t.contains("carplay") || t.contains("android auto") {
        return "carplay-android";
    }
    if t.contains("camera") || t.contains("marsarier") {
        return "camere-marsarier";
    }
    if t.contains("dvr") || t.contains("recorder") {
        return "dvr";
    }
    "accesorii"
}

/// Unwraps CDATA markers and collapses whitespace; tags inside the
/// description are left for the segmenter to deal with.
#[must_use]
pub fn clean_description(description: &str) -> String {
    let cleaned = description.replace("<![CDATA[", "").replace("]]>", "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
