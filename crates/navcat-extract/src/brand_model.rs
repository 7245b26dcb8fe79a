//! Title-grammar parsing of product names into [`BrandModelKey`]s.
//!
//! Titles follow the shape `Navigatie PilotOn BRAND MODEL YEARS SPECS`.
//! The brand table and the year/spec pattern lists are evaluated in order,
//! first match wins; the ordering is load-bearing and must not be re-sorted.

use navcat_core::BrandModelKey;
use regex::Regex;

/// Known car brands, scanned in this exact order against the start of the
/// title. `VW` must stay after `Volkswagen` so the long form wins when both
/// would match.
const CAR_BRANDS: [&str; 40] = [
    "Alfa Romeo",
    "Audi",
    "BMW",
    "Mercedes",
    "Volkswagen",
    "VW",
    "Toyota",
    "Ford",
    "Opel",
    "Dacia",
    "Renault",
    "Peugeot",
    "Citroen",
    "Honda",
    "Nissan",
    "Hyundai",
    "Kia",
    "Mazda",
    "Mitsubishi",
    "Subaru",
    "Volvo",
    "Skoda",
    "Seat",
    "Fiat",
    "Lancia",
    "Jeep",
    "Chevrolet",
    "Land Rover",
    "Jaguar",
    "Porsche",
    "Mini",
    "Smart",
    "Suzuki",
    "Isuzu",
    "Infiniti",
    "Lexus",
    "Acura",
    "Genesis",
    "DS",
    "Cupra",
];

/// Models whose trailing digit encodes a bare generation number rather than
/// a model designation. Only these get the digit stripped; `Seria 3` or `A4`
/// keep theirs.
const GENERATION_DIGIT_MODELS: &str = "CRV|Duster|Sandero|Logan|Outlander|Tucson|Sportage|Ceed|\
I10|I20|I30|Swift|Yaris|Corolla|Fiesta|Focus|Mondeo|Clio|Megane|308|5008|Octavia|Superb|Golf|\
Polo|Passat|Touran|Tiguan|Touareg";

/// Year-range patterns in strict priority order. The first one that matches
/// fixes both the year range and the model-name boundary.
const YEAR_PATTERNS: [&str; 6] = [
    r"^(.+?)\s+(\d{4}-\d{4})\s+",
    r"^(.+?)\s+(dupa\s+\d{4})\s+",
    r"^(.+?)\s+(pana\s+\d{4})\s+",
    r"^(.+?)\s+(\d{4}-prezent)\s+",
    r"^(.+?)\s+(\(\d{4}-\d{4}\))\s+",
    r"^(.+?)\s+(\d{4})\s+",
];

/// Hardware-spec tokens used as model boundaries when no year range appears.
const SPEC_BOUNDARY_PATTERNS: [&str; 4] = [
    r"(?i)^(.+?)\s+\d+\s*inch\s+",
    r"(?i)^(.+?)\s+\d+GB\s+",
    r"(?i)^(.+?)\s+\d+K\s+",
    r"(?i)^(.+?)\s+\d+\s+CORE\s*",
];

/// Parses normalized product titles into brand/model/year-range grouping keys.
///
/// All pattern tables are compiled once at construction and the struct is
/// immutable afterwards, so it can be shared freely across invocations.
pub struct BrandModelExtractor {
    prefix: Regex,
    brands: Vec<(&'static str, Regex)>,
    year_patterns: Vec<Regex>,
    spec_patterns: Vec<Regex>,
    dupa: Regex,
    generation_digit: Regex,
    trailing_digit: Regex,
}

impl BrandModelExtractor {
    #[must_use]
    pub fn new() -> Self {
        let brands = CAR_BRANDS
            .iter()
            .map(|brand| {
                let pattern = format!(r"(?i)^{}\s+", regex::escape(brand));
                (*brand, Regex::new(&pattern).expect("valid brand pattern"))
            })
            .collect();

        Self {
            prefix: Regex::new(r"(?i)^Navigatie\s+PilotOn\s+").expect("valid prefix pattern"),
            brands,
            year_patterns: YEAR_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("valid year pattern"))
                .collect(),
            spec_patterns: SPEC_BOUNDARY_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("valid spec pattern"))
                .collect(),
            dupa: Regex::new(r"(?i)\s*dupa\s*").expect("valid dupa pattern"),
            generation_digit: Regex::new(&format!(r"(?i)^(?:{GENERATION_DIGIT_MODELS})\s+\d+$"))
                .expect("valid generation pattern"),
            trailing_digit: Regex::new(r"\s+\d+\s*$").expect("valid trailing digit pattern"),
        }
    }

    /// Extracts the brand, model, and year range from a product title.
    ///
    /// Returns `None` when no enumerated brand matches the start of the
    /// title — an "uncategorizable" outcome, not an error. Callers are
    /// expected to log it rather than skip silently.
    #[must_use]
    pub fn extract(&self, title: &str) -> Option<BrandModelKey> {
        let mut clean = self.prefix.replace(title, "").into_owned();

        let mut found: Option<&'static str> = None;
        for (brand, pattern) in &self.brands {
            if pattern.is_match(&clean) {
                found = Some(brand);
                clean = pattern.replace(&clean, "").into_owned();
                break;
            }
        }
        let brand = found?;

        let mut model: Option<String> = None;
        let mut years: Option<String> = None;
        for pattern in &self.year_patterns {
            if let Some(caps) = pattern.captures(&clean) {
                model = Some(caps[1].trim().to_string());
                years = Some(caps[2].trim().to_string());
                break;
            }
        }

        if model.is_none() {
            for pattern in &self.spec_patterns {
                if let Some(caps) = pattern.captures(&clean) {
                    model = Some(caps[1].trim().to_string());
                    break;
                }
            }
        }

        // "dupa" belongs to the year range, never the model name.
        let mut model = match model {
            Some(m) => self.dupa.replace_all(&m, "").trim().to_string(),
            None => "Unknown".to_string(),
        };

        if years.is_some() && self.generation_digit.is_match(&model) {
            model = self.trailing_digit.replace(&model, "").trim().to_string();
        }

        let brand = normalize_brand(brand);
        let key = format!(
            "{} {}",
            model.to_lowercase(),
            years.as_deref().unwrap_or("unknown")
        );

        Some(BrandModelKey {
            brand: brand.to_string(),
            model,
            year_range: years,
            key,
        })
    }
}

impl Default for BrandModelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Brand alias table. Currently only the VW short form.
fn normalize_brand(brand: &str) -> &str {
    if brand.eq_ignore_ascii_case("VW") {
        "Volkswagen"
    } else {
        brand
    }
}

/// Browse-query matching against a product's grouping key.
///
/// A search string matches when it equals the key, or the key starts with
/// `search + " "`, or the search equals the year-stripped model. This lets a
/// query for `"seria 3"` return every year variant of that model.
#[must_use]
pub fn matches_model_search(key: &BrandModelKey, search: &str) -> bool {
    let search = search.trim().to_lowercase();
    if key.key == search {
        return true;
    }
    if key.key.starts_with(&format!("{search} ")) {
        return true;
    }
    key.model.to_lowercase() == search
}

#[cfg(test)]
#[path = "brand_model_test.rs"]
mod tests;
