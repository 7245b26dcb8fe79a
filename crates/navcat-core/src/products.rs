use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories::{SpecField, SpecGroups};
use crate::sections::DescriptionSection;

/// Normalized vehicle brand/model identity parsed from a product title.
///
/// `key` is the grouping/dedup key used to browse products by fitment:
/// `lowercase(model) + " " + (year_range | "unknown")`. It is stable across
/// runs for the same title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandModelKey {
    /// Normalized brand name drawn from the known-brand table
    /// (e.g. `"VW"` is stored as `"Volkswagen"`).
    pub brand: String,
    /// Model name without years, e.g. `"Seria 1"`.
    pub model: String,
    /// Production year range as it appeared in the title, e.g.
    /// `"2004-2011"` or `"dupa 2016"`. `None` when the title carries none.
    pub year_range: Option<String>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
}

/// The reconciled, persisted representation of one catalog item.
///
/// Born from a feed entry the first time its identity is seen (matched by
/// external id, else slug, else exact name) and fully overwritten on every
/// later sync of the same identity. The pipeline never deletes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalProduct {
    /// Feed-assigned product id (`g:id`).
    pub external_id: String,
    pub slug: String,
    pub name: String,
    /// Cleaned plain-text description (CDATA unwrapped, whitespace collapsed).
    pub description: String,
    pub sku: String,
    /// Effective selling price; the sale price when one is active.
    pub price: Option<f64>,
    /// Pre-sale price, set only while a sale price is active.
    pub original_price: Option<f64>,
    /// Discount percentage derived from `price`/`original_price`, 0 when no
    /// sale is active.
    pub discount: u8,
    pub on_sale: bool,
    pub stock: u32,
    pub category: String,
    pub brand: Option<String>,
    pub condition: Option<String>,
    pub availability: Option<String>,
    pub images: Vec<ProductImage>,
    /// Flat feed-level specifications (GTIN, MPN, condition, product type).
    pub base_specs: Vec<SpecField>,
    /// Categorized specifications scraped from the external product page.
    /// Empty when the page yielded no data.
    pub specifications: SpecGroups,
    pub structured_description: Vec<DescriptionSection>,
    /// Vehicle fitment key parsed from the title; `None` when no known brand
    /// matched.
    pub brand_model: Option<BrandModelKey>,
    /// Link to the external product page the specifications were scraped from.
    pub external_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CanonicalProduct {
    /// Returns the primary image, falling back to the first image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|i| i.is_primary)
            .or_else(|| self.images.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::SpecCategory;

    fn make_product() -> CanonicalProduct {
        CanonicalProduct {
            external_id: "1001".to_string(),
            slug: "navigatie-piloton-bmw-seria-1".to_string(),
            name: "Navigatie PilotOn BMW Seria 1 2004-2011 2K 4GB 64GB 8 CORE".to_string(),
            description: "Sistem de navigatie dedicat.".to_string(),
            sku: "PIL-1001".to_string(),
            price: Some(1099.0),
            original_price: Some(1299.0),
            discount: 15,
            on_sale: true,
            stock: 50,
            category: "navigatii-gps".to_string(),
            brand: Some("PilotOn".to_string()),
            condition: Some("new".to_string()),
            availability: Some("in_stock".to_string()),
            images: vec![
                ProductImage {
                    url: "https://example.com/a.jpg".to_string(),
                    alt: "front".to_string(),
                    is_primary: false,
                },
                ProductImage {
                    url: "https://example.com/b.jpg".to_string(),
                    alt: "main".to_string(),
                    is_primary: true,
                },
            ],
            base_specs: vec![SpecField::new("Condition", "new")],
            specifications: SpecGroups::new(),
            structured_description: Vec::new(),
            brand_model: None,
            external_link: "https://example.com/p/1001".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn primary_image_prefers_flagged_image() {
        let product = make_product();
        assert_eq!(product.primary_image().unwrap().alt, "main");
    }

    #[test]
    fn primary_image_falls_back_to_first() {
        let mut product = make_product();
        for image in &mut product.images {
            image.is_primary = false;
        }
        assert_eq!(product.primary_image().unwrap().alt, "front");
    }

    #[test]
    fn primary_image_none_when_no_images() {
        let mut product = make_product();
        product.images.clear();
        assert!(product.primary_image().is_none());
    }

    #[test]
    fn serde_roundtrip_preserves_identity_and_specs() {
        let mut product = make_product();
        product
            .specifications
            .insert(SpecCategory::General, "SKU", "PIL-1001");
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: CanonicalProduct =
            serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.external_id, product.external_id);
        assert_eq!(decoded.slug, product.slug);
        assert_eq!(decoded.specifications, product.specifications);
    }
}
