pub mod brand_model;
pub mod description;

pub use brand_model::{matches_model_search, BrandModelExtractor};
pub use description::DescriptionSegmenter;
