use super::*;

fn extractor() -> BrandModelExtractor {
    BrandModelExtractor::new()
}

#[test]
fn extracts_bmw_seria_1_with_year_range() {
    let result = extractor()
        .extract("Navigatie PilotOn BMW Seria 1 2004-2011 2K 4GB 64GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.brand, "BMW");
    assert_eq!(result.model, "Seria 1");
    assert_eq!(result.year_range.as_deref(), Some("2004-2011"));
    assert_eq!(result.key, "seria 1 2004-2011");
}

#[test]
fn vw_normalizes_to_volkswagen() {
    let result = extractor()
        .extract("Navigatie PilotOn VW Amarok 2016-2022 2K 8GB 256GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.brand, "Volkswagen");
    assert_eq!(result.model, "Amarok");
}

#[test]
fn unknown_brand_returns_none() {
    assert!(extractor()
        .extract("Navigatie PilotOn Zastava 101 1971-1985 2K 4GB")
        .is_none());
}

#[test]
fn brand_is_always_from_the_enumerated_table() {
    let ex = extractor();
    let titles = [
        "Navigatie PilotOn BMW Seria 3 1999-2006 2K 4GB 64GB",
        "Navigatie PilotOn VW Golf 5 2004-2008 2K 8GB 256GB",
        "Navigatie PilotOn Dacia Duster 2 2012-2017 2K 4GB 64GB",
        "Cheap aftermarket radio",
    ];
    for title in titles {
        if let Some(result) = ex.extract(title) {
            assert!(
                CAR_BRANDS.contains(&result.brand.as_str()) || result.brand == "Volkswagen",
                "brand {} not from table",
                result.brand
            );
        }
    }
}

#[test]
fn dupa_year_range_is_kept_out_of_the_model() {
    let result = extractor()
        .extract("Navigatie PilotOn Ford Transit dupa 2019 2K 4GB 64GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.model, "Transit");
    assert_eq!(result.year_range.as_deref(), Some("dupa 2019"));
    assert_eq!(result.key, "transit dupa 2019");
}

#[test]
fn prezent_year_range_is_recognized() {
    let result = extractor()
        .extract("Navigatie PilotOn Audi A4 2016-prezent 2K 8GB 256GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.model, "A4");
    assert_eq!(result.year_range.as_deref(), Some("2016-prezent"));
}

#[test]
fn whitelisted_generation_digit_is_stripped() {
    let result = extractor()
        .extract("Navigatie PilotOn Dacia Duster 2 2012-2017 2K 4GB 64GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.model, "Duster");
    assert_eq!(result.key, "duster 2012-2017");
}

#[test]
fn non_whitelisted_model_keeps_trailing_digit() {
    let result = extractor()
        .extract("Navigatie PilotOn BMW Seria 3 2004-2013 2K 4GB 64GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.model, "Seria 3");
    assert_eq!(result.key, "seria 3 2004-2013");
}

#[test]
fn spec_token_bounds_model_when_no_year_is_present() {
    let result = extractor()
        .extract("Navigatie PilotOn Honda Civic 9 inch 4GB 64GB 8 CORE")
        .expect("should extract");
    assert_eq!(result.model, "Civic");
    assert_eq!(result.year_range, None);
    assert_eq!(result.key, "civic unknown");
}

#[test]
fn same_title_yields_the_same_key_across_runs() {
    let title = "Navigatie PilotOn BMW Seria 1 2004-2011 2K 4GB 64GB 8 CORE";
    let first = extractor().extract(title).unwrap();
    let second = extractor().extract(title).unwrap();
    assert_eq!(first, second);
}

#[test]
fn search_matches_exact_key() {
    let key = extractor()
        .extract("Navigatie PilotOn BMW Seria 3 2004-2013 2K 4GB 64GB 8 CORE")
        .unwrap();
    assert!(matches_model_search(&key, "seria 3 2004-2013"));
}

#[test]
fn base_model_search_matches_all_year_variants() {
    let ex = extractor();
    let a = ex
        .extract("Navigatie PilotOn BMW Seria 3 2004-2013 2K 4GB 64GB 8 CORE")
        .unwrap();
    let b = ex
        .extract("Navigatie PilotOn BMW Seria 3 1999-2006 2K 4GB 64GB 8 CORE")
        .unwrap();
    assert!(matches_model_search(&a, "seria 3"));
    assert!(matches_model_search(&b, "seria 3"));
}

#[test]
fn search_does_not_match_a_different_model() {
    let key = extractor()
        .extract("Navigatie PilotOn BMW Seria 3 2004-2013 2K 4GB 64GB 8 CORE")
        .unwrap();
    assert!(!matches_model_search(&key, "seria 1"));
}

#[test]
fn search_is_case_and_whitespace_tolerant() {
    let key = extractor()
        .extract("Navigatie PilotOn BMW Seria 3 2004-2013 2K 4GB 64GB 8 CORE")
        .unwrap();
    assert!(matches_model_search(&key, "  Seria 3 "));
}
