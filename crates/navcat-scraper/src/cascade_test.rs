use super::*;
use crate::categorize::categorize;
use navcat_core::SpecCategory;

fn extractor() -> SpecExtractor {
    SpecExtractor::new()
}

#[test]
fn details_block_labels_are_extracted_in_table_order() {
    let html = r#"<div class="product-details">
        <div>SKU</div><div>PTN-S1-2K</div>
        <div>Brand</div><div>PilotOn</div>
        <div>Memorie RAM</div><div>4GB</div>
    </div>"#;

    let fields = extractor().extract(html);
    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["SKU", "Brand", "Memorie RAM"]);
    assert_eq!(fields[0].value, "PTN-S1-2K");
    assert_eq!(fields[2].value, "4GB");
}

#[test]
fn details_block_wins_over_tables() {
    let html = r#"
    <div class="product-details">
        <div>SKU</div><div>PTN-S1-2K</div>
    </div>
    <table><tr><td>Harta</td><td>Europa</td></tr></table>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "SKU");
}

#[test]
fn limitations_are_cut_at_the_tag_list() {
    let html = r#"<div class="product-details">
        <div>Limitari</div>
        <div>Nu suporta DVD original. Taguri navigatie android gps</div>
    </div>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "Limitari");
    assert_eq!(fields[0].value, "Nu suporta DVD original");
}

#[test]
fn package_contents_from_details_and_meta_are_combined() {
    let html = r#"
    <div class="product-details">
        <div>Continut Pachet</div><div>Tableta 9 inch, rama adaptoare</div>
    </div>
    <div class="product-meta-fields">
        <div>Continut Pachet</div><div>Cablu alimentare si antena GPS</div>
    </div>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "Continut Pachet");
    assert_eq!(
        fields[0].value,
        "Tableta 9 inch, rama adaptoare. Cablu alimentare si antena GPS"
    );
}

#[test]
fn duplicate_package_contents_are_not_repeated() {
    let html = r#"
    <div class="product-details">
        <div>Continut Pachet</div><div>Tableta si rama</div>
    </div>
    <div class="product-meta-fields">
        <div>Continut Pachet</div><div>Tableta si rama</div>
    </div>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields[0].value, "Tableta si rama");
}

#[test]
fn details_block_is_found_by_class_token_not_attribute_text() {
    // The class list is inspected as an attribute; look-alike text in other
    // attributes must not hide or fake the details container.
    let html = r#"<div id="classic" data-block="product-details-like"
        class="tab product-details active">
        <div>SKU</div><div>PTN-S1-2K</div>
    </div>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "SKU");
    assert_eq!(fields[0].value, "PTN-S1-2K");
}

#[test]
fn table_rows_are_parsed_when_no_details_block_exists() {
    let html = r#"<table>
        <tr><td>Specificatii</td><td>Detalii produs</td></tr>
        <tr><td>Memorie RAM:</td><td>4GB</td></tr>
        <tr><td>Harta</td><td>Europa</td></tr>
        <tr><td></td><td>orfan</td></tr>
    </table>"#;

    let fields = extractor().extract(html);
    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    // Heading row and empty-key row are dropped; trailing colon is trimmed.
    assert_eq!(keys, vec!["Memorie RAM", "Harta"]);
    assert_eq!(fields[0].value, "4GB");
}

#[test]
fn definition_lists_are_parsed_when_no_tables_match() {
    let html = r#"<dl>
        <dt>Procesor:</dt><dd>Octa Core</dd>
        <dt>Harta</dt><dd>Europa 2024</dd>
    </dl>"#;

    let fields = extractor().extract(html);
    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Procesor", "Harta"]);
}

#[test]
fn colon_elements_require_a_whitelisted_keyword() {
    let html = r#"<ul>
        <li>Procesor: Octa Core 2GHz</li>
        <li>Livrare rapida: 24h</li>
    </ul>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "Procesor");
    assert_eq!(fields[0].value, "Octa Core 2GHz");
}

#[test]
fn colon_div_sku_is_recovered_and_filed_under_general() {
    let html = "<div>SKU: ABC123</div>";

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "SKU");
    assert_eq!(fields[0].value, "ABC123");

    let groups = categorize(&fields);
    let general = groups.get(SpecCategory::General).unwrap();
    assert_eq!(general[0].key, "SKU");
    assert_eq!(general[0].value, "ABC123");
}

#[test]
fn line_scan_is_the_last_resort() {
    let html = r#"<div>Harta: Europa full 2024</div><div>Telefon contact: 0722000000</div>"#;

    let fields = extractor().extract(html);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "Harta");
    assert_eq!(fields[0].value, "Europa full 2024");
}

#[test]
fn line_scan_rejects_overlong_keys() {
    let html =
        "<p>Lista completa de compatibilitate memorie si accesorii disponibile: vezi site</p>";
    assert!(extractor().extract(html).is_empty());
}

#[test]
fn empty_page_yields_no_fields() {
    assert!(extractor().extract("").is_empty());
    assert!(extractor()
        .extract("<html><body><p>Despre noi</p></body></html>")
        .is_empty());
}
