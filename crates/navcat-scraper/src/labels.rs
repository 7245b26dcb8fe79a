//! Label and keyword tables driving specification extraction.

/// Specification labels in the order the shop's details section lists them.
/// During extraction each label acts as a capture boundary for every other
/// label: a value runs from its own label to the next label found in the
/// text. `Taguri` is boundary-only; it terminates captures but its content
/// is never kept.
pub(crate) const SPEC_LABELS: [&str; 33] = [
    "SKU",
    "Categorii",
    "Brand",
    "Memorie RAM",
    "Capacitate Stocare",
    "Model Procesor",
    "Diagonala Display",
    "Rezolutie Display",
    "Tehnologie Display",
    "Functii",
    "Conectivitate",
    "Destinat pentru",
    "Marca",
    "Tip Montare",
    "Preluare Comenzi Volan",
    "Continut Pachet",
    "Formate media suportate",
    "Sistem de Operare",
    "Tip Slot Memorie",
    "Conexiuni Externe",
    "Harta",
    "TMC",
    "Suport Aplicatii Android",
    "Split Screen",
    "Limbi Interfata",
    "Microfon",
    "Bluetooth",
    "Limitari",
    "Garantie",
    "Observatii",
    "Note",
    "Mentiuni",
    "Taguri",
];

/// Label whose content is never extracted, only used as a boundary.
pub(crate) const BOUNDARY_ONLY_LABEL: &str = "Taguri";

/// Label whose multiple occurrences across the details and meta sections
/// are combined into a single value.
pub(crate) const PACKAGE_CONTENTS_LABEL: &str = "Continut Pachet";

/// Keyword whitelist for the full-page line scan; a colon line is kept only
/// when its key contains one of these.
pub(crate) const KEY_KEYWORDS: [&str; 29] = [
    "sku",
    "ram",
    "procesor",
    "display",
    "stocare",
    "categorii",
    "brand",
    "functii",
    "conectivitate",
    "destinat",
    "marca",
    "montare",
    "comenzi",
    "continut",
    "formate",
    "sistem",
    "harta",
    "tmc",
    "split",
    "limbi",
    "microfon",
    "bluetooth",
    "aplicatii",
    "diagonala",
    "rezolutie",
    "tehnologie",
    "capacitate",
    "memorie",
    "model",
];

/// Narrower whitelist used when probing `<li>`/`<p>`/`<div>` elements for
/// colon-separated pairs.
pub(crate) const ELEMENT_KEYWORDS: [&str; 7] = [
    "sku",
    "ram",
    "procesor",
    "display",
    "stocare",
    "categorii",
    "brand",
];
