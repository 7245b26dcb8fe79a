//! Files raw specification fields into the eight fixed categories.

use navcat_core::{SpecCategory, SpecField, SpecGroups};

/// Categorizes raw fields and prunes placeholder values.
///
/// Rules are an ordered substring chain over the lowercased key; the first
/// matching rule wins and also rewrites the key to its canonical form.
/// Unmatched keys land in [`SpecCategory::General`] unchanged.
///
/// Connectivity fields get one extra normalization pass: the shop lists the
/// full option list under `Conectivitate` (sometimes only under a
/// comma-separated `Bluetooth` value), with Bluetooth itself always present,
/// so the `Bluetooth` field collapses to a `DA` flag and the option list is
/// prefixed with `Bluetooth, ` when it does not mention it.
#[must_use]
pub fn categorize(fields: &[SpecField]) -> SpecGroups {
    let mut groups = SpecGroups::new();
    let mut conectivitate: Option<String> = None;
    let mut bluetooth: Option<String> = None;

    for field in fields {
        match classify(&field.key) {
            Some((SpecCategory::Connectivity, "Conectivitate")) => {
                conectivitate.get_or_insert_with(|| field.value.clone());
            }
            Some((SpecCategory::Connectivity, "Bluetooth")) => {
                bluetooth.get_or_insert_with(|| field.value.clone());
            }
            Some((category, canonical)) => {
                groups.insert(category, canonical, field.value.clone());
            }
            None => groups.insert(SpecCategory::General, field.key.clone(), field.value.clone()),
        }
    }

    let options = conectivitate
        .or_else(|| bluetooth.clone().filter(|value| value.contains(',')));
    if let Some(options) = options {
        let options = options
            .trim_start_matches(|c: char| c == ',' || c.is_whitespace())
            .trim()
            .to_string();
        let options = if options.is_empty() || options.contains("Bluetooth") {
            options
        } else {
            format!("Bluetooth, {options}")
        };
        groups.insert(SpecCategory::Connectivity, "Conectivitate", options);
    }
    if bluetooth.is_some() {
        groups.insert(SpecCategory::Connectivity, "Bluetooth", "DA");
    }

    groups.prune_empty();
    groups
}

/// The rule chain. Order matters: e.g. `Tip Slot Memorie` must hit the slot
/// rule before the generic `memorie` rule can pull it into hardware.
#[allow(clippy::too_many_lines)]
fn classify(key: &str) -> Option<(SpecCategory, &'static str)> {
    use SpecCategory::{
        Additional, Compatibility, Connectivity, Display, Features, General, Hardware, Package,
    };

    let k = key.to_lowercase();
    let has = |needle: &str| k.contains(needle);

    let rule = if has("limitari") {
        (Additional, "Limitari")
    } else if has("garantie") {
        (Additional, "Garantie")
    } else if has("observatii") {
        (Additional, "Observatii")
    } else if has("mentiuni") {
        (Additional, "Mentiuni")
    } else if has("note") {
        (Additional, "Note")
    } else if has("slot") {
        (Package, "Tip Slot Memorie")
    } else if has("conexiuni") {
        (Package, "Conexiuni Externe")
    } else if has("sku") || has("cod") {
        (General, "SKU")
    } else if has("brand") || has("marca") {
        (General, "Brand")
    } else if has("categori") {
        (General, "Categorii")
    } else if has("sistem") && has("operare") {
        (General, "Sistem de Operare")
    } else if has("harta") || has("map") {
        (General, "Harta")
    } else if has("tmc") {
        (General, "TMC")
    } else if has("procesor") || has("processor") {
        (Hardware, "Model Procesor")
    } else if has("ram") || has("memorie") {
        (Hardware, "Memorie RAM")
    } else if has("stocare") || has("storage") || has("capacitate") {
        (Hardware, "Capacitate Stocare")
    } else if has("diagonala") || has("inch") || has("marime") || has("size") {
        (Display, "Diagonala Display")
    } else if has("tehnologie") && (has("display") || has("ecran")) {
        (Display, "Tehnologie Display")
    } else if has("rezolutie") || has("resolution") {
        (Display, "Rezolutie Display")
    } else if has("functii") || has("features") {
        (Features, "Functii")
    } else if has("split") && has("screen") {
        (Features, "Split Screen")
    } else if has("comenzi") && has("volan") {
        (Features, "Preluare Comenzi Volan")
    } else if has("aplicatii") && has("android") {
        (Features, "Suport Aplicatii Android")
    } else if has("limbi") || has("interfata") {
        (Features, "Limbi Interfata")
    } else if has("conectivitate") || has("connectivity") {
        (Connectivity, "Conectivitate")
    } else if has("bluetooth") {
        (Connectivity, "Bluetooth")
    } else if has("destinat") || has("compatibil") {
        (Compatibility, "Destinat pentru")
    } else if has("montare") || has("instalare") {
        (Compatibility, "Tip Montare")
    } else if has("continut") || has("pachet") {
        (Package, "Continut Pachet")
    } else if has("formate") && has("media") {
        (Package, "Formate media suportate")
    } else {
        return None;
    };
    Some(rule)
}
