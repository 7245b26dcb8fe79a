//! Specification categories and the categorized field groups attached to a
//! [`crate::CanonicalProduct`].

use serde::{Deserialize, Serialize};

/// One of the eight fixed buckets a scraped specification field is filed
/// under. The variant order here is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecCategory {
    General,
    Hardware,
    Display,
    Connectivity,
    Features,
    Compatibility,
    Package,
    Additional,
}

impl SpecCategory {
    /// All categories in canonical output order.
    pub const ALL: [SpecCategory; 8] = [
        SpecCategory::General,
        SpecCategory::Hardware,
        SpecCategory::Display,
        SpecCategory::Connectivity,
        SpecCategory::Features,
        SpecCategory::Compatibility,
        SpecCategory::Package,
        SpecCategory::Additional,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpecCategory::General => "general",
            SpecCategory::Hardware => "hardware",
            SpecCategory::Display => "display",
            SpecCategory::Connectivity => "connectivity",
            SpecCategory::Features => "features",
            SpecCategory::Compatibility => "compatibility",
            SpecCategory::Package => "package",
            SpecCategory::Additional => "additional",
        }
    }
}

impl std::fmt::Display for SpecCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scraped key/value specification pair, with the key kept exactly
/// as it appeared on the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecField {
    pub key: String,
    pub value: String,
}

impl SpecField {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Specification fields grouped by [`SpecCategory`], in canonical category
/// order.
///
/// Invariants maintained by [`SpecGroups::insert`]:
/// - a raw key is assigned to at most one category (first assignment wins),
/// - group order always matches [`SpecCategory::ALL`] regardless of insert
///   order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecGroups {
    groups: Vec<SpecGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecGroup {
    pub category: SpecCategory,
    pub fields: Vec<SpecField>,
}

impl SpecGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `key`/`value` under `category`. A key already present anywhere
    /// in the groups is not inserted again.
    pub fn insert(&mut self, category: SpecCategory, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if self.contains_key(&key) {
            return;
        }
        let field = SpecField {
            key,
            value: value.into(),
        };
        if let Some(group) = self.groups.iter_mut().find(|g| g.category == category) {
            group.fields.push(field);
            return;
        }
        self.groups.push(SpecGroup {
            category,
            fields: vec![field],
        });
        self.groups.sort_by_key(|g| {
            SpecCategory::ALL
                .iter()
                .position(|c| *c == g.category)
                .unwrap_or(SpecCategory::ALL.len())
        });
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.groups
            .iter()
            .any(|g| g.fields.iter().any(|f| f.key == key))
    }

    #[must_use]
    pub fn get(&self, category: SpecCategory) -> Option<&[SpecField]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.fields.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = &SpecGroup> {
        self.groups.iter()
    }

    #[must_use]
    pub fn total_fields(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drops fields whose value is empty, `"N/A"`, or `"-"`, then drops any
    /// category left without fields.
    pub fn prune_empty(&mut self) {
        for group in &mut self.groups {
            group.fields.retain(|f| {
                let v = f.value.trim();
                !v.is_empty() && v != "N/A" && v != "-"
            });
        }
        self.groups.retain(|g| !g.fields.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_canonical_category_order() {
        let mut groups = SpecGroups::new();
        groups.insert(SpecCategory::Package, "Continut Pachet", "Tableta, rama");
        groups.insert(SpecCategory::General, "SKU", "ABC123");
        groups.insert(SpecCategory::Hardware, "Memorie RAM", "4GB");

        let order: Vec<SpecCategory> = groups.groups().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                SpecCategory::General,
                SpecCategory::Hardware,
                SpecCategory::Package
            ]
        );
    }

    #[test]
    fn duplicate_key_is_not_inserted_twice() {
        let mut groups = SpecGroups::new();
        groups.insert(SpecCategory::General, "SKU", "ABC123");
        groups.insert(SpecCategory::Hardware, "SKU", "XYZ789");

        assert_eq!(groups.total_fields(), 1);
        assert_eq!(groups.get(SpecCategory::General).unwrap()[0].value, "ABC123");
        assert!(groups.get(SpecCategory::Hardware).is_none());
    }

    #[test]
    fn prune_empty_drops_placeholder_values_and_empty_categories() {
        let mut groups = SpecGroups::new();
        groups.insert(SpecCategory::General, "SKU", "ABC123");
        groups.insert(SpecCategory::Display, "Rezolutie Display", "N/A");
        groups.insert(SpecCategory::Display, "Tehnologie Display", "-");
        groups.insert(SpecCategory::Hardware, "Memorie RAM", "  ");
        groups.prune_empty();

        assert_eq!(groups.total_fields(), 1);
        assert!(groups.get(SpecCategory::Display).is_none());
        assert!(groups.get(SpecCategory::Hardware).is_none());
        assert!(groups.get(SpecCategory::General).is_some());
    }

    #[test]
    fn empty_groups_report_empty() {
        let mut groups = SpecGroups::new();
        assert!(groups.is_empty());
        groups.insert(SpecCategory::General, "SKU", "N/A");
        groups.prune_empty();
        assert!(groups.is_empty());
    }

    #[test]
    fn category_display_matches_wire_names() {
        assert_eq!(SpecCategory::General.to_string(), "general");
        assert_eq!(SpecCategory::Additional.to_string(), "additional");
    }

    #[test]
    fn serde_roundtrip() {
        let mut groups = SpecGroups::new();
        groups.insert(SpecCategory::General, "SKU", "ABC123");
        let json = serde_json::to_string(&groups).expect("serialization failed");
        let decoded: SpecGroups = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, groups);
    }
}
