use serde::{Deserialize, Serialize};

/// One persisted list entry. Each vocabulary entry is stored as `{"name": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameEntry {
    #[serde(default)]
    pub name: String,
}

/// An ordered, duplicate-free vocabulary of permissible strings (e.g. "materials").
///
/// Insertion order is preserved and is the order used for display and persistence.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NameEntry>", into = "Vec<NameEntry>")]
pub struct CategoryList {
    items: Vec<String>,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a vocabulary, silently dropping duplicates.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for item in items {
            list.add(item);
        }
        list
    }

    /// Read-only view of the entries in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Append `name` unless it is empty or already present. Returns true when the
    /// list changed.
    ///
    /// Empty names are refused; reading a saved file back drops them.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Remove `name`, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item == name) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Comma-joined preview of the first `limit` entries, with `...` when truncated.
    pub fn preview(&self, limit: usize) -> String {
        let shown: Vec<&str> = self.items.iter().take(limit).map(String::as_str).collect();
        let mut out = shown.join(", ");
        if self.items.len() > limit {
            out.push_str("...");
        }
        out
    }
}

impl From<Vec<NameEntry>> for CategoryList {
    fn from(entries: Vec<NameEntry>) -> Self {
        // Hand-edited files may carry blanks or repeats; `add` drops both.
        Self::from_items(entries.into_iter().map(|entry| entry.name))
    }
}

impl From<CategoryList> for Vec<NameEntry> {
    fn from(list: CategoryList) -> Self {
        list.items
            .into_iter()
            .map(|name| NameEntry { name })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut list = CategoryList::from_items(["steel", "iron"]);
        assert!(list.add("bronze"));
        let once = list.clone();
        assert!(!list.add("bronze"));
        assert_eq!(list, once);
        assert_eq!(list.items(), &["steel", "iron", "bronze"]);
    }

    #[test]
    fn add_refuses_empty_name() {
        let mut list = CategoryList::from_items(["steel"]);
        assert!(!list.add(""));
        assert_eq!(list.items(), &["steel"]);
        assert_eq!(CategoryList::from_items(["", "iron"]).items(), &["iron"]);
    }

    #[test]
    fn add_then_remove_restores_list() {
        let original = CategoryList::from_items(["slashing", "piercing"]);
        let mut list = original.clone();
        list.add("acid");
        assert!(list.remove("acid"));
        assert_eq!(list, original);
    }

    #[test]
    fn remove_missing_reports_false() {
        let mut list = CategoryList::from_items(["steel"]);
        assert!(!list.remove("unobtainium"));
        assert!(!list.remove("Steel"), "matching is case-sensitive");
        assert_eq!(list.items(), &["steel"]);
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        let list = CategoryList::from_items(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(list.preview(5), "a, b, c, d, e...");
        assert_eq!(list.preview(6), "a, b, c, d, e, f");
        assert_eq!(CategoryList::new().preview(5), "");
    }

    #[test]
    fn serializes_as_name_records() {
        let list = CategoryList::from_items(["bow", "sling"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"name":"bow"},{"name":"sling"}]"#);

        let parsed: CategoryList =
            serde_json::from_str(r#"[{"name":"bow"},{"name":""},{"name":"bow"},{"name":"sling"}]"#)
                .unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn entry_without_name_is_skipped() {
        let parsed: CategoryList =
            serde_json::from_str(r#"[{"name":"bow"},{},{"name":"sling"}]"#).unwrap();
        assert_eq!(parsed.items(), &["bow", "sling"]);
    }
}
