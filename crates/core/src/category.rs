//! Category universe and selection engine
//!
//! The selection is a tagged union rather than a set with a fake "All"
//! member: `Selection::All` is the only representation of "every category
//! is selected", so a `Subset` never covers the whole universe.

use serde::Serialize;
use std::collections::BTreeSet;

/// Label of the complete-set pseudo category
pub const ALL_LABEL: &str = "All";

/// Categories offered by the blog, in display order
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Data Management",
    "Digital Marketing",
    "Ecommerce",
    "Email Marketing",
    "Landing Pages",
    "Marketing Analytics",
    "Marketing Automation",
    "Platform News and Updates",
    "Surveys and Forms",
    "Tips and Best Practise",
];

/// Ordered, duplicate-free set of real category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUniverse {
    names: Vec<String>,
}

impl CategoryUniverse {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Case-insensitive lookup returning the canonical spelling
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|n| n.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

impl Default for CategoryUniverse {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

/// Target of a checkbox click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    All,
    Category(String),
}

impl From<&str> for Toggle {
    fn from(value: &str) -> Self {
        if value == ALL_LABEL {
            Toggle::All
        } else {
            Toggle::Category(value.to_string())
        }
    }
}

/// Currently selected categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "names", rename_all = "snake_case")]
pub enum Selection {
    /// Every category, including the "All" checkbox
    #[default]
    All,
    /// A strict subset of the universe, possibly empty
    Subset(BTreeSet<String>),
}

impl Selection {
    pub fn none() -> Self {
        Selection::Subset(BTreeSet::new())
    }

    /// Whether the category pass of the filter is skipped
    ///
    /// An empty subset is treated exactly like `All`.
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Subset(names) => names.is_empty(),
        }
    }

    pub fn contains(&self, name: &str, universe: &CategoryUniverse) -> bool {
        match self {
            Selection::All => universe.contains(name),
            Selection::Subset(names) => names.contains(name),
        }
    }

    /// Checkbox state for `target`
    pub fn is_checked(&self, target: &Toggle, universe: &CategoryUniverse) -> bool {
        match target {
            Toggle::All => matches!(self, Selection::All),
            Toggle::Category(name) => self.contains(name, universe),
        }
    }

    /// Selected names in universe order, followed by any names outside it
    pub fn names<'a>(&'a self, universe: &'a CategoryUniverse) -> Vec<&'a str> {
        match self {
            Selection::All => universe.names().iter().map(String::as_str).collect(),
            Selection::Subset(names) => {
                let mut ordered: Vec<&str> = universe
                    .names()
                    .iter()
                    .filter(|n| names.contains(n.as_str()))
                    .map(String::as_str)
                    .collect();
                ordered.extend(
                    names
                        .iter()
                        .filter(|n| !universe.contains(n))
                        .map(String::as_str),
                );
                ordered
            }
        }
    }

    /// Apply a checkbox click
    ///
    /// - `All` while everything is selected clears the selection; otherwise
    ///   it selects everything.
    /// - A selected category is removed. Removing from `All` yields the rest
    ///   of the universe as a subset.
    /// - An unselected category is added; once the universe is covered the
    ///   result collapses to `All`.
    /// - A name outside the universe clicked while `All` is selected leaves
    ///   `All` in place. `All` already passes every post, so the extra name
    ///   would not change the filtered list.
    pub fn toggle(&self, target: &Toggle, universe: &CategoryUniverse) -> Selection {
        match target {
            Toggle::All => match self {
                Selection::All => Selection::none(),
                Selection::Subset(_) => Selection::All,
            },
            Toggle::Category(name) => {
                let mut names: BTreeSet<String> = match self {
                    Selection::All => universe.names().iter().cloned().collect(),
                    Selection::Subset(names) => names.clone(),
                };

                if names.contains(name) {
                    names.remove(name);
                    Selection::Subset(names)
                } else {
                    names.insert(name.clone());
                    Self::normalize(names, universe)
                }
            }
        }
    }

    fn normalize(names: BTreeSet<String>, universe: &CategoryUniverse) -> Selection {
        let complete = !universe.is_empty() && universe.names().iter().all(|n| names.contains(n));
        if complete {
            Selection::All
        } else {
            Selection::Subset(names)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(selection: &Selection, target: &str) -> Selection {
        selection.toggle(&Toggle::from(target), &CategoryUniverse::default())
    }

    /// The invariant every reachable selection must satisfy
    fn assert_all_invariant(selection: &Selection) {
        let universe = CategoryUniverse::default();
        let every_name = universe
            .names()
            .iter()
            .all(|n| selection.contains(n, &universe));
        assert_eq!(selection.is_checked(&Toggle::All, &universe), every_name);
    }

    #[test]
    fn test_default_universe_has_ten_names() {
        let universe = CategoryUniverse::default();
        assert_eq!(universe.len(), 10);
        assert_eq!(universe.names()[0], "Data Management");
        assert_eq!(universe.names()[9], "Tips and Best Practise");
    }

    #[test]
    fn test_universe_drops_duplicates_keeping_order() {
        let universe = CategoryUniverse::new(["B", "A", "B", "C"]);
        assert_eq!(universe.names(), &["B", "A", "C"]);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let universe = CategoryUniverse::default();
        assert_eq!(universe.resolve("ecommerce"), Some("Ecommerce"));
        assert_eq!(universe.resolve("  landing pages "), Some("Landing Pages"));
        assert_eq!(universe.resolve("Gardening"), None);
    }

    #[test]
    fn test_toggle_from_label() {
        assert_eq!(Toggle::from("All"), Toggle::All);
        assert_eq!(
            Toggle::from("Ecommerce"),
            Toggle::Category("Ecommerce".to_string())
        );
    }

    #[test]
    fn test_toggle_all_when_all_clears() {
        assert_eq!(toggle(&Selection::All, "All"), Selection::none());
    }

    #[test]
    fn test_toggle_all_from_subset_selects_everything() {
        let partial = toggle(&Selection::none(), "Ecommerce");
        assert_eq!(toggle(&partial, "All"), Selection::All);
        assert_eq!(toggle(&Selection::none(), "All"), Selection::All);
    }

    #[test]
    fn test_toggle_all_twice_is_identity() {
        for start in [Selection::All, Selection::none()] {
            let twice = toggle(&toggle(&start, "All"), "All");
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn test_toggle_all_twice_from_partial_clears() {
        let partial = toggle(&toggle(&Selection::none(), "Ecommerce"), "Landing Pages");
        assert_eq!(toggle(&toggle(&partial, "All"), "All"), Selection::none());
    }

    #[test]
    fn test_remove_from_all_drops_marker() {
        let universe = CategoryUniverse::default();
        let selection = toggle(&Selection::All, "Ecommerce");

        match &selection {
            Selection::Subset(names) => {
                assert_eq!(names.len(), 9);
                assert!(!names.contains("Ecommerce"));
            }
            Selection::All => panic!("expected a subset"),
        }
        assert!(!selection.is_checked(&Toggle::All, &universe));
    }

    #[test]
    fn test_readding_last_category_restores_all() {
        let removed = toggle(&Selection::All, "Ecommerce");
        let restored = toggle(&removed, "Ecommerce");
        assert_eq!(restored, Selection::All);
    }

    #[test]
    fn test_selecting_every_category_one_by_one_yields_all() {
        let mut selection = Selection::none();
        for (idx, name) in DEFAULT_CATEGORIES.iter().enumerate() {
            selection = toggle(&selection, name);
            assert_all_invariant(&selection);
            if idx + 1 < DEFAULT_CATEGORIES.len() {
                assert!(matches!(selection, Selection::Subset(_)));
            }
        }
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn test_deselecting_every_category_yields_empty_subset() {
        let mut selection = Selection::All;
        for name in DEFAULT_CATEGORIES {
            selection = toggle(&selection, name);
            assert_all_invariant(&selection);
        }
        assert_eq!(selection, Selection::none());
        assert!(selection.is_unrestricted());
    }

    #[test]
    fn test_invariant_over_mixed_sequence() {
        let clicks = [
            "Ecommerce",
            "All",
            "Landing Pages",
            "Landing Pages",
            "All",
            "Surveys and Forms",
            "Data Management",
            "All",
            "All",
        ];
        let mut selection = Selection::All;
        for click in clicks {
            selection = toggle(&selection, click);
            assert_all_invariant(&selection);
        }
    }

    #[test]
    fn test_unrestricted_for_all_and_empty_only() {
        assert!(Selection::All.is_unrestricted());
        assert!(Selection::none().is_unrestricted());
        assert!(!toggle(&Selection::none(), "Ecommerce").is_unrestricted());
    }

    #[test]
    fn test_names_follow_universe_order() {
        let universe = CategoryUniverse::default();
        let selection = toggle(
            &toggle(&Selection::none(), "Surveys and Forms"),
            "Digital Marketing",
        );
        assert_eq!(
            selection.names(&universe),
            vec!["Digital Marketing", "Surveys and Forms"]
        );
        assert_eq!(Selection::All.names(&universe).len(), 10);
    }

    #[test]
    fn test_unknown_category_does_not_block_completion() {
        let universe = CategoryUniverse::new(["A", "B"]);
        let selection = Selection::none()
            .toggle(&Toggle::from("Other"), &universe)
            .toggle(&Toggle::from("A"), &universe);
        assert!(matches!(selection, Selection::Subset(_)));
        assert_eq!(selection.names(&universe), vec!["A", "Other"]);

        let complete = selection.toggle(&Toggle::from("B"), &universe);
        assert_eq!(complete, Selection::All);
    }

    #[test]
    fn test_unknown_category_while_all_keeps_all() {
        let universe = CategoryUniverse::default();
        let selection = Selection::All.toggle(&Toggle::from("Gardening"), &universe);

        assert_eq!(selection, Selection::All);
        assert!(selection.is_checked(&Toggle::All, &universe));
        assert!(selection.is_unrestricted());
    }
}
