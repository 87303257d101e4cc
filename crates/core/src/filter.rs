//! Category and title-search filtering
//!
//! Both passes are stable: they drop posts but never reorder them, so the
//! title order established at fetch time survives.

use crate::category::{CategoryUniverse, Selection};
use crate::post::Post;

fn in_selection(post: &Post, selection: &Selection, universe: &CategoryUniverse) -> bool {
    post.categories
        .iter()
        .any(|c| selection.contains(&c.name, universe))
}

/// `needle` must already be lowercased
fn title_contains(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
}

/// Positions in `posts` that pass both filter passes, in order
///
/// 1. Category pass: skipped for `All` and for an empty selection, otherwise
///    keeps posts having at least one selected category name.
/// 2. Search pass: skipped for an empty term, otherwise keeps posts whose
///    title contains the term, ignoring case.
pub fn filter_indices(
    posts: &[Post],
    selection: &Selection,
    universe: &CategoryUniverse,
    term: &str,
) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..posts.len()).collect();

    if !selection.is_unrestricted() {
        kept.retain(|&idx| in_selection(&posts[idx], selection, universe));
    }

    if !term.is_empty() {
        let needle = term.to_lowercase();
        kept.retain(|&idx| title_contains(&posts[idx], &needle));
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Toggle;
    use crate::post::{Author, Category};

    fn filter_posts<'a>(
        posts: &'a [Post],
        selection: &Selection,
        universe: &CategoryUniverse,
        term: &str,
    ) -> Vec<&'a Post> {
        filter_indices(posts, selection, universe, term)
            .into_iter()
            .map(|idx| &posts[idx])
            .collect()
    }

    fn post(id: &str, title: &str, categories: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            publish_date: "2021-01-01T00:00:00Z".to_string(),
            author: Author {
                name: "Tester".to_string(),
                avatar: "https://example.com/a.png".to_string(),
            },
            summary: "Summary".to_string(),
            categories: categories
                .iter()
                .enumerate()
                .map(|(idx, name)| Category {
                    id: format!("{id}-{idx}"),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    fn fixture() -> Vec<Post> {
        vec![
            post("1", "Alpha Launch", &["Ecommerce"]),
            post("2", "Beta Notes", &["Landing Pages", "Email Marketing"]),
            post("3", "Gamma Survey", &["Surveys and Forms"]),
            post("4", "Zeta Update", &["Ecommerce", "Ecommerce"]),
            post("5", "Untagged", &[]),
        ]
    }

    fn subset(names: &[&str]) -> Selection {
        let universe = CategoryUniverse::default();
        names.iter().fold(Selection::none(), |selection, name| {
            selection.toggle(&Toggle::from(*name), &universe)
        })
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_selection_keeps_everything() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &Selection::All, &universe, "");
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &Selection::none(), &universe, "");
        assert_eq!(filtered.len(), posts.len());
    }

    #[test]
    fn test_subset_keeps_posts_with_any_selected_category() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(
            &posts,
            &subset(&["Ecommerce", "Email Marketing"]),
            &universe,
            "",
        );
        assert_eq!(ids(&filtered), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_subset_drops_untagged_posts() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &subset(&["Surveys and Forms"]), &universe, "");
        assert_eq!(ids(&filtered), vec!["3"]);
    }

    #[test]
    fn test_duplicate_categories_do_not_duplicate_posts() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &subset(&["Ecommerce"]), &universe, "");
        assert_eq!(ids(&filtered), vec!["1", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &Selection::All, &universe, "zet");
        assert_eq!(ids(&filtered), vec!["4"]);

        let filtered = filter_posts(&posts, &Selection::All, &universe, "NOTES");
        assert_eq!(ids(&filtered), vec!["2"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &subset(&["Ecommerce"]), &universe, "a");
        assert_eq!(ids(&filtered), vec!["1", "4"]);

        let filtered = filter_posts(&posts, &subset(&["Ecommerce"]), &universe, "gamma");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_whitespace_term_is_matched_literally() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(&posts, &Selection::All, &universe, " ");
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_strict_subset_never_exceeds_all() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let everything = filter_posts(&posts, &Selection::All, &universe, "");

        for name in universe.names() {
            let selection = Selection::All.toggle(&Toggle::from(name.as_str()), &universe);
            let narrowed = filter_posts(&posts, &selection, &universe, "");
            assert!(narrowed.len() <= everything.len());

            let single = filter_posts(&posts, &subset(&[name.as_str()]), &universe, "");
            assert!(single.len() <= everything.len());
        }
    }

    #[test]
    fn test_filter_indices_point_into_input() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let indices = filter_indices(&posts, &subset(&["Landing Pages"]), &universe, "");
        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let posts = fixture();
        let universe = CategoryUniverse::default();
        let filtered = filter_posts(
            &posts,
            &subset(&["Surveys and Forms", "Ecommerce"]),
            &universe,
            "",
        );
        assert_eq!(ids(&filtered), vec!["1", "3", "4"]);
    }
}
