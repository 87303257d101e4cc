//! Listing engine state
//!
//! `Feed` holds the inputs of the listing (posts, selection, search term,
//! page size) and re-derives the filtered list whenever one of them changes.
//! The visible list is always the current page-size prefix of it. Until the
//! canonical list holds at least one post the feed reports `Loading`.

use serde::Serialize;

use crate::category::{CategoryUniverse, Selection, Toggle};
use crate::collation::sort_by_title;
use crate::display::{to_card, PostCard};
use crate::filter::filter_indices;
use crate::pagination::{has_more, paginate, PageSize};
use crate::post::Post;

/// Whether the initial fetch has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Debug, Clone)]
pub struct Feed {
    universe: CategoryUniverse,
    posts: Vec<Post>,
    selection: Selection,
    search_term: String,
    page_size: PageSize,
    filtered: Vec<usize>,
}

impl Default for Feed {
    fn default() -> Self {
        Feed::new(CategoryUniverse::default())
    }
}

impl Feed {
    pub fn new(universe: CategoryUniverse) -> Self {
        Self {
            universe,
            posts: Vec::new(),
            selection: Selection::All,
            search_term: String::new(),
            page_size: PageSize::default(),
            filtered: Vec::new(),
        }
    }

    /// Install the fetched posts, sorted by title
    pub fn load(&mut self, posts: Vec<Post>) {
        self.posts = sort_by_title(posts);
        self.recompute();
    }

    /// `Loading` while the canonical list is empty, even after a fetch
    pub fn state(&self) -> LoadState {
        if self.posts.is_empty() {
            LoadState::Loading
        } else {
            LoadState::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    pub fn toggle_category(&mut self, target: &Toggle) {
        self.selection = self.selection.toggle(target, &self.universe);
        self.recompute();
    }

    /// Grow the page; the filtered list is unaffected
    pub fn load_more(&mut self) {
        self.page_size = self.page_size.grow();
    }

    fn recompute(&mut self) {
        self.filtered = filter_indices(
            &self.posts,
            &self.selection,
            &self.universe,
            &self.search_term,
        );
    }

    pub fn universe(&self) -> &CategoryUniverse {
        &self.universe
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Canonical, title-sorted list
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn filtered_posts(&self) -> Vec<&Post> {
        let posts = self.posts();
        self.filtered.iter().map(|&idx| &posts[idx]).collect()
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        let posts = self.posts();
        paginate(&self.filtered, self.page_size)
            .iter()
            .map(|&idx| &posts[idx])
            .collect()
    }

    /// Whether the "load more" control is shown
    pub fn has_more(&self) -> bool {
        has_more(self.filtered.len(), self.page_size)
    }

    pub fn is_checked(&self, target: &Toggle) -> bool {
        self.selection.is_checked(target, &self.universe)
    }

    /// Everything the presentation layer reads, in one value
    pub fn view(&self) -> FeedView {
        FeedView {
            state: self.state(),
            search_term: self.search_term.clone(),
            all_selected: matches!(self.selection, Selection::All),
            selected_categories: self
                .selection
                .names(&self.universe)
                .into_iter()
                .map(str::to_string)
                .collect(),
            page_size: self.page_size.get(),
            total_posts: self.posts().len(),
            total_matches: self.filtered.len(),
            has_more: self.has_more(),
            posts: self.visible_posts().into_iter().map(to_card).collect(),
        }
    }
}

/// Read-only projection of a `Feed`
#[derive(Debug, Serialize, Clone)]
pub struct FeedView {
    pub state: LoadState,
    pub search_term: String,
    pub all_selected: bool,
    pub selected_categories: Vec<String>,
    pub page_size: usize,
    pub total_posts: usize,
    pub total_matches: usize,
    pub has_more: bool,
    pub posts: Vec<PostCard>,
}
