//! Locale-aware title ordering
//!
//! Titles are compared with the CLDR root collation tailored for English,
//! which is what browsers use for `localeCompare` in an English locale:
//! letters like `Æ`, `Ø` and `ß` sort next to their base letters, case and
//! accents only break ties, and punctuation follows the root table.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::post::Post;

/// English collator built from the compiled-in CLDR data
fn title_collator() -> Option<Collator> {
    Collator::try_new(&locale!("en").into(), CollatorOptions::new()).ok()
}

/// Sort posts by title
///
/// The sort is stable, so posts whose titles collate equal keep their
/// fetched order. Falls back to code point order if the collation data
/// cannot be loaded.
pub fn sort_by_title(mut posts: Vec<Post>) -> Vec<Post> {
    match title_collator() {
        Some(collator) => posts.sort_by(|a, b| collator.compare(&a.title, &b.title)),
        None => posts.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    posts
}
