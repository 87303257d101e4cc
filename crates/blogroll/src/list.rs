use crate::prelude::{eprintln, println, *};
use blogroll_core::category::{CategoryUniverse, Toggle, ALL_LABEL};
use blogroll_core::feed::Feed;

use crate::fetch::init_feed;
use crate::render::{format_feed_json, format_feed_text};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Only show posts whose title contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Toggle a category checkbox, starting from "All"; repeatable
    #[arg(short, long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Number of times to press "Load More"
    #[arg(short, long, default_value = "0")]
    pub pages: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Map a user-supplied name to a checkbox target
pub fn resolve_toggle(name: &str, universe: &CategoryUniverse) -> Result<Toggle, Error> {
    if name.trim().eq_ignore_ascii_case(ALL_LABEL) {
        return Ok(Toggle::All);
    }
    universe
        .resolve(name)
        .map(|canonical| Toggle::Category(canonical.to_string()))
        .ok_or_else(|| Error::UnknownCategory(name.to_string()))
}

/// Apply the command-line intents in order: toggles, search, then load more
pub fn apply_options(feed: &mut Feed, options: &ListOptions) -> Result<(), Error> {
    for name in &options.categories {
        let toggle = resolve_toggle(name, feed.universe())?;
        feed.toggle_category(&toggle);
    }
    if let Some(term) = &options.search {
        feed.set_search_term(term.as_str());
    }
    for _ in 0..options.pages {
        feed.load_more();
    }
    Ok(())
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let client = reqwest::Client::new();
    let mut feed = init_feed(&client, &global).await;

    apply_options(&mut feed, &options)?;

    if global.verbose && !feed.is_loading() {
        eprintln!(
            "{} posts fetched, {} match",
            feed.posts().len(),
            feed.filtered_posts().len()
        );
    }

    let view = feed.view();
    if options.json {
        println!("{}", format_feed_json(&view)?);
    } else {
        print!("{}", format_feed_text(&view));
    }

    Ok(())
}
