use crate::prelude::*;
use blogroll_core::category::{Toggle, ALL_LABEL};
use blogroll_core::display::PostCard;
use blogroll_core::feed::{Feed, FeedView, LoadState};
use colored::Colorize;
use prettytable::row;

/// Placeholder shown until the fetch succeeds
pub const LOADING: &str = "Loading...";

/// Convert a feed projection to a JSON string
pub fn format_feed_json(view: &FeedView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_card(card: &PostCard) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", card.title.white().bold()));
    result.push_str(&format!(
        "    {}: {} ({})\n",
        "Author".green(),
        card.author.bright_white(),
        card.avatar.bright_black()
    ));
    if !card.categories.is_empty() {
        result.push_str(&format!(
            "    {}: {}\n",
            "Categories".green(),
            card.categories.join(", ").bright_magenta()
        ));
    }
    result.push_str(&format!("    {}\n", card.summary));
    result.push_str(&format!(
        "    {}: {}\n",
        "Published Date".green(),
        card.published.bright_yellow()
    ));

    result
}

/// Convert a feed projection to formatted text with colors
pub fn format_feed_text(view: &FeedView) -> String {
    if view.state == LoadState::Loading {
        return format!("{LOADING}\n");
    }

    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "BLOG".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if !view.search_term.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Search".green(),
            view.search_term.cyan()
        ));
    }
    let categories = if view.all_selected {
        ALL_LABEL.to_string()
    } else if view.selected_categories.is_empty() {
        "(none)".to_string()
    } else {
        view.selected_categories.join(", ")
    };
    result.push_str(&format!("{}: {}\n", "Categories".green(), categories.cyan()));

    for card in &view.posts {
        result.push_str(&format_card(card));
    }

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!(
        "{} {} {} {} {}\n",
        "Showing".bright_white(),
        view.posts.len().to_string().bright_cyan().bold(),
        "of".bright_white(),
        view.total_matches.to_string().bright_cyan().bold(),
        "matching posts".bright_white()
    ));
    if view.has_more {
        result.push_str(&format!("{}\n", "[ Load More ]".yellow().bold()));
    }

    result
}

fn checkbox_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();
    table.set_format(
        prettytable::format::FormatBuilder::new()
            .column_separator(' ')
            .padding(0, 1)
            .build(),
    );
    table
}

/// Checkbox table for the filter panel
pub fn format_categories_table(feed: &Feed) -> String {
    let mut table = checkbox_table();
    table.set_titles(row!["", "CATEGORY"]);

    let mark = |checked: bool| if checked { "[x]" } else { "[ ]" };

    table.add_row(row![mark(feed.is_checked(&Toggle::All)), ALL_LABEL]);
    for name in feed.universe().names() {
        let checked = feed.is_checked(&Toggle::Category(name.clone()));
        table.add_row(row![mark(checked), name]);
    }

    table.to_string()
}
