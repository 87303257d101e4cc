use crate::prelude::{eprintln, println, *};
use blogroll_core::feed::Feed;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::fetch::init_feed;
use crate::list::resolve_toggle;
use crate::render::{format_categories_table, format_feed_text, LOADING};

const HELP: &str = "\
Commands:
  search <text>   filter titles containing <text>
  clear           clear the search
  toggle <name>   toggle a category checkbox (use \"All\" for the All box)
  all             toggle the All checkbox
  more            load 12 more posts
  categories      show the category checkboxes
  show            show the current page
  help            show this message
  quit            leave";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Toggle(String),
    More,
    Categories,
    Show,
    Help,
    Quit,
}

/// Parse a line typed at the prompt
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "clear" => Ok(Command::Search(String::new())),
        "toggle" | "t" if !rest.is_empty() => Ok(Command::Toggle(rest.to_string())),
        "toggle" | "t" => Err("toggle needs a category name".to_string()),
        "all" => Ok(Command::Toggle("All".to_string())),
        "more" | "m" => Ok(Command::More),
        "categories" | "c" => Ok(Command::Categories),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {other}. Type `help` for a list.")),
    }
}

/// Apply a command to the feed and return the text to print
///
/// Returns `None` for `Quit`.
pub fn handle_command(feed: &mut Feed, command: Command) -> Option<String> {
    let output = match command {
        Command::Quit => return None,
        Command::Help => format!("{HELP}\n"),
        _ if feed.is_loading() => format!("{LOADING}\n"),
        Command::Search(term) => {
            feed.set_search_term(term);
            format_feed_text(&feed.view())
        }
        Command::Toggle(name) => match resolve_toggle(&name, feed.universe()) {
            Ok(toggle) => {
                feed.toggle_category(&toggle);
                format_categories_table(feed)
            }
            Err(err) => format!("{err}\n"),
        },
        Command::More => {
            if feed.has_more() {
                feed.load_more();
                format_feed_text(&feed.view())
            } else {
                "No more posts.\n".to_string()
            }
        }
        Command::Categories => format_categories_table(feed),
        Command::Show => format_feed_text(&feed.view()),
    };

    Some(output)
}

pub async fn run(global: crate::Global) -> Result<()> {
    let client = reqwest::Client::new();
    let mut feed = init_feed(&client, &global).await;

    if global.verbose {
        eprintln!("Type `help` for commands.");
    }
    print!("{}", format_feed_text(&feed.view()));

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        log::debug!("command: {command:?}");

        match handle_command(&mut feed, command) {
            Some(output) => print!("{output}"),
            None => break,
        }
    }

    Ok(())
}
