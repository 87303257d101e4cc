use crate::prelude::*;
use clap::Parser;

mod browse;
mod error;
mod fetch;
mod list;
mod prelude;
mod render;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, filter and page through blog posts from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the blog backend
    #[clap(
        long,
        env = "BLOGROLL_URL",
        global = true,
        default_value = "http://127.0.0.1:3000"
    )]
    url: String,

    /// Whether to display additional information.
    #[clap(long, env = "BLOGROLL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the mock backend with the bundled posts
    Serve(crate::serve::ServeOptions),

    /// Print one page of posts, after applying filters
    List(crate::list::ListOptions),

    /// Interactive session: search, toggle categories and load more
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Browse => crate::browse::run(app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
