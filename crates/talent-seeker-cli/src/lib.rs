//! tseek - command-line render surface for talent-seeker.
//!
//! Loads a JSON record file through [`JsonFileSource`], applies the query
//! built from the command line and renders one page as a table or as JSON.

pub mod cli;
pub mod config;
pub mod output;

use anyhow::Result;
use parking_lot::Mutex;
use talent_seeker::{
    refresh, refresh_featured, FetchOptions, FetchOutcome, JsonFileSource, SearchSession, SortKey,
};

pub use cli::{Cli, Commands, FeaturedArgs, Format, SearchArgs};
pub use config::Config;

/// Runs a parsed command and returns what should be printed.
pub async fn run(cli: &Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref())?;
    let data = cli.data.clone().unwrap_or_else(|| config.data.clone());
    let source = JsonFileSource::new(data);
    let session = Mutex::new(SearchSession::new());

    match &cli.command {
        Commands::Search(args) => {
            let mut options = FetchOptions::default().with_sort(SortKey::Featured.as_str());
            if let Some(limit) = config.fetch_limit {
                options = options.with_limit(limit);
            }
            if refresh(&session, &source, &options).await == FetchOutcome::Failed {
                tracing::warn!(path = %source.path().display(), "no records loaded");
            }

            let mut session = session.into_inner();
            session.set_query(args.to_query(config.default_sort));
            let sort = session.query().sort_key();
            let view = session.view();
            output::render_search(&view, sort, args.format)
        }
        Commands::Featured(args) => {
            let limit = args.limit.unwrap_or(config.featured_limit);
            refresh_featured(&session, &source, limit).await;

            let session = session.into_inner();
            let featured = session.featured();
            output::render_featured(&featured, args.format)
        }
    }
}
