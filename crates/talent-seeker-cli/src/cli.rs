//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use talent_seeker::{Query, SortKey};

/// Search, filter and page through talent listings
#[derive(Debug, Parser)]
#[command(name = "tseek")]
#[command(version)]
#[command(about = "Search, filter and page through talent listings")]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true, env = "TSEEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Record file (JSON); overrides the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter, sort and show one page of listings
    Search(SearchArgs),

    /// Show the featured carousel
    Featured(FeaturedArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free text matched against name, title, bio and skills
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Text matched against skill names only
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Text matched against the location
    #[arg(long, default_value = "")]
    pub location: String,

    /// Minimum hourly rate; non-numeric input is ignored
    #[arg(long)]
    pub min_rate: Option<String>,

    /// Maximum hourly rate; non-numeric input is ignored
    #[arg(long)]
    pub max_rate: Option<String>,

    /// Exact availability, or "all"
    #[arg(long, default_value = "all")]
    pub availability: String,

    /// featured, rating, rate_low, rate_high or newest
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Page to show (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl SearchArgs {
    /// Builds the query. The page is applied last so it is not reset.
    pub fn to_query(&self, default_sort: SortKey) -> Query {
        Query::new()
            .search(self.query.as_str())
            .skills(self.skills.as_str())
            .location(self.location.as_str())
            .min_rate_input(self.min_rate.as_deref().unwrap_or(""))
            .max_rate_input(self.max_rate.as_deref().unwrap_or(""))
            .availability(self.availability.as_str())
            .sort(self.sort.unwrap_or(default_sort))
            .page(self.page)
            .build()
    }
}

#[derive(Debug, Args)]
pub struct FeaturedArgs {
    /// Sample size requested from the source
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: talent_seeker::SeekerError| e.to_string())
}
