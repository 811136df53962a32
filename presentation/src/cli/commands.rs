//! CLI command definitions

use clap::{ArgGroup, Parser};
use farlex_application::ExportScope;
use farlex_domain::{PageId, Section};
use std::path::PathBuf;

/// CLI arguments for farlex-quizzes
#[derive(Parser, Debug)]
#[command(name = "farlex-quizzes")]
#[command(author, version, about = "Turn The Farlex Grammar Book quizzes into flashcard CSV")]
#[command(long_about = r#"
Scrapes the multiple-choice quizzes of The Farlex Grammar Book and writes one
flashcard row (front, back, reference) per question.

Without a selector every section is exported to quizzes/all_quizzes.csv.
Downloaded pages are kept in pages/ and never fetched twice; after every
real download the scraper waits 1-5 seconds.

Configuration files are loaded from (in priority order):
1. FARLEX_* environment variables (e.g. FARLEX_SITE__BASE_URL)
2. --config <path>     Explicit config file
3. ./farlex.toml       Project-level config
4. ~/.config/farlex-quizzes/config.toml   Global config

Example:
  farlex-quizzes --page Parts-of-Speech
  farlex-quizzes --section 2
  farlex-quizzes -v
"#)]
#[command(group(ArgGroup::new("selector").args(["page", "section"])))]
pub struct Cli {
    /// Export a single page by its URL slug (e.g. Parts-of-Speech)
    #[arg(long, value_name = "SLUG")]
    pub page: Option<PageId>,

    /// Export a whole section (1: Grammar, 2: Punctuation, 3: Spelling and Pronunciation)
    #[arg(long, value_name = "N", value_parser = parse_section)]
    pub section: Option<Section>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory holding cached pages
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Directory receiving the CSV files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// What this invocation exports
    pub fn scope(&self) -> ExportScope {
        match (&self.page, self.section) {
            (Some(page), _) => ExportScope::Page(page.clone()),
            (None, Some(section)) => ExportScope::Section(section),
            (None, None) => ExportScope::All,
        }
    }
}

fn parse_section(value: &str) -> Result<Section, String> {
    let number: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a section number"))?;
    Section::try_from(number).map_err(|e| e.to_string())
}
