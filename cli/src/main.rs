//! CLI entrypoint for farlex-quizzes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use farlex_application::{
    ExportParams, ExportQuizzesUseCase, NoProgress, Pacer, PageParser, PageSource,
    ProgressNotifier, RowSinkFactory,
};
use farlex_infrastructure::{
    CachedPageFetcher, ConfigLoader, CsvSinkFactory, FileConfig, PageCache, RandomPacer,
    ScraperPageParser, Workspace,
};
use farlex_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    let config = config
        .with_cache_dir(cli.cache_dir.clone())
        .with_output_dir(cli.output_dir.clone());

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    config.validate().context("Invalid configuration")?;
    info!("Starting farlex-quizzes");

    // Directories are created once, before anything is fetched
    Workspace::from_config(&config)
        .prepare()
        .context("Failed to prepare working directories")?;

    let use_case = build_use_case(&config)?;
    let scope = cli.scope();

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let summary = use_case
        .execute_with_progress(scope.clone(), progress.as_ref())
        .await
        .with_context(|| format!("Export of {scope} failed"))?;

    println!("{}", ConsoleFormatter::summary(&scope, &summary));

    Ok(())
}

// === Dependency Injection ===
fn build_use_case(config: &FileConfig) -> Result<ExportQuizzesUseCase> {
    let source: Arc<dyn PageSource> = Arc::new(CachedPageFetcher::new(
        PageCache::new(&config.cache.dir),
        &config.site,
    ));
    let parser: Arc<dyn PageParser> = Arc::new(
        ScraperPageParser::new(&config.selectors).context("Invalid markup selectors")?,
    );
    let pacer: Arc<dyn Pacer> = Arc::new(RandomPacer::from_config(&config.politeness));
    let sinks: Arc<dyn RowSinkFactory> = Arc::new(CsvSinkFactory::new(&config.output.dir));
    let params = ExportParams::new(config.contents_page()?);

    Ok(ExportQuizzesUseCase::new(
        source, parser, pacer, sinks, params,
    ))
}

/// Console logging on stderr, plus an optional plain-text log file.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            if let Some(dir) = dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            }
            let appender = tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}
