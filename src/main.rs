use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use tethys::config::Config;
use tethys::crawler::Crawler;
use tethys::utils::logging;

#[derive(Parser, Debug)]
#[command(
    name = "tethys",
    version,
    about = "Crawl the Tethys research database into per-category TSV files",
    long_about = None
)]
struct Cli {
    /// Directory for tethys.log
    #[arg(long = "logpath", value_name = "DIR")]
    log_path: PathBuf,

    /// Directory the output files are written to
    #[arg(long = "folderpath", value_name = "DIR")]
    folder_path: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the site root URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Enable verbose console logging
    #[arg(short, long)]
    verbose: bool,
}

/// Accept the historical single-dash spellings `-logpath` and `-folderpath`
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-logpath") => OsString::from("--logpath"),
            Some("-folderpath") => OsString::from("--folderpath"),
            _ => arg,
        })
        .collect()
}

impl Cli {
    /// Merge flags over the file (or default) configuration
    fn into_config(self) -> Result<(Config, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => Config::default(),
        };

        config.logging.log_dir = self.log_path;
        config.output.output_dir = self.folder_path;
        if let Some(base_url) = self.base_url {
            config.site.base_url = base_url;
        }

        Ok((config, self.verbose))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let (config, verbose) = cli.into_config()?;
    config.validate().context("Invalid configuration")?;

    let log_file = logging::init(&config.logging, verbose)?;

    tracing::info!("---------- Initializing new run of tethys ----------");
    tracing::info!(
        log_file = %log_file.display(),
        output_dir = %config.output.output_dir.display(),
        base_url = %config.site.base_url,
        tags = config.taxonomy.tag_count(),
        subtags = config.taxonomy.subtag_count(),
        "Starting crawl"
    );

    let crawler = Crawler::new(config)?;
    let summary = crawler.run().await?;

    tracing::info!(
        tags = summary.tags,
        subtags = summary.subtags,
        pages = summary.pages,
        records = summary.records,
        files = summary.files_written,
        records_per_page = summary.records_per_page(),
        "Crawl completed"
    );
    tracing::info!("Full time elapsed: {:.6}s", summary.elapsed.as_secs_f64());

    Ok(())
}
