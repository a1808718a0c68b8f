// src/cli.rs
use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use crate::config::consts::{
    BASE_URL, DEFAULT_MAX_SEASON, DEFAULT_MIN_SEASON, DEFAULT_OUT_FILE, REQUEST_PAUSE_MS, WORKERS,
};
use crate::config::options::{AppOptions, EpisodeKey, ExportOptions, ScrapeOptions, SeasonRange};
use crate::core::net::{HttpSource, PageSource};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::{file, scrape};

/// Pack the wiki's episode transcripts into one JSON file.
///
/// With no numbers, seasons 1-7 are fetched. One number is the last
/// season; with two, the first is the last season and the second the first.
#[derive(Debug, Parser)]
#[command(name = "transcript_packer", version, about, long_about)]
pub struct Args {
    /// Key episodes by their number within the season instead of by name
    #[arg(long, alias = "index")]
    pub indexed: bool,

    /// Last season to fetch
    pub max: Option<u32>,

    /// First season to fetch
    pub min: Option<u32>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Indent the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Wiki root that page paths are resolved against
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Episodes fetched in parallel
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Pause after each episode, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Append a timestamped log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> Result<AppOptions> {
        let seasons = SeasonRange::new(
            self.min.unwrap_or(DEFAULT_MIN_SEASON),
            self.max.unwrap_or(DEFAULT_MAX_SEASON),
        )?;

        Ok(AppOptions {
            scrape: ScrapeOptions {
                seasons,
                key: if self.indexed { EpisodeKey::Number } else { EpisodeKey::Name },
                base_url: self.base_url.clone(),
                workers: self.workers.max(1),
                pause_ms: self.pause_ms,
            },
            export: ExportOptions { out_path: self.out.clone(), pretty: self.pretty },
        })
    }
}

pub fn run(args: Args) -> Result<PathBuf> {
    if let Some(path) = &args.log_file {
        crate::log::set_log_file(path).map_err(|e| Error::io(path, e))?;
    }

    let opts = args.to_options()?;
    logf!("CLI: seasons={:?} key={:?} out={}", opts.scrape.seasons, opts.scrape.key, opts.export.out_path.display());

    let source: Arc<dyn PageSource> = Arc::new(HttpSource::new(&opts.scrape.base_url)?);
    let mut progress = CliProgress::default();
    let doc = scrape::collect(source, &opts.scrape, Some(&mut progress))?;

    let path = file::write_json(&opts.export, &doc)?;
    println!(
        "Wrote {} ({} episodes, {} lines)",
        path.display(),
        doc.episode_count(),
        doc.line_count()
    );
    Ok(path)
}

/// Prints one line per episode to stdout.
#[derive(Debug, Default)]
pub struct CliProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        *self = Self { total, ..Self::default() };
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, season: u32, episode: &str) {
        self.done += 1;
        println!("Processed {season}: {episode} ({}/{})", self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, season: u32, episode: &str) {
        self.failed += 1;
        println!("Skipped {season}: {episode} ({}/{})", self.done + self.failed, self.total);
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            println!("  {} of {} episodes skipped", self.failed, self.total);
        }
    }
}
