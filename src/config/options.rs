// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How episodes are keyed inside a season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EpisodeKey {
    #[default]
    Name,
    /// Looked up on the episode's article page.
    Number,
}

/// Inclusive range of season numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonRange {
    pub min: u32,
    pub max: u32,
}

impl Default for SeasonRange {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_SEASON, max: DEFAULT_MAX_SEASON }
    }
}

impl SeasonRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidSeasonRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    pub fn seasons(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub seasons: SeasonRange,
    pub key: EpisodeKey,
    pub base_url: String,
    pub workers: usize,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            seasons: SeasonRange::default(),
            key: EpisodeKey::Name,
            base_url: s!(BASE_URL),
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            pretty: false,
        }
    }
}
