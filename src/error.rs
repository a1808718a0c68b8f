// src/error.rs
//! Library error type.
//!
//! Parsing problems inside a transcript are recovered locally (logged, best-effort
//! output). What ends up here halts one unit of work: a page fetch, one episode,
//! one season index, or the final export.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure (connect, timeout, body read) after all retries
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// A closing line container showed up outside any open one
    #[error("mismatched </{tag}> outside of a transcript line")]
    MismatchedClose { tag: String },

    /// The episode article never showed the episode-number label
    #[error("could not find episode number for {episode}")]
    EpisodeNumberMissing { episode: String },

    /// The text after the episode-number label was not a number
    #[error("bad episode number {value:?} for {episode}: {source}")]
    EpisodeNumberParse {
        episode: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// An episode link did not have the expected transcript prefix
    #[error("unexpected episode url {url:?}")]
    UnexpectedUrl { url: String },

    #[error("invalid season range {min}..={max}")]
    InvalidSeasonRange { min: u32, max: u32 },

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
