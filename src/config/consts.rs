// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://mlp.fandom.com";
pub const USER_AGENT: &str = "transcript_packer/0.3";
pub const TIMEOUT_SECS: u64 = 15;
pub const RETRIES: u32 = 3;
pub const RETRY_PAUSE_MS: u64 = 500;

// Wiki layout
pub const SEASON_INDEX_TMPL: &str = "/wiki/Category:Season_{season}_transcripts";
pub const TRANSCRIPT_LINK_PREFIX: &str = "Transcripts/";
pub const TRANSCRIPT_URL_PREFIX: &str = "/wiki/Transcripts";
pub const ARTICLE_URL_PREFIX: &str = "/wiki";
pub const EPISODE_NUMBER_LABEL: &str = "Season episode №:";

// Markup that carries attribution
pub const LINE_TAG: &str = "dd";
pub const BOLD_TAG: &str = "b";
pub const LINK_TAG: &str = "a";

// Resolver
pub const MUSIC_MARKER: &str = "music";

// Seasons
pub const DEFAULT_MIN_SEASON: u32 = 1;
pub const DEFAULT_MAX_SEASON: u32 = 7;

// Export
pub const DEFAULT_OUT_FILE: &str = "transcripts.json";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
