// src/specs/mod.rs
//! # Page specs
//!
//! One module per kind of wiki page. Each encodes *where the data lives in the
//! markup* and *how to read it tolerantly*, and nothing else.
//!
//! ## What lives here
//! - **Pure parsers** over page text (`parse_*`), driven by `core::html::Tokens`.
//!   These are what the tests exercise, against inline fixtures.
//! - **Thin fetch wrappers** (`fetch*`) that pull a page through a
//!   `core::net::PageSource` and hand it to the parser.
//!
//! ## What does **not** live here
//! - Crawl order, worker threads, retries between episodes – `scrape`.
//! - Output shaping and JSON – `data` / `file`.
//! - Speaker attribution rules – `transcript::resolve`; `transcript.rs` here only
//!   decides which containers on the page to feed it.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect → specs::season::fetch      (episode list)
//!                       → specs::episode::fetch_number  (only when keyed by number)
//!                       → specs::transcript::fetch  → transcript::{extract, resolve}
//! ```
//!
//! ## Pages
//! - `season` – `Category:Season_N_transcripts`; anchors whose text starts with
//!   `Transcripts/` are the episodes.
//! - `episode` – the episode's article; the text after `Season episode №:` is its number.
//! - `transcript` – the transcript itself; every top-level `<dd>` is a line container.
pub mod episode;
pub mod season;
pub mod transcript;
