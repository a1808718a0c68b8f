// src/specs/season.rs
//! Season index page → the episodes that have transcripts.
//!
//! The category page links every transcript as
//! `<a href="/wiki/Transcripts/Name">Transcripts/Name</a>`; any other anchor
//! (navigation, sub-categories, ads) is skipped.

use crate::config::consts::{LINK_TAG, SEASON_INDEX_TMPL, TRANSCRIPT_LINK_PREFIX};
use crate::core::html::{Token, Tokens};
use crate::core::net::PageSource;
use crate::error::Result;
use crate::transcript::Episode;

pub fn index_path(season: u32) -> String {
    SEASON_INDEX_TMPL.replace("{season}", &season.to_string())
}

pub fn fetch(source: &dyn PageSource, season: u32) -> Result<Vec<Episode>> {
    let doc = source.get(&index_path(season))?;
    let episodes = parse_index(&doc);
    logf!("Season: {season} lists {} transcripts", episodes.len());
    Ok(episodes)
}

/// Episodes in page order, first occurrence of each url kept.
pub fn parse_index(doc: &str) -> Vec<Episode> {
    let mut out: Vec<Episode> = Vec::new();
    let mut tokens = Tokens::new(doc).peekable();

    while let Some(tok) = tokens.next() {
        let Token::Start(tag) = tok else { continue };
        if !tag.is(LINK_TAG) {
            continue;
        }
        // Only the anchor's first text counts; anything else is re-read normally.
        let Some(Token::Text(label)) = tokens.next_if(|t| matches!(t, Token::Text(_))) else {
            continue;
        };
        let Some(name) = label.strip_prefix(TRANSCRIPT_LINK_PREFIX) else { continue };
        let Some(href) = tag.attr("href") else { continue };

        if out.iter().any(|e| e.url == href) {
            continue;
        }
        out.push(Episode::new(name, href));
    }
    out
}
