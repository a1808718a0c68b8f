// src/specs/transcript.rs
//! Transcript page → finalized lines.
//!
//! Every top-level `<dd>` on the page is a line container and goes through the
//! line extractor. Line containers close themselves, so a `</dd>` seen out here
//! means the markup is unbalanced. The episode is abandoned rather than
//! guessing where lines belong.

use std::time::Instant;

use crate::config::consts::LINE_TAG;
use crate::core::html::{Token, Tokens};
use crate::core::net::PageSource;
use crate::error::{Error, Result};
use crate::transcript::{extract_lines, resolve_lines, Episode, FinalizedLine, RawLine};

pub fn fetch(source: &dyn PageSource, episode: &Episode) -> Result<Vec<FinalizedLine>> {
    let doc = source.get(&episode.url)?;
    let t = Instant::now();
    let lines = parse(&doc)?;
    logd!("Transcript: {} parsed in {:?}, {} lines", episode.name, t.elapsed(), lines.len());
    Ok(lines)
}

/// Extract and resolve in one pass, fresh state per call.
pub fn parse(doc: &str) -> Result<Vec<FinalizedLine>> {
    Ok(resolve_lines(parse_raw(doc)?))
}

/// All raw lines on the page, in document order.
pub fn parse_raw(doc: &str) -> Result<Vec<RawLine>> {
    let mut tokens = Tokens::new(doc).peekable();
    let mut lines = Vec::new();

    while let Some(tok) = tokens.next() {
        match tok {
            Token::Start(tag) if tag.is(LINE_TAG) => {
                let ex = extract_lines(&mut tokens);
                if !ex.is_closed() {
                    logw!(
                        "Transcript: page ended inside a line container (depth {}), keeping {} partial lines",
                        ex.depth,
                        ex.lines.len()
                    );
                }
                lines.extend(ex.lines);
            }
            Token::End(name) if name == LINE_TAG => {
                loge!("Transcript: mismatched </{name}>, discarding {} lines", lines.len());
                return Err(Error::MismatchedClose { tag: name });
            }
            _ => {}
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_every_container() {
        let doc = r#"
            <h2>Transcript</h2>
            <dl><dd><b>Twilight Sparkle</b>: Spike!</dd></dl>
            <p>Intermission</p>
            <dl><dd>[Spike falls over]</dd></dl>"#;
        assert_eq!(
            parse_raw(doc).unwrap(),
            vec![
                RawLine::new("Twilight Sparkle", ": Spike!"),
                RawLine::new("", "[Spike falls over]"),
            ]
        );
    }

    #[test]
    fn stray_close_abandons_the_episode() {
        let doc = "<dd><b>Spike</b>: one</dd></dd><dd><b>Spike</b>: two</dd>";
        assert!(matches!(parse_raw(doc), Err(Error::MismatchedClose { tag }) if tag == "dd"));
    }

    #[test]
    fn truncated_page_keeps_what_it_has() {
        let doc = "<dd><b>Rarity</b>: First.</dd><dd><b>Rarity</b>: Sec";
        let lines = parse(doc).unwrap();
        assert_eq!(
            lines,
            vec![FinalizedLine::new("Rarity", "First."), FinalizedLine::new("Rarity", "Sec")]
        );
    }

    #[test]
    fn no_containers_no_lines() {
        assert!(parse("<html><body><p>Nothing here</p></body></html>").unwrap().is_empty());
    }
}
