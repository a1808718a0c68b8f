// src/specs/episode.rs
// Episode article → its number within the season.
// The infobox renders the number as the text right after the
// "Season episode №:" label.

use crate::config::consts::{ARTICLE_URL_PREFIX, EPISODE_NUMBER_LABEL, TRANSCRIPT_URL_PREFIX};
use crate::core::html::{Token, Tokens};
use crate::core::net::PageSource;
use crate::core::sanitize::trim_ws;
use crate::error::{Error, Result};
use crate::transcript::Episode;

/// `/wiki/Transcripts/Name` → `/wiki/Name`. Absolute links are reduced to
/// their path first.
pub fn article_path(episode: &Episode) -> Result<String> {
    site_path(&episode.url)
        .strip_prefix(TRANSCRIPT_URL_PREFIX)
        .map(|rest| join!(ARTICLE_URL_PREFIX, rest))
        .ok_or_else(|| Error::UnexpectedUrl { url: episode.url.clone() })
}

fn site_path(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => url,
    }
}

pub fn fetch_number(source: &dyn PageSource, episode: &Episode) -> Result<u32> {
    let doc = source.get(&article_path(episode)?)?;
    let n = parse_number(&doc, &episode.name)?;
    logd!("Episode: {} is number {n}", episode.name);
    Ok(n)
}

/// Whitespace-only runs between the label and the value are skipped;
/// the first real text after the label must be the number.
pub fn parse_number(doc: &str, episode: &str) -> Result<u32> {
    let mut found = false;

    for tok in Tokens::new(doc) {
        let Token::Text(t) = tok else { continue };
        let value = trim_ws(&t);

        if found {
            if value.is_empty() {
                continue;
            }
            return value.parse::<u32>().map_err(|source| Error::EpisodeNumberParse {
                episode: s!(episode),
                value: s!(value),
                source,
            });
        }
        found = t.trim() == EPISODE_NUMBER_LABEL;
    }

    Err(Error::EpisodeNumberMissing { episode: s!(episode) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_path_drops_transcript_prefix() {
        let ep = Episode::new("Winter Wrap Up", "/wiki/Transcripts/Winter_Wrap_Up");
        assert_eq!(article_path(&ep).unwrap(), "/wiki/Winter_Wrap_Up");

        let abs = Episode::new("Winter Wrap Up", "https://mlp.fandom.com/wiki/Transcripts/Winter_Wrap_Up");
        assert_eq!(article_path(&abs).unwrap(), "/wiki/Winter_Wrap_Up");
    }

    #[test]
    fn article_path_rejects_other_links() {
        let ep = Episode::new("Odd", "/wiki/Odd");
        assert!(matches!(article_path(&ep), Err(Error::UnexpectedUrl { .. })));
    }

    #[test]
    fn number_follows_label() {
        let doc = "<table><tr><th>Season episode №:</th><td> 11\n</td></tr></table>";
        assert_eq!(parse_number(doc, "Winter Wrap Up").unwrap(), 11);
    }

    #[test]
    fn label_with_surrounding_space_matches() {
        let doc = "<b>\n Season episode №: </b>\n  <span>4</span>";
        assert_eq!(parse_number(doc, "X").unwrap(), 4);
    }

    #[test]
    fn bad_number_is_fatal_for_lookup() {
        let doc = "<th>Season episode №:</th><td>eleven</td>";
        match parse_number(doc, "Winter Wrap Up") {
            Err(Error::EpisodeNumberParse { episode, value, .. }) => {
                assert_eq!(episode, "Winter Wrap Up");
                assert_eq!(value, "eleven");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_label() {
        assert!(matches!(
            parse_number("<p>Overall episode №: 24</p>", "X"),
            Err(Error::EpisodeNumberMissing { .. })
        ));
    }
}
