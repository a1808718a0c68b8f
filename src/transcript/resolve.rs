// src/transcript/resolve.rs
//! Attribution resolver.
//!
//! The wiki is inconsistent about where the speaker lives: sometimes in a bold
//! node (`<b>Twilight</b>: text`), sometimes as plain text before a colon, and
//! sometimes inside a bracketed stage direction (`[Rarity: gasps]`). This pass
//! walks an episode's raw lines in order and folds all of those into one
//! `{character, text}` shape, carrying the last speaker forward for lines that
//! don't name one.

use super::types::{FinalizedLine, RawLine};
use crate::config::consts::MUSIC_MARKER;
use crate::core::sanitize::trim_ws;

/// What a raw line's text is, judged by its first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `:` – the body of a line whose speaker came before it
    Dialogue,
    /// `[` – stage direction, possibly naming a speaker inside
    Action,
    /// Lyric, run-on text, or a speaker still written inline
    Continuation,
}

impl LineKind {
    pub fn of(text: &str) -> Self {
        match text.as_bytes().first() {
            Some(b':') => LineKind::Dialogue,
            Some(b'[') => LineKind::Action,
            _ => LineKind::Continuation,
        }
    }
}

/// A line that had a speaker tag but no `:` to split its text on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingSeparator {
    pub character: String,
    pub text: String,
}

/// Per-episode resolver state. Don't reuse across episodes.
#[derive(Debug, Default)]
pub struct AttributionResolver {
    previous_speaker: String,
    missing_separators: Vec<MissingSeparator>,
}

impl AttributionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_separators(&self) -> &[MissingSeparator] {
        &self.missing_separators
    }

    pub fn resolve_all<L>(&mut self, lines: L) -> Vec<FinalizedLine>
    where
        L: IntoIterator<Item = RawLine>,
    {
        lines.into_iter().filter_map(|line| self.resolve_line(line)).collect()
    }

    /// `None` for song-section headings, which only set the speaker.
    pub fn resolve_line(&mut self, line: RawLine) -> Option<FinalizedLine> {
        let RawLine { character, text } = line;

        if !character.is_empty() {
            if character.starts_with('[') {
                self.previous_speaker = heading_speaker(&character);
                return None;
            }
            self.previous_speaker.clone_from(&character);
        }

        let text = match LineKind::of(&text) {
            LineKind::Dialogue => s!(&text[1..]),
            LineKind::Action => self.resolve_action(&character, text),
            LineKind::Continuation => self.resolve_continuation(&character, text),
        };

        Some(FinalizedLine {
            character: s!(trim_ws(&self.previous_speaker)),
            text: s!(trim_ws(&text)),
        })
    }

    fn resolve_action(&mut self, character: &str, text: String) -> String {
        // The line's own tag wins, even when empty.
        self.previous_speaker = s!(character);

        let text = if character.is_empty() {
            s!(strip_brackets(trim_ws(&text)))
        } else {
            text
        };

        let Some(colon) = text.find(':') else {
            return text;
        };
        let speaker = &text[..colon];
        if speaker == MUSIC_MARKER {
            return text;
        }
        self.previous_speaker.push_str(speaker);
        s!(&text[colon + 1..])
    }

    fn resolve_continuation(&mut self, character: &str, text: String) -> String {
        if character.is_empty() {
            return text;
        }
        match text.find(':') {
            Some(colon) => {
                self.previous_speaker.push_str(&text[..colon]);
                s!(&text[colon + 1..])
            }
            None => {
                logw!("Resolver: no ':' after speaker {character:?}: {:?}", trim_ws(&text));
                self.missing_separators.push(MissingSeparator {
                    character: s!(character),
                    text: text.clone(),
                });
                text
            }
        }
    }
}

/// Resolve one episode's raw lines with fresh state.
pub fn resolve_lines(lines: Vec<RawLine>) -> Vec<FinalizedLine> {
    AttributionResolver::new().resolve_all(lines)
}

// "[Verse 1: Twilight]" → "Twilight"; "[Pinkie Pie]" → "Pinkie Pie"
fn heading_speaker(heading: &str) -> String {
    let inner = trim_ws(heading).trim_matches(|c: char| c == '[' || c == ']');
    let singer = inner.split_once(':').map_or(inner, |(_, after)| after);
    s!(trim_ws(singer))
}

fn strip_brackets(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}
