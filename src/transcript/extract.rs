// src/transcript/extract.rs
//! Line extractor.
//!
//! Runs over the tokens of one transcript-line container (`<dd>…</dd>`), starting
//! just after its opening tag, and stops just after the matching close.
//!
//! The wiki writes one spoken line per `<dd>`. Songs nest a `<dl>` inside the
//! line, one `<dd>` per lyric, so a container can yield several lines. A line is
//! the text accumulated since the last container boundary, however many text
//! tokens it arrived in. A `<b>` at the very start of a line holds the
//! speaker; bold anywhere else is plain formatting.

use std::iter::Peekable;
use std::mem::take;

use super::types::{Extraction, RawLine, Termination};
use crate::config::consts::{BOLD_TAG, LINE_TAG};
use crate::core::html::Token;

/// State for one container. Build a fresh one per container.
#[derive(Debug)]
pub struct LineExtractor {
    depth: usize,
    text: String,
    character: String,
    lines: Vec<RawLine>,
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineExtractor {
    pub fn new() -> Self {
        Self { depth: 1, text: s!(), character: s!(), lines: Vec::new() }
    }

    pub fn run<I>(mut self, tokens: &mut Peekable<I>) -> Extraction
    where
        I: Iterator<Item = Token>,
    {
        while let Some(tok) = tokens.next() {
            match tok {
                Token::Start(tag) if tag.is(LINE_TAG) => {
                    // nested lyric line: close off whatever came before it
                    self.flush();
                    self.depth += 1;
                }
                Token::Start(tag) if tag.is(BOLD_TAG) && self.text.is_empty() => {
                    if let Some(Token::Text(name)) =
                        tokens.next_if(|t| matches!(t, Token::Text(_)))
                    {
                        self.character = name;
                    }
                }
                Token::Text(t) => self.text.push_str(&t),
                Token::End(name) if name == LINE_TAG => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        self.flush();
                        return self.finish(Termination::Closed);
                    }
                }
                _ => {}
            }
        }

        // Out of tokens with the container still open.
        self.flush();
        self.finish(Termination::EndOfInput)
    }

    fn flush(&mut self) {
        if self.text.is_empty() {
            self.character.clear();
            return;
        }
        self.lines.push(RawLine { character: take(&mut self.character), text: take(&mut self.text) });
    }

    fn finish(self, termination: Termination) -> Extraction {
        Extraction { lines: self.lines, depth: self.depth, termination }
    }
}

/// Extract one container with fresh state.
pub fn extract_lines<I>(tokens: &mut Peekable<I>) -> Extraction
where
    I: Iterator<Item = Token>,
{
    LineExtractor::new().run(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::Tokens;

    // `html` starts just after an opening <dd>.
    fn run(html: &str) -> (Extraction, Vec<Token>) {
        let mut tokens = Tokens::new(html).peekable();
        let ex = extract_lines(&mut tokens);
        (ex, tokens.collect())
    }

    #[test]
    fn bold_speaker_and_text() {
        let (ex, rest) = run("<b>Twilight Sparkle</b>: Spike, take a letter.</dd>");
        assert!(ex.is_closed());
        assert_eq!(ex.depth, 0);
        assert_eq!(ex.lines, vec![RawLine::new("Twilight Sparkle", ": Spike, take a letter.")]);
        assert!(rest.is_empty());
    }

    #[test]
    fn stops_right_after_matching_close() {
        let (ex, rest) = run("<b>Spike</b>: Okay!</dd><dd><b>Twilight</b>: Thanks.</dd>");
        assert_eq!(ex.lines.len(), 1);
        assert!(rest[0].is_start("dd"));
    }

    #[test]
    fn inline_formatting_joins_text_runs() {
        let (ex, _) = run("<b>Rarity</b>: It's <i>so</i> <b>divine</b>!</dd>");
        assert_eq!(ex.lines, vec![RawLine::new("Rarity", ": It's so divine!")]);
    }

    #[test]
    fn bold_after_text_is_formatting() {
        let (ex, _) = run("[Applejack <b>bucks</b> the tree]</dd>");
        assert_eq!(ex.lines, vec![RawLine::new("", "[Applejack bucks the tree]")]);
    }

    #[test]
    fn bold_without_text_is_not_a_speaker() {
        let (ex, _) = run("<b><i>Pinkie Pie</i></b>: Surprise!</dd>");
        assert_eq!(ex.lines, vec![RawLine::new("", "Pinkie Pie: Surprise!")]);
    }

    #[test]
    fn nested_lyrics_emit_one_line_per_transition() {
        let html = "<b>[Verse 1: Twilight]</b>\n<dl><dd>Lyric one</dd><dd>Lyric two\
                    <dl><dd>Echo</dd></dl></dd></dl></dd>after";
        let (ex, rest) = run(html);
        assert!(ex.is_closed());
        assert_eq!(ex.depth, 0);
        assert_eq!(
            ex.lines,
            vec![
                RawLine::new("[Verse 1: Twilight]", "\n"),
                RawLine::new("", "Lyric one"),
                RawLine::new("", "Lyric two"),
                RawLine::new("", "Echo"),
            ]
        );
        assert_eq!(rest, vec![Token::Text(s!("after"))]);
    }

    #[test]
    fn empty_segments_are_not_emitted() {
        let (ex, _) = run("<b>Ghost</b><dl><dd>Lyric</dd></dl></dd>");
        // the bold tag never got text of its own, so it is dropped with the segment
        assert_eq!(ex.lines, vec![RawLine::new("", "Lyric")]);
    }

    #[test]
    fn end_of_input_keeps_partial_line() {
        let (ex, _) = run("<b>Spike</b>: wait for m");
        assert_eq!(ex.termination, Termination::EndOfInput);
        assert_eq!(ex.depth, 1);
        assert_eq!(ex.lines, vec![RawLine::new("Spike", ": wait for m")]);
    }

    #[test]
    fn empty_input_is_end_of_input() {
        let (ex, _) = run("");
        assert_eq!(ex.termination, Termination::EndOfInput);
        assert!(ex.lines.is_empty());
    }
}
