// src/transcript/types.rs
use serde::{Deserialize, Serialize};

/// One line as the markup delivered it. `character` is only set when a
/// bold marker opened the line; the speaker may still sit inside `text`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLine {
    pub character: String,
    pub text: String,
}

impl RawLine {
    pub fn new(character: impl Into<String>, text: impl Into<String>) -> Self {
        Self { character: character.into(), text: text.into() }
    }
}

/// A line with its speaker resolved; both fields trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedLine {
    pub character: String,
    pub text: String,
}

impl FinalizedLine {
    pub fn new(character: impl Into<String>, text: impl Into<String>) -> Self {
        Self { character: character.into(), text: text.into() }
    }
}

impl From<FinalizedLine> for RawLine {
    fn from(line: FinalizedLine) -> Self {
        RawLine { character: line.character, text: line.text }
    }
}

/// A transcript page listed on a season index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Episode {
    pub name: String,
    /// Site-relative, e.g. `/wiki/Transcripts/Winter_Wrap_Up`
    pub url: String,
}

impl Episode {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The matching close brought depth back to 0.
    Closed,
    /// Input ran out first; lines are partial.
    EndOfInput,
}

/// Result of running the line extractor over one container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub lines: Vec<RawLine>,
    pub depth: usize,
    pub termination: Termination,
}

impl Extraction {
    pub fn is_closed(&self) -> bool {
        self.termination == Termination::Closed
    }
}
