// src/data.rs
//
// The output document: season number → episode key → lines.
//
// Keys are kept in ordered maps so the written JSON is stable from run to run,
// whatever order the workers finished in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transcript::FinalizedLine;

/// Episode key (name or number) → that episode's lines, in order.
pub type Season = BTreeMap<String, Vec<FinalizedLine>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcripts {
    seasons: BTreeMap<u32, Season>,
}

impl Transcripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_season(&mut self, number: u32, season: Season) {
        self.seasons.insert(number, season);
    }

    pub fn season(&self, number: u32) -> Option<&Season> {
        self.seasons.get(&number)
    }

    pub fn seasons(&self) -> impl Iterator<Item = (u32, &Season)> {
        self.seasons.iter().map(|(n, s)| (*n, s))
    }

    pub fn episode(&self, season: u32, key: &str) -> Option<&[FinalizedLine]> {
        self.season(season)?.get(key).map(Vec::as_slice)
    }

    pub fn episode_count(&self) -> usize {
        self.seasons.values().map(BTreeMap::len).sum()
    }

    pub fn line_count(&self) -> usize {
        self.seasons.values().flat_map(|s| s.values()).map(Vec::len).sum()
    }
}
