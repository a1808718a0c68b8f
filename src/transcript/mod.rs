// src/transcript/mod.rs
// Transcript core: raw tokens → RawLine (extract) → FinalizedLine (resolve).

pub mod extract;
pub mod resolve;
pub mod types;

pub use extract::{extract_lines, LineExtractor};
pub use resolve::{resolve_lines, AttributionResolver, LineKind, MissingSeparator};
pub use types::{Episode, Extraction, FinalizedLine, RawLine, Termination};
