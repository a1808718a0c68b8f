// src/progress.rs
/// Lightweight progress reporting used by the scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called when a season's episode list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One episode fetched and parsed.
    fn item_done(&mut self, _season: u32, _episode: &str) {}

    /// One episode skipped after an error (details go to the log).
    fn item_failed(&mut self, _season: u32, _episode: &str) {}

    /// Called at the end of each season, successful or not.
    fn finish(&mut self) {}
}
