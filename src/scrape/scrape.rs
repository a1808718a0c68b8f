// src/scrape/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::consts::JITTER_MS,
    config::options::{ EpisodeKey, ScrapeOptions },

    core::net::PageSource,
    data::{ Season, Transcripts },
    error::{ Error, Result },
    progress::Progress,
    specs::{ episode, season, transcript },
    transcript::{ Episode, FinalizedLine },
};

/// Scrape every season in range into one document.
/// A season whose index can't be fetched is kept as an empty season. An
/// episode whose transcript fails is kept with no lines; one whose number
/// can't be looked up has no key and is left out. Only bad options fail the run.
pub fn collect(
    source: Arc<dyn PageSource>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Transcripts> {
    opts.seasons.validate()?;

    let mut out = Transcripts::new();
    for number in opts.seasons.seasons() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing Season {number}"));
        }
        logf!("Scrape: Begin season={number} key={:?}", opts.key);

        let episodes = match season::fetch(source.as_ref(), number) {
            Ok(v) => v,
            Err(e) => {
                loge!("Scrape: Season {number} index: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Season {number}: could not load episode list"));
                }
                out.insert_season(number, Season::new());
                continue;
            }
        };

        let parsed = collect_season(
            &source,
            number,
            episodes,
            opts,
            progress.as_deref_mut().map(|p| p as &mut dyn Progress),
        );
        logf!("Scrape: Season {number} done, {} episodes", parsed.len());
        out.insert_season(number, parsed);
    }
    Ok(out)
}

/// Fetch and parse one season's episodes on a small worker pool.
/// Each episode gets its own extractor/resolver state inside its worker;
/// results are merged here once complete.
pub fn collect_season(
    source: &Arc<dyn PageSource>,
    number: u32,
    episodes: Vec<Episode>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Season {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(episodes.len());
    }

    // Concurrency
    type FetchOk = (usize, String, Vec<FinalizedLine>);
    type FetchErr = (usize, Option<String>, Error); // key, if it resolved

    let episodes = Arc::new(episodes);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<std::result::Result<FetchOk, FetchErr>>();

    let workers = opts.workers.min(episodes.len()).max(1);

    // Spawn workers

    for _ in 0..workers {
        let episodes = Arc::clone(&episodes);
        let idx = Arc::clone(&counter);
        let source = Arc::clone(source);
        let tx = res_tx.clone();
        let key = opts.key;
        let pause_ms = opts.pause_ms;

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some(ep) = episodes.get(i) else { break };

                    let result = match process_episode(source.as_ref(), ep, key) {
                        Ok((k, lines)) => Ok((i, k, lines)),
                        Err((k, e)) => Err((i, k, e)),
                    };
                    if tx.send(result).is_err() {
                        break;
                    }
                    if pause_ms > 0 {
                        let jitter = (i as u64 * 17) % JITTER_MS;
                        thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                    }
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results; the loop ends once every worker has hung up
    let mut parsed: Vec<FetchOk> = Vec::with_capacity(episodes.len());

    for msg in res_rx {
        match msg {
            Ok((i, k, lines)) => {
                let name = &episodes[i].name;
                logd!("Scrape: {number}/{name} → {} lines", lines.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(number, name);
                }
                parsed.push((i, k, lines));
            }
            Err((i, k, e)) => {
                let name = &episodes[i].name;
                loge!("Scrape: {number}/{name}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(number, name);
                }
                if let Some(k) = k {
                    parsed.push((i, k, Vec::new()));
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Page order, so a repeated key resolves the same way every run
    parsed.sort_by_key(|(i, _, _)| *i);
    let mut season = Season::new();
    for (i, k, lines) in parsed {
        if season.insert(k.clone(), lines).is_some() {
            logw!(
                "Scrape: Season {number} has more than one episode keyed {k:?}; keeping {}",
                episodes[i].name
            );
        }
    }
    season
}

fn process_episode(
    source: &dyn PageSource,
    ep: &Episode,
    key: EpisodeKey,
) -> std::result::Result<(String, Vec<FinalizedLine>), (Option<String>, Error)> {
    let k = match key {
        EpisodeKey::Name => ep.name.clone(),
        EpisodeKey::Number => match episode::fetch_number(source, ep) {
            Ok(n) => n.to_string(),
            Err(e) => return Err((None, e)),
        },
    };
    match transcript::fetch(source, ep) {
        Ok(lines) => Ok((k, lines)),
        Err(e) => Err((Some(k), e)),
    }
}
