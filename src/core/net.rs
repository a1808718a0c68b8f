// src/core/net.rs
// Page fetching. Everything above this layer talks to `PageSource`, so the
// scraper runs the same against the live wiki or an in-memory page set.

use std::{thread, time::{Duration, Instant}};

use reqwest::blocking::Client;

use crate::config::consts::{RETRIES, RETRY_PAUSE_MS, TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub trait PageSource: Send + Sync {
    /// Fetch the page at `path` (site-relative or absolute URL) as text.
    fn get(&self, path: &str) -> Result<String>;
}

/// Blocking HTTP(S) source rooted at the wiki's base URL.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Http { url: s!(base_url), source })?;

        Ok(Self { client, base_url: s!(base_url.trim_end_matches('/')) })
    }

    pub fn url_for(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }

    fn fetch_once(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Http { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| Error::Http { url: s!(url), source })
    }
}

impl PageSource for HttpSource {
    fn get(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        let t = Instant::now();
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.fetch_once(&url) {
                Ok(body) => {
                    logd!("Net: GET {url} in {:?} ({} bytes)", t.elapsed(), body.len());
                    return Ok(body);
                }
                Err(e) if attempt < RETRIES && is_retryable(&e) => {
                    logw!("Net: {e} (attempt {attempt}/{RETRIES}), retrying");
                    thread::sleep(Duration::from_millis(RETRY_PAUSE_MS * u64::from(attempt)));
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Join a site-relative path onto `base`; absolute URLs pass through.
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return s!(path);
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        join!(base, path)
    } else {
        join!(base, "/", path)
    }
}

fn is_retryable(e: &Error) -> bool {
    match e {
        Error::Http { .. } => true,
        Error::Status { status, .. } => *status >= 500,
        _ => false,
    }
}
