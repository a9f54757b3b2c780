//! Sonnet acquisition: fetch the corpus from PoetryDB, cache the raw JSON on
//! disk, and turn records into engine documents.

use anyhow::{bail, Context, Result};
use engine::Document;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

const POETRYDB_URL: &str = "https://poetrydb.org/author,title/Shakespeare;Sonnet";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One record as PoetryDB returns it. The author and linecount fields are
/// not needed and left out.
#[derive(Debug, Deserialize)]
pub struct RawSonnet {
    pub title: String,
    pub lines: Vec<String>,
}

/// Load the sonnets from `cache_path`, fetching from PoetryDB and writing the
/// cache on a miss. A cache file that exists but does not parse is an error;
/// the loader never refetches over a corrupt file.
pub fn load_sonnets(cache_path: &Path) -> Result<Vec<Document>> {
    let raw = if cache_path.exists() {
        let body = fs::read_to_string(cache_path)
            .with_context(|| format!("reading sonnet cache {}", cache_path.display()))?;
        let raw = parse_records(&body)
            .with_context(|| format!("sonnet cache {} is not valid", cache_path.display()))?;
        info!(count = raw.len(), path = %cache_path.display(), "loaded sonnets from cache");
        raw
    } else {
        let body = fetch_body()?;
        let raw = parse_records(&body).context("PoetryDB response is not valid")?;
        if let Some(dir) = cache_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating cache directory {}", dir.display()))?;
            }
        }
        fs::write(cache_path, &body)
            .with_context(|| format!("writing sonnet cache {}", cache_path.display()))?;
        info!(count = raw.len(), path = %cache_path.display(), "downloaded sonnets from PoetryDB");
        raw
    };

    raw.into_iter()
        .map(|r| Document::new(r.title, r.lines).map_err(anyhow::Error::from))
        .collect()
}

fn parse_records(body: &str) -> Result<Vec<RawSonnet>> {
    let raw: Vec<RawSonnet> = serde_json::from_str(body)?;
    if raw.is_empty() {
        bail!("sonnet set is empty");
    }
    Ok(raw)
}

fn fetch_body() -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("building HTTP client")?;
    let resp = client.get(POETRYDB_URL).send().context("requesting PoetryDB")?;
    if !resp.status().is_success() {
        bail!("PoetryDB request failed with HTTP status {}", resp.status());
    }
    resp.text().context("reading PoetryDB response body")
}
