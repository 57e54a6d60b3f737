//! Lyrics lookup against an LRCLIB-compatible search API.
//!
//! `LyricsLookup` is the only boundary to the external service. Each call
//! issues exactly one request; there is no retry.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::LookupOutcome;

/// Public LRCLIB instance.
pub const DEFAULT_ENDPOINT: &str = "https://lrclib.net";

/// Lyrics bodies the service returns for tracks without vocals.
pub const INSTRUMENTAL_SENTINELS: [&str; 2] = ["Instrumental", "[ INSTRUMENTAL ]"];

const USER_AGENT: &str = concat!("lyrics-fetch/", env!("CARGO_PKG_VERSION"));

/// Failure talking to the lookup service.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Capability: given a normalized (artist, title), resolve lyrics.
pub trait LyricsLookup: Send + Sync {
    fn lookup(&self, artist: &str, title: &str) -> Result<LookupOutcome, LookupError>;
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Clone, Debug)]
pub struct LookupConfig {
    pub endpoint: String,
    /// Bound on establishing the connection alone.
    pub connect_timeout: Duration,
    /// Bound on the whole request: connect, send and read.
    pub request_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
        }
    }
}

// ============================================================================
// LRCLIB Client
// ============================================================================

/// One entry of the `/api/search` response array.
/// Only the fields that decide the outcome are decoded.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LrclibRecord {
    #[serde(default)]
    pub instrumental: bool,
    #[serde(default)]
    pub plain_lyrics: Option<String>,
    #[serde(default)]
    pub synced_lyrics: Option<String>,
}

impl LrclibRecord {
    /// Plain lyrics, falling back to the synced (LRC) body.
    fn text(&self) -> Option<&str> {
        self.plain_lyrics
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.synced_lyrics.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// Blocking LRCLIB client backed by `ureq`.
/// Shared by all workers; `ureq::Agent` is internally reference-counted.
pub struct LrclibClient {
    http_client: ureq::Agent,
    endpoint: String,
}

impl LrclibClient {
    pub fn new(config: &LookupConfig) -> Self {
        let http_client = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            http_client,
            endpoint: config.endpoint.trim().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/api/search", self.endpoint)
    }

    fn search(&self, artist: &str, title: &str) -> Result<Vec<LrclibRecord>, LookupError> {
        let response = match self
            .http_client
            .get(&self.search_url())
            .query("artist_name", artist)
            .query("track_name", title)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Ok(Vec::new()),
            Err(ureq::Error::Status(code, _)) => return Err(LookupError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                return Err(LookupError::Transport(transport.to_string()))
            }
        };

        response
            .into_json()
            .map_err(|err| LookupError::Decode(err.to_string()))
    }
}

impl LyricsLookup for LrclibClient {
    fn lookup(&self, artist: &str, title: &str) -> Result<LookupOutcome, LookupError> {
        let records = self.search(artist, title)?;
        Ok(classify_records(&records))
    }
}

/// Outcome for a search response. The first record is the service's best match.
pub fn classify_records(records: &[LrclibRecord]) -> LookupOutcome {
    let Some(best) = records.first() else {
        return LookupOutcome::NotFound;
    };
    if best.instrumental {
        return LookupOutcome::Instrumental;
    }
    match best.text() {
        Some(text) => classify_text(text),
        None => LookupOutcome::NotFound,
    }
}

/// Outcome for a decoded lyrics body.
pub fn classify_text(text: &str) -> LookupOutcome {
    if INSTRUMENTAL_SENTINELS.contains(&text) {
        LookupOutcome::Instrumental
    } else {
        LookupOutcome::found(text)
    }
}
