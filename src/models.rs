//! Core data models for the lyrics batch.
//!
//! This module contains the track identities flowing into the batch, the
//! per-track lookup outcome, and the aggregated result handed to the writer.

use serde::Serialize;

// ============================================================================
// Track Identity
// ============================================================================

/// Raw (artist, title) pair as parsed from input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackRef {
    pub artist: String,
    pub title: String,
}

impl TrackRef {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Lookup key derived from a TrackRef. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedTrackRef {
    pub artist: String,
    pub title: String,
}

// ============================================================================
// Lookup Outcome
// ============================================================================

/// Result of one lyrics lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { text: String },
    NotFound,
    Instrumental,
}

impl LookupOutcome {
    pub fn found(text: impl Into<String>) -> Self {
        LookupOutcome::Found { text: text.into() }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found { .. })
    }
}

// ============================================================================
// Batch Output
// ============================================================================

/// Output record. Keeps the raw input identity, not the normalized lookup key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LyricsRecord {
    pub artist: String,
    pub title: String,
    pub lyrics: String,
}

/// Finalized batch: successful records plus counts.
/// Record order follows worker completion, not input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub records: Vec<LyricsRecord>,
    pub attempted: usize,
    pub succeeded: usize,
    pub not_found: usize,
    pub instrumental: usize,
}

impl BatchResult {
    /// Empty result for a batch of `attempted` tracks.
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            ..Self::default()
        }
    }

    /// Fold one worker report into the result.
    /// Only `Found` outcomes produce a record.
    pub fn record(&mut self, track: TrackRef, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Found { text } => {
                self.records.push(LyricsRecord {
                    artist: track.artist,
                    title: track.title,
                    lyrics: text,
                });
                self.succeeded += 1;
            }
            LookupOutcome::NotFound => self.not_found += 1,
            LookupOutcome::Instrumental => self.instrumental += 1,
        }
    }

    /// Number of reports folded in so far.
    pub fn reported(&self) -> usize {
        self.succeeded + self.not_found + self.instrumental
    }
}

// ============================================================================
// Statistics (Instrumentation)
// ============================================================================

/// Per-run statistics, written with `--stats`.
#[derive(Default, Debug, Clone, Serialize)]
pub struct BatchStats {
    pub attempted: usize,
    pub succeeded: usize,
    pub not_found: usize,
    pub instrumental: usize,
    pub elapsed_seconds: f64,
}

impl BatchStats {
    pub fn from_result(result: &BatchResult, elapsed_seconds: f64) -> Self {
        Self {
            attempted: result.attempted,
            succeeded: result.succeeded,
            not_found: result.not_found,
            instrumental: result.instrumental,
            elapsed_seconds,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            100.0 * self.succeeded as f64 / self.attempted as f64
        }
    }

    /// Log stats to stderr in JSON format
    pub fn log_phase(&self, phase: &str) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            eprintln!("[STATS:{}]\n{}", phase, json);
        }
    }

    /// Write stats to a JSON file
    pub fn write_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
