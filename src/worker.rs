//! Single-track lookup: normalize, query, report.

use std::panic::{self, AssertUnwindSafe};

use crate::lookup::LyricsLookup;
use crate::models::{LookupOutcome, TrackRef};
use crate::normalize::normalize_track;

/// Resolves one track against a shared lookup client.
pub struct Worker<'a, L: ?Sized> {
    client: &'a L,
}

impl<'a, L: LyricsLookup + ?Sized> Worker<'a, L> {
    pub fn new(client: &'a L) -> Self {
        Self { client }
    }

    /// Look up one track and hand back the original TrackRef with its outcome.
    ///
    /// Never fails: service errors and panics inside the client both become
    /// `NotFound`. Diagnostics name the normalized artist/title.
    pub fn run(&self, track: TrackRef) -> (TrackRef, LookupOutcome) {
        let key = normalize_track(&track);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.client.lookup(&key.artist, &key.title)
        }));

        let outcome = match result {
            Ok(Ok(LookupOutcome::NotFound)) => {
                tracing::warn!("ERROR: {} - {} has no lyrics", key.artist, key.title);
                LookupOutcome::NotFound
            }
            Ok(Ok(LookupOutcome::Instrumental)) => {
                tracing::info!("{} - {} is instrumental", key.artist, key.title);
                LookupOutcome::Instrumental
            }
            Ok(Ok(found)) => found,
            Ok(Err(err)) => {
                tracing::error!("ERROR: {} - {} lookup failed: {}", key.artist, key.title, err);
                LookupOutcome::NotFound
            }
            Err(payload) => {
                tracing::error!(
                    "ERROR: {} - {} lookup panicked: {}",
                    key.artist,
                    key.title,
                    panic_message(payload.as_ref())
                );
                LookupOutcome::NotFound
            }
        };

        (track, outcome)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
