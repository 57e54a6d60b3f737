//! Playlist input: Exportify CSV exports.
//!
//! Exportify writes one header row followed by one row per track, with the
//! track name in column 1 and the (comma-joined) artist names in column 2.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

use crate::models::TrackRef;

/// Column holding the track title
pub const TITLE_COLUMN: usize = 1;

/// Column holding the artist name(s)
pub const ARTIST_COLUMN: usize = 2;

/// Read every playlist in order and concatenate their tracks.
pub fn read_tracks<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<TrackRef>> {
    let mut tracks = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let parsed = read_playlist(file)
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
        tracing::debug!("{}: {} tracks", path.display(), parsed.len());
        tracks.extend(parsed);
    }
    Ok(tracks)
}

/// Parse one playlist. The header row is dropped.
pub fn read_playlist<R: Read>(reader: R) -> Result<Vec<TrackRef>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut tracks = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let row_number = idx + 2;
        let row = result.with_context(|| format!("Failed to read row {}", row_number))?;
        let (Some(title), Some(artist)) = (row.get(TITLE_COLUMN), row.get(ARTIST_COLUMN)) else {
            bail!(
                "Row {} has {} columns, expected at least {}",
                row_number,
                row.len(),
                ARTIST_COLUMN + 1
            );
        };
        tracks.push(TrackRef::new(artist, title));
    }
    Ok(tracks)
}
