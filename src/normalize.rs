//! Lookup-key normalization for raw playlist entries.
//!
//! Playlist exports annotate artists with featured collaborators
//! ("Coldplay, Jay-Z") and titles with version suffixes ("Yellow - Live").
//! Both are stripped before querying the lyrics service.

use crate::models::{NormalizedTrackRef, TrackRef};

/// Separates the primary artist from featured artists.
pub const ARTIST_SEPARATOR: char = ',';

/// Separates the title from remix/version annotations.
pub const TITLE_SEPARATOR: char = '-';

/// Primary artist: everything before the first comma.
/// e.g., "Mustard, Migos" → "Mustard", "Solo" → "Solo"
pub fn normalize_artist(artist: &str) -> String {
    split_before(artist, ARTIST_SEPARATOR).to_string()
}

/// Base title: everything before the first hyphen.
/// e.g., "Song - Remix" → "Song", "Song" → "Song"
pub fn normalize_title(title: &str) -> String {
    split_before(title, TITLE_SEPARATOR).to_string()
}

pub fn normalize_track(track: &TrackRef) -> NormalizedTrackRef {
    NormalizedTrackRef {
        artist: normalize_artist(&track.artist),
        title: normalize_title(&track.title),
    }
}

/// Text before the first `separator`, minus the whitespace left at the cut.
/// Without a separator the input is returned untouched.
fn split_before(s: &str, separator: char) -> &str {
    match s.split_once(separator) {
        Some((head, _)) => head.trim_end(),
        None => s,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_artist_basic() {
        assert_eq!(normalize_artist("A, B"), "A");
        assert_eq!(normalize_artist("A,B"), "A");
        assert_eq!(normalize_artist("Solo"), "Solo");
        assert_eq!(normalize_artist("Mustard, Migos, Nicki Minaj"), "Mustard");
    }

    #[test]
    fn test_normalize_title_basic() {
        assert_eq!(normalize_title("Song - Remix"), "Song");
        assert_eq!(normalize_title("Song-Remix"), "Song");
        assert_eq!(normalize_title("Song"), "Song");
        assert_eq!(normalize_title("Song - 2011 Remaster - Live"), "Song");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_artist(""), "");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(normalize_artist(", Someone"), "");
        assert_eq!(normalize_title("-Intro"), "");
    }

    #[test]
    fn test_whitespace_kept_outside_cut() {
        assert_eq!(normalize_artist("  Solo  "), "  Solo  ");
        assert_eq!(normalize_title("   "), "   ");
        assert_eq!(normalize_title(" Song - Remix"), " Song");
        assert_eq!(normalize_artist("  Lead ,Guest"), "  Lead");
    }

    #[test]
    fn test_normalize_track() {
        let track = TrackRef::new("Coldplay, Jay-Z", "Yellow - Live");
        let norm = normalize_track(&track);
        assert_eq!(norm.artist, "Coldplay");
        assert_eq!(norm.title, "Yellow");
    }
}
