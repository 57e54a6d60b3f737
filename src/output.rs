//! Output: JSON dump of the fetched records and the run summary.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::{BatchResult, LyricsRecord};

/// One-line run summary.
pub fn summary_line(result: &BatchResult) -> String {
    format!(
        "downloaded lyrics for {} out of {} tracks",
        result.succeeded, result.attempted
    )
}

/// Write records as a JSON array.
///
/// With a path the array is written compactly to that file; without one it
/// is pretty-printed to stdout.
pub fn write_records(records: &[LyricsRecord], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_compact(records, BufWriter::new(file))
                .with_context(|| format!("Failed to write output file: {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            write_pretty(records, stdout.lock()).context("Failed to write records to stdout")
        }
    }
}

fn write_compact<W: Write>(records: &[LyricsRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn write_pretty<W: Write>(records: &[LyricsRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(artist: &str, title: &str, lyrics: &str) -> LyricsRecord {
        LyricsRecord {
            artist: artist.to_string(),
            title: title.to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn test_summary_line() {
        let result = BatchResult {
            attempted: 12,
            succeeded: 9,
            ..BatchResult::default()
        };
        assert_eq!(summary_line(&result), "downloaded lyrics for 9 out of 12 tracks");
    }

    #[test]
    fn test_write_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyrics.json");
        let records = vec![record("Coldplay, Jay-Z", "Yellow - Live", "la la la")];

        write_records(&records, Some(path.as_path())).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"[{"artist":"Coldplay, Jay-Z","title":"Yellow - Live","lyrics":"la la la"}]"#
        );
    }

    #[test]
    fn test_empty_records_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_records(&[], Some(path.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_output_indents_two_spaces() {
        let mut buf = Vec::new();
        write_pretty(&[record("A", "T", "L")], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("[\n  {\n    \"artist\": \"A\""), "{text}");
        assert!(text.ends_with("]\n"));
    }
}
