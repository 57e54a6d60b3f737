//! Safety utilities to prevent clobbering input files.
//!
//! The JSON dump overwrites its destination unconditionally, so the path is
//! checked against the playlists being read before anything is written.

use anyhow::{bail, Result};
use std::path::Path;

/// Extension the output file must carry.
pub const OUTPUT_EXTENSION: &str = "json";

/// Validates that an output path is safe to overwrite.
///
/// Checks:
/// - Output filename must end in `.json`
/// - Output cannot be the same as any of the input playlists
///
/// # Arguments
/// * `output` - The output path that will be created/overwritten
/// * `inputs` - Input CSV paths that must not match the output
pub fn validate_output_path<P: AsRef<Path>>(output: &Path, inputs: &[P]) -> Result<()> {
    let extension = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !extension.eq_ignore_ascii_case(OUTPUT_EXTENSION) {
        bail!(
            "Safety check failed: output file '{}' must have a .{} extension",
            output.display(),
            OUTPUT_EXTENSION
        );
    }

    for input in inputs {
        let input = input.as_ref();
        if output == input || same_file(output, input) {
            bail!(
                "Safety check failed: output '{}' cannot be the same as input '{}'",
                output.display(),
                input.display()
            );
        }
    }

    Ok(())
}

/// Compare canonical paths when both exist.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_output() {
        let output = PathBuf::from("/tmp/lyrics.json");
        let input = PathBuf::from("/data/playlist.csv");
        assert!(validate_output_path(&output, &[&input]).is_ok());
    }

    #[test]
    fn test_uppercase_extension() {
        let output = PathBuf::from("/tmp/LYRICS.JSON");
        assert!(validate_output_path::<PathBuf>(&output, &[]).is_ok());
    }

    #[test]
    fn test_missing_extension() {
        let output = PathBuf::from("/tmp/lyrics");
        let result = validate_output_path::<PathBuf>(&output, &[]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must have a .json extension"));
    }

    #[test]
    fn test_output_equals_input() {
        let path = PathBuf::from("/data/playlist.json");
        let result = validate_output_path(&path, &[&path]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be the same as input"));
    }

    #[test]
    fn test_output_aliases_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("playlist.json");
        std::fs::write(&input, "Track URI,Track Name,Artist Name(s)\n").unwrap();
        let alias = dir.path().join(".").join("playlist.json");
        assert!(validate_output_path(&alias, &[&input]).is_err());
    }
}
