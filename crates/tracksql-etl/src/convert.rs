use std::path::Path;

use crate::config::Config;
use crate::error::ExportResult;
use crate::export::{export_to_path, ExportSummary};
use crate::load::load_tracks;

/// Convert a library export at `input` into a SQL script at `output`.
///
/// The input is loaded in full before the output is opened, so a bad input
/// leaves any existing output file untouched.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> ExportResult<ExportSummary> {
    let tracks = load_tracks(input, &config.tracks_key)?;
    export_to_path(&tracks, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_failed_load_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Library.xml");
        let output = temp_dir.path().join("out.sql");
        fs::write(&input, "not a property list").unwrap();
        fs::write(&output, "previous").unwrap();

        let err = convert(&input, &output, &Config::default()).unwrap_err();
        assert!(matches!(err, ExportError::Parse { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.sql");

        let err = convert(temp_dir.path().join("absent.xml"), &output, &Config::default())
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(!output.exists());
    }
}
