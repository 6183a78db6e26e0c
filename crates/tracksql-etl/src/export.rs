use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracksql_core::sql::{insert_statement, CREATE_SONG_TABLE};
use tracksql_core::Track;

use crate::error::{ExportError, ExportResult};

/// Counts reported after a script has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Statements written, the schema statement included.
    pub statements: usize,
    /// Insert statements written, one per track.
    pub records: usize,
}

/// Write the schema statement followed by one insert per track, in order.
///
/// Every statement is terminated by a newline. The writer is flushed before
/// returning.
pub fn write_script<W: Write>(tracks: &[Track], mut out: W) -> ExportResult<ExportSummary> {
    writeln!(out, "{}", CREATE_SONG_TABLE)?;
    let mut summary = ExportSummary {
        statements: 1,
        records: 0,
    };

    for track in tracks {
        writeln!(out, "{}", insert_statement(track))?;
        summary.statements += 1;
        summary.records += 1;
    }

    out.flush()?;
    Ok(summary)
}

/// Create (or truncate) `path` and write the script for `tracks` into it.
pub fn export_to_path(tracks: &[Track], path: impl AsRef<Path>) -> ExportResult<ExportSummary> {
    let path = path.as_ref();
    log::info!("Writing {} tracks to {}", tracks.len(), path.display());

    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let summary = write_script(tracks, BufWriter::new(file)).map_err(|e| match e {
        ExportError::Io(source) => write_error(source),
        other => other,
    })?;

    log::info!(
        "Wrote {} statements ({} inserts)",
        summary.statements,
        summary.records
    );
    Ok(summary)
}
