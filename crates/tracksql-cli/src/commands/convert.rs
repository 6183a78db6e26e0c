use anyhow::{Context, Result};
use std::path::PathBuf;
use tracksql_etl::Config;

pub fn run_convert(input: PathBuf, output: PathBuf, config: &Config) -> Result<()> {
    log::info!(
        "Converting {} into {}",
        input.display(),
        output.display()
    );

    let summary = tracksql_etl::convert(&input, &output, config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            input.display(),
            output.display()
        )
    })?;

    log::info!(
        "Conversion complete: {} tracks, {} statements",
        summary.records,
        summary.statements
    );
    Ok(())
}
