use std::path::Path;

use anyhow::{Context, Result};

use crate::model::ReportRow;
use crate::util::canonicalize_lossy;

/// Write the report to `path`, replacing any previous file in one pass.
///
/// Failing to create the file is fatal: the error carries the resolved path
/// so the operator can see where the write was attempted. Cell values pass
/// through the csv writer untouched, so embedded newlines in content cells
/// come back intact on re-read.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
  println!("Writing the CSV report based on the fetched tickets.");

  if path.exists() {
    std::fs::remove_file(path).with_context(|| format!("removing previous report at {}", canonicalize_lossy(path)))?;
  }

  let mut writer =
    csv::Writer::from_path(path).with_context(|| format!("creating report file at {}", canonicalize_lossy(path)))?;

  for row in rows {
    writer.write_record(row.cells()).context("writing report row")?;
  }

  writer.flush().context("flushing report file")?;

  Ok(())
}
