//! Columns command - print the distance column dictionary.

use std::path::PathBuf;

use focalmap::distance::distance_columns;
use focalmap::report::write_columns_csv;
use focalmap::store::FocalPointStore;

use super::common::{open_output, resolve_path};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the columns command.
pub fn run(store: Option<PathBuf>, output: Option<PathBuf>) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("columns");
    let store_path = resolve_path(store, &runner.config().store.focal_points);

    let store = FocalPointStore::new(&store_path);
    let columns = distance_columns(store.load()?);

    let writer = open_output(output.as_deref())?;
    write_columns_csv(writer, &columns)?;
    Ok(())
}
