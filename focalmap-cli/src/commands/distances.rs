//! Distances command - compute per-asset distance rows and write CSV.

use std::path::PathBuf;

use focalmap::distance::{distance_columns, DistanceContext};
use focalmap::report::write_rows_csv;
use focalmap::source::load_assets;
use focalmap::store::FocalPointStore;
use indicatif::{ProgressBar, ProgressStyle};

use super::common::{open_output, resolve_metric, resolve_path};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the distances command.
pub struct DistancesArgs {
    pub assets: PathBuf,
    pub store: Option<PathBuf>,
    pub metric: Option<String>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the distances command.
pub fn run(args: DistancesArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("distances");
    let config = runner.config();

    let metric = resolve_metric(args.metric.as_deref(), config);
    let store_path = resolve_path(args.store, &config.store.focal_points);

    let assets = load_assets(&args.assets)?;
    let collection = FocalPointStore::new(&store_path).into_collection()?;
    let columns = distance_columns(&collection);
    let mut context = DistanceContext::new(collection);

    tracing::info!(
        assets = assets.len(),
        columns = columns.len(),
        metric = %metric,
        "Computing distances"
    );

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(assets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos:>7}/{len:7} assets [{elapsed_precise}] eta {eta}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
        );
        pb
    };

    let mut rows = Vec::with_capacity(assets.len());
    for asset in &assets {
        rows.push(context.row_for_asset(asset, metric));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let writer = open_output(args.output.as_deref())?;
    write_rows_csv(writer, &columns, &rows)?;

    tracing::info!(
        rows = rows.len(),
        computations = context.computations(),
        "Distances written"
    );
    if let Some(path) = &args.output {
        eprintln!(
            "Wrote {} rows x {} columns ({}) to {}",
            rows.len(),
            columns.len(),
            metric,
            path.display()
        );
    }
    Ok(())
}
