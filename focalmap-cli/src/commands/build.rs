//! Build command - group map tiles into focal points and persist them.

use std::path::PathBuf;

use focalmap::focal::{build_focal_points, BuildSummary};
use focalmap::source::{load_district_definitions, load_plaza_names, load_tiles};
use focalmap::store::FocalPointStore;

use super::common::resolve_path;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the build command.
pub struct BuildArgs {
    pub tiles: Option<PathBuf>,
    pub districts: Option<PathBuf>,
    pub plazas: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Run the build command.
pub fn run(args: BuildArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("build");
    let config = runner.config();

    let tiles_path = resolve_path(args.tiles, &config.inputs.tiles);
    let districts_path = resolve_path(args.districts, &config.inputs.districts);
    let plazas_path = resolve_path(args.plazas, &config.inputs.plazas);
    let output = resolve_path(args.output, &config.store.focal_points);

    let tiles = load_tiles(&tiles_path)?;
    let districts = load_district_definitions(&districts_path)?;
    let plazas = load_plaza_names(&plazas_path)?;

    let (collection, summary) = build_focal_points(&tiles, &districts, &plazas)?;

    let mut store = FocalPointStore::new(&output);
    store.save(collection)?;

    print_summary(&summary);
    println!();
    println!("Wrote focal points to {}", output.display());
    Ok(())
}

fn print_summary(summary: &BuildSummary) {
    println!("Focal points");
    println!(
        "  Plazas:    {:>5} groups, {:>6} parcels",
        summary.plazas, summary.plaza_parcels
    );
    println!(
        "  Roads:     {:>5} groups, {:>6} parcels",
        summary.roads, summary.road_parcels
    );
    println!(
        "  Districts: {:>5} groups, {:>6} parcels",
        summary.districts, summary.district_parcels
    );

    if summary.reserved_districts > 0 {
        println!(
            "  Skipped {} district definitions with a reserved category",
            summary.reserved_districts
        );
    }
    if summary.unmapped_districts > 0 {
        println!(
            "  {} districts have an unrecognized category (UNMAPPED)",
            summary.unmapped_districts
        );
    }
    if summary.unlisted_plaza_regions > 0 {
        println!(
            "  Dropped {} plaza regions missing from the plaza name lookup",
            summary.unlisted_plaza_regions
        );
    }
    if summary.plazas_without_tiles > 0 {
        println!(
            "  Skipped {} plaza name entries without tiles",
            summary.plazas_without_tiles
        );
    }
    if summary.column_collisions > 0 {
        println!(
            "  {} district columns collide with plaza or road columns (see log)",
            summary.column_collisions
        );
    }
    if summary.unassigned_tiles > 0 {
        println!(
            "  Dropped {} focal tiles without a region id",
            summary.unassigned_tiles
        );
    }
}
