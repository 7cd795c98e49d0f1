//! Inspect command - summarize a focal point store.

use std::path::PathBuf;

use console::style;
use focalmap::focal::{FocalPointCollection, FocalPointGroup, FocalPointKind};
use focalmap::store::FocalPointStore;

use super::common::{resolve_path, KindArg};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the inspect command.
pub fn run(store: Option<PathBuf>, kind: Option<KindArg>) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("inspect");
    let store_path = resolve_path(store, &runner.config().store.focal_points);

    let store = FocalPointStore::new(&store_path);
    let collection = store.load()?;

    println!(
        "{} {}",
        style("Focal point store").bold(),
        style(store_path.display()).dim()
    );
    println!();
    print_totals(collection);

    if let Some(kind) = kind {
        println!();
        print_groups(collection, kind.into());
    }
    Ok(())
}

fn print_totals(collection: &FocalPointCollection) {
    for kind in FocalPointKind::ALL {
        println!(
            "  {:<10} {:>5} groups {:>7} parcels",
            style(kind.name()).cyan(),
            collection.groups(kind).len(),
            collection.parcel_count(kind)
        );
    }

    let categories = collection.district_categories();
    if !categories.is_empty() {
        let codes: Vec<&str> = categories.iter().map(|c| c.code()).collect();
        println!("  {:<10} {}", style("categories").cyan(), codes.join(", "));
    }

    let empty = FocalPointKind::ALL
        .iter()
        .flat_map(|kind| collection.groups(*kind).values())
        .filter(|g| g.is_empty())
        .count();
    if empty > 0 {
        println!(
            "  {}",
            style(format!("{} groups have no parcels (distance 0)", empty)).yellow()
        );
    }
}

fn print_groups(collection: &FocalPointCollection, kind: FocalPointKind) {
    println!("{}", style(format!("[{}]", kind)).bold());
    for (key, group) in collection.groups(kind) {
        println!("  {}", describe_group(key, group));
    }
}

fn describe_group(key: &str, group: &FocalPointGroup) -> String {
    let mut line = format!(
        "{:<20} {:<12} {:>6}  {}",
        key, group.id, group.parcel_count, group.name
    );
    if let Some(category) = group.category {
        line.push_str(&format!(" ({})", category));
    }
    line
}
