//! Init command - create the configuration file.

use focalmap::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
///
/// Existing settings are kept; missing keys are filled with defaults.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();
    let existed = path.exists();

    let config = ConfigFile::load()?;
    config.save()?;

    if existed {
        println!("Updated configuration file: {}", path.display());
    } else {
        println!("Created configuration file: {}", path.display());
    }
    println!();
    println!("Input files:");
    println!("  tiles:     {}", config.inputs.tiles.display());
    println!("  districts: {}", config.inputs.districts.display());
    println!("  plazas:    {}", config.inputs.plazas.display());
    println!("Store:       {}", config.store.focal_points.display());
    println!();
    println!("CLI arguments override config file values when specified.");
    Ok(())
}
