//! Repository adapters for persistence layer

use frete_domain::DriverDirectory;
use frete_infra::persistence::FileFreightRepository;
use frete_infra::roster_loader::load_roster_file;
use frete_types::Result;

use crate::config::Config;

/// Open the file-based record list
pub fn open_freight_repo(config: &Config) -> Result<FileFreightRepository> {
    FileFreightRepository::open(config.store_dir()?)
}

/// Configured roster file, or the built-in directory
pub fn open_driver_directory(config: &Config) -> Result<DriverDirectory> {
    match config.roster_path {
        Some(ref path) => load_roster_file(path),
        None => Ok(DriverDirectory::builtin().clone()),
    }
}
