//! Where dataset resources come from.

use std::{fs, path::PathBuf};

use super::DatasetError;

/// Filename of the bundled SNOTEL station list.
pub const STATION_TRIPLETS: &str = "station_triplets.csv";

/// Resources compiled into the binary, keyed by filename.
const BUNDLED: &[(&str, &[u8])] = &[(
    STATION_TRIPLETS,
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/station_triplets.csv")),
)];

/// A store of named resource files.
pub trait ResourceSource: Send + Sync {
    /// Returns the raw contents of the resource called `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>, DatasetError>;
}

/// Resources shipped inside the executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bundled;

impl ResourceSource for Bundled {
    fn read(&self, name: &str) -> Result<Vec<u8>, DatasetError> {
        BUNDLED
            .iter()
            .find(|(file_name, _)| *file_name == name)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| DatasetError::resource_not_found(name))
    }
}

/// Resources read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DataDir(pub PathBuf);

impl ResourceSource for DataDir {
    fn read(&self, name: &str) -> Result<Vec<u8>, DatasetError> {
        fs::read(self.0.join(name)).map_err(|e| DatasetError::io(name, e))
    }
}
