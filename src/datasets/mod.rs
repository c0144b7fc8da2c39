pub mod delimited;
pub mod error;
pub mod loader;
pub mod resource;
pub mod table;

pub use error::DatasetError;
pub use loader::DataLoader;
pub use table::Table;

#[derive(Debug, Clone, PartialEq)]
/// A dataset that can be requested by name from the command line.
pub enum Dataset {
    /// SNOTEL stations reporting snow water equivalent.
    SweStations,
    Unknown(String),
}

impl Dataset {
    /// Every dataset the tool can produce.
    pub const KNOWN: [Dataset; 1] = [Dataset::SweStations];

    pub fn from_name(name: &str) -> Self {
        match name {
            "swe_stations" => Dataset::SweStations,
            _ => Dataset::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Dataset::SweStations => "swe_stations",
            Dataset::Unknown(name) => name,
        }
    }

    /// Loads the dataset, or `None` when the name is not a known dataset.
    pub fn load(&self, loader: &DataLoader) -> Option<Result<Table, DatasetError>> {
        match self {
            Dataset::SweStations => Some(loader.swe_station()),
            Dataset::Unknown(_) => None,
        }
    }
}
