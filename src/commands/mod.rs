mod locations;
mod tags;
mod validate;

pub use locations::{TagMatch, locations_command};
pub use tags::tags_command;
pub use validate::validate_command;

use anyhow::Result;
use miette::Report;
use std::path::Path;

use carebase::dataset::{Dataset, DatasetLoader};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load the dataset, printing a full diagnostic when it is unusable
fn load_dataset(data_path: &Path) -> Result<Dataset> {
    match DatasetLoader::new(data_path).load() {
        Ok(dataset) => Ok(dataset),
        Err(error) => {
            eprintln!("{:?}", Report::new(error));
            anyhow::bail!("Failed to load dataset {data_path:?} (see detailed errors above)")
        }
    }
}
