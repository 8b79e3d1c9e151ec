//! Loading the folder collection from a YAML dataset file.

mod dataset;

pub use dataset::{Dataset, DatasetError};
