//! Pipeline configuration.

use crate::common::*;

/// Options of the CelebA-HQ preparation pipeline.
#[derive(Debug, Clone)]
pub struct CelebaHqConfig {
    /// Root of the training repository.
    pub repo_path: PathBuf,
    /// Directory holding the dataset archive.
    pub data_path: PathBuf,
}

/// Options of the generic preparation pipeline.
#[derive(Debug, Clone)]
pub struct GenericConfig {
    /// Root of the training repository.
    pub repo_path: PathBuf,
    /// Directory the dataset is prepared under.
    pub data_path: PathBuf,
    /// The zip archive of source images.
    pub zip_path: PathBuf,
    /// Image edge size used in the produced directory names.
    pub image_size: usize,
}
