//! Common imports from external crates.

pub use anyhow::{format_err, Context, Result};
pub use inpaint_dataset::{
    archive::extract_zip,
    layout::{DatasetLayout, RepoLayout},
    location::LocationConfig,
    manifest::{move_listed, read_manifest, write_manifest},
    mask::{eval_mask_jobs, MaskGenerator},
    reindex::{flatten_and_reindex, reindex_fixed},
    split::{fixed_count_split, percentage_split, SplitLists},
};
pub use itertools::Itertools;
pub use rand::prelude::*;
pub use std::{
    fs,
    path::{Path, PathBuf},
};
pub use tracing::info;
