//! Common imports from external crates.

pub use anyhow::{ensure, Context, Result};
pub use itertools::{iproduct, Itertools};
pub use rand::{prelude::*, rngs::StdRng, seq::SliceRandom};
pub use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    process::Command,
};
pub use tracing::{debug, info, warn};
pub use walkdir::WalkDir;
pub use zip::ZipArchive;
