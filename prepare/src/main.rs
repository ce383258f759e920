use anyhow::Result;
use clap::Parser;
use inpaint_dataset::{layout::RepoLayout, mask::ScriptMaskGenerator};
use prepare::config::{CelebaHqConfig, GenericConfig};
use std::{env, path::PathBuf};
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

/// Prepare image datasets for inpainting training.
#[derive(Debug, Clone, Parser)]
enum Opts {
    /// Prepare the CelebA-HQ dataset.
    CelebaHq {
        /// path to the root of the training repo
        #[clap(long, default_value = ".")]
        repo_path: PathBuf,
        /// folder where the dataset zip is managed
        #[clap(long, default_value = ".")]
        data_path: PathBuf,
    },
    /// Prepare an arbitrary zipped dataset.
    Generic {
        /// folder where the dataset is managed
        data_path: PathBuf,
        /// the zip archive of source images
        zip_path: PathBuf,
        /// size of images running against, e.g. 256
        image_size: usize,
        /// path to the root of the training repo
        #[clap(long, default_value = ".")]
        repo_path: PathBuf,
    },
}

fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match Opts::parse() {
        Opts::CelebaHq {
            repo_path,
            data_path,
        } => {
            let masks = ScriptMaskGenerator::new(&RepoLayout::new(&repo_path));
            prepare::celeba::run(
                &CelebaHqConfig {
                    repo_path,
                    data_path,
                },
                &masks,
            )?;
        }
        Opts::Generic {
            data_path,
            zip_path,
            image_size,
            repo_path,
        } => {
            let masks = ScriptMaskGenerator::new(&RepoLayout::new(&repo_path));
            prepare::generic::run(
                &GenericConfig {
                    repo_path,
                    data_path,
                    zip_path,
                    image_size,
                },
                &masks,
            )?;
        }
    }

    Ok(())
}
