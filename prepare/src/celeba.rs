//! Fixed-count preparation of the CelebA-HQ dataset.

use crate::{common::*, config::CelebaHqConfig};

/// Number of images in the archive; indices past the range are left
/// untouched by the reindex pass.
pub const IMAGE_COUNT: usize = 30000;
/// Zero padding of the archive's 1-based file names.
const PAD_WIDTH: usize = 5;
const EXT: &str = "jpg";
/// Fixed validation size taken off the master list.
pub const VALIDATION_COUNT: usize = 2000;

const ARCHIVE_NAME: &str = "data256x256.zip";
const DATASET_NAME: &str = "celeba";
const TRAIN_MASTER: &str = "train_shuffled.flist";
const VAL_MASTER: &str = "val_shuffled.flist";

/// Run the whole CelebA-HQ pipeline.
pub fn run(config: &CelebaHqConfig, masks: &dyn MaskGenerator) -> Result<()> {
    let repo = RepoLayout::new(&config.repo_path);
    let layout = DatasetLayout::celeba_hq(&config.data_path);
    let archive = config.data_path.join(ARCHIVE_NAME);

    extract_zip(&archive, &layout.dataset_dir)?;

    let renamed = reindex_fixed(&layout.unzipped_dir, IMAGE_COUNT, PAD_WIDTH, EXT)?;
    info!(
        "reindexed {} files in {}",
        renamed,
        layout.unzipped_dir.display()
    );

    split(&repo, &layout)?;

    LocationConfig::for_roots(&repo.root, &layout.dataset_dir)
        .write(&repo.location_config(DATASET_NAME))?;

    for job in eval_mask_jobs(&repo, &layout, Some(EXT)) {
        masks.generate(&job)?;
    }

    Ok(())
}

/// Split off a fixed validation set from the reshuffled master list
/// and take the secondary master list verbatim as visual-test.
fn split(repo: &RepoLayout, layout: &DatasetLayout) -> Result<()> {
    let master = read_manifest(&repo.master_manifest(TRAIN_MASTER))?;
    let (train, validation) = fixed_count_split(master, VALIDATION_COUNT, &mut thread_rng());
    let visual_test = read_manifest(&repo.master_manifest(VAL_MASTER))?;

    write_manifest(&layout.train.manifest, &train)?;
    write_manifest(&layout.validation.manifest, &validation)?;
    write_manifest(&layout.visual_test.manifest, &visual_test)?;

    for target in [&layout.train, &layout.validation, &layout.visual_test] {
        move_listed(&target.manifest, &layout.unzipped_dir, &target.dir)?;
    }

    Ok(())
}
