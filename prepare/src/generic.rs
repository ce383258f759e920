//! Percentage-split preparation of an arbitrary zipped dataset.

use crate::{common::*, config::GenericConfig};

/// Run the whole generic pipeline.
pub fn run(config: &GenericConfig, masks: &dyn MaskGenerator) -> Result<()> {
    let dataset_name = dataset_name(&config.zip_path)?;
    let repo = RepoLayout::new(&config.repo_path);
    let layout = DatasetLayout::generic(&config.data_path, &dataset_name, config.image_size);

    extract_zip(&config.zip_path, &layout.unzipped_dir)?;

    let summary = flatten_and_reindex(&layout.unzipped_dir)?;
    info!(
        "flattened {} files in {}",
        summary.files,
        layout.unzipped_dir.display()
    );

    split(&layout)?;

    LocationConfig::for_roots(&repo.root, &layout.dataset_dir)
        .write(&repo.location_config(&dataset_name))?;

    for job in eval_mask_jobs(&repo, &layout, summary.extension.as_deref()) {
        masks.generate(&job)?;
    }

    Ok(())
}

/// The dataset is named after its archive's file stem.
fn dataset_name(zip_path: &Path) -> Result<String> {
    let name = zip_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid archive name '{}'", zip_path.display()))?;
    Ok(name.to_owned())
}

/// Shuffle the reindexed files and split them 85/10/5.
fn split(layout: &DatasetLayout) -> Result<()> {
    let files = list_files(&layout.unzipped_dir)?;
    let SplitLists {
        train,
        validation,
        visual_test,
    } = percentage_split(files, &mut thread_rng());

    write_manifest(&layout.train.manifest, &train)?;
    write_manifest(&layout.validation.manifest, &validation)?;
    write_manifest(&layout.visual_test.manifest, &visual_test)?;

    for target in [&layout.train, &layout.validation, &layout.visual_test] {
        move_listed(&target.manifest, &layout.unzipped_dir, &target.dir)?;
    }

    Ok(())
}

/// List the flat unzipped directory, sorted by name for a stable
/// pre-shuffle order.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("failed to list directory '{}'", dir.display()))?
        .map(|entry| -> Result<_> {
            let entry = entry?;
            entry
                .file_name()
                .into_string()
                .map_err(|name| format_err!("non-UTF-8 file name {:?}", name))
        })
        .try_collect()?;
    names.sort();
    Ok(names)
}
