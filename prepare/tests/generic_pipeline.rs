use anyhow::Result;
use inpaint_dataset::{
    manifest::read_manifest,
    mask::{MaskGenerator, MaskJob},
};
use prepare::config::GenericConfig;
use std::{fs, io::Write, path::Path, sync::Mutex};
use tempfile::TempDir;
use zip::write::FileOptions;

#[derive(Debug, Default)]
struct RecordingMaskGenerator {
    jobs: Mutex<Vec<MaskJob>>,
}

impl MaskGenerator for RecordingMaskGenerator {
    fn generate(&self, job: &MaskJob) -> Result<()> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }
}

/// A zip of `count` images, half of them nested one directory down to
/// exercise the flatten pass.
fn write_fixture_zip(path: &Path, count: usize) -> Result<()> {
    let mut writer = zip::ZipWriter::new(fs::File::create(path)?);
    for index in 0..count {
        let name = if index % 2 == 0 {
            format!("images/{:03}.png", index)
        } else {
            format!("{:03}.png", index)
        };
        writer.start_file(name, FileOptions::default())?;
        writer.write_all(b"png")?;
    }
    writer.finish()?;
    Ok(())
}

fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = vec![];
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().into_string().unwrap());
    }
    names.sort();
    Ok(names)
}

#[test]
fn percentage_pipeline_moves_every_file() -> Result<()> {
    let workspace = TempDir::new()?;
    let repo_path = workspace.path().join("repo");
    let data_path = workspace.path().join("data");
    fs::create_dir_all(repo_path.join("configs/training/location"))?;
    fs::create_dir_all(&data_path)?;

    let zip_path = data_path.join("scenes.zip");
    write_fixture_zip(&zip_path, 100)?;

    let masks = RecordingMaskGenerator::default();
    prepare::generic::run(
        &GenericConfig {
            repo_path: repo_path.clone(),
            data_path: data_path.clone(),
            zip_path,
            image_size: 256,
        },
        &masks,
    )?;

    let dataset_dir = data_path.join("scenes");
    assert_eq!(file_names(&dataset_dir.join("train"))?.len(), 85);
    assert_eq!(file_names(&dataset_dir.join("val_source_256"))?.len(), 10);
    assert_eq!(
        file_names(&dataset_dir.join("visual_test_source_256"))?.len(),
        5
    );
    assert!(file_names(&dataset_dir.join("scenes-unzipped"))?.is_empty());

    // each manifest names exactly the files moved into its directory
    for (manifest, dir) in [
        ("train_shuffled.flist", "train"),
        ("val_shuffled.flist", "val_source_256"),
        ("visual_test_shuffled.flist", "visual_test_source_256"),
    ] {
        let mut listed = read_manifest(&dataset_dir.join(manifest))?;
        listed.sort();
        assert_eq!(listed, file_names(&dataset_dir.join(dir))?);
    }

    let location = fs::read_to_string(repo_path.join("configs/training/location/scenes.yaml"))?;
    assert!(location.starts_with("# @package _group_\n"));
    assert!(location.contains(&format!("data_root_dir: {}/\n", dataset_dir.display())));

    let jobs = masks.jobs.lock().unwrap();
    assert_eq!(jobs.len(), 6);
    let expected_outputs = [
        dataset_dir.join("val/random_thick_256"),
        dataset_dir.join("val/random_thin_256"),
        dataset_dir.join("val/random_medium_256"),
        dataset_dir.join("visual_test/random_thick_256"),
        dataset_dir.join("visual_test/random_thin_256"),
        dataset_dir.join("visual_test/random_medium_256"),
    ];
    for (job, expected) in jobs.iter().zip(&expected_outputs) {
        assert_eq!(&job.output_dir, expected);
        assert_eq!(
            job.config,
            repo_path
                .join("configs/data_gen")
                .join(format!("{}.yaml", expected.file_name().unwrap().to_str().unwrap()))
        );
        assert_eq!(job.ext.as_deref(), Some("png"));
        assert_eq!(job.n_jobs, 0);
    }

    Ok(())
}

#[test]
fn missing_archive_aborts_before_any_stage() -> Result<()> {
    let workspace = TempDir::new()?;
    let repo_path = workspace.path().join("repo");
    let data_path = workspace.path().join("data");
    fs::create_dir_all(&data_path)?;

    let masks = RecordingMaskGenerator::default();
    let result = prepare::generic::run(
        &GenericConfig {
            repo_path,
            data_path: data_path.clone(),
            zip_path: data_path.join("absent.zip"),
            image_size: 256,
        },
        &masks,
    );

    assert!(result.is_err());
    assert!(masks.jobs.lock().unwrap().is_empty());
    Ok(())
}
