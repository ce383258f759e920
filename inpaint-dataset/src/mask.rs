//! Invocation of the external mask-generation job.

use crate::{
    common::*,
    layout::{DatasetLayout, RepoLayout, EVAL_SPLITS, MASK_KINDS},
};

/// One mask-generation job handed to the external collaborator.
///
/// Built fresh per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskJob {
    /// Mask-style config file.
    pub config: PathBuf,
    /// Directory of source images.
    pub input_dir: PathBuf,
    /// Directory receiving the generated masks.
    pub output_dir: PathBuf,
    /// Worker count; `0` leaves the choice to the collaborator.
    pub n_jobs: usize,
    /// Image file extension, without the leading dot.
    pub ext: Option<String>,
}

/// The seam to the mask-generation collaborator.
pub trait MaskGenerator {
    fn generate(&self, job: &MaskJob) -> Result<()>;
}

/// Runs the repository's `gen_mask_dataset` entry point as a
/// synchronous subprocess, one job at a time.
#[derive(Debug, Clone)]
pub struct ScriptMaskGenerator {
    python: PathBuf,
    script: PathBuf,
}

impl ScriptMaskGenerator {
    pub fn new(repo: &RepoLayout) -> Self {
        Self {
            python: PathBuf::from("python3"),
            script: repo.mask_script(),
        }
    }

    /// Override the interpreter the script is run with.
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = python.into();
        self
    }
}

impl MaskGenerator for ScriptMaskGenerator {
    fn generate(&self, job: &MaskJob) -> Result<()> {
        info!(
            "generating masks for {} into {}",
            job.input_dir.display(),
            job.output_dir.display()
        );

        let mut command = Command::new(&self.python);
        command
            .arg(&self.script)
            .arg(&job.config)
            .arg(&job.input_dir)
            .arg(&job.output_dir);
        if job.n_jobs > 0 {
            command.arg("--n-jobs").arg(job.n_jobs.to_string());
        }
        if let Some(ext) = &job.ext {
            command.arg("--ext").arg(ext);
        }

        let status = command.status().with_context(|| {
            format!(
                "failed to run mask generation script '{}'",
                self.script.display()
            )
        })?;
        ensure!(
            status.success(),
            "mask generation failed for config '{}' with {}",
            job.config.display(),
            status
        );

        Ok(())
    }
}

/// Plan the six evaluation mask jobs,
/// `{validation, visual-test} x {thick, thin, medium}`.
///
/// Output directories are pairwise distinct and disjoint from the
/// split source directories.
pub fn eval_mask_jobs(repo: &RepoLayout, layout: &DatasetLayout, ext: Option<&str>) -> Vec<MaskJob> {
    iproduct!(EVAL_SPLITS, MASK_KINDS)
        .map(|(split, kind)| MaskJob {
            config: repo.mask_config(kind, layout.image_size),
            input_dir: layout.split_source(split).to_owned(),
            output_dir: layout.mask_output(split, kind),
            n_jobs: 0,
            ext: ext.map(ToOwned::to_owned),
        })
        .collect_vec()
}
