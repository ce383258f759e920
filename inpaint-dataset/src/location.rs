//! Location config consumed by the training system.

use crate::common::*;

/// The dataset-location record, four fixed path keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationConfig {
    pub data_root_dir: PathBuf,
    pub out_root_dir: PathBuf,
    pub tb_dir: PathBuf,
    pub pretrained_models: PathBuf,
}

impl LocationConfig {
    /// Derive the standard layout from a repository root and a dataset
    /// directory.
    pub fn for_roots(repo_root: &Path, dataset_dir: &Path) -> Self {
        Self {
            data_root_dir: dataset_dir.to_owned(),
            out_root_dir: repo_root.join("experiments"),
            tb_dir: repo_root.join("tb_logs"),
            pretrained_models: repo_root.to_owned(),
        }
    }

    /// Write the record as `key: value` lines under the group header,
    /// overwriting any existing file at `path`.
    ///
    /// The parent directory must already exist; a missing parent
    /// surfaces as the underlying write error.
    pub fn write(&self, path: &Path) -> Result<()> {
        let Self {
            data_root_dir,
            out_root_dir,
            tb_dir,
            pretrained_models,
        } = self;

        let text = format!(
            "# @package _group_\n\
             data_root_dir: {}/\n\
             out_root_dir: {}/\n\
             tb_dir: {}/\n\
             pretrained_models: {}/\n",
            data_root_dir.display(),
            out_root_dir.display(),
            tb_dir.display(),
            pretrained_models.display(),
        );
        fs::write(path, text)
            .with_context(|| format!("failed to write location config '{}'", path.display()))?;

        info!("wrote location config {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_four_keys_with_trailing_slashes() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("celeba.yaml");

        LocationConfig::for_roots(Path::new("/r"), Path::new("/d")).write(&path)?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "# @package _group_\n\
             data_root_dir: /d/\n\
             out_root_dir: /r/experiments/\n\
             tb_dir: /r/tb_logs/\n\
             pretrained_models: /r/\n"
        );
        Ok(())
    }

    #[test]
    fn overwrites_an_existing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("celeba.yaml");
        fs::write(&path, "stale")?;

        LocationConfig::for_roots(Path::new("/r"), Path::new("/d")).write(&path)?;

        assert!(fs::read_to_string(&path)?.starts_with("# @package _group_\n"));
        Ok(())
    }

    #[test]
    fn missing_parent_directory_is_fatal() {
        let config = LocationConfig::for_roots(Path::new("/r"), Path::new("/d"));
        let result = config.write(Path::new("/nonexistent-parent-dir/celeba.yaml"));
        assert!(result.is_err());
    }
}
