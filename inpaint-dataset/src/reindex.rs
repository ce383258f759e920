//! File renaming passes that normalize dataset naming.

use crate::common::*;

/// Outcome of a flatten pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenSummary {
    /// Number of files renamed into the root.
    pub files: usize,
    /// Extension of the last file seen, without the leading dot.
    pub extension: Option<String>,
}

/// Rename 1-based zero-padded indices to plain 0-based indices.
///
/// For every index in `0..count`, a file named by the 1-based index
/// zero-padded to `pad_width` digits is renamed to the plain 0-based
/// index with the same extension. Indices with no matching file are
/// skipped; sparse and partial ranges are valid inputs. Returns the
/// number of files renamed, which makes a second run over the same
/// directory a no-op returning zero.
pub fn reindex_fixed(dir: &Path, count: usize, pad_width: usize, ext: &str) -> Result<usize> {
    let mut renamed = 0;

    for index in 0..count {
        let padded = dir.join(format!("{:0width$}.{}", index + 1, ext, width = pad_width));
        if !padded.exists() {
            continue;
        }
        let plain = dir.join(format!("{}.{}", index, ext));
        fs::rename(&padded, &plain).with_context(|| {
            format!(
                "failed to rename '{}' to '{}'",
                padded.display(),
                plain.display()
            )
        })?;
        renamed += 1;
    }

    debug!("renamed {} files in {}", renamed, dir.display());
    Ok(renamed)
}

/// Flatten a directory tree into its root, renaming files to
/// sequential indices.
///
/// Files are ordered by their relative path before indices are
/// assigned, so the result does not depend on the platform's directory
/// walk order. A file keeps its extension; one without any gets the
/// bare index. Subdirectories left empty by the moves are removed
/// afterwards. The recorded extension is the last one seen; the
/// dataset is assumed to use a single file type throughout, and a
/// mixed-extension tree records only the last.
pub fn flatten_and_reindex(root: &Path) -> Result<FlattenSummary> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_ok(|entry| entry.file_type().is_file())
        .map_ok(|entry| entry.into_path())
        .try_collect()
        .with_context(|| format!("failed to walk directory '{}'", root.display()))?;
    files.sort();

    if files.is_empty() {
        warn!("no files found in {}", root.display());
    }

    let mut extension = None;
    for (index, path) in files.iter().enumerate() {
        let target = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => {
                extension = Some(ext.to_owned());
                root.join(format!("{}.{}", index, ext))
            }
            None => root.join(index.to_string()),
        };
        fs::rename(path, &target).with_context(|| {
            format!(
                "failed to move '{}' to '{}'",
                path.display(),
                target.display()
            )
        })?;
    }

    remove_empty_dirs(root)?;

    Ok(FlattenSummary {
        files: files.len(),
        extension,
    })
}

/// Remove the subdirectories of `root`, deepest first. All of them are
/// expected to be empty once the flatten pass has moved their files.
fn remove_empty_dirs(root: &Path) -> Result<()> {
    let dirs: Vec<PathBuf> = WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_ok(|entry| entry.file_type().is_dir())
        .map_ok(|entry| entry.into_path())
        .try_collect()
        .with_context(|| format!("failed to walk directory '{}'", root.display()))?;

    for dir in dirs {
        if dir != root {
            fs::remove_dir(&dir)
                .with_context(|| format!("failed to remove directory '{}'", dir.display()))?;
        }
    }

    Ok(())
}
