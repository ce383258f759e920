//! Line-delimited file manifests.

use crate::common::*;

/// Write one filename per line.
///
/// No quoting or escaping is applied; filenames containing newlines
/// are not supported. An existing manifest at `path` is overwritten.
pub fn write_manifest(path: &Path, names: &[String]) -> Result<()> {
    let mut text = String::new();
    for name in names {
        text.push_str(name);
        text.push('\n');
    }
    fs::write(path, text)
        .with_context(|| format!("failed to write manifest '{}'", path.display()))?;
    Ok(())
}

/// Read a manifest back, one filename per line.
///
/// Trailing whitespace is stripped from each line and empty lines are
/// dropped, so a round trip through [`write_manifest`] yields the
/// original list in order.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest '{}'", path.display()))?;
    let names = text
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    Ok(names)
}

/// Move every file listed in `manifest` from `src_dir` into `dst_dir`.
///
/// The destination directory is created if absent. The manifest is
/// read back from disk rather than taken in memory, so the files moved
/// are exactly the ones recorded. A listed file missing from `src_dir`
/// aborts the move immediately; files moved up to that point stay
/// where they landed.
pub fn move_listed(manifest: &Path, src_dir: &Path, dst_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dst_dir)
        .with_context(|| format!("failed to create directory '{}'", dst_dir.display()))?;

    let names = read_manifest(manifest)?;
    for name in &names {
        let src = src_dir.join(name);
        let dst = dst_dir.join(name);
        fs::rename(&src, &dst).with_context(|| {
            format!("failed to move '{}' to '{}'", src.display(), dst.display())
        })?;
    }

    info!("moved {} files to {}", names.len(), dst_dir.display());
    Ok(names.len())
}
