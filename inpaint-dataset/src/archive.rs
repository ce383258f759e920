//! Zip archive extraction.

use crate::common::*;

/// Extract all entries of a zip archive into `dest`.
///
/// The destination directory is created if absent. Extraction is
/// all-or-nothing: a failure mid-way leaves whatever was already
/// written on disk and no cleanup is attempted.
pub fn extract_zip(archive_file: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create directory '{}'", dest.display()))?;

    let file = File::open(archive_file)
        .with_context(|| format!("failed to open archive '{}'", archive_file.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read archive '{}'", archive_file.display()))?;
    let num_entries = archive.len();

    archive.extract(dest).with_context(|| {
        format!(
            "failed to extract '{}' to '{}'",
            archive_file.display(),
            dest.display()
        )
    })?;
    info!(
        "extracted {} entries from {} to {}",
        num_entries,
        archive_file.display(),
        dest.display()
    );

    Ok(num_entries)
}
