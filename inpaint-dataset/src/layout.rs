//! Filesystem layout shared by the preparation pipelines.
//!
//! Downstream tooling depends on these exact directory and file names;
//! nothing here may change without changing the training side as well.

use crate::common::*;

/// Mask style used for evaluation mask generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    Thick,
    Thin,
    Medium,
}

/// All mask styles, in generation order.
pub const MASK_KINDS: [MaskKind; 3] = [MaskKind::Thick, MaskKind::Thin, MaskKind::Medium];

impl MaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskKind::Thick => "thick",
            MaskKind::Thin => "thin",
            MaskKind::Medium => "medium",
        }
    }

    /// Shared stem of the style config and the mask output directory,
    /// `random_<kind>_<size>`.
    pub fn schema_name(&self, image_size: usize) -> String {
        format!("random_{}_{}", self.as_str(), image_size)
    }
}

/// The two splits that receive evaluation masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalSplit {
    Validation,
    VisualTest,
}

/// Both evaluation splits, in generation order.
pub const EVAL_SPLITS: [EvalSplit; 2] = [EvalSplit::Validation, EvalSplit::VisualTest];

/// Fixed relative paths under the repository root.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    pub root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location config consumed by the training system.
    pub fn location_config(&self, dataset_name: &str) -> PathBuf {
        self.root
            .join("configs/training/location")
            .join(format!("{}.yaml", dataset_name))
    }

    /// Mask-style config for one kind and image size.
    pub fn mask_config(&self, kind: MaskKind, image_size: usize) -> PathBuf {
        self.root
            .join("configs/data_gen")
            .join(format!("{}.yaml", kind.schema_name(image_size)))
    }

    /// The external mask-generation entry point.
    pub fn mask_script(&self) -> PathBuf {
        self.root.join("bin/gen_mask_dataset.py")
    }

    /// A pre-shuffled master manifest shipped with the repository.
    pub fn master_manifest(&self, file_name: &str) -> PathBuf {
        self.root.join("fetch_data").join(file_name)
    }
}

/// A split's manifest file and destination directory.
#[derive(Debug, Clone)]
pub struct SplitTarget {
    pub manifest: PathBuf,
    pub dir: PathBuf,
}

/// The produced dataset directory schema.
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    /// Root of the produced dataset.
    pub dataset_dir: PathBuf,
    /// Directory holding the extracted, reindexed images.
    pub unzipped_dir: PathBuf,
    pub train: SplitTarget,
    pub validation: SplitTarget,
    pub visual_test: SplitTarget,
    /// Root of the validation mask outputs.
    pub val_mask_root: PathBuf,
    /// Root of the visual-test mask outputs.
    pub visual_test_mask_root: PathBuf,
    /// Image edge size used in the directory names.
    pub image_size: usize,
}

impl DatasetLayout {
    /// The CelebA-HQ layout under `data_dir`.
    pub fn celeba_hq(data_dir: &Path) -> Self {
        let dataset_dir = data_dir.join("celeba-hq-dataset");
        Self {
            unzipped_dir: dataset_dir.join("data256x256"),
            train: SplitTarget {
                manifest: dataset_dir.join("train_shuffled.flist"),
                dir: dataset_dir.join("train_256"),
            },
            validation: SplitTarget {
                manifest: dataset_dir.join("val_shuffled.flist"),
                dir: dataset_dir.join("val_source_256"),
            },
            visual_test: SplitTarget {
                manifest: dataset_dir.join("visual_test_shuffled.flist"),
                dir: dataset_dir.join("visual_test_source_256"),
            },
            val_mask_root: dataset_dir.join("val_256"),
            visual_test_mask_root: dataset_dir.join("visual_test_256"),
            image_size: 256,
            dataset_dir,
        }
    }

    /// The layout of a dataset named after its zip archive.
    pub fn generic(data_dir: &Path, dataset_name: &str, image_size: usize) -> Self {
        let dataset_dir = data_dir.join(dataset_name);
        Self {
            unzipped_dir: dataset_dir.join(format!("{}-unzipped", dataset_name)),
            train: SplitTarget {
                manifest: dataset_dir.join("train_shuffled.flist"),
                dir: dataset_dir.join("train"),
            },
            validation: SplitTarget {
                manifest: dataset_dir.join("val_shuffled.flist"),
                dir: dataset_dir.join(format!("val_source_{}", image_size)),
            },
            visual_test: SplitTarget {
                manifest: dataset_dir.join("visual_test_shuffled.flist"),
                dir: dataset_dir.join(format!("visual_test_source_{}", image_size)),
            },
            val_mask_root: dataset_dir.join("val"),
            visual_test_mask_root: dataset_dir.join("visual_test"),
            image_size,
            dataset_dir,
        }
    }

    /// Source image directory of an evaluation split.
    pub fn split_source(&self, split: EvalSplit) -> &Path {
        match split {
            EvalSplit::Validation => &self.validation.dir,
            EvalSplit::VisualTest => &self.visual_test.dir,
        }
    }

    /// Mask output directory for one evaluation split and kind.
    pub fn mask_output(&self, split: EvalSplit, kind: MaskKind) -> PathBuf {
        let root = match split {
            EvalSplit::Validation => &self.val_mask_root,
            EvalSplit::VisualTest => &self.visual_test_mask_root,
        };
        root.join(kind.schema_name(self.image_size))
    }
}
