//! Dataset preparation pipelines for inpainting training.
//!
//! Each pipeline runs five strictly sequential stages: extract,
//! reindex, split, write the location config, generate evaluation
//! masks. Every stage is fail-fast and nothing is rolled back on
//! failure, so a partial run leaves moved files on disk and re-running
//! over that state is not idempotent; start over from a fresh data
//! directory instead.

pub mod celeba;
pub mod common;
pub mod config;
pub mod generic;
