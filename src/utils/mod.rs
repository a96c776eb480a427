//! Utility modules: build info and persistence.

pub mod build_info;
pub mod persistence;

pub use build_info::{version_line, BUILD_COMMIT, BUILD_DATE};
