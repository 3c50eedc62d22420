use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("toolchain download failed: {0}")]
    Download(String),

    #[error("archive extraction failed: {0}")]
    Extract(#[from] zip::result::ZipError),

    #[error("descriptor fetch failed: {0}")]
    DescriptorFetch(String),

    #[error("couldn't find descriptor at {}", .0.display())]
    DescriptorMissing(PathBuf),

    #[error("build failed: {0}")]
    BuildFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
