pub mod download;
pub mod install;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::BootstrapError;

pub const MVN_VERSION: &str = "3.2.2";
pub const MVN_DIST_URL: &str =
    "https://archive.apache.org/dist/maven/maven-3/3.2.2/binaries/apache-maven-3.2.2-bin.zip";
pub const MVN_INSTALL_DIR: &str = "apache-maven-3.2.2";
pub const ARCHIVE_FILE: &str = "mvn.zip";

const SYSTEM_COMMAND: &str = "mvn";

/// Where the resolved Maven executable lives.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolchainLocation {
    /// `mvn` is on the system search path.
    System,
    /// Launcher script inside a locally extracted distribution.
    Local(PathBuf),
}

impl ToolchainLocation {
    pub fn command(&self) -> &OsStr {
        match self {
            ToolchainLocation::System => OsStr::new(SYSTEM_COMMAND),
            ToolchainLocation::Local(path) => path.as_os_str(),
        }
    }

}

/// Guarantees a runnable Maven path, preferring a system install.
///
/// On the fallback path, provisioning is idempotent: a pre-existing
/// `apache-maven-3.2.2` directory under `root` skips the download entirely.
pub fn resolve(root: &Path) -> Result<ToolchainLocation, BootstrapError> {
    if probe_system(SYSTEM_COMMAND) {
        tracing::info!("Maven found as a system utility");
        return Ok(ToolchainLocation::System);
    }

    tracing::info!("Maven isn't installed as a system utility, proceeding to a local install");
    provision(root)?;

    let script = install::script_path(root);
    tracing::info!("Maven found at {}", script.display());
    Ok(ToolchainLocation::Local(script))
}

fn probe_system(command: &str) -> bool {
    Command::new(command)
        .arg("-h")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn provision(root: &Path) -> Result<(), BootstrapError> {
    let install_dir = root.join(MVN_INSTALL_DIR);

    if install_dir.exists() {
        tracing::info!("Maven {MVN_VERSION} already extracted at {}", install_dir.display());
    } else {
        let archive = root.join(ARCHIVE_FILE);
        tracing::info!("downloading Maven {MVN_VERSION} from {MVN_DIST_URL}");
        download::download_archive(MVN_DIST_URL, &archive)?;
        tracing::info!("download completed, extracting {}", archive.display());
        install::extract_archive(&archive, root)?;
        tracing::info!("cleaning up archive after successful extraction");
        std::fs::remove_file(&archive)?;
    }

    // zip extraction does not portably preserve executable bits
    install::fix_permissions(&install::script_path(root))?;
    Ok(())
}
