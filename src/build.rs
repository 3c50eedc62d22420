use std::path::Path;
use std::process::Command;

use crate::descriptor::DESCRIPTOR_FILE;
use crate::error::BootstrapError;
use crate::toolchain::ToolchainLocation;

/// Runs the resolved Maven against the fetched descriptor in `root`.
///
/// Maven picks up `pom.xml` from its working directory, so the descriptor is
/// never passed as an explicit argument. Output streams are inherited.
pub fn execute(
    location: &ToolchainLocation,
    args: &[String],
    root: &Path,
) -> Result<(), BootstrapError> {
    let descriptor = root.join(DESCRIPTOR_FILE);
    if !descriptor.exists() {
        return Err(BootstrapError::DescriptorMissing(descriptor));
    }

    tracing::info!("executing {DESCRIPTOR_FILE} with args {args:?}");

    let status = Command::new(location.command())
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| BootstrapError::BuildFailed(format!("failed to run mvn: {e}")))?;

    if !status.success() {
        return Err(BootstrapError::BuildFailed(format!("mvn exited with {status}")));
    }

    tracing::info!("{DESCRIPTOR_FILE} execution completed");
    Ok(())
}
