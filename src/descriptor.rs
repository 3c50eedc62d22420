use std::path::Path;

use crate::error::BootstrapError;

pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Fetches the build descriptor from `url` into `dest`, overwriting any
/// existing file. The body is fully received before `dest` is touched, so a
/// failed fetch never creates or truncates the descriptor.
pub fn fetch(url: &str, dest: &Path) -> Result<(), BootstrapError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| BootstrapError::DescriptorFetch(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| BootstrapError::DescriptorFetch(format!("bad response: {e}")))?;

    let body = response
        .bytes()
        .map_err(|e| BootstrapError::DescriptorFetch(format!("transfer failed: {e}")))?;

    std::fs::write(dest, &body)?;
    tracing::info!("{DESCRIPTOR_FILE} download completed");
    Ok(())
}
