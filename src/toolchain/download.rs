use std::path::Path;

use crate::error::BootstrapError;

/// Downloads the distribution archive to `dest`.
///
/// The body is staged under `<dest>.part` and renamed once fully received,
/// so `dest` never holds a partial archive after a crash or network failure.
pub fn download_archive(url: &str, dest: &Path) -> Result<(), BootstrapError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| BootstrapError::Download(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| BootstrapError::Download(format!("bad response: {e}")))?;

    let body = response
        .bytes()
        .map_err(|e| BootstrapError::Download(format!("transfer failed: {e}")))?;

    let staging = staging_path(dest);
    std::fs::write(&staging, &body)?;
    std::fs::rename(&staging, dest)?;
    Ok(())
}

fn staging_path(dest: &Path) -> std::path::PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".part");
    std::path::PathBuf::from(name)
}
