use std::path::{Path, PathBuf};

use crate::config::HostOs;
use crate::error::BootstrapError;

use super::MVN_INSTALL_DIR;

/// Unpacks the full distribution archive into `dest`. The archive carries
/// its own `apache-maven-<version>/` top-level directory.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), BootstrapError> {
    let file = std::fs::File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(dest)?;
    Ok(())
}

/// Path of the Maven launcher script inside the local install under `root`.
pub fn script_path(root: &Path) -> PathBuf {
    root.join(MVN_INSTALL_DIR)
        .join("bin")
        .join(HostOs::current().mvn_script())
}

/// Forces the launcher executable. Applied on every resolution, even for a
/// previously extracted install.
pub fn fix_permissions(script: &Path) -> Result<(), BootstrapError> {
    tracing::info!("updating script permissions for {}", script.display());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o777))?;
    }
    #[cfg(not(unix))]
    {
        // extraction preserves nothing to fix on Windows; just check presence
        std::fs::metadata(script)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    fn write_distribution_zip(archive: &Path) {
        let file = std::fs::File::create(archive).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer
            .add_directory(format!("{MVN_INSTALL_DIR}/bin/"), options)
            .unwrap();
        writer
            .start_file(format!("{MVN_INSTALL_DIR}/bin/mvn"), options)
            .unwrap();
        writer.write_all(b"#!/bin/sh\necho maven\n").unwrap();
        writer
            .start_file(format!("{MVN_INSTALL_DIR}/bin/mvn.bat"), options)
            .unwrap();
        writer.write_all(b"@echo maven\r\n").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn extracts_distribution_layout() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("mvn.zip");
        write_distribution_zip(&archive);

        extract_archive(&archive, dir.path()).unwrap();

        assert!(script_path(dir.path()).exists());
    }

    #[test]
    fn extract_fails_for_garbage_archive() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("mvn.zip");
        std::fs::write(&archive, b"this is not a zip").unwrap();

        let result = extract_archive(&archive, dir.path());
        assert!(matches!(result, Err(BootstrapError::Extract(_))));
    }

    #[cfg(unix)]
    #[test]
    fn fix_permissions_sets_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("mvn");
        std::fs::write(&script, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

        fix_permissions(&script).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o777);
    }

    #[test]
    fn fix_permissions_fails_for_missing_script() {
        let dir = tempdir().unwrap();
        assert!(fix_permissions(&dir.path().join("mvn")).is_err());
    }
}
