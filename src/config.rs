use std::path::Path;

use serde::Deserialize;

use crate::error::BootstrapError;

#[derive(Debug, Deserialize)]
struct RawConfig {
    pom: PomSection,
    mvn: MvnSection,
}

#[derive(Debug, Deserialize)]
struct PomSection {
    url: String,
}

#[derive(Debug, Deserialize)]
struct MvnSection {
    args: Vec<String>,
}

/// Run configuration, read once at startup and passed into each stage.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub pom_url: String,
    pub mvn_args: Vec<String>,
}

impl BootstrapConfig {
    pub fn load(path: &Path) -> Result<Self, BootstrapError> {
        let file = std::fs::File::open(path)?;
        let raw: RawConfig = serde_yaml::from_reader(file)?;
        Ok(Self {
            pom_url: raw.pom.url,
            mvn_args: raw.mvn.args,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostOs {
    Unix,
    Windows,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }

    /// Name of the Maven launcher script inside the distribution's bin/.
    pub fn mvn_script(&self) -> &'static str {
        match self {
            HostOs::Unix => "mvn",
            HostOs::Windows => "mvn.bat",
        }
    }
}
