use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APPLICATION: &str = "bitgrid";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "Solarized Dark".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APPLICATION)
}

/// Where the log file goes. `None` when the platform has no home directory.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("bitgrid.log"))
}

impl SystemConfig {
    pub fn load() -> Self {
        if let Some(proj_dirs) = project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists()
                && let Ok(data) = std::fs::read_to_string(&config_path)
            {
                match Self::from_json(&data) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(proj_dirs) = project_dirs() {
            let config_dir = proj_dirs.config_dir();
            std::fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let data = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, data)?;
            log::info!("saved config to {}", config_path.display());
        }
        Ok(())
    }
}
