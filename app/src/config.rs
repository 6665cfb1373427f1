use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const MAX_RECENT_PROJECTS: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    Dark,
    Light,
    #[default]
    Mocha,
    Latte,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeType,
    pub game_executable: Option<PathBuf>,
    pub game_arguments: Vec<String>,
    pub recent_projects: Vec<PathBuf>,
}

impl AppConfig {
    /// Moves `path` to the front of the recent list, deduplicated.
    pub fn remember_project(&mut self, path: PathBuf) {
        self.recent_projects.retain(|known| known != &path);
        self.recent_projects.insert(0, path);
        self.recent_projects.truncate(MAX_RECENT_PROJECTS);
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "hellspawner", "hellspawner") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        return Some(config_dir.join("config.toml"));
    }
    None
}

pub fn save_config(config: &AppConfig) {
    if let Some(path) = get_config_path() {
        match toml::to_string_pretty(config) {
            Ok(toml_str) => {
                if let Err(e) = fs::write(&path, toml_str) {
                    error!("Failed to write config file: {}", e);
                } else {
                    info!("Config saved to {}", path.display());
                }
            }
            Err(e) => {
                error!("Failed to serialize config: {}", e);
            }
        }
    }
}

pub fn load_config() -> AppConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => match toml::from_str(&toml_str) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_projects_dedupe_and_cap() {
        let mut config = AppConfig::default();
        for i in 0..10 {
            config.remember_project(PathBuf::from(format!("mod{i}.hsp")));
        }
        config.remember_project(PathBuf::from("mod9.hsp"));

        assert_eq!(config.recent_projects.len(), MAX_RECENT_PROJECTS);
        assert_eq!(config.recent_projects[0], PathBuf::from("mod9.hsp"));
        assert_eq!(
            config
                .recent_projects
                .iter()
                .filter(|p| **p == PathBuf::from("mod9.hsp"))
                .count(),
            1
        );
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut config = AppConfig {
            theme: ThemeType::Latte,
            game_executable: Some(PathBuf::from("/games/d2/game.exe")),
            game_arguments: vec!["-w".to_string()],
            recent_projects: Vec::new(),
        };
        config.remember_project(PathBuf::from("mymod.hsp"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.theme, ThemeType::Latte);
        assert_eq!(parsed.game_arguments, vec!["-w".to_string()]);
        assert_eq!(parsed.recent_projects, vec![PathBuf::from("mymod.hsp")]);
    }
}
