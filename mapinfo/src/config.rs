//! User configuration options.

use crate::{BASE_DIR, CLIOptions};
use buildmap::log::{info, warn};
use buildmap::{BatchOptions, DecodeLimits, ReportMode};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{File, OpenOptions, create_dir_all},
    io::{Read, Write},
    path::{Path, PathBuf},
};

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> Option<PathBuf> {
    let mut dir = config_dir()?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        if let Err(e) = create_dir_all(&dir) {
            warn!(target: LOG_TAG, "Couldn't create {:?}: {}", dir, e);
            return None;
        }
    }
    dir.push("mapinfo.toml");
    Some(dir)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DefaultMode {
    #[default]
    Summary,
    Detailed,
}

impl From<DefaultMode> for ReportMode {
    fn from(m: DefaultMode) -> Self {
        match m {
            DefaultMode::Summary => ReportMode::Summary,
            DefaultMode::Detailed => ReportMode::Detailed,
        }
    }
}

impl From<ReportMode> for DefaultMode {
    fn from(m: ReportMode) -> Self {
        match m {
            ReportMode::Summary => DefaultMode::Summary,
            ReportMode::Detailed => DefaultMode::Detailed,
        }
    }
}

/// Largest record counts a file may declare before it is refused
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_sectors: usize,
    pub max_walls: usize,
    pub max_sprites: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = DecodeLimits::default();
        LimitsConfig {
            max_sectors: limits.max_sectors,
            max_walls: limits.max_walls,
            max_sprites: limits.max_sprites,
        }
    }
}

impl From<LimitsConfig> for DecodeLimits {
    fn from(l: LimitsConfig) -> Self {
        DecodeLimits {
            max_sectors: l.max_sectors,
            max_walls: l.max_walls,
            max_sprites: l.max_sprites,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub mode: DefaultMode,
    pub jobs: usize,
    pub limits: LimitsConfig,
}

impl UserConfig {
    /// `load` reads the user config, creating it with defaults on first run.
    /// Any failure falls back to the defaults.
    pub fn load() -> Self {
        match get_cfg_file() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!(target: LOG_TAG, "No user config dir, using defaults");
                UserConfig::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let mut file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
        {
            Ok(file) => file,
            Err(e) => {
                warn!(target: LOG_TAG, "Couldn't open {:?}, {}", path, e);
                return UserConfig::default();
            }
        };

        let mut buf = String::new();
        if let Ok(read_len) = file.read_to_string(&mut buf) {
            if read_len == 0 {
                return UserConfig::create_default(&mut file, path);
            } else {
                if let Ok(data) = toml::from_str(&buf) {
                    info!(target: LOG_TAG, "Loaded user config file");
                    return data;
                }
                warn!(target: LOG_TAG, "Could not deserialise {:?}, using defaults", path);
            }
        }
        UserConfig::default()
    }

    fn create_default(file: &mut File, path: &Path) -> Self {
        let config = UserConfig::default();
        match toml::to_string_pretty(&config) {
            Ok(data) => match file.write_all(data.as_bytes()) {
                Ok(_) => info!(target: LOG_TAG, "Saved default user config to {:?}", path),
                Err(e) => warn!(target: LOG_TAG, "Could not write {:?}: {}", path, e),
            },
            Err(e) => warn!(target: LOG_TAG, "Could not serialise config: {}", e),
        }
        config
    }

    /// Sync the CLI options and UserConfig with each other, the CLI wins
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!(target: LOG_TAG, "Checking CLI options");

        if let Some(mode) = cli.report_mode() {
            self.mode = mode.into();
        } else {
            cli.mode = Some(self.mode.into());
        }

        if let Some(jobs) = cli.jobs {
            self.jobs = jobs;
        } else {
            cli.jobs = Some(self.jobs);
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            mode: self.mode.into(),
            limits: self.limits.into(),
            jobs: self.jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultMode, UserConfig};
    use crate::CLIOptions;
    use argh::FromArgs;
    use buildmap::ReportMode;
    use std::fs;

    #[test]
    fn first_load_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapinfo.toml");

        let config = UserConfig::load_from(&path);
        assert_eq!(config, UserConfig::default());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("max_walls = 16384"));
    }

    #[test]
    fn load_written_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapinfo.toml");
        fs::write(
            &path,
            "mode = \"Detailed\"\njobs = 4\n\n[limits]\nmax_sectors = 1024\nmax_walls = 8192\nmax_sprites = 4096\n",
        )
        .unwrap();

        let config = UserConfig::load_from(&path);
        assert_eq!(config.mode, DefaultMode::Detailed);
        let options = config.batch_options();
        assert_eq!(options.jobs, 4);
        assert_eq!(options.mode, ReportMode::Detailed);
        assert_eq!(options.limits.max_sectors, 1024);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapinfo.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());
    }

    #[test]
    fn cli_wins_over_config() {
        let mut config = UserConfig {
            jobs: 8,
            ..UserConfig::default()
        };
        let mut cli = CLIOptions::from_args(&["mapinfo"], &["-d", "-j", "1", "a.map"]).unwrap();
        config.sync_cli(&mut cli);
        assert_eq!(config.mode, DefaultMode::Detailed);
        assert_eq!(config.jobs, 1);

        let mut cli = CLIOptions::from_args(&["mapinfo"], &["a.map"]).unwrap();
        config.sync_cli(&mut cli);
        assert_eq!(cli.jobs, Some(1));
        assert_eq!(cli.mode, Some(ReportMode::Detailed));
    }
}
