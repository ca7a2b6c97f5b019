use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::PlaceValueMode;

/// Persisted UI preferences. Bead state is never written out; only the
/// place-value mode survives across launches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: PlaceValueMode,
}

/// Resolve the preferences file path (~/.config/soroban/config.toml),
/// creating the directory if needed.
pub fn config_path() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user config directory"))?
        .join("soroban");

    fs::create_dir_all(&dir)?;

    Ok(dir.join("config.toml"))
}

/// Load preferences from a TOML file; a missing file means defaults.
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}

/// Write preferences back to the TOML file.
pub fn save_config(config: &Config, path: &Path) -> io::Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_defaults() {
        let config = load_config(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(config.mode, PlaceValueMode::CenterUnits);
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.mode, PlaceValueMode::CenterUnits);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            mode: PlaceValueMode::RightmostUnits,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.mode, PlaceValueMode::RightmostUnits);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(toml::from_str::<Config>("mode = \"sideways\"").is_err());
    }
}
