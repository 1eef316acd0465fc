use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path};

const SAMPLE_CONFIG: &str = "\
# fsp configuration
#
# Everything here is optional. Any field under `defaults:` overrides the
# initial value shown in the form; delete a line to fall back to the
# built-in default. Categorical values use the labels shown in the UI.
defaults:
  age: 30                      # 18-60
  weight: 70                   # kg, 30-200
  height: 170                  # cm, 100-220
  marriage_years: 2            # 0-40
  lifestyle: \"Active\"          # Active | Good | Moderate | Sedentary
  menstruation: \"Regular\"      # Regular | Regularly/irregular | Irregular | Irregularly/irregular
  sex_frequency: \"Regular\"     # Regular | Irregular | Once a week | Once a month
  diagnosis: \"No factor\"       # No factor | One factor | Two factors | Multiple factors
  ovulation: \"Always\"          # Always | Mostly | Rare | None
  stress: \"Low\"                # Low | Moderate | High | Severe
  sleep: \"Good\"                # Good | Fair | Poor | Insomnia
  diet: \"Balanced\"             # Balanced | Mostly balanced | Junk | Poor
  substance: \"None\"            # None | Occasional | Frequent | Daily
  family_history: \"No history\" # No history | Remote | Close | Multiple
";

/// Write a commented sample config.
///
/// Refuses to overwrite an existing file so `fsp init` is always safe to run.
pub fn write_sample_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if config_path.exists() {
        anyhow::bail!(
            "Config file already exists at {} (delete it first to re-init)",
            config_path.display()
        );
    }

    fs::write(&config_path, SAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_defaults, Config};
    use crate::input::InputRecord;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: Config = serde_saphyr::from_str(SAMPLE_CONFIG).unwrap();
        assert!(validate_defaults(&config.defaults).is_ok());
        // The sample spells out the built-in defaults, so applying it must be
        // a no-op.
        assert_eq!(config.defaults.apply(), InputRecord::default());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join("fsp-init-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        fs::write(&path, "defaults: {}\n").unwrap();

        let err = write_sample_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        fs::remove_file(&path).unwrap();
        let written = write_sample_config(Some(path.clone())).unwrap();
        assert_eq!(written, path);
        fs::remove_file(&path).unwrap();
    }
}
