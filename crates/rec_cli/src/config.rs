use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "recsolve.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecConfig {
    /// Method used when the command line does not name one (`auto` or unset
    /// means try every applicable method).
    pub default_method: Option<String>,
    pub show_steps: bool,
    /// Record `T(1) = 1` for multi-term recurrences entered in the REPL.
    pub complex_default_base_case: bool,
    pub history_size: usize,
}

impl Default for RecConfig {
    fn default() -> Self {
        Self {
            default_method: None,
            show_steps: false,
            complex_default_base_case: true,
            history_size: 100,
        }
    }
}

impl RecConfig {
    /// Load `recsolve.toml` from the working directory.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load a config file, falling back to defaults when it is missing or
    /// malformed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => warn!(
                    path = %path.display(),
                    error = %e,
                    "invalid config file, using defaults"
                ),
            },
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "cannot read config file, using defaults"
            ),
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "recsolve-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = RecConfig::load_from(Path::new("/nonexistent/recsolve.toml"));
        assert_eq!(config, RecConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial", "show_steps = true\ndefault_method = \"iteration\"\n");
        let config = RecConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(config.show_steps);
        assert_eq!(config.default_method.as_deref(), Some("iteration"));
        assert!(config.complex_default_base_case);
        assert_eq!(config.history_size, 100);
    }

    #[test]
    fn malformed_file_falls_back() {
        let path = temp_file("broken", "show_steps = [not toml");
        let config = RecConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert_eq!(config, RecConfig::default());
    }
}
