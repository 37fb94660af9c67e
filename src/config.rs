use crate::render::Format;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub output_file: PathBuf,
    #[serde(default = "default_format")]
    pub format: Format,
    pub color: bool,
    #[serde(default)]
    pub open_browser: bool,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

fn default_format() -> Format {
    Format::Html
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_title() -> String {
    "Spengergasse department guide".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                output_file: PathBuf::from("spengerguide.html"),
                format: default_format(),
                color: true,
                open_browser: false,
                lang: default_lang(),
                title: default_title(),
            },
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    /// Load a config file, writing the defaults to it first when it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.output_file.as_os_str().is_empty() {
            return Err(AppError::Config("Output file cannot be empty".to_string()));
        }

        if self.general.lang.trim().is_empty() {
            return Err(AppError::Config("Document language cannot be empty".to_string()));
        }

        if self.general.title.trim().is_empty() {
            return Err(AppError::Config("Document title cannot be empty".to_string()));
        }

        if self.server.host.trim().is_empty() {
            return Err(AppError::Config("Server host cannot be empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(AppError::Config("Server port must be greater than 0".to_string()));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spengerguide")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.format, Format::Html);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_custom_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.general.output_file, PathBuf::from("spengerguide.html"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.format = Format::Markdown;
        config.general.lang = "de".to_string();
        config.server.port = 9090;
        config.save_to(&path).unwrap();

        let loaded = Config::load_custom(&path).unwrap();
        assert_eq!(loaded.general.format, Format::Markdown);
        assert_eq!(loaded.general.lang, "de");
        assert_eq!(loaded.server.port, 9090);
    }

    #[test]
    fn test_optional_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[general]\noutput_file = \"out/guide.html\"\ncolor = false\n",
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.general.output_file, PathBuf::from("out/guide.html"));
        assert!(!config.general.color);
        assert!(!config.general.open_browser);
        assert_eq!(config.general.format, Format::Html);
        assert_eq!(config.general.lang, "en");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[general]\noutput_file = \"guide.html\"\ncolor = true\n\n[server]\nhost = \"0.0.0.0\"\nport = 0\n",
        )
        .unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general\n").unwrap();

        let err = Config::load_custom(&path).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config file"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = Config::default();
        config.general.title = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
