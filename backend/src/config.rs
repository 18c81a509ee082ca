//! Service settings, read once at startup from a TOML file.
//!
//! The file is optional: a missing file means every default below. Its path
//! comes from `SENDER_CONFIG` and falls back to `sender.toml` in the working
//! directory. Messaging options (country code, labels, template...) live in
//! a `[messaging]` table.

use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::{env, fs};

use common::MessagingConfig;
use log::info;
use serde::Deserialize;

const CONFIG_ENV: &str = "SENDER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "sender.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Open the page in the default browser once the server is up.
    pub open_browser: bool,
    /// Built page assets; not served when the directory is missing.
    pub static_dir: PathBuf,
    /// Largest accepted upload or request body.
    pub upload_limit_bytes: usize,
    pub messaging: MessagingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            static_dir: PathBuf::from("static/dist"),
            upload_limit_bytes: 10 * 1024 * 1024, // 10 MB
            messaging: MessagingConfig::default(),
        }
    }
}

impl Settings {
    pub fn load() -> std::io::Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(Path::new(&path))
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!("loading settings from {}", path.display());
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_toml(text: &str) -> std::io::Result<Self> {
        toml::from_str(text).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RoleBinding;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
        assert_eq!(Settings::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let settings = Settings::from_toml(
            r#"
            port = 9000
            open_browser = false

            [messaging]
            country_code = "33"
            role_binding = "follow"
            "#,
        )
        .unwrap();
        assert_eq!(settings.port, 9000);
        assert!(!settings.open_browser);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.messaging.country_code, "33");
        assert_eq!(settings.messaging.role_binding, RoleBinding::Follow);
        assert_eq!(settings.messaging.min_phone_digits, 8);
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let err = Settings::from_toml("port = \"eighty\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_means_defaults() {
        let settings = Settings::from_path(Path::new("does/not/exist/sender.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
