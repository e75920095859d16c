use std::fs::File;

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use studip_client::{Credentials, Password, STUDIP_API_BASE};
use xdg::BaseDirectories;

/// Where to find the API, who to log in as, and where to put files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    pub password: Password,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,
}

fn default_base_url() -> String {
    STUDIP_API_BASE.to_string()
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("data")
}

impl Config {
    /// Load from `$XDG_CONFIG_HOME/studip-export/config.json`
    pub fn load() -> Result<Self> {
        let path = BaseDirectories::with_prefix("studip-export")?
            .find_config_file("config.json")
            .ok_or_else(|| anyhow!("config does not exist"))?;
        let path = Utf8PathBuf::try_from(path).context("config path is not valid UTF-8")?;

        Self::load_from(&path)
    }

    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("error opening config file {}", path))?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        (self.username.clone(), self.password.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"username": "test_autor", "password": "testing"}"#).unwrap();

        assert_eq!(config.base_url, STUDIP_API_BASE);
        assert_eq!(config.output_dir, Utf8PathBuf::from("data"));

        let (user, password) = config.credentials();
        assert_eq!(user, "test_autor");
        assert_eq!(password.as_ref(), "testing");
    }

    #[test]
    fn test_load_from() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "username": "test_autor",
                "password": "testing",
                "base_url": "https://studip.example.org/jsonapi.php/v1",
                "output_dir": "/srv/archive"
            }}"#
        )
        .unwrap();

        let config =
            Config::load_from(Utf8Path::from_path(file.path()).unwrap()).unwrap();

        assert_eq!(config.base_url, "https://studip.example.org/jsonapi.php/v1");
        assert_eq!(config.output_dir, Utf8PathBuf::from("/srv/archive"));
    }

    #[test]
    fn test_missing_password() {
        assert!(serde_json::from_str::<Config>(r#"{"username": "test_autor"}"#).is_err());
    }

    #[test]
    fn test_password_hidden() {
        let config: Config =
            serde_json::from_str(r#"{"username": "test_autor", "password": "testing"}"#).unwrap();

        assert!(!format!("{:?}", config).contains("testing"));
    }
}
