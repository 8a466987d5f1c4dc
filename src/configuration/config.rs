#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::SessionContext;
use crate::domain::services::DEFAULT_POLL_INTERVAL;
use crate::domain::services::MAX_POLL_INTERVAL;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    PollInterval,
    RequestTimeout,
    ServerURL,
    UserID,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("plantwatch/config.toml");

        let res = match key {
            ConfigKey::RequestTimeout => "5000",
            ConfigKey::ServerURL => "http://localhost:8080",
            ConfigKey::UserID => "",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
            ConfigKey::PollInterval => return DEFAULT_POLL_INTERVAL.as_secs().to_string(),
        };

        return res.to_string();
    }

    /// Checks a value before it is stored, so a bad config file or flag fails
    /// at startup rather than when the screen first polls.
    pub fn validate(key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::PollInterval => {
                let max = MAX_POLL_INTERVAL.as_secs();
                let secs = value.parse::<u64>().unwrap_or(0);
                if secs == 0 || secs > max {
                    bail!(format!(
                        "'{key}' must be a whole number of seconds between 1 and {max}, got '{value}'"
                    ));
                }
            }
            ConfigKey::RequestTimeout => {
                if value.parse::<u64>().unwrap_or(0) == 0 {
                    bail!(format!(
                        "'{key}' must be a whole number of milliseconds greater than zero, got '{value}'"
                    ));
                }
            }
            ConfigKey::ServerURL => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    bail!(format!(
                        "'{key}' must start with http:// or https://, got '{value}'"
                    ));
                }
            }
            ConfigKey::ConfigFile | ConfigKey::UserID => (),
        }

        return Ok(());
    }

    /// Reads every known key out of a TOML config document. Unknown keys are
    /// ignored.
    pub fn parse_file(toml_str: &str) -> Result<Vec<(ConfigKey, String)>> {
        let doc = toml_str.parse::<toml_edit::Document>()?;

        let mut values = vec![];
        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Some(val) = doc.get(&key.to_string()) {
                let val_str = if let Some(val_int) = val.as_integer() {
                    val_int.to_string()
                } else if let Some(val_str) = val.as_str() {
                    val_str.to_string()
                } else {
                    bail!(format!("config.toml has an invalid value for key '{key}'"));
                };

                if val_str.is_empty() {
                    continue;
                }

                if let Err(err) = Config::validate(key, &val_str) {
                    bail!(format!("config.toml has an invalid value: {err}"));
                }

                values.push((key, val_str));
            }
        }

        return Ok(values);
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            for (key, val) in Config::parse_file(&toml_str)? {
                Config::set(key, &val);
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(key, val)?;
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            server_url = Config::get(ConfigKey::ServerURL),
            user_id = Config::get(ConfigKey::UserID),
            poll_interval = Config::get(ConfigKey::PollInterval),
            request_timeout = Config::get(ConfigKey::RequestTimeout),
            "config"
        );

        return Ok(());
    }

    pub fn poll_interval() -> Result<Duration> {
        let secs = Config::get(ConfigKey::PollInterval).parse::<u64>()?;
        return Ok(Duration::from_secs(secs));
    }

    pub fn request_timeout() -> Result<Duration> {
        let millis = Config::get(ConfigKey::RequestTimeout).parse::<u64>()?;
        return Ok(Duration::from_millis(millis));
    }

    pub fn session() -> Result<SessionContext> {
        return SessionContext::new(&Config::get(ConfigKey::UserID));
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
