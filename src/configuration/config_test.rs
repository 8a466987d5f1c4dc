use std::time::Duration;

use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let values = Config::parse_file(&res)?;

    assert_eq!(
        values,
        vec![
            (ConfigKey::PollInterval, "20".to_string()),
            (ConfigKey::RequestTimeout, "5000".to_string()),
            (ConfigKey::ServerURL, "http://localhost:8080".to_string()),
        ]
    );
    assert!(res.contains("# user-id = \"\""));

    return Ok(());
}

#[test]
fn it_parses_the_example_config() -> Result<()> {
    let toml_str = std::fs::read_to_string("./test/config.example.toml")?;
    let values = Config::parse_file(&toml_str)?;

    assert_eq!(
        values,
        vec![
            (ConfigKey::PollInterval, "30".to_string()),
            (ConfigKey::RequestTimeout, "2500".to_string()),
            (ConfigKey::ServerURL, "http://10.2.66.124:8080".to_string()),
            (ConfigKey::UserID, "42".to_string()),
        ]
    );

    return Ok(());
}

#[test]
fn it_fails_to_parse_a_bad_config() -> Result<()> {
    let toml_str = std::fs::read_to_string("./test/bad-config.toml")?;
    let res = Config::parse_file(&toml_str);

    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("poll-interval"));

    return Ok(());
}

#[test]
fn it_validates_values() {
    assert!(Config::validate(ConfigKey::PollInterval, "20").is_ok());
    assert!(Config::validate(ConfigKey::PollInterval, "0").is_err());
    assert!(Config::validate(ConfigKey::PollInterval, "-5").is_err());
    assert!(Config::validate(ConfigKey::PollInterval, "86400").is_ok());
    assert!(Config::validate(ConfigKey::PollInterval, "86401").is_err());
    assert!(Config::validate(ConfigKey::PollInterval, "18446744073709551615").is_err());
    assert!(Config::validate(ConfigKey::RequestTimeout, "2500").is_ok());
    assert!(Config::validate(ConfigKey::RequestTimeout, "0").is_err());
    assert!(Config::validate(ConfigKey::RequestTimeout, "fast").is_err());
    assert!(Config::validate(ConfigKey::ServerURL, "https://plants.example.com").is_ok());
    assert!(Config::validate(ConfigKey::ServerURL, "plants.example.com").is_err());
}

#[tokio::test]
async fn it_loads_config_with_flags_taking_precedence() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "plantwatch",
        "-c",
        "./test/config.example.toml",
        "--poll-interval",
        "45",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://10.2.66.124:8080");
    assert_eq!(Config::poll_interval()?, Duration::from_secs(45));
    assert_eq!(Config::request_timeout()?, Duration::from_millis(2500));
    assert_eq!(Config::session()?.user_id(), "42");

    return Ok(());
}
