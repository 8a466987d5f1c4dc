use anyhow::Result;

use super::build;
use crate::configuration::ConfigKey;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_passes_global_flags_to_subcommands() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "plantwatch",
        "alerts",
        "--user-id",
        "42",
        "--server-url",
        "http://10.2.66.124:8080",
    ])?;

    let (name, subcmd_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "alerts");
    assert_eq!(
        subcmd_matches.get_one::<String>(&ConfigKey::UserID.to_string()),
        Some(&"42".to_string())
    );
    assert_eq!(
        subcmd_matches.get_one::<String>(&ConfigKey::ServerURL.to_string()),
        Some(&"http://10.2.66.124:8080".to_string())
    );

    return Ok(());
}

#[test]
fn it_requires_a_shell_for_completions() {
    let res = build().try_get_matches_from(vec!["plantwatch", "completions"]);
    assert!(res.is_err());
}
