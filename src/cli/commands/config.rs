//! Config command handler

use crate::args::ConfigSubcommand;
use grade_tracker::config::Config;
use grade_tracker::info;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns an error for an unknown key, an unparseable value, or when the
/// config file cannot be written or removed
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), Box<dyn Error>> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            config.save()?;
            info!("Config {key} set to {value}");
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            config.save()?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(&mut io::stdin().lock()),
    }
}

fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), Box<dyn Error>> {
    match key {
        Some(k) => {
            let value = config
                .get(&k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn handle_config_reset(input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response)?;

    if is_yes(&response) {
        Config::reset()?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn is_yes(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let config = Config::from_defaults();
        let err = handle_config_get(&config, Some("token".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Unknown config key: 'token'");
    }
}
