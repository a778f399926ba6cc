//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{KioskError, KioskResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config) -> KioskResult<()> {
    let manager = ConfigManager::new();

    match args.action {
        None | Some(ConfigAction::Show) => show_config(config),
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(&manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            set_value(&manager, config, &key, &value).await?
        }
    }

    Ok(())
}

fn show_config(config: &Config) {
    let toml =
        toml::to_string_pretty(config).unwrap_or_else(|_| "Error serializing config".to_string());
    println!("{}", toml);
}

async fn init_config(manager: &ConfigManager, force: bool) -> KioskResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok(&ctx, &format!("Configuration initialized at {}", path.display()));

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> KioskResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["remote", "host"] => config.remote.host = value.to_string(),
        ["remote", "user"] => config.remote.user = value.to_string(),
        ["remote", "port"] => config.remote.port = parse_port(value)?,
        ["remote", "identity"] => config.remote.identity = Some(PathBuf::from(value)),

        ["kiosk", "url"] => config.kiosk.url = value.to_string(),

        ["packages", "base"] => config.packages.base = parse_list(value),
        ["packages", "kiosk"] => config.packages.kiosk = parse_list(value),
        ["packages", "python"] => config.packages.python = parse_list(value),

        _ => {
            ui::step_warn_hint(&ctx, &format!("Unknown config key: {}", key), "Valid keys:");
            print_valid_keys();
            return Ok(());
        }
    }

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));

    Ok(())
}

fn parse_port(value: &str) -> KioskResult<u16> {
    value
        .parse()
        .map_err(|_| KioskError::User(format!("Invalid port: {}", value)))
}

/// Comma-separated list value
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn print_valid_keys() {
    let keys = [
        "remote.host",
        "remote.user",
        "remote.port",
        "remote.identity",
        "kiosk.url",
        "packages.base",
        "packages.kiosk",
        "packages.python",
    ];

    for key in keys {
        eprintln!("  {}", key);
    }
}
