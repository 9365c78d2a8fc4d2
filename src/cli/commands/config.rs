//! Config command - show or edit configuration

use crate::cart::DuplicatePolicy;
use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, LogFormat};
use crate::error::{GomarketError, GomarketResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: &[&str] = &[
    "general.log_format",
    "general.audit_log",
    "storage.data_dir",
    "cart.duplicate_policy",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> GomarketResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> GomarketResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> GomarketResult<()> {
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
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> GomarketResult<()> {
    let mut config = config.clone();
    apply_setting(&mut config, key, value)?;

    manager.save(&config).await?;
    ui::step_ok(&UiContext::detect(), &format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply one dot-separated `key = value` to `config`
fn apply_setting(config: &mut Config, key: &str, value: &str) -> GomarketResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => {
            config.general.log_format = value.parse::<LogFormat>().map_err(GomarketError::User)?
        }
        ["general", "audit_log"] => config.general.audit_log = parse_bool(value)?,
        ["storage", "data_dir"] => {
            config.storage.data_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        ["cart", "duplicate_policy"] => {
            config.cart.duplicate_policy = value
                .parse::<DuplicatePolicy>()
                .map_err(GomarketError::User)?
        }
        _ => {
            return Err(GomarketError::ConfigKeyUnknown(format!(
                "{} (valid keys: {})",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> GomarketResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(GomarketError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}
