//! Configuration initialization and hierarchy management

use anyhow::{Context, Result};
use tracing::debug;

use crate::adapters::toml_config::{parse_languages, Settings, TomlConfigAdapter};
use crate::cli::{Cli, RemuxArgs};

/// Resolve settings following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<Settings> {
    let mut adapter = TomlConfigAdapter::load(cli.config.as_deref())
        .context("Failed to load configuration file")?
        .apply_env()
        .context("Failed to apply environment overrides")?;

    apply_cli_configuration_overrides(adapter.settings_mut(), &cli.remux);
    adapter.validate().context("Invalid configuration")?;

    Ok(adapter.into_settings())
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_configuration_overrides(settings: &mut Settings, args: &RemuxArgs) {
    let mut cli_overrides = 0;

    if let Some(languages) = &args.languages {
        settings.languages = parse_languages(&languages.join(","));
        cli_overrides += 1;
    }
    if let Some(remuxer) = &args.remuxer {
        settings.remuxer = remuxer.clone();
        cli_overrides += 1;
    }
    if args.skip_unsupported {
        settings.skip_unsupported = true;
        cli_overrides += 1;
    }

    if cli_overrides > 0 {
        debug!("Applied {} CLI overrides", cli_overrides);
    }
}
