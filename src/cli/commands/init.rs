use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Write the defaults (plus any `--api-url` override) to the config file.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        if cfg.file.exists() && !force {
            messages::warning(
                format!(
                    "Config file {} already exists (use --force to overwrite)",
                    cfg.file.display()
                ),
                cfg.color,
            );
            return Ok(());
        }

        let fresh = Config {
            api_base_url: cfg.api_base_url.clone(),
            file: cfg.file.clone(),
            ..Config::default()
        };
        fresh.save()?;
        log::info!("wrote {}", fresh.file.display());
        messages::success(
            format!("Config file: {}", fresh.file.display()),
            cfg.color,
        );
    }
    Ok(())
}
