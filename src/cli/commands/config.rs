use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", cfg.file.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !cfg.file.exists() {
                cfg.save()?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&cfg.file).status() {
                Ok(s) if s.success() => {
                    messages::success(
                        format!(
                            "Configuration file edited successfully using '{}'",
                            editor_to_use
                        ),
                        cfg.color,
                    );
                }
                Ok(_) | Err(_) => {
                    log::warn!("editor '{editor_to_use}' failed, trying '{default_editor}'");
                    messages::warning(
                        format!(
                            "Editor '{}' not available, falling back to '{}'",
                            editor_to_use, default_editor
                        ),
                        cfg.color,
                    );

                    match Command::new(&default_editor).arg(&cfg.file).status() {
                        Ok(s) if s.success() => messages::success(
                            format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ),
                            cfg.color,
                        ),
                        Ok(_) | Err(_) => messages::error(
                            format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ),
                            cfg.color,
                        ),
                    }
                }
            }
        }

        if !*print_config && !*edit_config {
            messages::info(format!("Config file: {}", cfg.file.display()), cfg.color);
        }
    }

    Ok(())
}
