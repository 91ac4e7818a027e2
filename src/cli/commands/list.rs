use crate::cli::commands::view;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::page::load_page;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { view: args } = &cli.command {
        let page = view::open_source(cli, cfg)
            .and_then(|source| load_page(source.as_ref(), view::with_conflicts(cli, cfg)))
            .inspect_err(|e| {
                log::error!("loading absences failed: {e}");
                messages::error("Error fetching data", cfg.color);
            })?;
        view::show(page, args, cfg)?;
    }
    Ok(())
}
