use crate::cli::commands::view;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::page::load_employee_page;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { id, view: args } = &cli.command {
        let page = view::open_source(cli, cfg)
            .and_then(|source| {
                load_employee_page(source.as_ref(), id, view::with_conflicts(cli, cfg))
            })
            .inspect_err(|e| {
                if !matches!(e, AppError::EmployeeNotFound(_)) {
                    log::error!("loading absences for employee {id} failed: {e}");
                    messages::error("Error fetching data", cfg.color);
                }
            })?;
        view::show(page, args, cfg)?;
    }
    Ok(())
}
