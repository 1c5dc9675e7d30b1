//! DutyLog CLI - a duty logbook for railway loco crew.
//!
//! Records working, spare, periodic rest and leave duties, searches them and
//! exports them to spreadsheets. The record model, storage and export live in
//! `dutylog-core`; this crate is the command-line surface over it.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigCommand, DashboardArgs, ProfileCommand};
use crate::commands::{backup, dashboard, entries, export, misc, profile};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // A broken config file is reported by the command that needs it.
    let level = ctx.config().ok().and_then(|c| c.log.level.clone());
    logging::init(level.as_deref());

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let text = format!("{}", e);
        let (message, hint) = split_hint(&text);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split "message\nHint: text" into its parts.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.split_once("\nHint: ") {
        Some((message, hint)) => (message, Some(hint)),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Profile(command)) => match command {
            ProfileCommand::Show(args) => profile::handle_profile_show(ctx, args)?,
            ProfileCommand::Set(args) => profile::handle_profile_set(ctx, args)?,
        },
        Some(Commands::Add(args)) => entries::handle_add(ctx, args)?,
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args)?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args)?,
        Some(Commands::Show(args)) => entries::handle_show(ctx, args)?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args)?,
        Some(Commands::Search(args)) => entries::handle_search(ctx, args)?,
        Some(Commands::Dashboard(args)) => dashboard::handle_dashboard(ctx, args)?,
        Some(Commands::Export(args)) => export::handle_export(ctx, args)?,
        Some(Commands::Backup(args)) => backup::handle_backup(ctx, args)?,
        Some(Commands::Fields(args)) => misc::handle_fields(args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        Some(Commands::Config(command)) => match command {
            ConfigCommand::Init(args) => misc::handle_config_init(ctx, args)?,
            ConfigCommand::Path => misc::handle_config_path()?,
        },
        None => dashboard::handle_dashboard(ctx, &DashboardArgs { json: false })?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        assert_eq!(
            split_hint("Record not found: ab12\nHint: Run `dutylog list` to find record IDs."),
            (
                "Record not found: ab12",
                Some("Run `dutylog list` to find record IDs.")
            )
        );
        assert_eq!(split_hint("Storage error: denied"), ("Storage error: denied", None));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
