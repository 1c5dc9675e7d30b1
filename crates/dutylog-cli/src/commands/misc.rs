use clap::CommandFactory;
use clap_complete::generate;

use dutylog_core::form::field_names;

use crate::app::{resolve_config_path, AppContext, Zone};
use crate::cli::{Cli, CompletionsArgs, ConfigInitArgs, FieldsArgs};
use crate::config::{default_data_dir, write_config, DutyLogConfig};
use crate::errors::CliError;
use crate::helpers::parse_duty_type;
use crate::ui::{print, receipt};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "dutylog", &mut std::io::stdout());
    Ok(())
}

/// Print the `--set` field names of a duty type, one per line.
pub fn handle_fields(args: &FieldsArgs) -> anyhow::Result<()> {
    let duty_type = parse_duty_type(&args.duty_type)?;
    for name in field_names(duty_type) {
        println!("{}", name);
    }
    Ok(())
}

pub fn handle_config_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config file already exists: {}", path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }
    if let Some(name) = args.timezone.as_deref() {
        Zone::parse(name)?;
    }

    let data_dir = match ctx.cli().data_dir.as_deref() {
        Some(dir) => dir.into(),
        None => default_data_dir()?,
    };
    let config = DutyLogConfig::new(
        data_dir,
        args.timezone.clone(),
        args.share_command.clone(),
    );
    write_config(&path, &config)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let path_text = path.display().to_string();
        let data_text = config.storage.dir.clone().unwrap_or_default();
        let items = [("Config", path_text.as_str()), ("Data", data_text.as_str())];
        print(&ui_ctx, &receipt(&ui_ctx, "Wrote config", &items));
    }
    Ok(())
}

pub fn handle_config_path() -> anyhow::Result<()> {
    println!("{}", resolve_config_path()?.display());
    Ok(())
}
