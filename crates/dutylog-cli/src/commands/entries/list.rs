use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::errors::CliError;
use crate::helpers::{parse_duty_type, parse_output_format};
use crate::output::{print_record_list, records_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let duty_type = args.duty_type.as_deref().map(parse_duty_type).transpose()?;

    let store = ctx.open_store()?;
    let records = store.records();
    let selected: Vec<_> = records
        .iter()
        .filter(|r| duty_type.map_or(true, |t| r.duty_type() == t))
        .take(args.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .collect();

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        let zone = ctx.zone()?;
        let output = serde_json::to_string_pretty(&records_json(selected, &zone)?)?;
        println!("{}", output);
        return Ok(());
    }

    let context = duty_type.map(|t| t.label());
    print_record_list(&ui_ctx, &selected, "list", context, ctx.quiet());
    Ok(())
}
