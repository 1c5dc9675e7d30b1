use dutylog_core::query::search;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::{print_record_list, records_json};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let store = ctx.open_store()?;
    let records = store.records();
    let query = args.query.as_deref().unwrap_or("");
    let mut found = search(&records, query);
    if let Some(limit) = args.limit {
        found.truncate(limit);
    }

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        let zone = ctx.zone()?;
        let output = serde_json::to_string_pretty(&records_json(found, &zone)?)?;
        println!("{}", output);
        return Ok(());
    }

    let context = Some(query.trim())
        .filter(|q| !q.is_empty())
        .map(|q| format!("\"{}\"", q));
    print_record_list(&ui_ctx, &found, "search", context.as_deref(), ctx.quiet());
    Ok(())
}
