use crate::app::{resolve_record, AppContext};
use crate::cli::ShowArgs;
use crate::output::{print_record, record_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let record = resolve_record(&store, &args.id)?;
    let zone = ctx.zone()?;
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&record_json(&record, &zone)?)?;
        println!("{}", output);
        return Ok(());
    }

    print_record(&ui_ctx, &record, &zone, ctx.quiet());
    Ok(())
}
