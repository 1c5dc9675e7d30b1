use crate::app::{resolve_record, AppContext};
use crate::cli::DeleteArgs;
use crate::constants::LIST_HINT;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::output::record_row;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let record = resolve_record(&store, &args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Hint: Pass --yes to delete non-interactively.",
            )
            .into());
        }
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &record_row(&record).join("  "));
        }
        if !confirm("Delete this record? This action cannot be undone.")? {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    let removed = store
        .remove(record.id)?
        .ok_or_else(|| CliError::not_found(format!("Record not found: {}", args.id), LIST_HINT))?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Deleted {} duty {}", removed.duty_type().label(), removed.id),
                ),
            ),
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", removed.id);
            }
        }
    }
    Ok(())
}
