use dutylog_core::export;

use crate::app::AppContext;
use crate::cli::BackupArgs;

use super::export::print_report;

/// Export the whole collection regardless of range or type.
pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let records = store.records();
    let today = ctx.today()?;
    let delivery = ctx.delivery(args.share, args.out.as_deref())?;
    let report = export::backup(&records, today, delivery.as_ref())?;

    let ui_ctx = ctx.ui_context(args.json, None);
    print_report(ctx, &ui_ctx, &report)
}
