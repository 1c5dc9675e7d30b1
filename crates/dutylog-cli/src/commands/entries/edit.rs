use chrono::Local;

use dutylog_core::DutyForm;

use crate::app::{resolve_record, AppContext, Zone};
use crate::cli::EditArgs;

use super::{fill_form, parse_edits, report_saved};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let edits = parse_edits(&args.set)?;
    let mut store = ctx.open_store()?;
    let record = resolve_record(&store, &args.id)?;
    let zone = ctx.zone()?;

    // The id, type and creation timestamp survive; the record keeps its position.
    let submitted = match zone {
        Zone::Named(tz) => fill_form(DutyForm::edit(record, tz), &edits, false)?,
        Zone::Local => fill_form(DutyForm::edit(record, Local), &edits, false)?,
    };

    let outcome = store.upsert(submitted.record.clone())?;
    let ui_ctx = ctx.ui_context(args.json, None);
    report_saved(&ui_ctx, &submitted, outcome, &zone, ctx.quiet())
}
