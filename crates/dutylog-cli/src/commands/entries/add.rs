use chrono::Local;

use dutylog_core::DutyForm;

use crate::app::{AppContext, Zone};
use crate::cli::AddArgs;
use crate::helpers::parse_duty_type;

use super::{fill_form, parse_edits, report_saved};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let duty_type = parse_duty_type(&args.duty_type)?;
    let edits = parse_edits(&args.set)?;
    let mut store = ctx.open_store()?;
    let zone = ctx.zone()?;
    let now = ctx.now();

    let ui_ctx = ctx.ui_context(args.json, None);
    let interactive =
        edits.is_empty() && !args.no_input && !args.json && ui_ctx.is_interactive();

    // Working drafts take crew and certificate details from the newest working duty.
    let history = store.records();
    let submitted = match zone {
        Zone::Named(tz) => fill_form(
            DutyForm::new_with_history(duty_type, tz, now, &history),
            &edits,
            interactive,
        )?,
        Zone::Local => fill_form(
            DutyForm::new_with_history(duty_type, Local, now, &history),
            &edits,
            interactive,
        )?,
    };

    let outcome = store.upsert(submitted.record.clone())?;
    report_saved(&ui_ctx, &submitted, outcome, &zone, ctx.quiet())
}
