use dutylog_core::export::{self, ExportReport, ExportTable, NO_FILTERED_RECORDS};
use dutylog_core::{DutyType, ExportFilter, RangePreset};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::{parse_date, parse_duty_type};
use crate::output::{print_record_list, records_json};
use crate::ui::{format, print, receipt, OutputMode, UiContext};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let today = ctx.today()?;
    let filter = build_filter(args, today)?;

    let store = ctx.open_store()?;
    let records = store.records();
    let selected = filter.apply(&records);
    let ui_ctx = ctx.ui_context(args.json, None);

    if args.dry_run {
        return print_dry_run(ctx, &ui_ctx, &filter, &selected);
    }

    let delivery = ctx.delivery(args.share, args.out.as_deref())?;
    let report = export::export_records(&selected, today, delivery.as_ref())?;
    print_report(ctx, &ui_ctx, &report)
}

/// Range preset first, then manual bounds (which switch to custom), then types.
fn build_filter(args: &ExportArgs, today: chrono::NaiveDate) -> anyhow::Result<ExportFilter> {
    let mut filter = ExportFilter::new(today);
    if let Some(range) = args.range.as_deref() {
        let preset: RangePreset = range.parse()?;
        filter.select_preset(preset, today);
    }
    if let Some(from) = args.from.as_deref() {
        filter.set_from(parse_date(from)?);
    }
    if let Some(to) = args.to.as_deref() {
        filter.set_to(parse_date(to)?);
    }
    if !args.types.is_empty() {
        let types = args
            .types
            .iter()
            .map(|t| parse_duty_type(t))
            .collect::<anyhow::Result<Vec<DutyType>>>()?;
        filter.set_types(&types);
    }
    Ok(filter)
}

fn filter_context(filter: &ExportFilter) -> String {
    let window = filter.window();
    format!(
        "{}: {} to {}",
        filter.preset().label(),
        format::date(window.from),
        format::date(window.to)
    )
}

fn print_dry_run(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    filter: &ExportFilter,
    selected: &[&dutylog_core::DutyRecord],
) -> anyhow::Result<()> {
    if ui_ctx.mode.is_json() {
        let table = ExportTable::from_records(selected.iter().copied());
        let output = serde_json::json!({
            "filter": filter,
            "count": selected.len(),
            "headers": table.headers(),
            "records": records_json(selected.iter().copied(), &ctx.zone()?)?,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let context = filter_context(filter);
    if selected.is_empty() {
        match ui_ctx.mode {
            OutputMode::Pretty => print(ui_ctx, NO_FILTERED_RECORDS),
            OutputMode::Plain | OutputMode::Json => println!("count=0"),
        }
        return Ok(());
    }
    print_record_list(ui_ctx, selected, "export --dry-run", Some(&context), ctx.quiet());
    if !ui_ctx.mode.is_pretty() {
        println!("count={}", selected.len());
    }
    Ok(())
}

pub(crate) fn print_report(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    report: &ExportReport,
) -> anyhow::Result<()> {
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if ctx.quiet() {
        if let Some(path) = report.outcome.path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let rows = report.rows.to_string();
    let mut items: Vec<(&str, String)> = vec![("File", report.file_name.clone()), ("Rows", rows)];
    let title = match &report.outcome {
        export::DeliveryOutcome::Downloaded { path } => {
            items.push(("Saved To", path.display().to_string()));
            "Exported duty log"
        }
        export::DeliveryOutcome::Shared { via } => {
            items.push(("Shared Via", via.clone()));
            "Shared duty log"
        }
        export::DeliveryOutcome::FellBack { path, reason } => {
            items.push(("Saved To", path.display().to_string()));
            items.push(("Share Failed", reason.clone()));
            "Exported duty log (share unavailable)"
        }
    };
    let borrowed: Vec<(&str, &str)> = items.iter().map(|(k, v)| (*k, v.as_str())).collect();
    print(ui_ctx, &receipt(ui_ctx, title, &borrowed));
    Ok(())
}
