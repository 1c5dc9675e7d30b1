use dutylog_core::photo;

use crate::app::AppContext;
use crate::cli::DashboardArgs;
use crate::constants::{PROFILE_HINT, RECENT_DUTIES};
use crate::output::{record_json, record_row};
use crate::ui::format::date_with_weekday;
use crate::ui::{
    blank_line, header_with_context, hint, kv, print, simple_table, Column, OutputMode,
};

const RECENT_COLUMNS: [Column; 5] = [
    Column::new("Logged"),
    Column::new("ID"),
    Column::new("Type"),
    Column::new("Date"),
    Column::new("Train"),
];

pub fn handle_dashboard(ctx: &AppContext, args: &DashboardArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let profile = store.load_profile()?;
    let records = store.records();
    let recent: Vec<_> = records.iter().take(RECENT_DUTIES).collect();
    let zone = ctx.zone()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let recent_json = recent
            .iter()
            .map(|r| -> anyhow::Result<serde_json::Value> {
                let mut value = record_json(r, &zone)?;
                if let Some(object) = value.as_object_mut() {
                    object.insert(
                        "loggedOn".to_string(),
                        date_with_weekday(zone.today(r.timestamp)).into(),
                    );
                }
                Ok(value)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let output = serde_json::json!({
            "profile": profile,
            "total": records.len(),
            "recent": recent_json,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = recent
        .iter()
        .map(|r| {
            let row = record_row(r);
            vec![
                date_with_weekday(zone.today(r.timestamp)),
                row[0].clone(),
                row[1].clone(),
                row[2].clone(),
                row[3].clone(),
            ]
        })
        .collect();

    match ui_ctx.mode {
        OutputMode::Pretty => {
            let data_dir = ctx.data_dir()?.display().to_string();
            if !ctx.quiet() {
                print(
                    &ui_ctx,
                    &header_with_context(&ui_ctx, "dashboard", None, Some(&data_dir)),
                );
                blank_line(&ui_ctx);
            }
            match &profile {
                Some(p) => {
                    let avatar = match p.photo.as_deref().and_then(photo::describe) {
                        Some((mime, _)) => format!("photo ({})", mime),
                        None => p.initial().map(|c| c.to_string()).unwrap_or_default(),
                    };
                    let name = format!("{}  [{}]", p.name, avatar);
                    print(&ui_ctx, &kv(&ui_ctx, "Name", &name));
                    print(&ui_ctx, &kv(&ui_ctx, "Crew ID", &p.crew_id));
                    print(&ui_ctx, &kv(&ui_ctx, "Designation", p.designation.label()));
                }
                None => print(&ui_ctx, &hint(&ui_ctx, PROFILE_HINT)),
            }
            blank_line(&ui_ctx);
            if rows.is_empty() {
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, "No duties yet. Log one with `dutylog add <TYPE>`."),
                );
            } else {
                print(&ui_ctx, &simple_table(&ui_ctx, &RECENT_COLUMNS, &rows));
                if !ctx.quiet() {
                    blank_line(&ui_ctx);
                    let total = format!("{} duties in total. dutylog list", records.len());
                    print(&ui_ctx, &hint(&ui_ctx, &total));
                }
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            match &profile {
                Some(p) => {
                    println!("name={}", p.name);
                    println!("crew_id={}", p.crew_id);
                    println!("designation={}", p.designation.label());
                }
                None => println!("profile=none"),
            }
            println!("total={}", records.len());
            for r in &recent {
                let row = record_row(r);
                println!(
                    "{} {} {} {}",
                    zone.today(r.timestamp).format("%a"),
                    r.id,
                    row[1].replace(' ', "_"),
                    row[2]
                );
            }
        }
    }
    Ok(())
}
