//! Duty record commands: add, edit, delete, show, list and search.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;

use chrono::TimeZone;

use dutylog_core::form::field_names;
use dutylog_core::store::Upserted;
use dutylog_core::{DutyForm, DutyRecord, RestDuration};

use crate::app::Zone;
use crate::helpers::{parse_set_pair, prompt_optional};
use crate::output::record_json;
use crate::ui::theme::{styled, styles, SEPARATOR};
use crate::ui::{badge, blank_line, hint, kv, print, short_id, Badge, OutputMode, UiContext};

/// A submitted draft with the derived values it ended on.
pub(crate) struct Submitted {
    pub record: DutyRecord,
    pub rest_duration: Option<RestDuration>,
    pub total_leave_days: Option<u32>,
}

/// Parse every `--set` argument before touching the form, so a typo fails
/// the whole command without a partial edit.
pub(crate) fn parse_edits(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter().map(|pair| parse_set_pair(pair)).collect()
}

/// Apply edits in order, then (when `interactive`) prompt for every field of
/// the duty type. A blank answer leaves the field as it is.
pub(crate) fn fill_form<Tz: TimeZone>(
    mut form: DutyForm<Tz>,
    edits: &[(String, String)],
    interactive: bool,
) -> anyhow::Result<Submitted> {
    for (key, value) in edits {
        form.set(key, value)?;
    }

    if interactive {
        prompt_fields(&mut form, |label| prompt_optional(label, None))?;
    }

    let rest_duration = form.rest_duration();
    let total_leave_days = form.total_leave_days();
    Ok(Submitted {
        record: form.submit(),
        rest_duration,
        total_leave_days,
    })
}

/// Fields that take one value per answer and may be given several times.
const REPEATABLE_FIELDS: &[&str] = &["safety"];

/// Ask for every field of the form's duty type. A rejected answer is asked
/// again; a repeatable field is asked until the answer is blank.
fn prompt_fields<Tz, F>(form: &mut DutyForm<Tz>, mut ask: F) -> anyhow::Result<()>
where
    Tz: TimeZone,
    F: FnMut(&str) -> anyhow::Result<String>,
{
    for field in field_names(form.duty_type()) {
        let repeatable = REPEATABLE_FIELDS.contains(field);
        let label = if repeatable {
            format!("{} (blank to finish)", field)
        } else {
            field.to_string()
        };
        loop {
            let value = ask(&label)?;
            if value.is_empty() {
                break;
            }
            match form.set(field, &value) {
                Ok(_) if repeatable => continue,
                Ok(_) => break,
                Err(err) => eprintln!("{}", err),
            }
        }
    }
    Ok(())
}

/// Show the derived values of a submitted draft (pretty and plain modes).
pub(crate) fn print_derived(ui_ctx: &UiContext, submitted: &Submitted) {
    if let Some(days) = submitted.total_leave_days {
        print(ui_ctx, &kv(ui_ctx, "Total Leave Days", &days.to_string()));
    }
    if let Some(duration) = submitted.rest_duration {
        print(ui_ctx, &kv(ui_ctx, "Rest Duration", &duration.to_string()));
        if !duration.is_valid() && ui_ctx.mode.is_pretty() {
            print(
                ui_ctx,
                &badge(ui_ctx, Badge::Warn, "The rest window ends before it starts."),
            );
        }
    }
}

/// Receipt after a record was upserted.
pub(crate) fn report_saved(
    ui_ctx: &UiContext,
    submitted: &Submitted,
    outcome: Upserted,
    zone: &Zone,
    quiet: bool,
) -> anyhow::Result<()> {
    let record = &submitted.record;
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&record_json(record, zone)?)?;
        println!("{}", output);
        return Ok(());
    }
    if quiet {
        println!("{}", record.id);
        return Ok(());
    }

    let verb = match outcome {
        Upserted::Inserted => "Added",
        Upserted::Replaced => "Updated",
    };
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                ui_ctx,
                &badge(
                    ui_ctx,
                    Badge::Ok,
                    &format!("{} {} duty", verb, record.duty_type().label()),
                ),
            );
            let sep = SEPARATOR.get(ui_ctx.unicode);
            let context = format!(
                "ID: {}  {}  {}",
                short_id(&record.id),
                sep,
                zone.timestamp(&record.timestamp)
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
            print_derived(ui_ctx, submitted);
            blank_line(ui_ctx);
            let id = short_id(&record.id);
            print(
                ui_ctx,
                &hint(
                    ui_ctx,
                    &format!("dutylog show {}  {}  dutylog edit {} --set ...", id, sep, id),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("action={}", verb.to_lowercase());
            println!("id={}", record.id);
            println!("type={}", record.duty_type().label());
            print_derived(ui_ctx, submitted);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};
    use dutylog_core::DutyType;
    use std::collections::VecDeque;

    #[test]
    fn test_safety_is_asked_until_blank() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let mut form = DutyForm::new(DutyType::Working, Utc, now);
        let mut safety: VecDeque<&str> =
            ["Head Light:ok", "VCD:not ok:loose wire", "Wiper:bogus", "Wiper:ok", ""].into();
        let mut asked = Vec::new();

        prompt_fields(&mut form, |label| {
            asked.push(label.to_string());
            let answer = match label {
                "safety (blank to finish)" => safety.pop_front().unwrap_or_default(),
                "train-number" => "12952",
                _ => "",
            };
            Ok(answer.to_string())
        })
        .unwrap();

        assert!(safety.is_empty());
        assert_eq!(asked.iter().filter(|l| l.starts_with("safety")).count(), 5);
        let record = form.submit();
        assert_eq!(record.train_number(), Some("12952"));
        let labels: Vec<&str> = record.safety_items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Head Light", "VCD", "Wiper"]);
    }

    #[test]
    fn test_rejected_answer_is_asked_again() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let mut form = DutyForm::new(DutyType::Leave, Utc, now);
        let mut answers: VecDeque<&str> = ["bad-date", "2024-06-10"].into();

        prompt_fields(&mut form, |label| {
            let answer = match label {
                "from-date" => answers.pop_front().unwrap_or_default(),
                _ => "",
            };
            Ok(answer.to_string())
        })
        .unwrap();

        assert!(answers.is_empty());
        assert_eq!(form.total_leave_days(), Some(6));
    }
}
