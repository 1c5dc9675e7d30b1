use std::path::Path;

use dutylog_core::model::Designation;
use dutylog_core::{photo, UserProfile};

use crate::app::AppContext;
use crate::cli::{ProfileSetArgs, ProfileShowArgs};
use crate::constants::PROFILE_HINT;
use crate::errors::CliError;
use crate::helpers::{prompt_optional, prompt_required};
use crate::ui::format::format_bytes;
use crate::ui::{blank_line, header, hint, kv, print, receipt, OutputMode};

pub fn handle_profile_show(ctx: &AppContext, args: &ProfileShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let profile = store.load_profile()?;
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let Some(profile) = profile else {
        match ui_ctx.mode {
            OutputMode::Pretty => print(&ui_ctx, &hint(&ui_ctx, PROFILE_HINT)),
            OutputMode::Plain | OutputMode::Json => println!("profile=none"),
        }
        return Ok(());
    };

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "profile", None));
        blank_line(&ui_ctx);
    }
    let photo_text = match profile.photo.as_deref() {
        Some(uri) => match photo::describe(uri) {
            Some((mime, size)) => format!("{}, {}", mime, format_bytes(size as u64)),
            None => "unreadable".to_string(),
        },
        None => "none".to_string(),
    };
    print(&ui_ctx, &kv(&ui_ctx, "Name", &profile.name));
    print(&ui_ctx, &kv(&ui_ctx, "Crew ID", &profile.crew_id));
    print(&ui_ctx, &kv(&ui_ctx, "Designation", profile.designation.label()));
    print(&ui_ctx, &kv(&ui_ctx, "Mobile", &profile.mobile));
    print(&ui_ctx, &kv(&ui_ctx, "Email", &profile.email));
    print(&ui_ctx, &kv(&ui_ctx, "Photo", &photo_text));
    Ok(())
}

/// Replace the profile. Each field comes from its flag, else a prompt seeded
/// with the saved value, else (with `--no-input`) the saved value.
pub fn handle_profile_set(ctx: &AppContext, args: &ProfileSetArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let existing = store.load_profile()?;
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = !args.no_input && ui_ctx.is_interactive();

    let mut missing = Vec::new();
    let mut field = |flag: &Option<String>, label: &'static str, saved: Option<&str>| {
        resolve_field(flag.as_deref(), label, saved, interactive, &mut missing)
    };

    let name = field(&args.name, "Name", existing.as_ref().map(|p| p.name.as_str()))?;
    let crew_id = field(
        &args.crew_id,
        "Crew ID",
        existing.as_ref().map(|p| p.crew_id.as_str()),
    )?;
    let designation = field(
        &args.designation,
        "Designation (ALP, LP, Guard, CLI)",
        existing.as_ref().map(|p| p.designation.label()),
    )?;
    let mobile = field(
        &args.mobile,
        "Mobile",
        existing.as_ref().map(|p| p.mobile.as_str()),
    )?;
    let email = field(&args.email, "Email", existing.as_ref().map(|p| p.email.as_str()))?;

    if !missing.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            format!("Missing profile fields: {}", missing.join(", ")),
            "Hint: Pass them as flags, or run without --no-input to be prompted.",
        )
        .into());
    }

    let photo_path = match args.photo.as_deref() {
        Some(path) => Some(path.to_string()),
        None if interactive => {
            Some(prompt_optional("Photo path (blank to keep)", None)?).filter(|p| !p.is_empty())
        }
        None => None,
    };
    let photo = match photo_path {
        Some(path) => Some(photo::encode_file(Path::new(&path))?),
        None => existing.as_ref().and_then(|p| p.photo.clone()),
    };

    let profile = UserProfile {
        name,
        crew_id,
        designation: designation.parse::<Designation>()?,
        mobile,
        email,
        photo,
    };
    store.save_profile(&profile)?;

    if !ctx.quiet() {
        let items = [
            ("Name", profile.name.as_str()),
            ("Crew ID", profile.crew_id.as_str()),
            ("Designation", profile.designation.label()),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Saved profile", &items));
    }
    Ok(())
}

fn resolve_field(
    flag: Option<&str>,
    label: &'static str,
    saved: Option<&str>,
    interactive: bool,
    missing: &mut Vec<&'static str>,
) -> anyhow::Result<String> {
    if let Some(value) = flag.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    if interactive {
        return prompt_required(label, saved);
    }
    match saved.filter(|v| !v.trim().is_empty()) {
        Some(value) => Ok(value.to_string()),
        None => {
            missing.push(label);
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_saved() {
        let mut missing = Vec::new();
        let value = resolve_field(Some(" R. Das "), "Name", Some("Old"), false, &mut missing);
        assert_eq!(value.unwrap(), "R. Das");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_saved_value_used_without_input() {
        let mut missing = Vec::new();
        let value = resolve_field(None, "Mobile", Some("9800000000"), false, &mut missing);
        assert_eq!(value.unwrap(), "9800000000");
    }

    #[test]
    fn test_missing_is_collected() {
        let mut missing = Vec::new();
        resolve_field(None, "Email", None, false, &mut missing).unwrap();
        resolve_field(Some(""), "Crew ID", Some(" "), false, &mut missing).unwrap();
        assert_eq!(missing, vec!["Email", "Crew ID"]);
    }
}
