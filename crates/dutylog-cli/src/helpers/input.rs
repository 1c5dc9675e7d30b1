//! Interactive prompts (dialoguer).

use dialoguer::{Confirm, Input};

/// Prompt until a non-empty value is entered.
pub fn prompt_required(label: &str, initial: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(label);
    if let Some(value) = initial.filter(|v| !v.is_empty()) {
        input = input.with_initial_text(value);
    }
    let value = input
        .validate_with(|v: &String| -> Result<(), &str> {
            if v.trim().is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))?;
    Ok(value.trim().to_string())
}

/// Prompt for a value that may be left blank.
pub fn prompt_optional(label: &str, initial: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(value) = initial.filter(|v| !v.is_empty()) {
        input = input.with_initial_text(value);
    }
    let value = input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))?;
    Ok(value.trim().to_string())
}

pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
