use anyhow::Result;
use colored::Colorize;

use translator_core::modules::config::FilePreferenceStore;
use translator_core::PreferenceStore;

pub fn show_config(store: &FilePreferenceStore, json: bool) -> Result<()> {
    let prefs = store.load()?;

    if json {
        let masked = serde_json::json!({
            "geminiApiKey": prefs.masked_api_key(),
            "geminiModel": prefs.gemini_model,
            "path": store.path(),
        });
        println!("{}", serde_json::to_string_pretty(&masked)?);
    } else {
        println!("{}", "Translator Preferences:".cyan().bold());
        println!("  API Key: {}", display_or_unset(&prefs.masked_api_key()));
        println!("  Model: {}", display_or_unset(&prefs.gemini_model));
        println!("  File: {}", store.path().display());
    }
    Ok(())
}

pub fn get_config_value(store: &FilePreferenceStore, key: &str) -> Result<()> {
    println!("{}", store.get_value(key)?);
    Ok(())
}

pub fn set_config_value(store: &FilePreferenceStore, key: &str, value: &str) -> Result<()> {
    store.set_value(key, value)?;
    println!("{} Preference updated: {}", "✓".green(), key);
    Ok(())
}

pub fn show_path(store: &FilePreferenceStore) -> Result<()> {
    println!("{}", store.path().display());
    Ok(())
}

fn display_or_unset(value: &str) -> String {
    if value.is_empty() {
        "(not set)".yellow().to_string()
    } else {
        value.to_string()
    }
}
