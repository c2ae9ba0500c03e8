//! `relnotes check` command.

use crate::config::AppConfig;

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error string naming every missing variable.
pub fn run(require_teams: bool) -> Result<(), String> {
    let config = AppConfig::from_env();
    let report = render(&config, require_teams)?;
    print!("{report}");
    Ok(())
}

fn render(config: &AppConfig, require_teams: bool) -> Result<String, String> {
    let credentials = config.validate(require_teams).map_err(|e| e.to_string())?;
    let teams =
        if credentials.teams_webhook_url.is_some() { "configured" } else { "not configured" };
    Ok(format!(
        "Configuration OK\n  model: {}\n  jira:  {} ({})\n  teams: {teams}\n",
        credentials.gemini_model, credentials.jira.server_url, credentials.jira.user_email,
    ))
}
