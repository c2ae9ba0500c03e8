//! Process configuration read from the environment.
//!
//! Values are read once at process entry (after `.env` has been loaded by
//! `dotenvy`) and handed to adapters through their constructors.

use std::fmt;

use thiserror::Error;

/// Default Gemini model used for note generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Raw configuration values; any of them may be missing.
#[derive(Clone, Default)]
pub struct AppConfig {
    /// Google Generative Language API key.
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier.
    pub gemini_model: String,
    /// Base URL of the Jira instance.
    pub jira_server_url: Option<String>,
    /// Email of the Jira user owning the API token.
    pub jira_user_email: Option<String>,
    /// Jira API token.
    pub jira_api_token: Option<String>,
    /// Teams incoming-webhook URL.
    pub teams_webhook_url: Option<String>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<set>"))
            .field("gemini_model", &self.gemini_model)
            .field("jira_server_url", &self.jira_server_url)
            .field("jira_user_email", &self.jira_user_email)
            .field("jira_api_token", &self.jira_api_token.as_ref().map(|_| "<set>"))
            .field("teams_webhook_url", &self.teams_webhook_url.as_ref().map(|_| "<set>"))
            .finish()
    }
}

/// Jira connection settings.
#[derive(Clone)]
pub struct JiraCredentials {
    /// Base URL of the Jira instance.
    pub server_url: String,
    /// Account email used for basic auth.
    pub user_email: String,
    /// API token used for basic auth.
    pub api_token: String,
}

/// Validated credentials for every collaborator a run needs.
#[derive(Clone)]
pub struct Credentials {
    /// Gemini API key.
    pub gemini_api_key: String,
    /// Gemini model identifier.
    pub gemini_model: String,
    /// Jira connection settings.
    pub jira: JiraCredentials,
    /// Teams webhook, present only when it was configured.
    pub teams_webhook_url: Option<String>,
}

impl fmt::Debug for JiraCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraCredentials")
            .field("server_url", &self.server_url)
            .field("user_email", &self.user_email)
            .field("api_token", &"<set>")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &"<set>")
            .field("gemini_model", &self.gemini_model)
            .field("jira", &self.jira)
            .field("teams_webhook_url", &self.teams_webhook_url.as_ref().map(|_| "<set>"))
            .finish()
    }
}

/// Validation failure listing every missing environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required environment variables: {}", .missing.join(", "))]
pub struct MissingConfig {
    /// Names of the unset (or empty) variables, in a stable order.
    pub missing: Vec<&'static str>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            jira_server_url: get("JIRA_SERVER_URL"),
            jira_user_email: get("JIRA_USER_EMAIL"),
            jira_api_token: get("JIRA_API_TOKEN"),
            teams_webhook_url: get("TEAMS_WEBHOOK_URL"),
        }
    }

    /// Checks that every credential a run needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`MissingConfig`] naming all missing variables at once.
    pub fn validate(&self, require_teams: bool) -> Result<Credentials, MissingConfig> {
        let mut missing = Vec::new();
        if self.gemini_api_key.is_none() {
            missing.push("GEMINI_API_KEY");
        }
        if self.jira_server_url.is_none() {
            missing.push("JIRA_SERVER_URL");
        }
        if self.jira_user_email.is_none() {
            missing.push("JIRA_USER_EMAIL");
        }
        if self.jira_api_token.is_none() {
            missing.push("JIRA_API_TOKEN");
        }
        if require_teams && self.teams_webhook_url.is_none() {
            missing.push("TEAMS_WEBHOOK_URL");
        }

        match (
            &self.gemini_api_key,
            &self.jira_server_url,
            &self.jira_user_email,
            &self.jira_api_token,
        ) {
            (Some(key), Some(server), Some(email), Some(token)) if missing.is_empty() => {
                Ok(Credentials {
                    gemini_api_key: key.clone(),
                    gemini_model: self.gemini_model.clone(),
                    jira: JiraCredentials {
                        server_url: server.trim_end_matches('/').to_string(),
                        user_email: email.clone(),
                        api_token: token.clone(),
                    },
                    teams_webhook_url: self.teams_webhook_url.clone(),
                })
            }
            _ => Err(MissingConfig { missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("GEMINI_API_KEY", "g-key"),
            ("JIRA_SERVER_URL", "https://acme.atlassian.net/"),
            ("JIRA_USER_EMAIL", "dev@acme.test"),
            ("JIRA_API_TOKEN", "j-token"),
        ]
    }

    #[test]
    fn validates_complete_config() {
        let creds = config_from(&complete()).validate(false).unwrap();
        assert_eq!(creds.gemini_api_key, "g-key");
        assert_eq!(creds.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(creds.jira.server_url, "https://acme.atlassian.net");
        assert!(creds.teams_webhook_url.is_none());
    }

    #[test]
    fn lists_every_missing_variable() {
        let err = config_from(&[("JIRA_USER_EMAIL", "dev@acme.test")]).validate(true).unwrap_err();
        assert_eq!(
            err.missing,
            vec!["GEMINI_API_KEY", "JIRA_SERVER_URL", "JIRA_API_TOKEN", "TEAMS_WEBHOOK_URL"]
        );
        assert!(err.to_string().contains("GEMINI_API_KEY, JIRA_SERVER_URL"));
    }

    #[test]
    fn teams_only_required_on_request() {
        let config = config_from(&complete());
        assert!(config.validate(false).is_ok());
        let err = config.validate(true).unwrap_err();
        assert_eq!(err.missing, vec!["TEAMS_WEBHOOK_URL"]);
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut pairs = complete();
        pairs.push(("GEMINI_MODEL", "gemini-1.5-pro"));
        pairs[0] = ("GEMINI_API_KEY", "  ");
        let config = config_from(&pairs);
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.validate(false).unwrap_err().missing, vec!["GEMINI_API_KEY"]);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", config_from(&complete()));
        assert!(!rendered.contains("g-key"));
        assert!(!rendered.contains("j-token"));
        assert!(rendered.contains("acme.atlassian.net"));
    }

    #[test]
    fn validated_credentials_debug_hides_secrets() {
        let mut pairs = complete();
        pairs.push(("TEAMS_WEBHOOK_URL", "https://hooks.example/secret-path"));
        let creds = config_from(&pairs).validate(true).unwrap();
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("g-key"));
        assert!(!rendered.contains("j-token"));
        assert!(!rendered.contains("secret-path"));
        assert!(rendered.contains("dev@acme.test"));
    }
}
