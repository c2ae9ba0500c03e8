//! Live adapter for the `TicketTracker` port using the Jira REST API.

use reqwest::Client;
use serde::Deserialize;

use crate::config::JiraCredentials;
use crate::ports::tickets::{Ticket, TicketFuture, TicketTracker};
use crate::ports::PortError;

const SEARCH_FIELDS: &str =
    "summary,status,issuetype,description,assignee,reporter,priority,resolution,created,updated";

/// Live ticket tracker backed by Jira's `/rest/api/2/search` endpoint.
pub struct JiraTracker {
    client: Client,
    credentials: JiraCredentials,
}

impl JiraTracker {
    /// Creates a tracker using basic auth with the given credentials.
    #[must_use]
    pub fn new(credentials: JiraCredentials) -> Self {
        Self { client: Client::new(), credentials }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<RawIssue>,
}

#[derive(Deserialize)]
struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    #[serde(default)]
    summary: String,
    status: Option<Named>,
    #[serde(rename = "issuetype")]
    issue_type: Option<Named>,
    description: Option<String>,
    assignee: Option<Person>,
    reporter: Option<Person>,
    priority: Option<Named>,
    resolution: Option<Named>,
    #[serde(default)]
    created: String,
    #[serde(default)]
    updated: String,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    display_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
}

impl From<RawIssue> for Ticket {
    fn from(raw: RawIssue) -> Self {
        let f = raw.fields;
        let name_or =
            |n: Option<Named>, fallback: &str| n.map_or_else(|| fallback.to_string(), |n| n.name);
        let person_or = |p: Option<Person>, fallback: &str| {
            p.map_or_else(|| fallback.to_string(), |p| p.display_name)
        };
        Self {
            key: raw.key,
            summary: f.summary,
            status: name_or(f.status, "Unknown"),
            issue_type: name_or(f.issue_type, "Unknown"),
            description: f
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description provided.".to_string()),
            assignee: person_or(f.assignee, "Unassigned"),
            reporter: person_or(f.reporter, "Unknown"),
            priority: name_or(f.priority, "None"),
            resolution: name_or(f.resolution, "Unresolved"),
            created: f.created,
            updated: f.updated,
        }
    }
}

/// Parses a search response body into tickets.
fn parse_search(body: &str) -> Result<Vec<Ticket>, PortError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| -> PortError { format!("Failed to parse Jira search response: {e}").into() })?;
    Ok(response.issues.into_iter().map(Ticket::from).collect())
}

impl TicketTracker for JiraTracker {
    fn search(&self, jql: &str, max_results: u32) -> TicketFuture<'_> {
        let jql = jql.to_string();

        Box::pin(async move {
            let url = format!("{}/rest/api/2/search", self.credentials.server_url);
            let max_results = max_results.to_string();
            let response = self
                .client
                .get(&url)
                .basic_auth(&self.credentials.user_email, Some(&self.credentials.api_token))
                .query(&[
                    ("jql", jql.as_str()),
                    ("maxResults", max_results.as_str()),
                    ("fields", SEARCH_FIELDS),
                ])
                .send()
                .await
                .map_err(|e| -> PortError { format!("Jira request failed: {e}").into() })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| -> PortError { format!("Failed to read Jira response: {e}").into() })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<JiraErrorBody>(&body)
                    .ok()
                    .filter(|e| !e.error_messages.is_empty())
                    .map_or(body, |e| e.error_messages.join("; "));
                return Err(format!("Jira API error ({}): {msg}", status.as_u16()).into());
            }

            parse_search(&body)
        })
    }
}
