//! Live adapter for the `Notifier` port posting to a Teams incoming webhook.

use reqwest::Client;
use serde::Serialize;

use crate::ports::notifier::{Notification, Notifier, NotifyFuture};
use crate::ports::PortError;

/// Posts Office 365 connector cards to a Teams incoming webhook.
pub struct TeamsNotifier {
    client: Client,
    webhook_url: String,
}

impl TeamsNotifier {
    /// Creates a notifier for the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self { client: Client::new(), webhook_url: webhook_url.into() }
    }
}

/// Legacy connector card accepted by Teams incoming webhooks.
#[derive(Serialize)]
struct MessageCard<'a> {
    #[serde(rename = "@type")]
    card_type: &'static str,
    #[serde(rename = "@context")]
    context: &'static str,
    summary: &'a str,
    title: &'a str,
    text: &'a str,
}

impl<'a> MessageCard<'a> {
    fn new(notification: &'a Notification) -> Self {
        Self {
            card_type: "MessageCard",
            context: "https://schema.org/extensions",
            summary: &notification.title,
            title: &notification.title,
            text: &notification.text,
        }
    }
}

impl Notifier for TeamsNotifier {
    fn send(&self, notification: &Notification) -> NotifyFuture<'_> {
        let notification = notification.clone();

        Box::pin(async move {
            let response = self
                .client
                .post(&self.webhook_url)
                .json(&MessageCard::new(&notification))
                .send()
                .await
                .map_err(|e| -> PortError { format!("Teams webhook request failed: {e}").into() })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(format!("Teams webhook error ({}): {body}", status.as_u16()).into());
            }
            Ok(())
        })
    }
}

/// Notifier used when no webhook is configured; every send fails.
pub struct UnconfiguredNotifier;

impl Notifier for UnconfiguredNotifier {
    fn send(&self, _notification: &Notification) -> NotifyFuture<'_> {
        Box::pin(async { Err("Microsoft Teams webhook URL is not configured".into()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_carries_title_and_markdown() {
        let notification = Notification {
            title: "Release Notes for Commit: abc1234".into(),
            text: "#### Bug Fixes\n- fixed".into(),
        };
        let value = serde_json::to_value(MessageCard::new(&notification)).unwrap();
        assert_eq!(value["@type"], "MessageCard");
        assert_eq!(value["@context"], "https://schema.org/extensions");
        assert_eq!(value["title"], "Release Notes for Commit: abc1234");
        assert_eq!(value["text"], "#### Bug Fixes\n- fixed");
    }

    #[tokio::test]
    async fn unconfigured_notifier_fails() {
        let notification = Notification { title: "t".into(), text: "x".into() };
        let err = UnconfiguredNotifier.send(&notification).await.unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }
}
