//! Notifier port for posting release notes to a chat channel.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future returned by [`Notifier::send`].
pub type NotifyFuture<'a> = Pin<Box<dyn Future<Output = Result<(), PortError>> + Send + 'a>>;

/// A titled Markdown message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Card title.
    pub title: String,
    /// Markdown body.
    pub text: String,
}

/// Delivers notifications to a chat channel.
pub trait Notifier: Send + Sync {
    /// Sends a single notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is not configured or delivery fails.
    fn send(&self, notification: &Notification) -> NotifyFuture<'_>;
}
