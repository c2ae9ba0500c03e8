//! Recording adapter for the `Notifier` port.

use super::record_result;
use crate::cassette::ports::NOTIFIER;
use crate::cassette::session::SharedRecorder;
use crate::ports::{Notification, Notifier, NotifyFuture};

/// Records notifications while delegating to an inner notifier.
pub struct RecordingNotifier {
    inner: Box<dyn Notifier>,
    recorder: SharedRecorder,
}

impl RecordingNotifier {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Notifier>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, notification: &Notification) -> NotifyFuture<'_> {
        let notification = notification.clone();
        Box::pin(async move {
            let result = self.inner.send(&notification).await;
            record_result(&self.recorder, NOTIFIER, "send", &notification, &result);
            result
        })
    }
}
