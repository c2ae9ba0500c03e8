//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the release pipeline and an
//! external system (time, filesystem, git, ticket tracker, LLM, chat).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod llm;
pub mod notifier;
pub mod tickets;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmFuture};
pub use notifier::{Notification, Notifier, NotifyFuture};
pub use tickets::{Ticket, TicketFuture, TicketTracker};

/// Error type returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
