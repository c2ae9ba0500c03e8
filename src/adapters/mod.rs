//! Port implementations: live services, cassette recorders, and replayers.

pub mod live;
pub mod recording;
pub mod replaying;
