//! Networking: the channel adapter bridging server snapshots and outbound
//! intents.

pub mod channel;
