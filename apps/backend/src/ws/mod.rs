//! Websocket push of game snapshots.

pub mod hub;
pub mod protocol;
pub mod session;

pub use hub::{SnapshotBroadcast, SnapshotHub};
