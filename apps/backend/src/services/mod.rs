pub mod game_flow;
pub mod publisher;
pub mod registry;
pub mod scheduler;

pub use game_flow::{CreatedGame, GameFlowService};
pub use publisher::{NoopPublisher, RecordingPublisher, SnapshotPublisher};
pub use registry::{GameRegistry, GameSlot};
pub use scheduler::TrickAdvanceScheduler;
