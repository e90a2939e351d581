//! Built-in frame systems

mod board_parenting;
mod link;
mod pose_sync;

pub use board_parenting::{BoardParentingSystem, Transition};
pub use link::link_to_parent_boards;
pub use pose_sync::PoseSyncSystem;
