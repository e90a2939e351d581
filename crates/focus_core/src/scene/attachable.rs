//! Board attachment metadata

use super::AssetId;
use crate::ecs::Component;

/// Tag carried by every entity with an [`Attachable`] component
pub const ATTACHABLE_TAG: &str = "attachable";

/// Role of an attachable entity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachKind {
    /// A surface others stick to
    Board,
    /// Something that sticks to boards
    #[default]
    Child,
}

/// Marks an entity as taking part in board attachment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attachable {
    pub kind: AttachKind,
    /// Asset id of the board this entity is stuck to
    pub parent: Option<AssetId>,
}

impl Component for Attachable {}

impl Attachable {
    pub fn board() -> Self {
        Self {
            kind: AttachKind::Board,
            parent: None,
        }
    }

    pub fn child() -> Self {
        Self::default()
    }

    pub fn is_board(&self) -> bool {
        self.kind == AttachKind::Board
    }

    /// Same kind, attached to `parent`
    pub fn with_parent(self, parent: Option<AssetId>) -> Self {
        Self { parent, ..self }
    }
}
