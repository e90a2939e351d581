//! Grab state

use crate::ecs::Component;

/// Grab state, written by the host's input handling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grabbable {
    pub grabbed: bool,
}

impl Component for Grabbable {}

impl Grabbable {
    pub fn held() -> Self {
        Self { grabbed: true }
    }

    pub fn released() -> Self {
        Self { grabbed: false }
    }
}
