//! Gesture state machine for the canvas.
//!
//! ```text
//!              pointer-down (marker)
//!   ┌──────┐ ───────────────────────► ┌────────────────┐
//!   │      │ ◄─────────────────────── │ DrawingStroke  │ ◄─┐ pointer-move
//!   │ Idle │    pointer-up / leave    └────────────────┘ ──┘ (extend)
//!   │      │
//!   │      │ ───────────────────────► ┌────────────────┐
//!   └──────┘ ◄─────────────────────── │ TrackingSticker│ ◄─┐ pointer-move
//!    ▲    │   pointer-up / leave      └────────────────┘ ──┘ (reposition)
//!    └────┘ pointer-move (preview)
//!              pointer-down (sticker)
//! ```
//!
//! The drawable a gesture feeds is always the tail of the committed stack;
//! its id is kept here so a gesture can never extend some other drawable.
use crate::element::DrawableId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    DrawingStroke {
        active: DrawableId,
    },
    TrackingSticker {
        active: DrawableId,
    },
}

impl GestureState {
    /// Id of the drawable receiving pointer moves, if a gesture is in progress
    pub fn active(&self) -> Option<DrawableId> {
        match self {
            Self::Idle => None,
            Self::DrawingStroke { active } | Self::TrackingSticker { active } => Some(*active),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::DrawingStroke { .. } => "DrawingStroke",
            Self::TrackingSticker { .. } => "TrackingSticker",
        }
    }
}
