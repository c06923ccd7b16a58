use serde::{Deserialize, Serialize};

use crate::element::{Drawable, Element};

/// What a new commit does to drawables waiting in the redo buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedoPolicy {
    /// Keep undone drawables redoable after new commits
    #[default]
    Retain,
    /// Drop the redo buffer on every commit
    DiscardOnCommit,
}

/// Committed drawables plus the redo buffer.
///
/// A drawable lives in at most one of the two stacks and only ever moves
/// between their tails, so render order is always commit order.
#[derive(Debug, Default)]
pub struct CommandStack {
    /// Drawables on the canvas, oldest first
    committed: Vec<Drawable>,
    /// Drawables that can be redone, most recently undone last
    undone: Vec<Drawable>,
    policy: RedoPolicy,
}

impl CommandStack {
    /// Creates a new empty command stack
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    /// Append a drawable to the canvas
    pub fn commit(&mut self, drawable: Drawable) {
        log::debug!("Committing {} {}", drawable.element_type(), drawable.id());
        if self.policy == RedoPolicy::DiscardOnCommit {
            self.undone.clear();
        }
        self.committed.push(drawable);
    }

    /// Undo the most recent commit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                log::debug!("Undo {} {}", drawable.element_type(), drawable.id());
                self.undone.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone drawable. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                log::debug!("Redo {} {}", drawable.element_type(), drawable.id());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Discard everything, including the redo buffer
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing {} committed and {} undone drawables",
            self.committed.len(),
            self.undone.len()
        );
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    /// The most recently committed drawable
    pub fn last(&self) -> Option<&Drawable> {
        self.committed.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
