//! The controller that owns all sketch state.
//!
//! `SketchContext` holds the selected tool, the command stack, the gesture
//! state machine and the current preview. Input handlers call into it;
//! after every mutation it notifies subscribers through its [`EventBus`].
//! The render pipeline only ever reads it.
//!
//! # Example
//!
//! ```rust
//! use sticker_sketchpad::state::SketchContext;
//! use egui::Pos2;
//!
//! let mut sketch = SketchContext::default();
//! sketch.on_pointer_down(Pos2::new(10.0, 10.0));
//! sketch.on_pointer_move(Pos2::new(20.0, 10.0));
//! sketch.on_pointer_up();
//! assert_eq!(sketch.history().committed().len(), 1);
//! ```
use egui::Pos2;

use super::GestureState;
use crate::command::CommandStack;
use crate::config::SketchpadConfig;
use crate::element::{Drawable, Element};
use crate::error::SketchResult;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::preview::ToolPreview;
use crate::tools::{ToolState, ToolStyle};

#[derive(Debug)]
pub struct SketchContext {
    tool: ToolState,
    style: ToolStyle,
    history: CommandStack,
    gesture: GestureState,
    preview: Option<ToolPreview>,
    event_bus: EventBus,
}

impl Default for SketchContext {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl SketchContext {
    /// Starts idle with the thinnest marker selected.
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            tool: ToolState::Marker {
                thickness: config.thinnest(),
            },
            style: config.tool_style(),
            history: CommandStack::with_policy(config.redo_policy),
            gesture: GestureState::Idle,
            preview: None,
            event_bus: EventBus::new(),
        }
    }

    /// Register a listener for change notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn history(&self) -> &CommandStack {
        &self.history
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// The drawable receiving pointer moves, while a gesture is in progress
    pub fn active_drawable(&self) -> Option<&Drawable> {
        let active = self.gesture.active()?;
        self.history.last().filter(|d| d.id() == active)
    }

    fn active_drawable_mut(&mut self) -> Option<&mut Drawable> {
        let active = self.gesture.active()?;
        self.history.last_mut().filter(|d| d.id() == active)
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if !self.gesture.is_idle() {
            log::warn!("Pointer down during {}, ending it first", self.gesture.name());
        }

        let drawable = self.tool.create_drawable(pos, &self.style);
        let active = drawable.id();
        self.gesture = match drawable {
            Drawable::Stroke(_) => GestureState::DrawingStroke { active },
            Drawable::Sticker(_) => GestureState::TrackingSticker { active },
        };
        self.preview = None;
        self.history.commit(drawable);
        self.event_bus.emit(SketchEvent::Changed);
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if self.gesture.is_idle() {
            self.preview = Some(self.tool.preview(pos, &self.style));
            self.event_bus.emit(SketchEvent::PreviewMoved);
            return;
        }

        match self.active_drawable_mut() {
            Some(drawable) => {
                drawable.extend(pos);
                self.event_bus.emit(SketchEvent::Changed);
            }
            None => {
                log::warn!("Active drawable is gone, ending {}", self.gesture.name());
                self.gesture = GestureState::Idle;
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.end_gesture();
    }

    /// Ends any gesture; when idle, hides the preview since the pointer left the canvas.
    pub fn on_pointer_leave(&mut self) {
        if self.end_gesture() {
            return;
        }
        if self.preview.take().is_some() {
            self.event_bus.emit(SketchEvent::PreviewMoved);
        }
    }

    fn end_gesture(&mut self) -> bool {
        if self.gesture.is_idle() {
            return false;
        }
        self.gesture = GestureState::Idle;
        self.event_bus.emit(SketchEvent::Changed);
        true
    }

    pub fn select_marker(&mut self, thickness: u32) -> SketchResult<()> {
        let tool = ToolState::marker(thickness)?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn select_sticker(&mut self, glyph: &str) -> SketchResult<()> {
        let tool = ToolState::sticker(glyph)?;
        self.set_tool(tool);
        Ok(())
    }

    // A gesture in progress keeps the parameters it was created with.
    fn set_tool(&mut self, tool: ToolState) {
        log::info!("Tool selected: {tool:?}");
        self.tool = tool;
        self.preview = None;
        self.event_bus.emit(SketchEvent::Changed);
    }

    // A failed undo/redo touches nothing, including a gesture in progress.
    pub fn request_undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.gesture = GestureState::Idle;
            self.event_bus.emit(SketchEvent::Changed);
        }
        undone
    }

    pub fn request_redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.gesture = GestureState::Idle;
            self.event_bus.emit(SketchEvent::Changed);
        }
        redone
    }

    pub fn request_clear(&mut self) {
        self.gesture = GestureState::Idle;
        self.preview = None;
        self.history.clear();
        self.event_bus.emit(SketchEvent::Changed);
    }
}
