use crate::state::SketchContext;

use super::InputEvent;

/// Routes a canvas input event to the sketch controller
pub fn route_event(event: &InputEvent, sketch: &mut SketchContext) {
    match *event {
        InputEvent::PointerDown { position } => sketch.on_pointer_down(position),
        InputEvent::PointerMove { position } => sketch.on_pointer_move(position),
        InputEvent::PointerUp => sketch.on_pointer_up(),
        InputEvent::PointerLeave => sketch.on_pointer_leave(),
        InputEvent::Undo => {
            if !sketch.request_undo() {
                log::debug!("Nothing to undo");
            }
        }
        InputEvent::Redo => {
            if !sketch.request_redo() {
                log::debug!("Nothing to redo");
            }
        }
    }
}
