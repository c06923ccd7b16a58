use egui::{Context, Key, Modifiers, Pos2, Rect};

mod router;
pub use router::route_event;

/// Canvas-level input, with positions in surface-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    /// Undo shortcut
    Undo,
    /// Redo shortcut
    Redo,
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's pointer input against the canvas rect
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| canvas_rect.contains(*pos));

            match hover {
                Some(pos) if Some(pos) != self.last_pointer_pos => {
                    events.push(InputEvent::PointerMove {
                        position: to_local(pos),
                    });
                }
                None if self.last_pointer_pos.is_some() => {
                    events.push(InputEvent::PointerLeave);
                }
                _ => {}
            }

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover {
                    events.push(InputEvent::PointerDown {
                        position: to_local(pos),
                    });
                }
            }
            if input.pointer.primary_released() {
                events.push(InputEvent::PointerUp);
            }

            self.last_pointer_pos = hover;
        });

        events
    }

    /// Consume undo/redo keyboard shortcuts
    pub fn process_shortcuts(&mut self, ctx: &Context) -> Option<InputEvent> {
        ctx.input_mut(|input| {
            // Check the shifted chord first; plain Cmd+Z would also match it
            if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || input.consume_key(Modifiers::COMMAND, Key::Y)
            {
                Some(InputEvent::Redo)
            } else if input.consume_key(Modifiers::COMMAND, Key::Z) {
                Some(InputEvent::Undo)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, PointerButton, RawInput};

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(256.0, 256.0))
    }

    fn frame(ctx: &Context, handler: &mut InputHandler, events: Vec<Event>) -> Vec<InputEvent> {
        let mut out = Vec::new();
        let raw = RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| {
            out = handler.process_input(ctx, canvas());
        });
        out
    }

    #[test]
    fn test_move_is_reported_in_canvas_coordinates() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        let events = frame(&ctx, &mut handler, vec![Event::PointerMoved(Pos2::new(110.0, 70.0))]);
        assert_eq!(
            events,
            vec![InputEvent::PointerMove {
                position: Pos2::new(10.0, 20.0)
            }]
        );
    }

    #[test]
    fn test_leaving_canvas_reports_leave_once() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        frame(&ctx, &mut handler, vec![Event::PointerMoved(Pos2::new(110.0, 70.0))]);
        let events = frame(&ctx, &mut handler, vec![Event::PointerGone]);
        assert_eq!(events, vec![InputEvent::PointerLeave]);

        let events = frame(&ctx, &mut handler, vec![]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_over_canvas_reports_down() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        frame(&ctx, &mut handler, vec![Event::PointerMoved(Pos2::new(150.0, 100.0))]);
        let events = frame(
            &ctx,
            &mut handler,
            vec![Event::PointerButton {
                pos: Pos2::new(150.0, 100.0),
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::default(),
            }],
        );
        assert!(events.contains(&InputEvent::PointerDown {
            position: Pos2::new(50.0, 50.0)
        }));
    }
}
