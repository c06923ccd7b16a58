mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

/// Receives change notifications from the sketch controller
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SketchEvent),
{
    fn handle_event(&mut self, event: &SketchEvent) {
        self(event)
    }
}

/// Asks egui for a new frame whenever the sketch changes
#[derive(Debug, Clone)]
pub struct RepaintRequester {
    ctx: egui::Context,
}

impl RepaintRequester {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintRequester {
    fn handle_event(&mut self, _event: &SketchEvent) {
        // Both signals are answered with a full repaint
        self.ctx.request_repaint();
    }
}
