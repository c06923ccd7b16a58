use crate::SketchpadApp;
use crate::input::route_event;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let [width, height] = app.config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        let (input, sketch) = app.input_and_sketch_mut();
        for event in input.process_input(ctx, canvas_rect) {
            route_event(&event, sketch);
        }

        // Render the canvas
        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.redraw(&mut surface);

        if app.sketch().preview().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    });
}
