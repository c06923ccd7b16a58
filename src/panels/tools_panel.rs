use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::tools::ToolState;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");
        ui.separator();

        // Marker presets
        ui.horizontal(|ui| {
            ui.label("Marker:");
            let presets = [app.config().thin_thickness, app.config().thick_thickness];
            for thickness in presets {
                let preset = ToolState::Marker { thickness };
                let selected = app.sketch().tool() == &preset;
                if ToolButton::new(&preset, selected).show(ui).clicked() {
                    if let Err(err) = app.sketch_mut().select_marker(thickness) {
                        log::warn!("Marker preset rejected: {err}");
                    }
                }
            }
        });

        // Stickers, including any the user added
        ui.horizontal_wrapped(|ui| {
            ui.label("Stickers:");
            let glyphs = app.config().stickers.glyphs().to_vec();
            for glyph in &glyphs {
                let sticker = ToolState::Sticker {
                    glyph: glyph.clone(),
                };
                let selected = app.sketch().tool() == &sticker;
                if ToolButton::new(&sticker, selected).show(ui).clicked() {
                    if let Err(err) = app.sketch_mut().select_sticker(glyph) {
                        log::warn!("Sticker rejected: {err}");
                    }
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Custom:");
            let response = ui.add(
                egui::TextEdit::singleline(app.custom_sticker_input())
                    .desired_width(80.0)
                    .hint_text("emoji"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add sticker").clicked() || submitted {
                app.add_custom_sticker();
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            let can_undo = app.sketch().history().can_undo();
            let can_redo = app.sketch().history().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.sketch_mut().request_undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.sketch_mut().request_redo();
            }
            if ui.button("Clear").clicked() {
                app.sketch_mut().request_clear();
            }

            let history = app.sketch().history();
            ui.label(format!(
                "{}  Drawn: {}  Redoable: {}",
                app.sketch().tool().name(),
                history.committed().len(),
                history.undone().len()
            ));
        });
    });
}
