use crate::config::SketchpadConfig;
use crate::event::RepaintRequester;
use crate::input::{InputHandler, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::SketchContext;
use crate::surface::Surface;

/// The eframe application: toolbar on top, canvas below.
///
/// Only the tool settings survive a restart; drawings start empty.
pub struct SketchpadApp {
    config: SketchpadConfig,
    sketch: SketchContext,
    renderer: Renderer,
    input: InputHandler,
    custom_sticker: String,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchpadConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<SketchpadConfig>(storage, eframe::APP_KEY))
            .map(SketchpadConfig::or_default)
            .unwrap_or_default();

        let app = Self::with_config(config);
        app.sketch
            .subscribe(Box::new(RepaintRequester::new(cc.egui_ctx.clone())));
        app
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        Self {
            sketch: SketchContext::new(&config),
            config,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            custom_sticker: String::new(),
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn sketch(&self) -> &SketchContext {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut SketchContext {
        &mut self.sketch
    }

    pub(crate) fn input_and_sketch_mut(&mut self) -> (&mut InputHandler, &mut SketchContext) {
        (&mut self.input, &mut self.sketch)
    }

    pub fn custom_sticker_input(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    /// Add the typed glyph to the palette and select it.
    pub fn add_custom_sticker(&mut self) {
        match self.config.stickers.add_custom(&self.custom_sticker) {
            Ok(glyph) => {
                self.custom_sticker.clear();
                if let Err(err) = self.sketch.select_sticker(&glyph) {
                    log::warn!("Custom sticker rejected: {err}");
                }
            }
            Err(err) => log::warn!("Custom sticker rejected: {err}"),
        }
    }

    pub fn redraw(&mut self, surface: &mut dyn Surface) {
        self.renderer.redraw(&self.sketch, surface);
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(event) = self.input.process_shortcuts(ctx) {
            route_event(&event, &mut self.sketch);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
