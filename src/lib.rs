#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{CommandStack, RedoPolicy};
pub use config::SketchpadConfig;
pub use element::{Drawable, DrawableId, Element, Sticker, Stroke};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use state::{GestureState, SketchContext};
pub use surface::{DrawOp, PainterSurface, RecordingSurface, Surface};
pub use tools::{StickerPalette, ToolState};
