mod editor_state;
pub mod context;

pub use editor_state::GestureState;
pub use context::SketchContext;
