mod history;

pub use history::{CommandStack, RedoPolicy};
