/// Notifications raised after the sketch state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Something visible changed; repaint everything
    Changed,
    /// Only the tool preview moved, committed ink is unchanged
    PreviewMoved,
}
