use egui::Pos2;
use sticker_sketchpad::element::factory;
use sticker_sketchpad::{CommandStack, Element, RedoPolicy, SketchContext, SketchpadConfig};

#[test]
fn test_undo_then_redo_everything() {
    let mut stack = CommandStack::new();
    let ids: Vec<_> = (0..4)
        .map(|i| {
            let drawable = factory::create_stroke(Pos2::new(i as f32, 0.0), 2);
            let id = drawable.id();
            stack.commit(drawable);
            id
        })
        .collect();

    while stack.undo() {}
    assert!(stack.committed().is_empty());
    assert_eq!(stack.undone().len(), 4);

    while stack.redo() {}
    let restored: Vec<_> = stack.committed().iter().map(|d| d.id()).collect();
    assert_eq!(restored, ids);
}

#[test]
fn test_mixed_drawables_share_one_stack() {
    let mut stack = CommandStack::new();
    stack.commit(factory::create_stroke(Pos2::new(0.0, 0.0), 2));
    stack.commit(factory::create_sticker(Pos2::new(5.0, 5.0), "🍯", 32.0));

    assert!(stack.undo());
    assert_eq!(stack.undone()[0].element_type(), "sticker");
    assert_eq!(stack.committed()[0].element_type(), "stroke");
}

#[test]
fn test_configured_policy_reaches_controller() {
    let config = SketchpadConfig {
        redo_policy: RedoPolicy::DiscardOnCommit,
        ..Default::default()
    };
    let mut sketch = SketchContext::new(&config);
    assert_eq!(sketch.history().policy(), RedoPolicy::DiscardOnCommit);

    sketch.on_pointer_down(Pos2::new(0.0, 0.0));
    sketch.on_pointer_up();
    sketch.request_undo();
    sketch.on_pointer_down(Pos2::new(1.0, 1.0));
    sketch.on_pointer_up();

    assert!(!sketch.request_redo());
    assert_eq!(sketch.history().committed().len(), 1);
}
