//! Sprite Sheet Integration Tests
//!
//! Drive a library instance end to end through the in-memory backend.

use std::cell::RefCell;
use std::rc::Rc;

use brick::{Brick, BrickConfig, BrickError, MemoryBackend, RootSizing};

/// Create, animate for ~100ms of 60Hz ticks, observe frame 1.
#[test]
fn test_spin_animation_reaches_second_frame() {
    let backend = MemoryBackend::new();
    let lib = Brick::new(backend.clone(), BrickConfig::default()).unwrap();
    let mut s = lib
        .sprite(0.0, 0.0, 32.0, 32.0, Some("url(sheet.png)"))
        .unwrap();

    s.set_animation("spin", vec![0, 1, 2, 3], 10.0).unwrap();
    s.use_animation("spin").unwrap();
    assert_eq!(
        s.node().style("background-position-x").as_deref(),
        Some("0px")
    );

    // Six 16.7ms ticks cross the 100ms threshold exactly once
    let mut advanced = 0;
    for _ in 0..6 {
        if s.animate(16.7).unwrap() {
            advanced += 1;
        }
    }

    assert_eq!(advanced, 1);
    assert_eq!(s.frame_index(), Some(1));
    assert_eq!(
        s.node().style("background-position-x").as_deref(),
        Some("-32px")
    );
    assert_eq!(s.node().style("background").as_deref(), Some("url(sheet.png)"));
}

/// The wall-clock path gives the same result as explicit deltas.
#[test]
fn test_tick_with_timestamps() {
    let lib = Brick::new(MemoryBackend::new(), BrickConfig::default()).unwrap();
    let mut s = lib.sprite(0.0, 0.0, 32.0, 32.0, None).unwrap();
    s.set_animation("spin", vec![0, 1, 2, 3], 10.0).unwrap();
    s.use_animation("spin").unwrap();
    s.sync_clock(0.0);

    let mut now = 0.0;
    for _ in 0..10 {
        now += 10.0;
        s.tick(now).unwrap();
    }
    assert_eq!(s.current_frame(), Some(1));
}

/// Document layout: body -> root -> entities, in creation order.
#[test]
fn test_document_structure() {
    let backend = MemoryBackend::with_viewport(1024.0, 768.0);
    let lib = Brick::new(backend.clone(), BrickConfig::default()).unwrap();

    let a = lib.entity(10.0, 10.0, 50.0, 50.0, None).unwrap();
    let b = lib.sprite(20.0, 20.0, 16.0, 16.0, None).unwrap();

    let body = backend.body_children();
    assert_eq!(body.len(), 1);
    let root = &body[0];
    assert_eq!(root.attribute("id").as_deref(), Some("dom-renderer"));
    assert_eq!(root.style("width").as_deref(), Some("1024px"));
    assert_eq!(root.children(), vec![a.node().clone(), b.node().clone()]);
}

/// Legacy sizing keeps the literal zero-size root.
#[test]
fn test_zero_sized_root() {
    let backend = MemoryBackend::with_viewport(1024.0, 768.0);
    let config = BrickConfig::default().with_root_sizing(RootSizing::Zero);
    let lib = Brick::new(backend, config).unwrap();

    assert_eq!(lib.root().width(), 0.0);
    assert_eq!(lib.root().height(), 0.0);
}

/// Unknown animations are reported by name.
#[test]
fn test_unknown_animation_is_error() {
    let lib = Brick::new(MemoryBackend::new(), BrickConfig::default()).unwrap();
    let mut s = lib.sprite(0.0, 0.0, 8.0, 8.0, None).unwrap();

    let err = s.use_animation("walk").unwrap_err();
    assert_eq!(err, BrickError::AnimationNotFound("walk".to_string()));
    assert_eq!(err.to_string(), "unknown animation: walk");
}

/// Click handlers can restyle the entity they are attached to.
#[test]
fn test_click_handler_changes_graphic() {
    let lib = Brick::new(MemoryBackend::new(), BrickConfig::default()).unwrap();
    let e = lib.entity(0.0, 0.0, 8.0, 8.0, None).unwrap();
    let e = Rc::new(RefCell::new(e));

    let target = Rc::clone(&e);
    e.borrow()
        .on("click", move |_| {
            target.borrow_mut().set_graphic("red").unwrap();
        })
        .unwrap();

    let node = e.borrow().node().clone();
    assert_eq!(node.dispatch("click"), 1);
    assert_eq!(e.borrow().graphic(), "red");
    assert_eq!(node.style("background").as_deref(), Some("red"));
}

/// Config objects from JSON drive the facade.
#[test]
fn test_config_from_json() {
    let config: BrickConfig =
        serde_json::from_str(r#"{"z_index": 3, "root_sizing": "zero"}"#).unwrap();
    let lib = Brick::new(MemoryBackend::new(), config).unwrap();
    let e = lib.entity(0.0, 0.0, 1.0, 1.0, None).unwrap();

    assert_eq!(e.z_index(), 3);
    assert_eq!(lib.root().width(), 0.0);
}
