// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sequences on the stage editor.

use kurbo::{Point, Size, Vec2};
use stagekeep_project::{Entity, EntityId, EntityPlacement, PerformanceProject};
use stagekeep_stage::{MouseState, PressTarget, StageInteraction};
use stagekeep_view2d::{LogarithmicValue, StageCamera, WheelInput};

const VIEWPORT: Size = Size::new(800.0, 600.0);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn id(s: &str) -> EntityId {
    EntityId::from(s)
}

/// Three performers in formation 0 along the X axis, plus `far` which only
/// appears in formation 1.
fn project() -> PerformanceProject {
    let mut p = PerformanceProject::new()
        .push_formation("A", 2_000.0, 1_000.0)
        .push_formation("B", 2_000.0, 1_000.0);
    for (name, x) in [("a", -50.0), ("b", 0.0), ("c", 50.0)] {
        p = p
            .add_entity(name, Entity::new("red", name))
            .unwrap()
            .set_placement(0, &id(name), EntityPlacement::new(Point::new(x, 0.0)));
    }
    p.add_entity("far", Entity::new("blue", "far"))
        .unwrap()
        .set_placement(1, &id("far"), EntityPlacement::new(Point::new(0.0, 100.0)))
        .set_placement(0, &id("far"), EntityPlacement::new(Point::new(0.0, -100.0)))
}

fn stage(project: &PerformanceProject) -> StageInteraction {
    let mut stage = StageInteraction::default();
    stage.set_viewport(VIEWPORT);
    // Unit zoom keeps view pixels and world units the same size.
    *stage.camera_mut() = StageCamera::new(Vec2::ZERO, LogarithmicValue::from_logarithmic(0.0));
    stage.sync(project, 0);
    stage
}

/// View position of a world point under the unit-zoom camera.
fn view(x: f64, y: f64) -> Point {
    Point::new(400.0 + x, 300.0 - y)
}

#[test]
fn drag_unselected_performer_moves_only_it() {
    init_tracing();
    let p = project();
    let mut s = stage(&p);
    s.selection_mut().add(id("a"));

    s.pointer_down(view(0.0, 0.0), &p);
    assert!(s.selection().contains(&id("a")));
    assert!(s.selection().contains(&id("b")));

    s.pointer_move(view(10.0, 20.0));
    assert_eq!(s.selection().ids(), [id("b")]);

    let committed = s.pointer_up(&p).expect("drag commits");
    assert_eq!(committed.placement_at(0, &id("b")).position, Point::new(10.0, 20.0));
    assert_eq!(committed.placement_at(0, &id("a")), p.placement_at(0, &id("a")));
    assert_eq!(s.state(), &MouseState::Nothing);
}

#[test]
fn drag_selected_performer_moves_the_selection() {
    let p = project();
    let mut s = stage(&p);
    s.selection_mut().replace_with([id("a"), id("c")]);

    s.pointer_down(view(50.0, 0.0), &p);
    s.pointer_move(view(55.0, 5.0));
    s.pointer_move(view(60.0, 10.0));
    let committed = s.pointer_up(&p).expect("drag commits");

    assert_eq!(committed.placement_at(0, &id("a")).position, Point::new(-40.0, 10.0));
    assert_eq!(committed.placement_at(0, &id("c")).position, Point::new(60.0, 10.0));
    assert_eq!(committed.placement_at(0, &id("b")).position, Point::ORIGIN);
    assert_eq!(s.selection().len(), 2);
}

#[test]
fn click_on_selected_performer_deselects_it() {
    let p = project();
    let mut s = stage(&p);
    s.selection_mut().add(id("b"));
    s.pointer_down(view(1.0, 1.0), &p);
    assert!(s.pointer_up(&p).is_none());
    assert!(!s.selection().contains(&id("b")));

    // A first click only selects.
    s.pointer_down(view(1.0, 1.0), &p);
    assert!(s.pointer_up(&p).is_none());
    assert!(s.selection().contains(&id("b")));
}

#[test]
fn marquee_selects_strictly_inside() {
    let p = project();
    let mut s = stage(&p);
    s.selection_mut().add(id("far"));

    s.pointer_down(view(-60.0, 20.0), &p);
    assert!(s.selection().is_empty());
    assert!(matches!(
        s.state(),
        MouseState::MouseDown {
            target: PressTarget::BlankSpace { .. },
            ..
        }
    ));

    s.pointer_move(view(10.0, -20.0));
    assert_eq!(s.selection().ids(), [id("a"), id("b")]);
    assert!(s.marquee_rect().is_some());

    // Exactly on the right edge: not selected.
    s.pointer_move(view(50.0, -20.0));
    assert_eq!(s.selection().ids(), [id("a"), id("b")]);

    assert!(s.pointer_up(&p).is_none());
    assert_eq!(s.selection().len(), 2);
}

#[test]
fn grabbing_a_neighbor_switches_formation() {
    let p = project();
    let mut s = stage(&p);
    // `far` is at (0, -100) in formation 0, but at (0, 100) in formation 1.
    let switched = s.pointer_down(view(0.0, 98.0), &p);
    assert_eq!(switched, Some(1));
    assert_eq!(s.formation_index(), 1);
    assert!(s.selection().contains(&id("far")));

    s.pointer_move(view(0.0, 120.0));
    let committed = s.pointer_up(&p).expect("drag commits");
    assert_eq!(committed.placement_at(1, &id("far")).position, Point::new(0.0, 122.0));
    assert_eq!(committed.placement_at(0, &id("far")).position, Point::new(0.0, -100.0));
}

#[test]
fn interrupted_sequences_are_tolerated() {
    let p = project();
    let mut s = stage(&p);
    assert!(s.pointer_up(&p).is_none());
    s.pointer_move(view(1.0, 1.0));
    s.pointer_down(view(0.0, 0.0), &p);
    s.pointer_down(view(300.0, 0.0), &p);
    s.pointer_move(view(300.0, 0.0));
    assert!(s.pointer_up(&p).is_none());
    assert!(s.pointer_up(&p).is_none());
    assert_eq!(s.state(), &MouseState::Nothing);
}

#[test]
fn wheel_zoom_keeps_world_point_under_cursor() {
    let p = project();
    let mut s = stage(&p);
    s.pointer_move(Point::new(650.0, 120.0));
    let before = s.cursor_world().unwrap();
    s.wheel(WheelInput::new(Vec2::new(0.0, -120.0), true));
    let after = s.cursor_world().unwrap();
    assert!((after - before).hypot() < 1e-9);
    assert!(s.camera().zoom().logarithmic() > 0.0);
}

#[test]
fn performers_reflect_the_preview() {
    let p = project();
    let mut s = stage(&p);
    s.pointer_down(view(-50.0, 0.0), &p);
    s.pointer_move(view(-40.0, 0.0));
    let performers = s.performers(&p);
    assert_eq!(performers[0].position, Point::new(-40.0, 0.0));
    assert_eq!(performers[0].color, "red");
    assert_eq!(performers[3].color, "blue");
}
