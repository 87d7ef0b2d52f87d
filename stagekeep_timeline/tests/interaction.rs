// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sequences on the timeline scrubber.

use kurbo::{Point, Vec2};
use stagekeep_project::PerformanceProject;
use stagekeep_timeline::{
    CursorRegion, SeekerState, TimelineEvent, TimelineInteraction, TimelineState,
    current_formation_index, formation_spans, time_of,
};
use stagekeep_view2d::WheelInput;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn project() -> PerformanceProject {
    PerformanceProject::new()
        .push_formation("A", 2_000.0, 1_000.0)
        .push_formation("B", 2_000.0, 1_000.0)
        .push_formation("C", 2_000.0, 1_000.0)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn dragging_the_playhead_seeks() {
    init_tracing();
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.sync(&p);

    let playhead = 1_000.0;
    let x = timeline.playhead_x(playhead);
    assert!(close(x, 40.0));

    let events = timeline.pointer_down(Point::new(x + 2.0, 5.0), &p, playhead);
    assert!(events.is_empty());
    assert!(matches!(timeline.state(), SeekerState::Seeking { .. }));

    let events = timeline.pointer_move(Point::new(x + 22.0, 5.0), playhead);
    let [TimelineEvent::Seeked(time)] = events.as_slice() else {
        panic!("expected a seek, got {events:?}");
    };
    assert!(close(*time, 1_500.0));

    let events = timeline.pointer_up();
    assert!(matches!(events.as_slice(), [TimelineEvent::StoppedSeeking(_)]));
    assert_eq!(timeline.state(), SeekerState::Inactive);
}

#[test]
fn playhead_events_drive_the_timeline_state() {
    init_tracing();
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.sync(&p);
    let mut state = TimelineState::at_formation(2);
    let feed = |state: &mut TimelineState, events: &[TimelineEvent]| {
        for event in events {
            *state = state.apply_event(&p, event);
        }
    };

    // Formation C starts at 6 000 ms, 240 px at the default zoom.
    let playhead = time_of(&p, &state);
    let events = timeline.pointer_down(Point::new(240.0, 5.0), &p, playhead);
    feed(&mut state, &events);
    let events = timeline.pointer_move(Point::new(200.0, 5.0), playhead);
    feed(&mut state, &events);
    let TimelineState::Seeker { time } = state else {
        panic!("expected seeker mode, got {state:?}");
    };
    assert!(close(time, 5_000.0));
    assert_eq!(current_formation_index(&p, &state), 1);

    let events = timeline.pointer_up();
    feed(&mut state, &events);
    assert_eq!(state, TimelineState::at_formation(1));

    // Dragging past the end neither seeks nor snaps.
    let playhead = time_of(&p, &state);
    let x = timeline.playhead_x(playhead);
    let events = timeline.pointer_down(Point::new(x, 5.0), &p, playhead);
    feed(&mut state, &events);
    let events = timeline.pointer_move(Point::new(x + 480.0, 5.0), playhead);
    assert!(matches!(events.as_slice(), [TimelineEvent::Seeked(t)] if *t > 9_000.0));
    feed(&mut state, &events);
    let events = timeline.pointer_up();
    feed(&mut state, &events);
    assert_eq!(state, TimelineState::at_formation(1));
}

#[test]
fn dragging_a_transition_edge_keeps_later_formations_in_place() {
    init_tracing();
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.sync(&p);
    let before = formation_spans(timeline.formation_times());

    // The end of A's transition is at 3 000 ms, 120 px.
    timeline.pointer_down(Point::new(120.0, 60.0), &p, 0.0);
    assert!(matches!(timeline.state(), SeekerState::Resizing { .. }));
    timeline.pointer_move(Point::new(110.0, 60.0), 0.0);
    timeline.pointer_move(Point::new(100.0, 60.0), 0.0);

    let after = formation_spans(timeline.formation_times());
    assert!(close(after[0].transition_end, 2_500.0));
    assert!(close(after[1].end, before[1].end));
    assert!(close(after[2].start, before[2].start));

    let events = timeline.pointer_up();
    let Some(TimelineEvent::FormationTimesChanged(times)) = events.first() else {
        panic!("expected new formation times, got {events:?}");
    };
    let committed = p.update_formation_times(times.iter().cloned());
    let a = committed.formation(0).unwrap();
    let b = committed.formation(1).unwrap();
    assert!(close(a.transition_duration(), 500.0));
    assert!(close(b.duration(), 2_500.0));
    assert!(close(committed.total_time(), p.total_time()));
}

#[test]
fn interrupted_drags_do_not_panic() {
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.pointer_up();
    timeline.pointer_move(Point::new(10.0, 10.0), 0.0);
    timeline.pointer_move(Point::new(10.0, 10.0), 0.0);
    timeline.pointer_up();
    // Down with no synced times: nothing to resize.
    timeline.pointer_down(Point::new(80.0, 60.0), &p, 0.0);
    assert_eq!(timeline.state(), SeekerState::Inactive);
    timeline.pointer_down(Point::new(80.0, 60.0), &p, 0.0);
    timeline.pointer_up();
    assert_eq!(timeline.state(), SeekerState::Inactive);
}

#[test]
fn wheel_zoom_keeps_time_under_cursor() {
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.sync(&p);
    timeline.pointer_move(Point::new(300.0, 60.0), 0.0);
    let before = timeline.cursor_time().unwrap();

    timeline.wheel(WheelInput::new(Vec2::new(0.0, -50.0), true));
    assert!(timeline.camera().zoom().linear() > 0.04);
    assert!(close(timeline.cursor_time().unwrap(), before));

    timeline.wheel(WheelInput::new(Vec2::new(20.0, 40.0), false));
    assert!(close(
        timeline.cursor_time().unwrap(),
        timeline.camera().view_to_world_x(300.0)
    ));
    assert!(timeline.camera().position() > 0.0);
}

#[test]
fn cursor_region_feedback() {
    let p = project();
    let mut timeline = TimelineInteraction::default();
    timeline.sync(&p);
    assert_eq!(timeline.cursor_region(), None);
    timeline.pointer_move(Point::new(20.0, 60.0), 0.0);
    assert_eq!(timeline.cursor_region(), Some(CursorRegion::Formation(0)));
    timeline.pointer_move(Point::new(100.0, 60.0), 0.0);
    assert_eq!(timeline.cursor_region(), Some(CursorRegion::Transition(0)));
    timeline.pointer_move(Point::new(200.0, 60.0), 0.0);
    assert!(matches!(timeline.cursor_region(), Some(CursorRegion::Boundary(_))));
}

#[test]
fn state_round_trip_through_time() {
    let p = project();
    for index in 0..3 {
        let time = time_of(&p, &TimelineState::at_formation(index));
        assert_eq!(current_formation_index(&p, &TimelineState::Seeker { time }), index);
    }
}
