//! Integration tests for tocar-core.
//!
//! These tests drive whole regions through raw event sequences and verify
//! the dispatched gesture results end-to-end.

use std::sync::{Arc, Mutex};
use tocar_core::{
    ConfigError, ContactEvent, ContactId, GestureCallback, GestureEvent, GestureSpec, PanConfig,
    Phase, Point, Region, TapConfig,
};

type EventLog = Arc<Mutex<Vec<GestureEvent>>>;

fn recording(sink: &EventLog) -> GestureCallback {
    let sink = Arc::clone(sink);
    Box::new(move |result, _raw| sink.lock().expect("sink lock").push(*result))
}

fn begin(region: &mut Region, id: u32, x: f32, y: f32) {
    region.handle_event(ContactEvent::begin(ContactId::new(id), Point::new(x, y)));
}

fn move_to(region: &mut Region, id: u32, x: f32, y: f32) {
    region.handle_event(ContactEvent::moved(ContactId::new(id), Point::new(x, y)));
}

fn end(region: &mut Region, id: u32, x: f32, y: f32) {
    region.handle_event(ContactEvent::end(ContactId::new(id), Point::new(x, y)));
}

fn cancel(region: &mut Region, id: u32, x: f32, y: f32) {
    region.handle_event(ContactEvent::cancel(ContactId::new(id), Point::new(x, y)));
}

fn pinch_changes(log: &EventLog) -> Vec<f32> {
    log.lock()
        .expect("sink lock")
        .iter()
        .map(|event| match event {
            GestureEvent::Pinch { change, .. } => *change,
            other => panic!("expected pinch, got {other:?}"),
        })
        .collect()
}

fn pan_deltas(log: &EventLog) -> Vec<Point> {
    log.lock()
        .expect("sink lock")
        .iter()
        .map(|event| match event {
            GestureEvent::Pan { delta, .. } => *delta,
            other => panic!("expected pan, got {other:?}"),
        })
        .collect()
}

fn emitted(log: &EventLog) -> Vec<GestureEvent> {
    log.lock().expect("sink lock").clone()
}

// =============================================================================
// Contact Tracking
// =============================================================================

#[test]
fn test_active_contacts_match_distinct_begins() {
    let mut region = Region::new();
    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 10.0, 0.0);
    begin(&mut region, 2, 99.0, 99.0); // duplicate: dropped
    begin(&mut region, 3, 20.0, 0.0);

    let ids: Vec<u32> = region.state().active().iter().map(|i| i.id().0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_terminal_events_discard_contacts() {
    let mut region = Region::new();
    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 10.0, 0.0);

    end(&mut region, 1, 0.0, 0.0);
    assert_eq!(region.state().len(), 1);

    cancel(&mut region, 2, 10.0, 0.0);
    assert!(region.state().is_empty());
}

// =============================================================================
// Tap
// =============================================================================

#[test]
fn test_tap_emits_release_position() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::tap(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 100.0, 100.0);
    move_to(&mut region, 1, 102.0, 103.0);
    end(&mut region, 1, 103.0, 102.0);

    assert_eq!(
        emitted(&log),
        vec![GestureEvent::Tap {
            position: Point::new(103.0, 102.0)
        }]
    );
}

#[test]
fn test_tap_suppressed_after_large_move() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::tap(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    move_to(&mut region, 1, 10.0, 0.0);
    end(&mut region, 1, 10.0, 0.0);

    assert!(emitted(&log).is_empty());
}

#[test]
fn test_tap_respects_time_window() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let spec = GestureSpec::Tap(TapConfig {
        timeout_ms: 0,
        ..TapConfig::default()
    });
    region.bind(spec, recording(&log)).expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    end(&mut region, 1, 0.0, 0.0);

    assert!(emitted(&log).is_empty());
}

#[test]
fn test_tap_window_not_extended_by_later_contact() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let spec = GestureSpec::Tap(TapConfig {
        timeout_ms: 50,
        ..TapConfig::default()
    });
    region.bind(spec, recording(&log)).expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    std::thread::sleep(std::time::Duration::from_millis(60));

    // A second contact comes and goes; the first contact's window is
    // already spent and stays spent.
    begin(&mut region, 2, 50.0, 0.0);
    end(&mut region, 2, 50.0, 0.0);
    end(&mut region, 1, 0.0, 0.0);

    assert!(emitted(&log).is_empty());
}

#[test]
fn test_tap_custom_tolerance() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let spec = GestureSpec::Tap(TapConfig {
        tolerance: 2.0,
        ..TapConfig::default()
    });
    region.bind(spec, recording(&log)).expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    end(&mut region, 1, 3.0, 0.0);
    assert!(emitted(&log).is_empty());

    begin(&mut region, 2, 0.0, 0.0);
    end(&mut region, 2, 1.0, 0.0);
    assert_eq!(
        emitted(&log),
        vec![GestureEvent::Tap {
            position: Point::new(1.0, 0.0)
        }]
    );
}

// =============================================================================
// Pan
// =============================================================================

#[test]
fn test_pan_displacement_sums_over_sequence() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pan(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    move_to(&mut region, 1, 10.0, 10.0);
    end(&mut region, 1, 10.0, 10.0);

    let total = pan_deltas(&log)
        .iter()
        .fold(Point::ORIGIN, |acc, d| acc + *d);
    assert_eq!(total, Point::new(10.0, 10.0));
}

#[test]
fn test_pan_reports_centroid_position() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pan(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 10.0, 0.0);
    move_to(&mut region, 1, 2.0, 0.0);

    assert_eq!(
        emitted(&log),
        vec![GestureEvent::Pan {
            position: Point::new(6.0, 0.0),
            delta: Point::new(1.0, 0.0),
        }]
    );
}

#[test]
fn test_two_finger_pan_waits_for_second_contact() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::two_finger_pan(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    move_to(&mut region, 1, 10.0, 0.0);
    assert!(emitted(&log).is_empty());

    begin(&mut region, 2, 20.0, 0.0);
    move_to(&mut region, 1, 15.0, 0.0);
    assert_eq!(
        emitted(&log),
        vec![GestureEvent::Pan {
            position: Point::new(17.5, 0.0),
            delta: Point::new(2.5, 0.0),
        }]
    );
}

// =============================================================================
// Pinch
// =============================================================================

#[test]
fn test_pinch_changes_compose_multiplicatively() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pinch(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, -100.0, 0.0);
    begin(&mut region, 2, 100.0, 0.0);

    move_to(&mut region, 1, -200.0, 0.0); // average distance 100 -> 150
    move_to(&mut region, 1, -50.0, 0.0); // average distance 150 -> 75

    let changes = pinch_changes(&log);
    assert_eq!(changes.len(), 2);
    assert!((changes[0] - 1.5).abs() < 1e-4);
    assert!((changes[1] - 0.5).abs() < 1e-4);
    assert!((changes[0] * changes[1] - 0.75).abs() < 1e-4);
}

#[test]
fn test_pinch_coincident_contacts_emit_nothing() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pinch(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 5.0, 5.0);
    begin(&mut region, 2, 5.0, 5.0);
    move_to(&mut region, 2, 5.0, 5.0);

    assert!(emitted(&log).is_empty());
}

#[test]
fn test_pinch_single_contact_emits_nothing() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pinch(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    move_to(&mut region, 1, 50.0, 0.0);

    assert!(emitted(&log).is_empty());
}

// =============================================================================
// Rotate
// =============================================================================

#[test]
fn test_rotate_quarter_turn_is_half_pi() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::rotate(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 1.0, 0.0);
    move_to(&mut region, 2, 0.0, 1.0);

    let events = emitted(&log);
    assert_eq!(events.len(), 1);
    match events[0] {
        GestureEvent::Rotate { angle_delta } => {
            assert!((angle_delta - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        }
        other => panic!("expected rotate, got {other:?}"),
    }
}

#[test]
fn test_rotate_three_contacts_suppressed() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::rotate(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 1.0, 0.0);
    begin(&mut region, 3, 0.0, 1.0);
    move_to(&mut region, 2, 1.0, 1.0);

    assert!(emitted(&log).is_empty());
}

// =============================================================================
// Binding Lifecycle
// =============================================================================

#[test]
fn test_invalid_config_rejected_at_bind() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let result = region.bind(GestureSpec::Pan(PanConfig { min_inputs: 0 }), recording(&log));
    assert_eq!(result, Err(ConfigError::InvalidMinInputs(0)));
    assert_eq!(region.binding_count(), 0);
}

#[test]
fn test_unbind_leaves_other_bindings_firing() {
    let mut region = Region::new();
    let log_a = Arc::new(Mutex::new(Vec::new()));
    let log_b = Arc::new(Mutex::new(Vec::new()));

    let a = region
        .bind(GestureSpec::pan(), recording(&log_a))
        .expect("valid spec");
    region
        .bind(GestureSpec::pan(), recording(&log_b))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    move_to(&mut region, 1, 1.0, 0.0);
    assert_eq!(emitted(&log_a).len(), 1);
    assert_eq!(emitted(&log_b).len(), 1);

    assert!(region.unbind(a));
    move_to(&mut region, 1, 2.0, 0.0);
    assert_eq!(emitted(&log_a).len(), 1);
    assert_eq!(emitted(&log_b).len(), 2);

    // Releasing an already released handle changes nothing for the rest.
    assert!(!region.unbind(a));
    move_to(&mut region, 1, 3.0, 0.0);
    assert_eq!(emitted(&log_b).len(), 3);
}

#[test]
fn test_bindings_share_state_but_not_memory() {
    let mut region = Region::new();
    let log_a = Arc::new(Mutex::new(Vec::new()));
    let log_b = Arc::new(Mutex::new(Vec::new()));

    region
        .bind(GestureSpec::pinch(), recording(&log_a))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 100.0, 0.0);

    // B joins mid-gesture: same state, fresh private memory.
    region
        .bind(GestureSpec::pinch(), recording(&log_b))
        .expect("valid spec");

    move_to(&mut region, 2, 200.0, 0.0);
    move_to(&mut region, 2, 300.0, 0.0);

    let changes_a = pinch_changes(&log_a);
    let changes_b = pinch_changes(&log_b);
    assert_eq!(changes_a.len(), 2);
    assert!((changes_a[0] - 2.0).abs() < 1e-4);
    assert!((changes_a[1] - 1.5).abs() < 1e-4);

    // B's first move only primed its memory; it emits from the second on.
    assert_eq!(changes_b.len(), 1);
    assert!((changes_b[0] - 1.5).abs() < 1e-4);
}

#[test]
fn test_callback_receives_raw_context() {
    let mut region = Region::new();
    let raw_log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&raw_log);
    region
        .bind(
            GestureSpec::tap(),
            Box::new(move |_result, raw| {
                sink.lock()
                    .expect("raw lock")
                    .push((raw.id, raw.phase, raw.position));
            }),
        )
        .expect("valid spec");

    begin(&mut region, 5, 50.0, 50.0);
    end(&mut region, 5, 51.0, 50.0);

    assert_eq!(
        *raw_log.lock().expect("raw lock"),
        vec![(ContactId::new(5), Phase::End, Point::new(51.0, 50.0))]
    );
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn test_cancel_resets_recognizer_memory() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::pinch(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 100.0, 0.0);
    move_to(&mut region, 2, 140.0, 0.0); // average distance 50 -> 70

    cancel(&mut region, 1, 0.0, 0.0);
    cancel(&mut region, 2, 140.0, 0.0);
    assert!(region.state().is_empty());

    // A fresh gesture measures against its own geometry, not the old one.
    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 10.0, 0.0);
    move_to(&mut region, 2, 20.0, 0.0); // average distance 5 -> 10

    let changes = pinch_changes(&log);
    assert_eq!(changes.len(), 2);
    assert!((changes[0] - 1.4).abs() < 1e-4);
    assert!((changes[1] - 2.0).abs() < 1e-4);
}

#[test]
fn test_cancel_all_synthesizes_cancels() {
    let mut region = Region::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    region
        .bind(GestureSpec::tap(), recording(&log))
        .expect("valid spec");

    begin(&mut region, 1, 0.0, 0.0);
    begin(&mut region, 2, 10.0, 0.0);

    region.cancel_all();
    assert!(region.state().is_empty());
    // A lost contact never taps.
    assert!(emitted(&log).is_empty());

    begin(&mut region, 3, 5.0, 5.0);
    end(&mut region, 3, 5.0, 5.0);
    assert_eq!(emitted(&log).len(), 1);
}
