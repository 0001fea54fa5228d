// Host-side tests for the menu, tilt and video playback policies.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod menu {
    include!("../src/core/menu.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}
mod video {
    include!("../src/core/video.rs");
}

use menu::*;
use tilt::*;
use video::*;

#[test]
fn menu_starts_closed() {
    let m = MenuState::default();
    assert!(!m.is_open());
    assert_eq!(m.aria_expanded(), "false");
}

#[test]
fn menu_double_toggle_returns_to_closed() {
    let mut m = MenuState::default();
    assert!(m.toggle());
    assert_eq!(m.aria_expanded(), "true");
    assert!(!m.toggle());
    assert_eq!(m.aria_expanded(), "false");
    assert_eq!(m, MenuState::default());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut m = MenuState::default();
    m.toggle();
    assert!(m.close_on_outside_click(false, false));
    assert!(!m.is_open());
    assert_eq!(m.aria_expanded(), "false");
}

#[test]
fn click_inside_menu_or_toggle_keeps_it_open() {
    let mut m = MenuState::default();
    m.toggle();
    assert!(!m.close_on_outside_click(true, false));
    assert!(!m.close_on_outside_click(false, true));
    assert!(m.is_open());
}

#[test]
fn tilt_center_is_flat_and_edges_are_bounded() {
    let center = TiltOffset::from_pointer(150.0, 100.0, 100.0, 50.0, 100.0, 100.0).unwrap();
    let (ry, rx) = center.angles_deg();
    assert!(ry.abs() < 1e-6 && rx.abs() < 1e-6);

    let corner = TiltOffset::from_pointer(200.0, 150.0, 100.0, 50.0, 100.0, 100.0).unwrap();
    assert_eq!(corner.0.x, 0.5);
    assert_eq!(corner.0.y, 0.5);
    let (ry, rx) = corner.angles_deg();
    assert_eq!(ry, 4.0);
    assert_eq!(rx, -4.0);
}

#[test]
fn tilt_transform_text() {
    let t = TiltOffset::from_pointer(100.0, 50.0, 100.0, 50.0, 200.0, 100.0).unwrap();
    assert_eq!(
        t.transform(),
        "perspective(900px) rotateY(-4.000deg) rotateX(4.000deg) translateY(-2px)"
    );
    assert_eq!(TILT_RESET, "");
}

#[test]
fn tilt_ignores_zero_sized_cards() {
    assert!(TiltOffset::from_pointer(1.0, 1.0, 0.0, 0.0, 0.0, 10.0).is_none());
    assert!(TiltOffset::from_pointer(1.0, 1.0, 0.0, 0.0, 10.0, 0.0).is_none());
}

#[test]
fn lazy_trigger_fires_once_per_video() {
    let mut t = LazyTrigger::default();
    t.observe(0);
    t.observe(1);
    assert!(!t.on_intersection(0, false));
    assert_eq!(t.pending_count(), 2);
    assert!(t.on_intersection(0, true));
    assert!(!t.on_intersection(0, true));
    assert!(!t.on_intersection(0, false));
    assert_eq!(t.pending_count(), 1);
    assert!(!t.on_intersection(7, true));
}

#[test]
fn playing_b_pauses_only_a() {
    // A (0) playing, B (1) just started, C (2) paused.
    let paused = [false, false, true];
    assert_eq!(videos_to_pause(1, &paused), vec![0]);
}

#[test]
fn nothing_to_pause_when_alone() {
    assert!(videos_to_pause(0, &[false]).is_empty());
    assert!(videos_to_pause(2, &[true, true, false]).is_empty());
}
