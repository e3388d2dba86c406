//! Keyboard and window events to session changes.
//!
//! Edge-triggered actions fire on a key press (OS repeats ignored):
//! `D` pen down, `U` pen up, `1`..`5` pen color, Escape quit.
//! Level-triggered actions apply every frame while the key is held:
//! Left/Right turn, Up moves forward.

use std::collections::HashSet;

use turtle_engine::core::AppControl;
use turtle_engine::input::{InputEvent, Key, KeyState};

use crate::config::StudioConfig;
use crate::session::Session;
use crate::trail::{Segment, TrailError};

/// Applies one frame of input to `session`.
///
/// `events` are this frame's events in arrival order; `held` is the set of
/// keys down at the end of the frame. Returns `Exit` on Escape or a close
/// request, in which case held keys are not applied. The only error is a
/// failure to grow the trail.
pub fn translate_frame(
    session: &mut Session,
    events: &[InputEvent],
    held: &HashSet<Key>,
    dt: f32,
    config: &StudioConfig,
) -> Result<AppControl, TrailError> {
    let mut quit = false;

    for ev in events {
        match ev {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false } => {
                quit |= apply_key_press(session, *key);
            }
            InputEvent::Key { .. } => {}

            InputEvent::Resized { width, height } => {
                apply_resize(session, *width, *height);
            }

            InputEvent::CloseRequested => quit = true,

            // Held keys are already released by the engine on focus loss.
            InputEvent::Focused(_) => {}
        }
    }

    if quit {
        return Ok(AppControl::Exit);
    }

    apply_held_keys(session, held, dt, config)?;
    Ok(AppControl::Continue)
}

/// Returns true when the key asks to quit.
fn apply_key_press(session: &mut Session, key: Key) -> bool {
    let marker = &mut session.marker;
    match key {
        Key::Escape => return true,
        Key::D => {
            marker.set_pen_down(true);
            log::info!("pen down");
        }
        Key::U => {
            marker.set_pen_down(false);
            log::info!("pen up");
        }
        other => {
            if let Some(option @ 1..=5) = other.digit() {
                marker.set_color(option);
            }
        }
    }
    false
}

fn apply_resize(session: &mut Session, width: u32, height: u32) {
    // Minimizing reports 0x0; keep the last usable size.
    if width == 0 || height == 0 {
        log::debug!("ignoring zero-sized resize ({width} x {height})");
        return;
    }
    if session.window_size() == (width, height) {
        return;
    }
    session.resize(width, height);
    log::info!("window resized to {width} x {height}");
}

fn apply_held_keys(
    session: &mut Session,
    held: &HashSet<Key>,
    dt: f32,
    config: &StudioConfig,
) -> Result<(), TrailError> {
    let turn = config.angular_speed * dt;
    if held.contains(&Key::ArrowLeft) {
        session.marker.turn(turn);
    }
    if held.contains(&Key::ArrowRight) {
        session.marker.turn(-turn);
    }

    if held.contains(&Key::ArrowUp) {
        let (w, h) = session.window_size();
        let (from, to) = session.marker.advance(dt, w as f32, h as f32);
        if session.marker.pen_down {
            session.trail.append(Segment {
                from,
                to,
                color: session.marker.color,
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;
    use turtle_engine::coords::Vec2;

    fn session() -> (Session, StudioConfig) {
        let config = StudioConfig::default();
        (Session::new(&config, 800, 800), config)
    }

    fn held(keys: &[Key]) -> HashSet<Key> {
        keys.iter().copied().collect()
    }

    #[test]
    fn escape_quits_before_held_keys_apply() {
        let (mut s, config) = session();
        let control = translate_frame(
            &mut s,
            &[InputEvent::key_down(Key::Escape)],
            &held(&[Key::ArrowUp]),
            1.0,
            &config,
        )
        .unwrap();

        assert_eq!(control, AppControl::Exit);
        assert_eq!(s.marker.position, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn close_request_quits() {
        let (mut s, config) = session();
        let control =
            translate_frame(&mut s, &[InputEvent::CloseRequested], &held(&[]), 0.016, &config)
                .unwrap();
        assert_eq!(control, AppControl::Exit);
    }

    #[test]
    fn repeats_do_not_retrigger_edge_actions() {
        let (mut s, config) = session();
        let events = [
            InputEvent::key_down(Key::D),
            InputEvent::key_down(Key::U),
            InputEvent::Key { key: Key::D, state: KeyState::Pressed, repeat: true },
        ];
        translate_frame(&mut s, &events, &held(&[]), 0.016, &config).unwrap();
        assert!(!s.marker.pen_down);
    }

    #[test]
    fn same_kind_events_apply_in_order_last_wins() {
        let (mut s, config) = session();
        let events = [
            InputEvent::key_down(Key::Digit2),
            InputEvent::key_down(Key::Digit4),
            InputEvent::Resized { width: 640, height: 480 },
            InputEvent::Resized { width: 1024, height: 768 },
        ];
        translate_frame(&mut s, &events, &held(&[]), 0.016, &config).unwrap();
        assert_eq!(s.marker.color, PaletteColor::Green.rgb());
        assert_eq!(s.window_size(), (1024, 768));
    }

    #[test]
    fn digits_outside_palette_are_ignored() {
        let (mut s, config) = session();
        translate_frame(&mut s, &[InputEvent::key_down(Key::Digit7)], &held(&[]), 0.016, &config)
            .unwrap();
        assert_eq!(s.marker.color, PaletteColor::Black.rgb());
    }

    #[test]
    fn zero_sized_resize_keeps_previous_size() {
        let (mut s, config) = session();
        translate_frame(
            &mut s,
            &[InputEvent::Resized { width: 0, height: 0 }],
            &held(&[]),
            0.016,
            &config,
        )
        .unwrap();
        assert_eq!(s.window_size(), (800, 800));
    }

    #[test]
    fn left_and_right_together_cancel() {
        let (mut s, config) = session();
        translate_frame(
            &mut s,
            &[],
            &held(&[Key::ArrowLeft, Key::ArrowRight]),
            0.5,
            &config,
        )
        .unwrap();
        assert_eq!(s.marker.heading, 0.0);
    }

    #[test]
    fn right_turn_wraps_below_zero() {
        let (mut s, config) = session();
        translate_frame(&mut s, &[], &held(&[Key::ArrowRight]), 0.5, &config).unwrap();
        assert_eq!(s.marker.heading, 315.0);
    }

    #[test]
    fn pen_up_movement_records_nothing() {
        let (mut s, config) = session();
        translate_frame(&mut s, &[], &held(&[Key::ArrowUp]), 0.25, &config).unwrap();
        assert_eq!(s.marker.position, Vec2::new(450.0, 400.0));
        assert!(s.trail.is_empty());
    }

    #[test]
    fn pen_down_in_the_same_frame_records_the_move() {
        let (mut s, config) = session();
        translate_frame(
            &mut s,
            &[InputEvent::key_down(Key::D)],
            &held(&[Key::ArrowUp]),
            0.25,
            &config,
        )
        .unwrap();

        let segments: Vec<_> = s.trail.iter().copied().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from, Vec2::new(400.0, 400.0));
        assert_eq!(segments[0].to, Vec2::new(450.0, 400.0));
    }

    #[test]
    fn trail_growth_failure_is_reported() {
        let config = StudioConfig { trail_capacity: usize::MAX, ..StudioConfig::default() };
        let mut s = Session::new(&config, 800, 800);

        let result = translate_frame(
            &mut s,
            &[InputEvent::key_down(Key::D)],
            &held(&[Key::ArrowUp]),
            0.25,
            &config,
        );

        assert_eq!(result, Err(TrailError::OutOfMemory { requested: usize::MAX }));
        assert!(s.trail.is_empty());
    }
}
