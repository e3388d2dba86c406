use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds "is down" information. Per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(false) => {
                // Key-up events are not delivered to unfocused windows.
                self.keys_down.clear();
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::Focused(true)
            | InputEvent::Resized { .. }
            | InputEvent::CloseRequested => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut InputState, frame: &mut InputFrame, events: &[InputEvent]) {
        for ev in events {
            state.apply_event(frame, ev.clone());
        }
    }

    #[test]
    fn press_and_release_track_held_set() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        apply(&mut state, &mut frame, &[InputEvent::key_down(Key::ArrowUp)]);
        assert!(state.keys_down.contains(&Key::ArrowUp));

        frame.clear();
        apply(&mut state, &mut frame, &[InputEvent::key_up(Key::ArrowUp)]);
        assert!(!state.keys_down.contains(&Key::ArrowUp));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        apply(&mut state, &mut frame, &[InputEvent::key_down(Key::ArrowLeft)]);
        frame.clear();
        apply(
            &mut state,
            &mut frame,
            &[InputEvent::Key { key: Key::ArrowLeft, state: KeyState::Pressed, repeat: true }],
        );

        assert!(state.keys_down.contains(&Key::ArrowLeft));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        apply(
            &mut state,
            &mut frame,
            &[
                InputEvent::Focused(true),
                InputEvent::key_down(Key::ArrowLeft),
                InputEvent::key_down(Key::ArrowUp),
                InputEvent::Focused(false),
            ],
        );

        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn events_are_kept_in_arrival_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let events = [
            InputEvent::Resized { width: 1024, height: 768 },
            InputEvent::key_down(Key::D),
            InputEvent::CloseRequested,
        ];

        apply(&mut state, &mut frame, &events);

        assert_eq!(frame.events, events);
        assert!(state.keys_down.contains(&Key::D));
    }
}
