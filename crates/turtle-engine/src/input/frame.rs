use super::types::InputEvent;

/// Everything that arrived since the previous frame, in arrival order.
///
/// `InputState` answers "what is held now"; this answers "what happened".
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_the_frame() {
        let mut frame = InputFrame::default();
        frame.push_event(InputEvent::CloseRequested);
        frame.clear();
        assert!(frame.events.is_empty());
    }
}
