use super::types::InputEvent;

/// Input events received since the previous frame, in arrival order.
///
/// The runtime clears the queue once the frame callback returns, so each
/// event is seen by exactly one frame.
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
    fn clear_drains_the_queue() {
        let mut frame = InputFrame::default();
        frame.push_event(InputEvent::CloseRequested);
        frame.push_event(InputEvent::Focused(true));
        frame.clear();
        assert!(frame.events.is_empty());
    }
}
