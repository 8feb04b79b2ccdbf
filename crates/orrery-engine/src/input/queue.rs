/// Host input delivered to the engine. Click and resize are resolved by the
/// runner (pick, viewport) before the game sees the rest of the queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Completed click in canvas pixels; becomes a ray pick.
    Click { x: f32, y: f32 },
    /// New canvas size in pixels.
    Resize { width: f32, height: f32 },
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// UI event (buttons etc.). `kind` picks the meaning of `a`, `b`, `c`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Events the runner handles itself instead of passing to `Game::update`.
    pub fn is_host_event(&self) -> bool {
        matches!(self, InputEvent::Click { .. } | InputEvent::Resize { .. })
    }
}

/// Events collected between two frames, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Remove click/resize events, leaving the others in order.
    pub fn take_host_events(&mut self) -> Vec<InputEvent> {
        let (host, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.events)
            .into_iter()
            .partition(InputEvent::is_host_event);
        self.events = rest;
        host
    }

    /// Drain all pending events.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_events_are_split_off_in_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 38 });
        q.push(InputEvent::Click { x: 1.0, y: 2.0 });
        q.push(InputEvent::Custom { kind: 2, a: 3.0, b: 0.0, c: 0.0 });
        q.push(InputEvent::Resize { width: 640.0, height: 480.0 });

        let host = q.take_host_events();
        assert_eq!(
            host,
            vec![
                InputEvent::Click { x: 1.0, y: 2.0 },
                InputEvent::Resize { width: 640.0, height: 480.0 },
            ]
        );
        let rest: Vec<_> = q.iter().copied().collect();
        assert_eq!(
            rest,
            vec![
                InputEvent::KeyDown { key_code: 38 },
                InputEvent::Custom { kind: 2, a: 3.0, b: 0.0, c: 0.0 },
            ]
        );
    }

    #[test]
    fn drain_empties_queue() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain().len(), 1);
        assert!(q.is_empty());
    }
}
