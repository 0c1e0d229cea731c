/// Keys the game reacts to. Anything else the frontend sees collapses to
/// `Other`, which every handler ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Other,
}

/// Buffer of key-down events collected by the frontend during the event
/// drain and consumed by the input system once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub keys: Vec<Key>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Events that occurred during this tick
///
/// Cleared at the start of every step. The frame loop watches `ball_reset`
/// to run the fixed pause before the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    pub ball_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.paddle_bounce = false;
        self.ball_reset = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_queue_push_and_clear() {
        let mut queue = InputQueue::new();
        queue.push(Key::Up);
        queue.push(Key::S);

        assert_eq!(queue.keys.len(), 2);
        assert_eq!(queue.keys[0], Key::Up);
        assert_eq!(queue.keys[1], Key::S);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounce = true;
        events.paddle_bounce = true;
        events.ball_reset = true;

        events.clear();

        assert!(!events.wall_bounce);
        assert!(!events.paddle_bounce);
        assert!(!events.ball_reset);
    }
}
